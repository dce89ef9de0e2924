/*!
 * Error types for the specimen router CLI
 */

use specimen_server::ServerError;
use std::fmt;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, RouterError>;

/// Exit code constants for structured process exit
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_FATAL: i32 = 2;

#[derive(Debug)]
pub enum RouterError {
    /// Configuration error
    Config(String),

    /// Configuration file could not be read or written
    ConfigFile { path: PathBuf, source: io::Error },

    /// I/O error
    Io(io::Error),

    /// Serialization error (JSON / TOML output)
    Serialization(String),

    /// HTTP server error
    Server(ServerError),

    /// Async runtime could not be started
    Runtime(String),
}

impl RouterError {
    /// Get the process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            // Nothing was started: bad configuration or startup failure
            RouterError::Config(_)
            | RouterError::ConfigFile { .. }
            | RouterError::Runtime(_)
            | RouterError::Server(ServerError::Bind { .. }) => EXIT_FATAL,
            _ => EXIT_FAILURE,
        }
    }

    /// Check if this error is fatal
    pub fn is_fatal(&self) -> bool {
        self.exit_code() == EXIT_FATAL
    }
}

impl fmt::Display for RouterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouterError::Config(msg) => write!(f, "Configuration error: {}", msg),
            RouterError::ConfigFile { path, source } => {
                write!(f, "Config file {}: {}", path.display(), source)
            }
            RouterError::Io(e) => write!(f, "I/O error: {}", e),
            RouterError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            RouterError::Server(e) => write!(f, "{}", e),
            RouterError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl std::error::Error for RouterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RouterError::ConfigFile { source, .. } => Some(source),
            RouterError::Io(e) => Some(e),
            RouterError::Server(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RouterError {
    fn from(err: io::Error) -> Self {
        RouterError::Io(err)
    }
}

impl From<toml::de::Error> for RouterError {
    fn from(err: toml::de::Error) -> Self {
        RouterError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for RouterError {
    fn from(err: toml::ser::Error) -> Self {
        RouterError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::Serialization(err.to_string())
    }
}

impl From<ServerError> for RouterError {
    fn from(err: ServerError) -> Self {
        RouterError::Server(err)
    }
}

/*!
 * Specimen Router CLI
 */

use clap::{Parser, Subcommand};
use specimen_core_routing::SpecimenRouter;
use specimen_router::{
    cli_style,
    config::{LogFormat, LogLevel, RouterConfig},
    error::{Result, RouterError, EXIT_SUCCESS},
    logging,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "specimen-router")]
#[command(version, about = "Route lab specimens through testing stations", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(short = 'c', long = "config", value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Log level
    #[arg(long = "log-level", value_enum, global = true)]
    log_level: Option<LogLevel>,

    /// Stdout log format
    #[arg(long = "log-format", value_enum, global = true)]
    log_format: Option<LogFormat>,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP/WebSocket service
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Bind port (overrides config)
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },

    /// Compute a routing plan and print it as JSON
    Route {
        /// Specimen identifier
        #[arg(short = 's', long = "specimen", value_name = "ID")]
        specimen: String,

        /// Test codes in processing order
        #[arg(value_name = "TEST")]
        tests: Vec<String>,
    },

    /// Show the station catalog and urgent tests
    Stations,
}

fn main() {
    let code = match run() {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    };
    std::process::exit(code);
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Serve { host, port } => serve(config, host, port),
        Commands::Route { specimen, tests } => route(&specimen, &tests),
        Commands::Stations => {
            print_stations();
            Ok(())
        }
    }
}

/// Config file (or defaults) with command line overrides applied
fn load_config(cli: &Cli) -> Result<RouterConfig> {
    let mut config = match cli.config {
        Some(ref path) => RouterConfig::from_file(path)?,
        None => RouterConfig::default(),
    };

    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }
    if cli.verbose {
        config.logging.verbose = true;
    }

    Ok(config)
}

fn serve(mut config: RouterConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config.validate()?;

    logging::init_logging(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| RouterError::Runtime(e.to_string()))?;

    runtime.block_on(specimen_server::start_server(config.server_config()))?;
    Ok(())
}

fn route(specimen: &str, tests: &[String]) -> Result<()> {
    let plan = SpecimenRouter::new().optimize_route(specimen, tests);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn print_stations() {
    println!("{}", cli_style::station_table());
    println!("{}", cli_style::urgent_summary());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_args() {
        let cli = Cli::try_parse_from([
            "specimen-router",
            "route",
            "--specimen",
            "SPEC-1",
            "CBC",
            "Culture",
        ])
        .unwrap();

        match cli.command {
            Commands::Route { specimen, tests } => {
                assert_eq!(specimen, "SPEC-1");
                assert_eq!(tests, vec!["CBC", "Culture"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_route_without_tests() {
        let cli = Cli::try_parse_from(["specimen-router", "route", "-s", "SPEC-2"]).unwrap();
        assert!(matches!(cli.command, Commands::Route { ref tests, .. } if tests.is_empty()));
    }

    #[test]
    fn test_route_requires_specimen() {
        assert!(Cli::try_parse_from(["specimen-router", "route", "CBC"]).is_err());
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::try_parse_from([
            "specimen-router",
            "serve",
            "--host",
            "0.0.0.0",
            "-p",
            "8000",
            "--log-level",
            "debug",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8000));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_apply_to_config() {
        let cli =
            Cli::try_parse_from(["specimen-router", "-v", "--log-level", "warn", "stations"])
                .unwrap();
        let config = load_config(&cli).unwrap();
        assert!(config.logging.verbose);
        assert_eq!(config.logging.level, LogLevel::Warn);
    }

    #[test]
    fn test_missing_config_file_is_fatal() {
        let cli = Cli::try_parse_from([
            "specimen-router",
            "--config",
            "/no/such/specimen-router.toml",
            "stations",
        ])
        .unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["specimen-router"]).is_err());
    }
}

//! STAT / ROUTINE classification
//!
//! Priority is decided from the requested test codes exactly as submitted,
//! not from the resolved routing steps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tests that mark a specimen for expedited handling
pub const URGENT_TESTS: [&str; 2] = ["Troponin", "Lactate"];

/// Urgency of a routing plan
///
/// Lower numeric values = higher priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Priority {
    /// Expedited handling
    Stat = 0,

    /// Normal queue
    Routine = 10,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Stat => "STAT",
            Priority::Routine => "ROUTINE",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a single test code is in the urgent set (exact match)
pub fn is_urgent(test: &str) -> bool {
    URGENT_TESTS.contains(&test)
}

/// STAT if any requested test is urgent, ROUTINE otherwise
pub fn classify_priority<S: AsRef<str>>(tests: &[S]) -> Priority {
    if tests.iter().any(|test| is_urgent(test.as_ref())) {
        Priority::Stat
    } else {
        Priority::Routine
    }
}

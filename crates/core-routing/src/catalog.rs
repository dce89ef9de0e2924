//! Static reference data: which station runs a test and how long it takes
//!
//! Both tables are read-only `const` data. Lookups are exact and
//! case-sensitive; a code missing from a table resolves to the table's
//! default instead of failing.
//!
//! The urgent tests in [`crate::priority::URGENT_TESTS`] (Troponin, Lactate)
//! have no entry here. They route to [`DEFAULT_STATION`] with
//! [`DEFAULT_PROCESSING_TIME`] while still forcing STAT priority.

use crate::Station;

/// Station used for any test code not listed in the station table
pub const DEFAULT_STATION: Station = Station::Chemistry;

/// Minutes used for any test code not listed in the time table
pub const DEFAULT_PROCESSING_TIME: u32 = 30;

const TEST_STATIONS: &[(&str, Station)] = &[
    ("CBC", Station::Hematology),
    ("BMP", Station::Chemistry),
    ("Culture", Station::Microbiology),
    ("Antibody", Station::Immunology),
];

// Minutes. Culture is a 24 hour incubation.
const PROCESSING_TIMES: &[(&str, u32)] = &[
    ("CBC", 15),
    ("BMP", 20),
    ("Culture", 1440),
    ("Antibody", 60),
];

/// Resolve the station that runs `test`
pub fn station_for_test(test: &str) -> Station {
    TEST_STATIONS
        .iter()
        .find(|(code, _)| *code == test)
        .map(|(_, station)| *station)
        .unwrap_or(DEFAULT_STATION)
}

/// Resolve the standard processing time for `test`, in minutes
pub fn processing_time_for(test: &str) -> u32 {
    PROCESSING_TIMES
        .iter()
        .find(|(code, _)| *code == test)
        .map(|(_, minutes)| *minutes)
        .unwrap_or(DEFAULT_PROCESSING_TIME)
}

/// Test codes with an explicit station assignment, in table order
pub fn known_tests() -> impl Iterator<Item = &'static str> {
    TEST_STATIONS.iter().map(|(code, _)| *code)
}

//! Core-Routing: Specimen routing across fixed lab stations
//!
//! This crate turns a specimen identifier and an ordered list of requested
//! test codes into a [`RoutingPlan`]: one station assignment per test, a total
//! turnaround estimate in minutes, and a STAT/ROUTINE urgency flag.
//!
//! # Key Principles
//!
//! This crate is **pure logic** with zero knowledge of:
//! - Transport (HTTP, WebSocket, CLI)
//! - Storage or scheduling against real lab throughput
//! - Station capacity or queueing
//!
//! Routing is a total function. Unknown test codes are never errors; they
//! fall back to the Chemistry station and a 30 minute processing time.
//!
//! # Example
//!
//! ```
//! use specimen_core_routing::{Priority, SpecimenRouter, Station};
//!
//! let router = SpecimenRouter::new();
//! let plan = router.optimize_route("SPEC-1", &["CBC", "Culture"]);
//!
//! assert_eq!(plan.steps.len(), 2);
//! assert_eq!(plan.steps[0].station, Station::Hematology);
//! assert_eq!(plan.steps[1].station, Station::Microbiology);
//! assert_eq!(plan.total_time, 1455);
//! assert_eq!(plan.priority, Priority::Routine);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod catalog;
pub mod priority;
pub mod router;

pub use catalog::{processing_time_for, station_for_test, DEFAULT_PROCESSING_TIME, DEFAULT_STATION};
pub use priority::{classify_priority, is_urgent, Priority, URGENT_TESTS};
pub use router::{optimize_route, SpecimenRouter};

/// A physical lab unit that performs tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Station {
    Chemistry,
    Hematology,
    Microbiology,
    Immunology,
}

impl Station {
    /// Every station in the lab, in declaration order
    pub const ALL: [Station; 4] = [
        Station::Chemistry,
        Station::Hematology,
        Station::Microbiology,
        Station::Immunology,
    ];

    /// Station name as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Station::Chemistry => "Chemistry",
            Station::Hematology => "Hematology",
            Station::Microbiology => "Microbiology",
            Station::Immunology => "Immunology",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque clinical test identifier
///
/// Any string is accepted; codes are not checked against a closed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCode(String);

impl TestCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for TestCode {
    fn from(code: &str) -> Self {
        Self(code.to_string())
    }
}

impl From<String> for TestCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl AsRef<str> for TestCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TestCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One station visit for one requested test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingStep {
    /// Station assigned to the test
    pub station: Station,

    /// The test as requested
    pub test: TestCode,

    /// Standard processing time in minutes
    pub processing_time: u32,
}

/// Routing result for a single specimen
///
/// Built fresh on every call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingPlan {
    /// Specimen identifier, echoed back untouched
    pub specimen_id: String,

    /// One step per requested test, in request order
    #[serde(rename = "optimal_path")]
    pub steps: Vec<RoutingStep>,

    /// Sum of every step's processing time, in minutes
    pub total_time: u64,

    /// Urgency derived from the requested tests
    pub priority: Priority,
}

impl RoutingPlan {
    /// Stations visited, in step order (repeats included)
    pub fn stations(&self) -> impl Iterator<Item = Station> + '_ {
        self.steps.iter().map(|step| step.station)
    }

    pub fn is_stat(&self) -> bool {
        self.priority == Priority::Stat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_names() {
        assert_eq!(Station::Chemistry.to_string(), "Chemistry");
        assert_eq!(Station::Hematology.to_string(), "Hematology");
        assert_eq!(Station::Microbiology.to_string(), "Microbiology");
        assert_eq!(Station::Immunology.to_string(), "Immunology");
    }

    #[test]
    fn test_station_all_is_fixed() {
        assert_eq!(Station::ALL.len(), 4);
        assert_eq!(Station::ALL[0], Station::Chemistry);
    }

    #[test]
    fn test_test_code_is_opaque() {
        let code = TestCode::from("");
        assert_eq!(code.as_str(), "");

        let code = TestCode::new(String::from("weird code with spaces"));
        assert_eq!(code.to_string(), "weird code with spaces");
        assert_eq!(code.into_inner(), "weird code with spaces");
    }

    #[test]
    fn test_plan_serialization_shape() {
        let plan = RoutingPlan {
            specimen_id: "SPEC-9".to_string(),
            steps: vec![RoutingStep {
                station: Station::Immunology,
                test: TestCode::from("Antibody"),
                processing_time: 60,
            }],
            total_time: 60,
            priority: Priority::Routine,
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["specimen_id"], "SPEC-9");
        assert_eq!(json["optimal_path"][0]["station"], "Immunology");
        assert_eq!(json["optimal_path"][0]["test"], "Antibody");
        assert_eq!(json["optimal_path"][0]["processing_time"], 60);
        assert_eq!(json["total_time"], 60);
        assert_eq!(json["priority"], "ROUTINE");
        assert!(json.get("steps").is_none());
    }

    #[test]
    fn test_plan_stations_iterator() {
        let plan = router::optimize_route("S", &["CBC", "CBC", "Culture"]);
        let stations: Vec<Station> = plan.stations().collect();
        assert_eq!(
            stations,
            vec![Station::Hematology, Station::Hematology, Station::Microbiology]
        );
        assert!(!plan.is_stat());
    }
}

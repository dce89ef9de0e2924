//! The routing engine
//!
//! [`SpecimenRouter`] carries no state of its own; everything it reads is the
//! `const` reference data in [`crate::catalog`]. It can be copied into every
//! request handler and called from any number of threads.

use crate::catalog::{processing_time_for, station_for_test};
use crate::priority::classify_priority;
use crate::{RoutingPlan, RoutingStep, TestCode};

/// Computes routing plans for specimens
#[derive(Debug, Clone, Copy, Default)]
pub struct SpecimenRouter;

impl SpecimenRouter {
    pub fn new() -> Self {
        Self
    }

    /// Build the routing plan for one specimen
    ///
    /// # Arguments
    /// * `specimen_id` - Opaque identifier, echoed into the plan
    /// * `required_tests` - Requested test codes; may be empty, repeat, or be unknown
    ///
    /// # Returns
    /// One step per requested test in request order, the summed turnaround
    /// time and the urgency classification. Never fails.
    pub fn optimize_route<S: AsRef<str>>(
        &self,
        specimen_id: impl Into<String>,
        required_tests: &[S],
    ) -> RoutingPlan {
        let steps: Vec<RoutingStep> = required_tests
            .iter()
            .map(|test| {
                let code = test.as_ref();
                RoutingStep {
                    station: station_for_test(code),
                    test: TestCode::from(code),
                    processing_time: processing_time_for(code),
                }
            })
            .collect();

        let total_time = steps
            .iter()
            .map(|step| u64::from(step.processing_time))
            .sum();

        RoutingPlan {
            specimen_id: specimen_id.into(),
            steps,
            total_time,
            priority: classify_priority(required_tests),
        }
    }
}

/// Route with the default router
pub fn optimize_route<S: AsRef<str>>(
    specimen_id: impl Into<String>,
    required_tests: &[S],
) -> RoutingPlan {
    SpecimenRouter::new().optimize_route(specimen_id, required_tests)
}

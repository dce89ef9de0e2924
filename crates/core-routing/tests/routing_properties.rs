//! Behavioral checks for the routing engine across representative inputs

use specimen_core_routing::{
    catalog::known_tests, optimize_route, Priority, RoutingPlan, SpecimenRouter, Station,
};

fn request_sets() -> Vec<Vec<&'static str>> {
    vec![
        vec![],
        vec!["CBC"],
        vec!["CBC", "Culture"],
        vec!["Culture", "CBC"],
        vec!["BMP", "BMP", "Antibody", "BMP"],
        vec!["Unknown123", "CBC", ""],
        vec!["Troponin"],
        vec!["Lactate", "Culture", "Troponin"],
        vec!["cbc", "troponin", "Antibody"],
    ]
}

fn assert_well_formed(plan: &RoutingPlan, tests: &[&str]) {
    assert_eq!(plan.steps.len(), tests.len(), "one step per requested test");

    for (step, requested) in plan.steps.iter().zip(tests) {
        assert_eq!(step.test.as_str(), *requested, "step order follows request order");
    }

    let sum: u64 = plan
        .steps
        .iter()
        .map(|step| u64::from(step.processing_time))
        .sum();
    assert_eq!(plan.total_time, sum, "total_time is the exact step sum");
}

#[test]
fn plans_are_well_formed_for_all_inputs() {
    let router = SpecimenRouter::new();
    for tests in request_sets() {
        let plan = router.optimize_route("SPEC", &tests);
        assert_well_formed(&plan, &tests);
    }
}

#[test]
fn table_entries_match_reference_data() {
    let expected = [
        ("CBC", Station::Hematology, 15),
        ("BMP", Station::Chemistry, 20),
        ("Culture", Station::Microbiology, 1440),
        ("Antibody", Station::Immunology, 60),
    ];

    for (code, station, minutes) in expected {
        let plan = optimize_route("SPEC", &[code]);
        assert_eq!(plan.steps[0].station, station, "station for {code}");
        assert_eq!(plan.steps[0].processing_time, minutes, "minutes for {code}");
    }

    let known: Vec<&str> = known_tests().collect();
    assert_eq!(known.len(), expected.len());
}

#[test]
fn unknown_codes_use_defaults() {
    let plan = optimize_route("SPEC", &["Unknown123"]);
    assert_eq!(plan.steps[0].station, Station::Chemistry);
    assert_eq!(plan.steps[0].processing_time, 30);
    assert_eq!(plan.total_time, 30);
}

#[test]
fn stat_iff_urgent_code_present() {
    for tests in request_sets() {
        let plan = optimize_route("SPEC", &tests);
        let urgent = tests.iter().any(|t| *t == "Troponin" || *t == "Lactate");
        let expected = if urgent {
            Priority::Stat
        } else {
            Priority::Routine
        };
        assert_eq!(plan.priority, expected, "priority for {tests:?}");
    }
}

#[test]
fn troponin_alone_is_stat_with_default_routing() {
    let plan = optimize_route("SPEC-T", &["Troponin"]);
    assert_eq!(plan.priority, Priority::Stat);
    assert_eq!(plan.steps[0].station, Station::Chemistry);
    assert_eq!(plan.steps[0].processing_time, 30);
    assert_eq!(plan.total_time, 30);
}

#[test]
fn routing_is_idempotent() {
    let router = SpecimenRouter::new();
    for tests in request_sets() {
        let first = router.optimize_route("SPEC-I", &tests);
        let second = router.optimize_route("SPEC-I", &tests);
        assert_eq!(first, second);
    }
}

#[test]
fn spec_1_end_to_end() {
    let plan = optimize_route("SPEC-1", &["CBC", "Culture"]);
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "specimen_id": "SPEC-1",
            "optimal_path": [
                {"station": "Hematology", "test": "CBC", "processing_time": 15},
                {"station": "Microbiology", "test": "Culture", "processing_time": 1440}
            ],
            "total_time": 1455,
            "priority": "ROUTINE"
        })
    );
}

#[test]
fn spec_2_empty_request() {
    let plan = optimize_route::<&str>("SPEC-2", &[]);
    let json = serde_json::to_value(&plan).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "specimen_id": "SPEC-2",
            "optimal_path": [],
            "total_time": 0,
            "priority": "ROUTINE"
        })
    );
}

#[test]
fn router_is_shareable_across_threads() {
    let router = SpecimenRouter::new();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                router.optimize_route(format!("SPEC-{i}"), &["CBC", "Troponin"])
            })
        })
        .collect();

    for handle in handles {
        let plan = handle.join().unwrap();
        assert_eq!(plan.total_time, 45);
        assert_eq!(plan.priority, Priority::Stat);
    }
}

//! Unit tests for validation outcomes

use olc_domain::value_objects::{ProbeFailurePolicy, ProbeStatus, ValidationOutcome};

#[test]
fn test_only_200_is_alive() {
    assert!(ProbeStatus(200).is_alive());
    assert!(!ProbeStatus(201).is_alive());
    assert!(!ProbeStatus(404).is_alive());
    assert!(!ProbeStatus(500).is_alive());
}

#[test]
fn test_outcome_accessors() {
    let outcome = ValidationOutcome::BrokenLink {
        work_item_id: 123,
        link_type_id: "lt".to_string(),
        target_url: "https://qm/tc/1".to_string(),
        configuration_uri: Some("cfg://42".to_string()),
    };
    assert_eq!(outcome.work_item_id(), 123);
    assert_eq!(outcome.link_type_id(), "lt");
    assert_eq!(outcome.target_url(), "https://qm/tc/1");
    assert!(outcome.is_problem());
}

#[test]
fn test_ok_and_unverified_are_not_problems() {
    let ok = ValidationOutcome::Ok {
        work_item_id: 1,
        link_type_id: "lt".to_string(),
        target_url: "t".to_string(),
    };
    let unverified = ValidationOutcome::Unverified {
        work_item_id: 1,
        link_type_id: "lt".to_string(),
        target_url: "t".to_string(),
        configuration_uri: None,
        reason: "connection refused".to_string(),
    };
    assert!(!ok.is_problem());
    assert!(!unverified.is_problem());
}

#[test]
fn test_probe_failure_policy_parsing() {
    assert_eq!(
        "treat-as-broken".parse::<ProbeFailurePolicy>().unwrap(),
        ProbeFailurePolicy::TreatAsBroken
    );
    assert_eq!(
        "Treat-As-Unknown".parse::<ProbeFailurePolicy>().unwrap(),
        ProbeFailurePolicy::TreatAsUnknown
    );
    assert!("sometimes".parse::<ProbeFailurePolicy>().is_err());
    assert_eq!(ProbeFailurePolicy::default(), ProbeFailurePolicy::TreatAsUnknown);
}

#[test]
fn test_probe_failure_policy_round_trips_through_display() {
    for policy in [ProbeFailurePolicy::TreatAsUnknown, ProbeFailurePolicy::TreatAsBroken] {
        assert_eq!(policy.to_string().parse::<ProbeFailurePolicy>().unwrap(), policy);
    }
}

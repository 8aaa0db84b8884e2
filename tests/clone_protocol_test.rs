use privacy_fixtures::core::scenarios::Baseline;
use privacy_fixtures::domain::dfd::{DataFlowOverrides, DfdOverrides, ExternalEntityOverrides};
use privacy_fixtures::domain::dpia::{ProcessingOverrides, SupervisoryAuthorityVeredictOverrides};
use privacy_fixtures::{AttributeOverrides, Cloneable, FixtureError};
use serde_json::json;

#[test]
fn test_unmodified_clone_is_equal_and_independent() {
    let baseline = Baseline::new();
    let mut clone = baseline.dfd.with_overrides(DfdOverrides::default());

    assert_eq!(clone, baseline.dfd);
    assert_ne!(clone.data_flows.as_ptr(), baseline.dfd.data_flows.as_ptr());

    clone.data_flows.clear();
    clone.external_entities[0].location.push("Spain");

    assert_eq!(baseline.dfd.data_flows.len(), 8);
    assert_eq!(baseline.dfd.external_entities[0].location.len(), 1);
}

#[test]
fn test_nested_entity_is_deep_copied() {
    let baseline = Baseline::new();
    let mut clone = baseline.processing.with_overrides(ProcessingOverrides::default());

    assert_eq!(
        clone.supervisory_authority_veredict,
        baseline.processing.supervisory_authority_veredict
    );

    clone.supervisory_authority_veredict = clone
        .supervisory_authority_veredict
        .with_overrides(SupervisoryAuthorityVeredictOverrides::default().allowed(false));
    clone.supervisory_authority_veredict.contact.push(":Other");

    assert!(baseline.processing.supervisory_authority_veredict.allowed);
    assert_eq!(
        baseline.processing.supervisory_authority_veredict.contact.len(),
        1
    );
}

#[test]
fn test_override_replaces_whole_value() {
    let baseline = Baseline::new();
    let clone = baseline
        .processing
        .with_overrides(ProcessingOverrides::default().purposes(vec![]));

    assert!(clone.purposes.is_empty());
    assert_eq!(baseline.processing.purposes.len(), 1);
    assert_eq!(clone.id_, baseline.processing.id_);
}

#[test]
fn test_scenario_isolation() {
    let baseline = Baseline::new();
    let flow = &baseline.message_flow;

    let v1 = flow.with_overrides(DataFlowOverrides::default().id_("v1"));
    let v2 = flow.with_overrides(DataFlowOverrides::default().id_("v2"));

    assert_ne!(v1.id_, v2.id_);
    assert_eq!(v1.with_overrides(DataFlowOverrides::default().id_("C message")), *flow);
    assert_eq!(v2.with_overrides(DataFlowOverrides::default().id_("C message")), *flow);
    assert_eq!(flow.id_, "C message");
}

#[test]
fn test_dynamic_overrides_match_typed_overrides() {
    let baseline = Baseline::new();
    let mut overrides = AttributeOverrides::new();
    overrides.insert("id_".into(), json!("new ent"));
    overrides.insert("age".into(), json!(null));

    let dynamic = baseline.user.clone_with(&overrides).unwrap();
    let typed = baseline.user.with_overrides(
        ExternalEntityOverrides::default()
            .id_("new ent")
            .age(None::<String>),
    );

    assert_eq!(dynamic, typed);
}

#[test]
fn test_unknown_attribute_leaves_source_untouched() {
    let baseline = Baseline::new();
    let before = baseline.dpia.clone();
    let mut overrides = AttributeOverrides::new();
    overrides.insert("last_update".into(), json!("today"));
    overrides.insert("nonexistent_attr".into(), json!(1));

    let err = baseline.dpia.clone_with(&overrides).unwrap_err();

    assert!(matches!(
        err,
        FixtureError::UnknownAttribute { ref entity, ref attribute }
            if entity == "DPIA" && attribute == "nonexistent_attr"
    ));
    assert_eq!(baseline.dpia, before);
}

#[test]
fn test_unknown_nested_attribute_is_rejected() {
    let baseline = Baseline::new();
    let before = baseline.dpia.clone();

    let mut purpose = serde_json::to_value(&baseline.routing).unwrap();
    purpose["bla"] = json!(1);
    let mut processing = serde_json::to_value(&baseline.processing).unwrap();
    processing["nonexistent_attr"] = json!(1);
    processing["purposes"] = json!([purpose]);

    let mut overrides = AttributeOverrides::new();
    overrides.insert("processings".into(), json!([processing]));

    match baseline.dpia.clone_with(&overrides).unwrap_err() {
        FixtureError::TypeMismatch { entity, message } => {
            assert_eq!(entity, "DPIA");
            assert!(message.contains("processings"), "{message}");
            assert!(message.contains("nonexistent_attr"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(baseline.dpia, before);
}

#[test]
fn test_misspelled_nested_attribute_is_not_dropped() {
    let baseline = Baseline::new();
    let mut user = serde_json::to_value(&baseline.user).unwrap();
    let age = user.as_object_mut().unwrap().remove("age").unwrap();
    user["Age"] = age;

    let mut overrides = AttributeOverrides::new();
    overrides.insert("external_entities".into(), json!([user]));

    let err = baseline.dfd.clone_with(&overrides).unwrap_err();
    assert!(matches!(err, FixtureError::TypeMismatch { .. }));
    assert!(err.to_string().contains("external_entities"), "{err}");
}

#[test]
fn test_mismatch_names_the_offending_attribute() {
    let baseline = Baseline::new();
    let mut overrides = AttributeOverrides::new();
    overrides.insert("last_update".into(), json!("2030-01-01"));
    overrides.insert("processings".into(), json!("not a list"));

    let err = baseline.dpia.clone_with(&overrides).unwrap_err();
    match err {
        FixtureError::TypeMismatch { message, .. } => {
            assert!(message.starts_with("attribute 'processings'"), "{message}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

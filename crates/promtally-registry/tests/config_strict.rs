#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use promtally_core::LabelKey;
use promtally_registry::{config, Registry};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
counters:
  - name: "a_total"
    help: "A."
    const_lables: { x: "1" } # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = r#"
version: 1
counters:
  - name: "a_total"
    help: "A."
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.counters[0].name, "a_total");
    assert!(cfg.counters[0].const_labels.is_empty());
    assert_eq!(cfg.load.workers, 4);
    assert_eq!(cfg.load.iterations, 1000);
}

#[test]
fn wrong_version_and_empty_counters() {
    let err = config::load_from_str("version: 2\ncounters: [{name: a, help: b}]\n")
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");

    let err = config::load_from_str("version: 1\n").expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn load_bounds_checked() {
    let bad = r#"
version: 1
counters: [{ name: a_total, help: A. }]
load: { workers: 0 }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_ARGUMENT");
}

#[test]
fn registry_from_config() {
    let ok = r#"
version: 1
counters:
  - name: b_total
    help: B.
    const_labels: { service: api, zone: eu }
  - name: a_total
    help: A.
load:
  labels: { a: "1" }
"#;
    let cfg = config::load_from_str(ok).unwrap();
    assert_eq!(cfg.load.labels, LabelKey::from_pairs(&[("a", "1")]));

    let registry = Registry::from_config(&cfg).unwrap();
    assert_eq!(registry.names(), vec!["a_total".to_string(), "b_total".to_string()]);
    let b = registry.counter("b_total").unwrap();
    assert_eq!(b.const_labels().key().get("zone"), Some("eu"));
}

#[test]
fn reserved_const_label_fails_registry_build() {
    let bad = r#"
version: 1
counters:
  - name: a_total
    help: A.
    const_labels: { job: batch }
"#;
    let cfg = config::load_from_str(bad).unwrap();
    let err = Registry::from_config(&cfg).err().expect("must fail");
    assert_eq!(err.code().as_str(), "INVALID_LABEL");
}

#[test]
fn duplicate_counter_names_fail_registry_build() {
    let bad = r#"
version: 1
counters:
  - { name: a_total, help: A. }
  - { name: a_total, help: Again. }
"#;
    let cfg = config::load_from_str(bad).unwrap();
    let err = Registry::from_config(&cfg).err().expect("must fail");
    assert_eq!(err.code().as_str(), "ALREADY_REGISTERED");
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("/nonexistent/promtally.yaml").expect_err("must fail");
    assert_eq!(err.code().as_str(), "CONFIG");
}

#[test]
fn reserved_load_label_rejected_at_load() {
    let bad = r#"
version: 1
counters: [{ name: a_total, help: A. }]
load:
  labels: { job: x }
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "INVALID_LABEL");
}

use std::path::PathBuf;

use tc_skeleton::feature::Feature;

#[test]
fn test_identifier_derivation() {
    let feature = Feature::new("My Test Plugin").unwrap();
    assert_eq!(feature.name(), "My Test Plugin");
    assert_eq!(feature.identifier(), "my.test.plugin");
}

#[test]
fn test_short_name() {
    let feature = Feature::new("A B").unwrap();
    assert_eq!(feature.identifier(), "a.b");
    assert_eq!(feature.plugin_id(), "org.eclipse.tracecompass.extension.a.b");
}

#[test]
fn test_already_lowercase() {
    let feature = Feature::new("latency").unwrap();
    assert_eq!(feature.identifier(), "latency");
}

#[test]
fn test_identifier_path() {
    let feature = Feature::new("My Test Plugin").unwrap();
    let expected: PathBuf = ["my", "test", "plugin"].iter().collect();
    assert_eq!(feature.identifier_path(), expected);
}

#[test]
fn test_empty_name_rejected() {
    assert!(Feature::new("").is_err());
    assert!(Feature::new("   ").is_err());
}

use tc_skeleton::skeleton::SkeletonKind;

#[test]
fn test_source_dirs() {
    assert_eq!(SkeletonKind::Feature.source_dir(), "skeleton.feature");
    assert_eq!(SkeletonKind::Core.source_dir(), "skeleton.core");
    assert_eq!(SkeletonKind::CoreTests.source_dir(), "skeleton.core.tests");
    assert_eq!(SkeletonKind::Ui.source_dir(), "skeleton.ui");
}

#[test]
fn test_suffixes() {
    assert_eq!(SkeletonKind::Feature.suffix(), "");
    assert_eq!(SkeletonKind::Core.suffix(), ".core");
    assert_eq!(SkeletonKind::CoreTests.suffix(), ".core.tests");
    assert_eq!(SkeletonKind::Ui.suffix(), ".ui");
}

#[test]
fn test_subpackages() {
    assert_eq!(SkeletonKind::Feature.subpackage(), None);
    assert_eq!(SkeletonKind::Core.subpackage(), Some("core"));
    assert_eq!(SkeletonKind::CoreTests.subpackage(), None);
    assert_eq!(SkeletonKind::Ui.subpackage(), Some("ui"));
}

#[test]
fn test_no_ui_only_excludes_ui() {
    for kind in SkeletonKind::ALL {
        assert!(kind.included(false));
        assert_eq!(kind.included(true), kind != SkeletonKind::Ui);
    }
}

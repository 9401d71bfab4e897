use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tc_skeleton::cli::Args;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("tc-skeleton")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let args = make_args(&["My Test Plugin"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "My Test Plugin");
    assert_eq!(parsed.dir, PathBuf::from("."));
    assert!(!parsed.no_ui);
    assert!(!parsed.verbose);
    assert!(parsed.skeletons.is_none());
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--dir",
        "./plugins",
        "--no-ui",
        "--skeletons",
        "./skeletons",
        "--verbose",
        "Sample Feature",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert_eq!(parsed.name, "Sample Feature");
    assert_eq!(parsed.dir, PathBuf::from("./plugins"));
    assert!(parsed.no_ui);
    assert_eq!(parsed.skeletons, Some(PathBuf::from("./skeletons")));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-v", "Sample Feature"]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.verbose);
}

#[test]
fn test_missing_name() {
    let args = make_args(&["--no-ui"]);
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn test_too_many_args() {
    let args = make_args(&["Sample Feature", "extra"]);
    assert!(Args::try_parse_from(args).is_err());
}

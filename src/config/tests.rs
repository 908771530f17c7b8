use rstest::rstest;

use super::*;

#[test]
fn test_default_path() {
    if let Some(path) = default_path() {
        assert!(path.ends_with("wcmatch/config"));
    }
}

#[test]
fn test_sources() {
    let loader = at(["a.toml", "b.yaml"]);
    let sources = loader.sources();
    let explicit: Vec<_> = sources.iter().filter(|s| s.required).map(|s| s.filename.clone()).collect();
    assert_eq!(explicit, vec![PathBuf::from("a.toml"), PathBuf::from("b.yaml")]);
    assert!(sources.len() >= 2);

    let sources = at(["a.toml"]).no_default(true).sources();
    assert_eq!(sources, vec![SourceFile::new("a.toml")]);
}

#[test]
fn test_load() {
    let settings = at(["src/testing/assets/configs/invert.yaml"])
        .no_default(true)
        .load()
        .unwrap();
    assert!(settings.invert_match);
    assert!(!settings.ignore_case);
}

#[rstest]
#[case(&[], &[], false)]
#[case(&["a"], &["a"], false)]
#[case(&["a", "-", "b"], &["b"], true)]
#[case(&["a", "", "b", "-"], &[], true)]
#[case(&["-", "a", "b"], &["a", "b"], true)]
fn test_effective(#[case] values: &[&str], #[case] expected: &[&str], #[case] no_default: bool) {
    assert_eq!(effective(values), (expected, no_default));
}

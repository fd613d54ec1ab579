use super::*;
use crate::testing::TempDirFixture;

const SAMPLE: &str = "\
# sample registry
A: B C

B: C D
C:
   D :
not a package line
E: A
";

#[test]
fn test_parse_skips_comments_blanks_and_malformed_lines() {
    let registry = OfflineRegistry::parse(SAMPLE);

    assert_eq!(registry.packages(), vec!["A", "B", "C", "D", "E"]);
    let deps: Vec<String> = registry.dependencies("A", "").unwrap().into_keys().collect();
    assert_eq!(deps, ["B", "C"]);
    assert!(registry.dependencies("C", "").unwrap().is_empty());
    assert!(registry.contains("D").unwrap());
    assert!(registry.dependencies("D", "").unwrap().is_empty());
    assert!(!registry.contains("not a package line").unwrap());
}

#[test]
fn test_later_line_replaces_earlier() {
    let registry = OfflineRegistry::parse("A: B\nA: C D\n");

    assert_eq!(registry.len(), 1);
    let deps: Vec<String> = registry.dependencies("A", "").unwrap().into_keys().collect();
    assert_eq!(deps, ["C", "D"]);
}

#[test]
fn test_lookup_returns_unversioned_dependencies() {
    let registry = OfflineRegistry::parse(SAMPLE);

    let deps = registry.dependencies("B", "1.2.3").unwrap();
    assert_eq!(deps.len(), 2);
    assert_eq!(deps.get("C").map(String::as_str), Some(""));
    assert_eq!(deps.get("D").map(String::as_str), Some(""));
}

#[test]
fn test_unknown_package_has_no_dependencies() {
    let registry = OfflineRegistry::parse(SAMPLE);

    assert!(registry.dependencies("Z", "").unwrap().is_empty());
    assert!(!registry.contains("Z").unwrap());
    assert!(registry.contains("A").unwrap());
}

#[test]
fn test_empty_input() {
    let registry = OfflineRegistry::parse("");
    assert!(registry.is_empty());
    assert!(registry.packages().is_empty());
}

#[test]
fn test_load_from_file() {
    let fixture = TempDirFixture::new().unwrap();
    let path = fixture.write_registry(&["app: lib", "lib:"]).unwrap();

    let registry = OfflineRegistry::load(&path).unwrap();
    assert_eq!(registry.packages(), vec!["app", "lib"]);
}

#[test]
fn test_load_missing_file() {
    let fixture = TempDirFixture::new().unwrap();
    let err = OfflineRegistry::load(&fixture.path().join("missing.txt")).unwrap_err();

    assert!(matches!(err, SourceError::FileRead { .. }));
}

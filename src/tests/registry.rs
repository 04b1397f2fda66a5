use super::SectionRegistry;
use crate::error::Error;
use crate::section::SectionPath;

fn path(components: &[u32]) -> SectionPath {
    SectionPath::from(components.to_vec())
}

#[test]
fn test_lookup_by_title_and_slug() {
    let mut registry = SectionRegistry::new();
    registry
        .insert("Intro", "intro".to_string(), path(&[1]))
        .unwrap();
    registry
        .insert("Background", "background".to_string(), path(&[1, 1]))
        .unwrap();

    assert_eq!(registry.len(), 2);
    let section = registry.by_title("Background").unwrap();
    assert_eq!(section.number, "1.1");
    assert_eq!(section.slug, "background");
    assert_eq!(registry.by_slug("intro").unwrap().title, "Intro");
    assert!(registry.by_slug("missing").is_none());
}

#[test]
fn test_duplicate_title_is_rejected() {
    let mut registry = SectionRegistry::new();
    registry
        .insert("Overview", "overview".to_string(), path(&[1]))
        .unwrap();

    let err = registry
        .insert("Overview", "overview".to_string(), path(&[2]))
        .unwrap_err();

    assert!(matches!(&err, Error::DuplicateTitle { title } if title == "Overview"));
    assert!(err.to_string().contains("Overview"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_slug_collision_between_distinct_titles() {
    let mut registry = SectionRegistry::new();
    registry
        .insert("Version 2", "version-".to_string(), path(&[1]))
        .unwrap();

    let err = registry
        .insert("Version 3", "version-".to_string(), path(&[2]))
        .unwrap_err();

    match err {
        Error::DuplicateSlug {
            slug,
            title,
            existing,
        } => {
            assert_eq!(slug, "version-");
            assert_eq!(title, "Version 3");
            assert_eq!(existing, "Version 2");
        }
        other => panic!("expected slug collision, got {other}"),
    }
}

#[test]
fn test_empty_registry() {
    let registry = SectionRegistry::new();
    assert!(registry.is_empty());
    assert!(registry.sections().is_empty());
}

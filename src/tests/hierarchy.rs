use super::build_registry;
use crate::error::Error;
use crate::heading::classify;
use crate::registry::SectionRegistry;
use crate::section::SectionPath;
use std::collections::HashSet;

fn parse(lines: &[&'static str], strict: bool) -> crate::error::Result<SectionRegistry> {
    build_registry(lines.iter().filter_map(|line| classify(line, '#')), strict)
}

fn numbers(registry: &SectionRegistry) -> Vec<(String, String)> {
    registry
        .sections()
        .iter()
        .map(|s| (s.title.clone(), s.number.clone()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(t, n)| ((*t).to_string(), (*n).to_string()))
        .collect()
}

/// Every parent exists, and every sibling before a section exists.
fn assert_tree_invariants(registry: &SectionRegistry) {
    let paths: HashSet<&SectionPath> = registry.sections().iter().map(|s| &s.path).collect();
    for section in registry.sections() {
        let components = section.path.components();
        assert!(!components.is_empty());
        assert!(components.iter().all(|&c| c >= 1));

        let (last, parent) = components.split_last().unwrap();
        if !parent.is_empty() {
            assert!(
                paths.contains(&SectionPath::from(parent.to_vec())),
                "missing parent of {}",
                section.number
            );
        }
        if *last > 1 {
            let mut previous = parent.to_vec();
            previous.push(last - 1);
            assert!(
                paths.contains(&SectionPath::from(previous)),
                "missing previous sibling of {}",
                section.number
            );
        }
    }

    let in_order: Vec<&SectionPath> = registry.sections().iter().map(|s| &s.path).collect();
    let mut sorted = in_order.clone();
    sorted.sort();
    assert_eq!(in_order, sorted, "path order must equal document order");
}

#[test]
fn test_siblings_and_children() {
    let registry = parse(
        &["# Intro", "## Background", "## Motivation", "# Design"],
        false,
    )
    .unwrap();

    assert_eq!(
        numbers(&registry),
        pairs(&[
            ("Intro", "1"),
            ("Background", "1.1"),
            ("Motivation", "1.2"),
            ("Design", "2"),
        ])
    );
    assert_eq!(
        registry.by_title("Motivation").unwrap().path.components(),
        &[1, 2]
    );
    assert_tree_invariants(&registry);
}

#[test]
fn test_returns_several_levels_at_once() {
    let registry = parse(
        &[
            "# A", "## B", "### C", "### D", "#### E", "# F", "## G", "### H", "## I",
        ],
        false,
    )
    .unwrap();

    assert_eq!(
        numbers(&registry),
        pairs(&[
            ("A", "1"),
            ("B", "1.1"),
            ("C", "1.1.1"),
            ("D", "1.1.2"),
            ("E", "1.1.2.1"),
            ("F", "2"),
            ("G", "2.1"),
            ("H", "2.1.1"),
            ("I", "2.2"),
        ])
    );
    assert_tree_invariants(&registry);
}

#[test]
fn test_skipped_level_nests_one_level() {
    let registry = parse(&["# A", "### B", "### C", "## D", "# E"], false).unwrap();

    // Depth is compared with the open levels, so the repeated ### nests again.
    assert_eq!(
        numbers(&registry),
        pairs(&[
            ("A", "1"),
            ("B", "1.1"),
            ("C", "1.1.1"),
            ("D", "1.2"),
            ("E", "2"),
        ])
    );
    assert_eq!(registry.by_title("B").unwrap().path.depth(), 2);
    assert_tree_invariants(&registry);
}

#[test]
fn test_strict_levels_rejects_skip() {
    let err = parse(&["# A", "### B"], true).unwrap_err();
    match err {
        Error::SkippedLevel {
            title,
            depth,
            expected,
        } => {
            assert_eq!(title, "B");
            assert_eq!(depth, 3);
            assert_eq!(expected, 2);
        }
        other => panic!("expected skipped level, got {other}"),
    }
}

#[test]
fn test_strict_levels_accepts_well_formed() {
    let registry = parse(&["# A", "## B", "### C", "# D"], true).unwrap();
    assert_eq!(registry.len(), 4);
    assert_tree_invariants(&registry);
}

#[test]
fn test_document_starting_deeper_than_one() {
    let registry = parse(&["## A", "### B", "# C"], false).unwrap();
    assert_eq!(
        numbers(&registry),
        pairs(&[("A", "1"), ("B", "1.1"), ("C", "2")])
    );
}

#[test]
fn test_duplicate_title_anywhere() {
    let err = parse(&["# Overview", "## Details", "# Overview"], false).unwrap_err();
    assert!(matches!(err, Error::DuplicateTitle { ref title } if title == "Overview"));
}

#[test]
fn test_path_depth_matches_tree_depth() {
    let registry = parse(
        &[
            "# One", "## Two", "### Three", "###### Six", "## Again", "# Top", "### Skip",
        ],
        false,
    )
    .unwrap();

    for section in registry.sections() {
        assert_eq!(section.path.depth(), section.number.split('.').count());
    }
    assert_eq!(registry.by_title("Six").unwrap().number, "1.1.1.1");
    assert_eq!(registry.by_title("Again").unwrap().number, "1.2");
    assert_eq!(registry.by_title("Skip").unwrap().number, "2.1");
    assert_tree_invariants(&registry);
}

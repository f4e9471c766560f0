//! Tag Grammar Round Trip Tests
//!
//! The combined document produced by `combine` must re-extract to the same
//! SectionSet, and must follow the fixed six-tag grammar.

use chronos_web::services::analysis::sections::{
    combine, extract_section, extract_sections, SectionId, SectionSet,
};

fn populated_set() -> SectionSet {
    let mut set = SectionSet::new();
    set.set(
        SectionId::ProjectCharter,
        "# Project Charter\n\n## Objectives\n- deliver".to_string(),
    );
    set.set(
        SectionId::ProductBacklog,
        "## Epic 1\n- **US1.1**: as a user...".to_string(),
    );
    set.set(
        SectionId::EffortEstimation,
        "| US | Estimate |\n|----|----------|\n| US1.1 | M |".to_string(),
    );
    set.set(SectionId::Roadmap, "Phase 1: foundations".to_string(),);
    set.set(SectionId::Methodology, "Agile Scrum".to_string());
    set.set(
        SectionId::RiskManagement,
        "R1: requirement churn *likely*".to_string(),
    );
    set
}

#[test]
fn test_round_trip_is_identity() {
    let set = populated_set();
    assert_eq!(extract_sections(&combine(&set)), set);
}

#[test]
fn test_round_trip_with_empty_sections() {
    let mut set = SectionSet::new();
    set.set(SectionId::Methodology, "only methodology".to_string());
    assert_eq!(extract_sections(&combine(&set)), set);
}

#[test]
fn test_combined_document_grammar() {
    let combined = combine(&populated_set());

    assert!(combined.starts_with("<output>\n"));
    assert!(combined.ends_with("</output>"));

    // Every section appears exactly once, opening and closing
    for id in SectionId::ALL {
        assert_eq!(combined.matches(&format!("<{}>", id.as_str())).count(), 1);
        assert_eq!(combined.matches(&format!("</{}>", id.as_str())).count(), 1);
    }
}

#[test]
fn test_extraction_matches_well_formed_span_exactly() {
    let raw = "preamble text\n<project_charter>\n  trimmed content  \n</project_charter>\ntrailing";
    assert_eq!(
        extract_section(raw, SectionId::ProjectCharter).unwrap(),
        "trimmed content"
    );
}

#[test]
fn test_absent_sections_extract_as_empty_strings() {
    let set = extract_sections("no tags here at all");
    for id in SectionId::ALL {
        assert_eq!(set.get(id), "");
    }
}

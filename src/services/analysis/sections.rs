//! Analysis Sections
//!
//! The six named sections of an analysis document, the `<name>...</name>`
//! tag grammar used both to instruct the provider and to parse its
//! responses, and the canonical combined document serialization.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;

/// Identifier of one analysis section, in canonical document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SectionId {
    ProjectCharter,
    ProductBacklog,
    EffortEstimation,
    Roadmap,
    Methodology,
    RiskManagement,
}

impl SectionId {
    /// All six sections in canonical order
    pub const ALL: [SectionId; 6] = [
        SectionId::ProjectCharter,
        SectionId::ProductBacklog,
        SectionId::EffortEstimation,
        SectionId::Roadmap,
        SectionId::Methodology,
        SectionId::RiskManagement,
    ];

    /// Sections generated by the first pipeline phase
    pub const PHASE_ONE: [SectionId; 3] = [
        SectionId::ProjectCharter,
        SectionId::ProductBacklog,
        SectionId::EffortEstimation,
    ];

    /// Sections generated by the second pipeline phase
    pub const PHASE_TWO: [SectionId; 3] = [
        SectionId::Roadmap,
        SectionId::Methodology,
        SectionId::RiskManagement,
    ];

    /// The tag name used in the document grammar
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::ProjectCharter => "project_charter",
            SectionId::ProductBacklog => "product_backlog",
            SectionId::EffortEstimation => "effort_estimation",
            SectionId::Roadmap => "roadmap",
            SectionId::Methodology => "methodology",
            SectionId::RiskManagement => "risk_management",
        }
    }

    /// Human-readable title for display
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::ProjectCharter => "Project Charter",
            SectionId::ProductBacklog => "Product Backlog",
            SectionId::EffortEstimation => "Effort Estimation",
            SectionId::Roadmap => "Roadmap",
            SectionId::Methodology => "Methodology",
            SectionId::RiskManagement => "Risk Management",
        }
    }
}

/// Ordered mapping from the six section identifiers to their content.
///
/// All six keys are always present; a section whose extraction failed holds
/// an empty string, never an absent entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSet {
    sections: BTreeMap<SectionId, String>,
}

impl SectionSet {
    /// Create a set with all six sections empty
    pub fn new() -> Self {
        let mut sections = BTreeMap::new();
        for id in SectionId::ALL {
            sections.insert(id, String::new());
        }
        Self { sections }
    }

    /// Get the content of a section
    pub fn get(&self, id: SectionId) -> &str {
        self.sections.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Set the content of a section
    pub fn set(&mut self, id: SectionId, content: String) {
        self.sections.insert(id, content);
    }

    /// Iterate over all six sections in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (SectionId, &str)> {
        SectionId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }
}

impl Default for SectionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// The extraction pattern for one section: case-sensitive, non-greedy,
/// dot-matches-newline.
fn section_pattern(id: SectionId) -> &'static Regex {
    static PATTERNS: OnceLock<BTreeMap<SectionId, Regex>> = OnceLock::new();
    let patterns = PATTERNS.get_or_init(|| {
        SectionId::ALL
            .into_iter()
            .map(|id| {
                let re = Regex::new(&format!("(?s)<{0}>(.*?)</{0}>", id.as_str())).unwrap();
                (id, re)
            })
            .collect()
    });
    &patterns[&id]
}

/// Extract the trimmed interior of one tagged section, if present
pub fn extract_section(text: &str, id: SectionId) -> Option<String> {
    section_pattern(id)
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
}

/// Extract all six sections from a document.
///
/// Sections absent from the text are left as empty strings.
pub fn extract_sections(text: &str) -> SectionSet {
    let mut set = SectionSet::new();
    for id in SectionId::ALL {
        if let Some(content) = extract_section(text, id) {
            set.set(id, content);
        }
    }
    set
}

/// Serialize a SectionSet into the canonical combined document.
pub fn combine(sections: &SectionSet) -> String {
    let mut out = String::from("<output>\n");
    for (id, content) in sections.iter() {
        out.push_str(&format!(
            "<{0}>\n{1}\n</{0}>\n\n",
            id.as_str(),
            content
        ));
    }
    out.push_str("</output>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_set_always_has_six_keys() {
        let set = SectionSet::new();
        assert_eq!(set.iter().count(), 6);
        for id in SectionId::ALL {
            assert_eq!(set.get(id), "");
        }
    }

    #[test]
    fn test_extract_section_trims_interior() {
        let text = "<project_charter>\n  # Charter\n</project_charter>";
        let content = extract_section(text, SectionId::ProjectCharter).unwrap();
        assert_eq!(content, "# Charter");
    }

    #[test]
    fn test_extract_section_is_non_greedy() {
        let text = "<roadmap>first</roadmap> noise <roadmap>second</roadmap>";
        let content = extract_section(text, SectionId::Roadmap).unwrap();
        assert_eq!(content, "first");
    }

    #[test]
    fn test_extract_section_spans_newlines() {
        let text = "<methodology>line one\n\nline two</methodology>";
        let content = extract_section(text, SectionId::Methodology).unwrap();
        assert_eq!(content, "line one\n\nline two");
    }

    #[test]
    fn test_extract_section_is_case_sensitive() {
        let text = "<Roadmap>content</Roadmap>";
        assert!(extract_section(text, SectionId::Roadmap).is_none());
    }

    #[test]
    fn test_extract_missing_section_is_empty_string() {
        let set = extract_sections("<project_charter>only one</project_charter>");
        assert_eq!(set.get(SectionId::ProjectCharter), "only one");
        assert_eq!(set.get(SectionId::Roadmap), "");
        assert_eq!(set.get(SectionId::RiskManagement), "");
    }

    #[test]
    fn test_combine_contains_all_tags_in_order() {
        let combined = combine(&SectionSet::new());
        assert!(combined.starts_with("<output>"));
        assert!(combined.ends_with("</output>"));
        let mut last = 0;
        for id in SectionId::ALL {
            let pos = combined.find(&format!("<{}>", id.as_str())).unwrap();
            assert!(pos > last);
            last = pos;
        }
    }

    #[test]
    fn test_combine_extract_round_trip() {
        let mut set = SectionSet::new();
        set.set(SectionId::ProjectCharter, "# Charter\n\n- goal".to_string());
        set.set(SectionId::ProductBacklog, "## Epic 1".to_string());
        set.set(
            SectionId::EffortEstimation,
            "| US | Days |\n|----|------|\n| 1 | 2 |".to_string(),
        );
        set.set(SectionId::Roadmap, "Phase 1 then Phase 2".to_string());
        set.set(SectionId::Methodology, "Scrum, two-week sprints".to_string());
        set.set(SectionId::RiskManagement, "R1: scope creep".to_string());

        let extracted = extract_sections(&combine(&set));
        assert_eq!(extracted, set);
    }

    #[test]
    fn test_combine_extract_round_trip_with_empty_sections() {
        let mut set = SectionSet::new();
        set.set(SectionId::Roadmap, "only this one".to_string());

        let extracted = extract_sections(&combine(&set));
        assert_eq!(extracted, set);
    }

    #[test]
    fn test_phase_partition_covers_all_sections() {
        let mut all: Vec<SectionId> = SectionId::PHASE_ONE.to_vec();
        all.extend(SectionId::PHASE_TWO);
        assert_eq!(all, SectionId::ALL.to_vec());
    }
}

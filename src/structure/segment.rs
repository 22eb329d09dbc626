//! Section header detection and content slicing.
//!
//! Segmentation runs in two phases. [`SectionSegmenter::detect_boundaries`]
//! finds every header line, then [`SectionSegmenter::slice`] turns the
//! sorted boundaries into content ranges. A section's end depends on the
//! next boundary, so the phases cannot be fused into one streaming pass.

use super::AliasTable;
use crate::model::{DetectedSection, SectionBoundary, SectionKind};

/// Extra characters a header may carry after a prefix-matched phrase.
const PREFIX_SLACK: usize = 5;

/// Longest line that can still be a decorated header.
const MAX_DECORATED_HEADER_LEN: usize = 40;

/// What to do when the same kind of header appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Concatenate every occurrence into one section at the first position
    #[default]
    Merge,
    /// Keep only the last occurrence's content (at the first position)
    LastWins,
}

/// Detects section headers and slices lines into per-section content.
#[derive(Debug, Clone)]
pub struct SectionSegmenter {
    aliases: AliasTable,
    duplicate_policy: DuplicatePolicy,
}

impl SectionSegmenter {
    /// Create a segmenter over an alias table.
    pub fn new(aliases: AliasTable, duplicate_policy: DuplicatePolicy) -> Self {
        Self {
            aliases,
            duplicate_policy,
        }
    }

    /// The alias table in use.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Classify a single line as a header, if it is one.
    ///
    /// Trailing `:`/`-`/`–`/`—` runs are stripped and the line lowercased,
    /// then each phrase is tried in table order against three checks: exact
    /// match, short prefix match, short substring match. The first phrase
    /// passing any check decides the kind.
    pub fn classify(&self, line: &str) -> Option<SectionKind> {
        let cleaned = line
            .trim()
            .trim_end_matches(|c: char| matches!(c, ':' | '-' | '–' | '—'))
            .to_lowercase();
        if cleaned.is_empty() {
            return None;
        }
        let len = cleaned.chars().count();

        self.aliases
            .iter()
            .find(|&(_, alias)| {
                cleaned == alias
                    || (cleaned.starts_with(alias)
                        && len <= alias.chars().count() + PREFIX_SLACK)
                    || (cleaned.contains(alias) && len <= MAX_DECORATED_HEADER_LEN)
            })
            .map(|(kind, _)| kind)
    }

    /// Phase one: every header line, sorted by line index.
    pub fn detect_boundaries(&self, lines: &[String]) -> Vec<SectionBoundary> {
        let mut boundaries: Vec<SectionBoundary> = lines
            .iter()
            .enumerate()
            .filter_map(|(index, line)| {
                self.classify(line).map(|kind| SectionBoundary {
                    kind,
                    header_line_index: index,
                })
            })
            .collect();

        boundaries.sort_by_key(|b| b.header_line_index);

        for boundary in &boundaries {
            log::debug!(
                "Section header '{}' at line {}",
                boundary.kind,
                boundary.header_line_index
            );
        }

        boundaries
    }

    /// Phase two: content ranges between consecutive boundaries.
    ///
    /// Each range runs from the line after its header up to (not including)
    /// the next header, or to the end of the document for the last one.
    /// Repeated kinds are resolved with the configured [`DuplicatePolicy`].
    pub fn slice(&self, lines: &[String], boundaries: &[SectionBoundary]) -> Vec<DetectedSection> {
        let mut sections: Vec<DetectedSection> = Vec::new();

        for (i, boundary) in boundaries.iter().enumerate() {
            let start = (boundary.header_line_index + 1).min(lines.len());
            let end = boundaries
                .get(i + 1)
                .map(|next| next.header_line_index)
                .unwrap_or(lines.len())
                .max(start);
            let content = lines[start..end].to_vec();

            match sections.iter_mut().find(|s| s.kind == boundary.kind) {
                Some(existing) => match self.duplicate_policy {
                    DuplicatePolicy::Merge => {
                        log::debug!(
                            "Merging repeated '{}' section at line {}",
                            boundary.kind,
                            boundary.header_line_index
                        );
                        // Keep a blank line between ranges so blocks never fuse across them.
                        existing.content_lines.push(String::new());
                        existing.content_lines.extend(content);
                    }
                    DuplicatePolicy::LastWins => {
                        log::debug!(
                            "Replacing earlier '{}' section with the one at line {}",
                            boundary.kind,
                            boundary.header_line_index
                        );
                        existing.content_lines = content;
                    }
                },
                None => sections.push(DetectedSection {
                    kind: boundary.kind,
                    content_lines: content,
                }),
            }
        }

        sections
    }

    /// Run both phases.
    pub fn segment(&self, lines: &[String]) -> Vec<DetectedSection> {
        let boundaries = self.detect_boundaries(lines);
        self.slice(lines, &boundaries)
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new(AliasTable::default(), DuplicatePolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.lines().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_classify_exact() {
        let segmenter = SectionSegmenter::default();
        assert_eq!(segmenter.classify("Education"), Some(SectionKind::Education));
        assert_eq!(segmenter.classify("  SKILLS  "), Some(SectionKind::Skills));
        assert_eq!(segmenter.classify("Honors"), Some(SectionKind::Awards));
    }

    #[test]
    fn test_classify_trailing_punctuation() {
        let segmenter = SectionSegmenter::default();
        assert_eq!(segmenter.classify("Experience:"), Some(SectionKind::Experience));
        assert_eq!(segmenter.classify("Projects —"), Some(SectionKind::Projects));
        assert_eq!(segmenter.classify("Skills::--"), Some(SectionKind::Skills));
    }

    #[test]
    fn test_classify_prefix_match() {
        let segmenter = SectionSegmenter::default();
        // "skills" + 5 characters still counts as a header
        assert_eq!(segmenter.classify("Skills & Co"), Some(SectionKind::Skills));
        // too long for a prefix match, but short enough for a substring match
        assert_eq!(
            segmenter.classify("Skills and interests overview"),
            Some(SectionKind::Skills)
        );
    }

    #[test]
    fn test_classify_substring_match() {
        let segmenter = SectionSegmenter::default();
        assert_eq!(
            segmenter.classify("=== My Education ==="),
            Some(SectionKind::Education)
        );
    }

    #[test]
    fn test_classify_long_line_is_not_header() {
        let segmenter = SectionSegmenter::default();
        let line = "Gained extensive experience building distributed systems for clients";
        assert_eq!(segmenter.classify(line), None);
    }

    #[test]
    fn test_classify_table_order_beats_exact_match() {
        let segmenter = SectionSegmenter::default();
        // "experience" is listed before "project experience" and matches as a substring
        assert_eq!(
            segmenter.classify("Project Experience"),
            Some(SectionKind::Experience)
        );
        assert_eq!(
            segmenter.classify("Work Experience"),
            Some(SectionKind::Experience)
        );
        assert_eq!(segmenter.classify("Projects"), Some(SectionKind::Projects));
    }

    #[test]
    fn test_classify_custom_phrase_after_builtin_substring() {
        let aliases = AliasTable::default().with_alias(SectionKind::Custom, "skills and hobbies");
        let segmenter = SectionSegmenter::new(aliases, DuplicatePolicy::Merge);
        // the built-in "skills" phrase comes first in the table
        assert_eq!(
            segmenter.classify("Skills and Hobbies"),
            Some(SectionKind::Skills)
        );
    }

    #[test]
    fn test_classify_non_headers() {
        let segmenter = SectionSegmenter::default();
        assert_eq!(segmenter.classify(""), None);
        assert_eq!(segmenter.classify("   "), None);
        assert_eq!(segmenter.classify(":--"), None);
        assert_eq!(segmenter.classify("John Smith"), None);
    }

    #[test]
    fn test_boundaries_and_ranges() {
        let segmenter = SectionSegmenter::default();
        let doc = lines("Jane\nEducation\nMIT\nExperience\nAcme\nBeta\nSkills\nRust");

        let boundaries = segmenter.detect_boundaries(&doc);
        let indices: Vec<_> = boundaries.iter().map(|b| b.header_line_index).collect();
        assert_eq!(indices, vec![1, 3, 6]);

        let sections = segmenter.slice(&doc, &boundaries);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].kind, SectionKind::Education);
        assert_eq!(sections[0].content_lines, vec!["MIT"]);
        assert_eq!(sections[1].content_lines, vec!["Acme", "Beta"]);
        assert_eq!(sections[2].content_lines, vec!["Rust"]);
    }

    #[test]
    fn test_adjacent_headers_have_empty_content() {
        let segmenter = SectionSegmenter::default();
        let sections = segmenter.segment(&lines("Education\nSkills"));
        assert_eq!(sections.len(), 2);
        assert!(sections[0].content_lines.is_empty());
        assert!(sections[1].content_lines.is_empty());
    }

    #[test]
    fn test_no_headers() {
        let segmenter = SectionSegmenter::default();
        assert!(segmenter.segment(&lines("just some\nplain text")).is_empty());
        assert!(segmenter.segment(&[]).is_empty());
    }

    #[test]
    fn test_duplicate_merge() {
        let segmenter = SectionSegmenter::default();
        let doc = lines("Experience\nJob A\nSkills\nGo\nExperience\nJob B");
        let sections = segmenter.segment(&doc);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Experience);
        assert_eq!(sections[0].content_lines, vec!["Job A", "", "Job B"]);
        assert_eq!(sections[1].kind, SectionKind::Skills);
    }

    #[test]
    fn test_duplicate_last_wins() {
        let segmenter = SectionSegmenter::new(AliasTable::default(), DuplicatePolicy::LastWins);
        let doc = lines("Experience\nJob A\nSkills\nGo\nExperience\nJob B");
        let sections = segmenter.segment(&doc);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].kind, SectionKind::Experience);
        assert_eq!(sections[0].content_lines, vec!["Job B"]);
    }

    #[test]
    fn test_custom_alias() {
        let aliases = AliasTable::default().with_alias(SectionKind::Custom, "volunteering");
        let segmenter = SectionSegmenter::new(aliases, DuplicatePolicy::Merge);
        assert_eq!(segmenter.classify("Volunteering"), Some(SectionKind::Custom));
    }
}

//! Section-level types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical resume category a header line can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Professional summary / objective (folded into the resume record)
    Summary,
    /// Degrees and schools
    Education,
    /// Jobs and positions
    Experience,
    /// Personal or professional projects
    Projects,
    /// Skill lists (collapsed into a single entry)
    Skills,
    /// Certificates
    Certifications,
    /// Awards, honors, achievements
    Awards,
    /// Anything registered by the caller that has no canonical slot
    Custom,
}

impl SectionKind {
    /// Every kind, in alias-table order.
    pub const ALL: [SectionKind; 8] = [
        SectionKind::Summary,
        SectionKind::Education,
        SectionKind::Experience,
        SectionKind::Projects,
        SectionKind::Skills,
        SectionKind::Certifications,
        SectionKind::Awards,
        SectionKind::Custom,
    ];

    /// The snake_case identifier used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Summary => "summary",
            SectionKind::Education => "education",
            SectionKind::Experience => "experience",
            SectionKind::Projects => "projects",
            SectionKind::Skills => "skills",
            SectionKind::Certifications => "certifications",
            SectionKind::Awards => "awards",
            SectionKind::Custom => "custom",
        }
    }

    /// Parse a snake_case identifier (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Human label: underscores become spaces, each word capitalized.
    pub fn title(self) -> String {
        self.as_str()
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A header line found by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBoundary {
    /// Kind the header maps to
    pub kind: SectionKind,
    /// Zero-based index of the header line
    pub header_line_index: usize,
}

/// The lines owned by one detected section, header excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedSection {
    /// Section kind
    pub kind: SectionKind,
    /// Lines strictly between this header and the next one (or the end)
    pub content_lines: Vec<String>,
}

/// One logical item (a job, a degree, a project) as a run of trimmed lines.
///
/// Never empty: the first line is always the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryBlock {
    lines: Vec<String>,
}

impl EntryBlock {
    /// Build a block, returning `None` for an empty line list.
    pub fn new(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    /// The first line.
    pub fn header(&self) -> &str {
        &self.lines[0]
    }

    /// Every line after the header.
    pub fn body(&self) -> &[String] {
        &self.lines[1..]
    }

    /// All lines, header first.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines in the block.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// A structured entry inside a section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEntry {
    /// Job title, degree, project name
    pub title: String,

    /// Company, school, or other affiliation
    pub organization: String,

    /// Location (not extracted by the current heuristics)
    pub location: String,

    /// Start date (not extracted by the current heuristics)
    pub start_date: String,

    /// End date (not extracted by the current heuristics)
    pub end_date: String,

    /// Bullet lines, each prefixed with "• ", newline-joined
    pub description: String,

    /// Technologies / tools, or the full skill list for skills sections
    pub technologies: String,

    /// Zero-based source order within the section
    pub order: u32,
}

/// A section of the structured resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSection {
    /// Canonical kind
    pub section_type: SectionKind,

    /// Display title derived from the kind
    pub section_title: String,

    /// Entries in source order
    pub entries: Vec<ParsedEntry>,
}

impl ParsedSection {
    /// Create a section whose title is derived from its kind.
    pub fn new(section_type: SectionKind, entries: Vec<ParsedEntry>) -> Self {
        Self {
            section_type,
            section_title: section_type.title(),
            entries,
        }
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Check if the section has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

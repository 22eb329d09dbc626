//! Document-level types: the raw input and the structured output.

use super::{ParsedSection, SectionKind};
use serde::{Deserialize, Serialize};

/// Body font size assumed when the extractor could not measure one.
pub const DEFAULT_FONT_SIZE: u32 = 11;

/// Raw resume text as handed over by a text extractor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    /// Decoded text
    pub text: String,

    /// Original file name, used to derive the display name
    pub filename: Option<String>,

    /// Dominant body font size measured by the extractor
    pub base_font_size: Option<u32>,
}

impl RawDocument {
    /// Create a document from text alone.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filename: None,
            base_font_size: None,
        }
    }

    /// Set the source file name.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the measured body font size.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.base_font_size = Some(size);
        self
    }
}

/// Contact fields pulled from the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub portfolio_url: String,
}

/// Resume-level record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Display name derived from the source file ("cv (Imported)")
    pub name: String,

    /// Candidate name
    pub full_name: String,

    /// First email address found
    pub email: String,

    /// First phone-like digit run found
    pub phone: String,

    /// Summary / objective paragraph
    pub summary: String,

    /// First LinkedIn URL
    pub linkedin_url: String,

    /// First GitHub URL
    pub github_url: String,

    /// First URL that is neither LinkedIn nor GitHub
    pub portfolio_url: String,

    /// Body font size hint, passed through from the extractor
    pub base_font_size: u32,
}

impl Default for ParsedResume {
    fn default() -> Self {
        Self {
            name: String::new(),
            full_name: String::new(),
            email: String::new(),
            phone: String::new(),
            summary: String::new(),
            linkedin_url: String::new(),
            github_url: String::new(),
            portfolio_url: String::new(),
            base_font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// Output of one structuring run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuringResult {
    /// Resume-level fields
    pub resume: ParsedResume,

    /// Detected sections in document order
    pub sections: Vec<ParsedSection>,

    /// Non-fatal notes about what could not be found
    pub warnings: Vec<String>,
}

impl StructuringResult {
    /// Get the first section of the given kind.
    pub fn section(&self, kind: SectionKind) -> Option<&ParsedSection> {
        self.sections.iter().find(|s| s.section_type == kind)
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Check if any warning was recorded.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

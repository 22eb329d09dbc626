//! # unresume
//!
//! Resume text structuring library for Rust.
//!
//! This library turns the unstructured text of a resume into a structured
//! record: contact fields, a summary, and typed sections (education,
//! experience, projects, skills, ...) split into entries.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unresume::{parse_file, render};
//!
//! fn main() -> unresume::Result<()> {
//!     // Structure a plain text resume
//!     let result = parse_file("resume.txt")?;
//!
//!     // Convert to JSON
//!     let json = render::to_json(&result, render::JsonFormat::Pretty)?;
//!     println!("{}", json);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Section detection**: header aliases with exact, prefix and substring matching
//! - **Entry splitting**: blank-line blocks, project headers, collapsed skill lists
//! - **Contact fields**: name, email, phone, LinkedIn / GitHub / portfolio URLs
//! - **Pluggable extraction**: register extractors for PDF or DOCX sources
//! - **Parallel processing**: Uses Rayon for batches of resumes

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;
pub mod structure;

// Re-export commonly used types
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, sniff_format_from_path, SourceFormat,
};
pub use error::{Error, Result};
pub use extract::{
    dominant_font_size, ExtractedText, ExtractorRegistry, PlainTextExtractor, TextExtractor,
};
pub use model::{
    ParsedEntry, ParsedResume, ParsedSection, RawDocument, SectionKind, StructuringResult,
    DEFAULT_FONT_SIZE,
};
pub use render::JsonFormat;
pub use structure::{AliasTable, DuplicatePolicy, StructureOptions, Structurer};

use rayon::prelude::*;
use std::path::Path;
use std::sync::Arc;

/// Structure resume text with the default configuration.
///
/// # Arguments
///
/// * `text` - Decoded resume text
/// * `filename` - Source file name, used for the display name
/// * `base_font_size` - Body font size measured by the extractor
///
/// # Example
///
/// ```
/// let result = unresume::parse("Jane Doe\njane@example.com", None, None);
/// assert_eq!(result.resume.email, "jane@example.com");
/// ```
pub fn parse(text: &str, filename: Option<&str>, base_font_size: Option<u32>) -> StructuringResult {
    Structurer::default().parse(text, filename, base_font_size)
}

/// Structure a [`RawDocument`] with the default configuration.
pub fn parse_document(doc: &RawDocument) -> StructuringResult {
    Structurer::default().parse_document(doc)
}

/// Extract and structure a resume file.
///
/// Only plain text sources are supported out of the box; use [`Unresume`]
/// with [`Unresume::with_extractor`] for other formats.
///
/// # Example
///
/// ```no_run
/// use unresume::parse_file;
///
/// let result = parse_file("resume.txt").unwrap();
/// println!("Sections: {}", result.sections.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<StructuringResult> {
    Unresume::new().parse_file(path)
}

/// Extract, structure and render a resume file as JSON.
///
/// # Example
///
/// ```no_run
/// use unresume::{to_json, JsonFormat};
///
/// let json = to_json("resume.txt", JsonFormat::Pretty).unwrap();
/// std::fs::write("resume.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let result = parse_file(path)?;
    render::to_json(&result, format)
}

/// Builder for extracting and structuring resumes.
///
/// # Example
///
/// ```no_run
/// use unresume::{SectionKind, Unresume};
///
/// let result = Unresume::new()
///     .with_alias(SectionKind::Custom, "volunteering")
///     .last_wins()
///     .parse_file("resume.txt")?;
/// # Ok::<(), unresume::Error>(())
/// ```
pub struct Unresume {
    options: StructureOptions,
    registry: ExtractorRegistry,
}

impl Unresume {
    /// Create a new Unresume builder.
    pub fn new() -> Self {
        Self {
            options: StructureOptions::default(),
            registry: ExtractorRegistry::with_defaults(),
        }
    }

    /// Replace the structuring options.
    pub fn with_options(mut self, options: StructureOptions) -> Self {
        self.options = options;
        self
    }

    /// Register one more section header phrase.
    pub fn with_alias(mut self, kind: SectionKind, phrase: impl AsRef<str>) -> Self {
        self.options = self.options.with_alias(kind, phrase);
        self
    }

    /// Keep only the last occurrence of repeated section headers.
    pub fn last_wins(mut self) -> Self {
        self.options = self.options.last_wins();
        self
    }

    /// Set the font size reported when none was measured.
    pub fn with_default_font_size(mut self, size: u32) -> Self {
        self.options = self.options.with_default_font_size(size);
        self
    }

    /// Disable parallel processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Register a text extractor for its extensions.
    pub fn with_extractor(mut self, extractor: Arc<dyn TextExtractor>) -> Self {
        self.registry.register(extractor);
        self
    }

    /// Get the structuring options.
    pub fn options(&self) -> &StructureOptions {
        &self.options
    }

    /// Get the extractor registry.
    pub fn registry(&self) -> &ExtractorRegistry {
        &self.registry
    }

    /// Build the structuring engine for the current options.
    pub fn structurer(&self) -> Structurer {
        Structurer::new(self.options.clone())
    }

    /// Structure already-decoded text.
    pub fn parse_text(&self, text: &str, filename: Option<&str>) -> StructuringResult {
        self.structurer().parse(text, filename, None)
    }

    /// Extract and structure one file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<StructuringResult> {
        let doc = self.registry.extract_document(path)?;
        Ok(self.structurer().parse_document(&doc))
    }

    /// Extract and structure many files; output order matches input order.
    ///
    /// A failure on one file does not stop the others.
    pub fn parse_files<P: AsRef<Path> + Sync>(&self, paths: &[P]) -> Vec<Result<StructuringResult>> {
        let structurer = self.structurer();
        let run = |path: &P| -> Result<StructuringResult> {
            let doc = self.registry.extract_document(path)?;
            Ok(structurer.parse_document(&doc))
        };

        if self.options.parallel && paths.len() > 1 {
            paths.par_iter().map(run).collect()
        } else {
            paths.iter().map(run).collect()
        }
    }
}

impl Default for Unresume {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JOHN: &str = "John Smith\njohn@x.com\n\nExperience\nSoftware Engineer at Acme\n- Did A\n- Did B\n\nSkills\nPython, Go";

    #[test]
    fn test_parse_end_to_end() {
        let result = parse(JOHN, Some("john.pdf"), Some(10));

        assert_eq!(result.resume.name, "john (Imported)");
        assert_eq!(result.resume.full_name, "John Smith");
        assert_eq!(result.resume.email, "john@x.com");
        assert_eq!(result.resume.base_font_size, 10);
        assert!(result.warnings.is_empty());

        assert_eq!(result.sections.len(), 2);
        let experience = result.section(SectionKind::Experience).unwrap();
        assert_eq!(experience.entries.len(), 1);
        assert_eq!(experience.entries[0].title, "Software Engineer");
        assert_eq!(experience.entries[0].organization, "Acme");
        assert_eq!(experience.entries[0].description, "• Did A\n• Did B");

        let skills = result.section(SectionKind::Skills).unwrap();
        assert_eq!(skills.entries.len(), 1);
        assert_eq!(skills.entries[0].title, "");
        assert_eq!(skills.entries[0].technologies, "Python, Go");
    }

    #[test]
    fn test_parse_document_matches_parse() {
        let doc = RawDocument::new(JOHN).with_filename("john.txt");
        assert_eq!(parse_document(&doc), parse(JOHN, Some("john.txt"), None));
    }

    // ==================== Builder Pattern Tests ====================

    #[test]
    fn test_unresume_builder_default() {
        let builder = Unresume::default();
        assert_eq!(builder.options().duplicate_policy, DuplicatePolicy::Merge);
        assert!(builder.options().parallel);
        assert!(builder.registry().supports("txt"));
    }

    #[test]
    fn test_unresume_builder_chained() {
        let builder = Unresume::new()
            .with_alias(SectionKind::Custom, "Volunteering")
            .last_wins()
            .with_default_font_size(12)
            .sequential();

        assert_eq!(builder.options().duplicate_policy, DuplicatePolicy::LastWins);
        assert_eq!(builder.options().default_font_size, 12);
        assert!(!builder.options().parallel);

        let result = builder.parse_text("Volunteering\nFood bank", None);
        assert_eq!(result.sections[0].section_type, SectionKind::Custom);
        assert_eq!(result.resume.base_font_size, 12);
    }

    #[test]
    fn test_unresume_with_extractor() {
        struct Upper;
        impl TextExtractor for Upper {
            fn supported_extensions(&self) -> &[&str] {
                &["up"]
            }
            fn name(&self) -> &str {
                "upper"
            }
            fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractedText> {
                Ok(ExtractedText::new(String::from_utf8_lossy(bytes).to_uppercase()))
            }
        }

        let builder = Unresume::new().with_extractor(Arc::new(Upper));
        assert!(builder.registry().supports("up"));
        assert!(builder.registry().supports("txt"));
    }

    #[test]
    fn test_parse_file_missing() {
        let result = parse_file("/definitely/not/here.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_parse_file_unsupported() {
        let result = parse_file("resume.odt");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}

//! Text extraction boundary.
//!
//! The structuring engine only ever sees decoded text. Turning a file into
//! that text is the job of a [`TextExtractor`]; extractors are registered by
//! file extension in an [`ExtractorRegistry`]. Plain text is handled
//! in-crate, PDF and DOCX extractors plug in from outside through the trait.
//!
//! # Example
//!
//! ```no_run
//! use unresume::extract::ExtractorRegistry;
//! use unresume::Structurer;
//!
//! fn main() -> unresume::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults();
//!     let doc = registry.extract_document("resume.txt")?;
//!
//!     let result = Structurer::default().parse_document(&doc);
//!     println!("{}", result.resume.full_name);
//!     Ok(())
//! }
//! ```

mod font;
mod plain;

pub use font::{dominant_font_size, FontSizeHistogram, MAX_BODY_FONT_SIZE, MIN_BODY_FONT_SIZE};
pub use plain::PlainTextExtractor;

use crate::detect::{sniff_format_from_path, SourceFormat};
use crate::error::{Error, Result};
use crate::model::RawDocument;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Text pulled out of a source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    /// Decoded text
    pub text: String,

    /// Dominant body font size, when the format carries font information
    pub base_font_size: Option<u32>,
}

impl ExtractedText {
    /// Create extracted text without a font size.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            base_font_size: None,
        }
    }

    /// Set the measured body font size.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.base_font_size = Some(size);
        self
    }

    /// Turn into engine input, remembering where it came from.
    pub fn into_document(self, filename: Option<String>) -> RawDocument {
        RawDocument {
            text: self.text,
            filename,
            base_font_size: self.base_font_size,
        }
    }
}

/// Trait for source text extractors.
///
/// Implement this trait to add support for a new source format.
pub trait TextExtractor: Send + Sync {
    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["txt"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this extractor.
    fn name(&self) -> &str;

    /// Extract text from bytes.
    fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractedText>;

    /// Extract text from a file at the given path.
    fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let bytes = std::fs::read(path)?;
        self.extract_bytes(&bytes)
    }

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for text extractors.
///
/// Maps file extensions to extractors. Files without an extension are
/// sniffed by content.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn TextExtractor>>,
    by_name: HashMap<String, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the built-in plain text extractor.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(PlainTextExtractor::new()));
        registry
    }

    /// Register an extractor for all its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn TextExtractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors.insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name.insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextExtractor>> {
        self.extractors.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextExtractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extractors.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }

    /// Extract text from a file using the extractor for its extension.
    pub fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => ext.to_string(),
            None => {
                let format = sniff_format_from_path(path)?;
                log::debug!("{} has no extension, sniffed as {}", path.display(), format);
                format.extension().to_string()
            }
        };

        let extractor = self
            .get_by_extension(&ext)
            .ok_or_else(|| unsupported(&ext))?;

        log::debug!("Extracting {} with '{}'", path.display(), extractor.name());
        extractor.extract(path)
    }

    /// Extract text from bytes, choosing the extractor by extension.
    pub fn extract_bytes(&self, bytes: &[u8], ext: &str) -> Result<ExtractedText> {
        let extractor = self.get_by_extension(ext).ok_or_else(|| unsupported(ext))?;
        extractor.extract_bytes(bytes)
    }

    /// Extract a file into engine input, keeping its file name.
    pub fn extract_document<P: AsRef<Path>>(&self, path: P) -> Result<RawDocument> {
        let path = path.as_ref();
        let extracted = self.extract(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        Ok(extracted.into_document(filename))
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn unsupported(ext: &str) -> Error {
    match SourceFormat::from_extension(ext) {
        Some(format) => Error::UnsupportedFormat(format!("{ext} (no {format} extractor registered)")),
        None => Error::UnsupportedFormat(ext.to_string()),
    }
}

//! Source format detection.
//!
//! Recognizes the formats a resume usually arrives in so the right text
//! extractor can be picked. Unknown formats are reported as
//! [`Error::UnsupportedFormat`].

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// ZIP local file header, the container DOCX files use.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// How many leading bytes are inspected when sniffing content.
const SNIFF_LEN: usize = 1024;

/// A resume source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Portable Document Format
    Pdf,
    /// Office Open XML word processing document
    Docx,
    /// Plain text in any ASCII-compatible encoding
    PlainText,
}

impl SourceFormat {
    /// Canonical lowercase extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            SourceFormat::Pdf => "pdf",
            SourceFormat::Docx => "docx",
            SourceFormat::PlainText => "txt",
        }
    }

    /// Map a file extension (case-insensitive, no dot) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(SourceFormat::Pdf),
            "docx" => Some(SourceFormat::Docx),
            "txt" | "text" | "md" => Some(SourceFormat::PlainText),
            _ => None,
        }
    }
}

impl std::fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Pdf => write!(f, "PDF"),
            SourceFormat::Docx => write!(f, "DOCX"),
            SourceFormat::PlainText => write!(f, "plain text"),
        }
    }
}

/// Detect the format of a file from its extension.
///
/// # Returns
/// * `Ok(SourceFormat)` for `.pdf`, `.docx`, `.txt`/`.text`/`.md`
/// * `Err(Error::UnsupportedFormat)` for anything else, including no extension
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    SourceFormat::from_extension(ext).ok_or_else(|| {
        if ext.is_empty() {
            Error::UnsupportedFormat(format!("{} (no extension)", path.display()))
        } else {
            Error::UnsupportedFormat(ext.to_string())
        }
    })
}

/// Detect the format of a file by reading its first bytes.
pub fn sniff_format_from_path<P: AsRef<Path>>(path: P) -> Result<SourceFormat> {
    let mut header = Vec::with_capacity(SNIFF_LEN);
    File::open(path)?
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut header)?;
    detect_format_from_bytes(&header)
}

/// Detect the format from content bytes.
///
/// # Returns
/// * `Ok(SourceFormat::Pdf)` for data starting with `%PDF-`
/// * `Ok(SourceFormat::Docx)` for data starting with a ZIP header
/// * `Ok(SourceFormat::PlainText)` for non-empty data without NUL bytes
/// * `Err(Error::UnsupportedFormat)` otherwise
pub fn detect_format_from_bytes(data: &[u8]) -> Result<SourceFormat> {
    if data.starts_with(PDF_MAGIC) {
        return Ok(SourceFormat::Pdf);
    }
    if data.starts_with(ZIP_MAGIC) {
        return Ok(SourceFormat::Docx);
    }
    if data.is_empty() {
        return Err(Error::UnsupportedFormat("empty input".to_string()));
    }
    if is_binary(data) {
        return Err(Error::UnsupportedFormat("binary data".to_string()));
    }
    Ok(SourceFormat::PlainText)
}

/// Check for NUL bytes in the leading window, the usual sign of binary data.
pub(crate) fn is_binary(data: &[u8]) -> bool {
    data.iter().take(SNIFF_LEN).any(|&b| b == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_from_path() {
        assert_eq!(detect_format_from_path("cv.pdf").unwrap(), SourceFormat::Pdf);
        assert_eq!(detect_format_from_path("CV.DOCX").unwrap(), SourceFormat::Docx);
        assert_eq!(
            detect_format_from_path("dir/resume.txt").unwrap(),
            SourceFormat::PlainText
        );
    }

    #[test]
    fn test_detect_from_path_unsupported() {
        let result = detect_format_from_path("cv.odt");
        assert!(matches!(result, Err(Error::UnsupportedFormat(ref ext)) if ext == "odt"));

        let result = detect_format_from_path("README");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }

    #[test]
    fn test_detect_from_bytes() {
        assert_eq!(
            detect_format_from_bytes(b"%PDF-1.7\n%test").unwrap(),
            SourceFormat::Pdf
        );
        assert_eq!(
            detect_format_from_bytes(b"PK\x03\x04\x14\x00").unwrap(),
            SourceFormat::Docx
        );
        assert_eq!(
            detect_format_from_bytes("Jane Doe\nSkills".as_bytes()).unwrap(),
            SourceFormat::PlainText
        );
    }

    #[test]
    fn test_detect_from_bytes_rejects_binary() {
        assert!(matches!(
            detect_format_from_bytes(&[0x00, 0x01, 0x02]),
            Err(Error::UnsupportedFormat(_))
        ));
        assert!(matches!(
            detect_format_from_bytes(&[]),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_extension_round_trip() {
        for format in [SourceFormat::Pdf, SourceFormat::Docx, SourceFormat::PlainText] {
            assert_eq!(SourceFormat::from_extension(format.extension()), Some(format));
        }
    }
}

//! Plain text extractor.

use super::{ExtractedText, TextExtractor};
use crate::detect::is_binary;
use crate::error::{Error, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Extractor for `.txt`, `.text` and `.md` files.
///
/// Decodes UTF-8, falling back to Latin-1 when the bytes are not valid
/// UTF-8. Plain text carries no font information.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Decode bytes to text.
    pub fn decode(bytes: &[u8]) -> Result<String> {
        if is_binary(bytes) {
            return Err(Error::Decode(
                "input contains NUL bytes and does not look like text".to_string(),
            ));
        }

        let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
        match std::str::from_utf8(bytes) {
            Ok(text) => Ok(text.to_string()),
            Err(e) => {
                log::warn!("Input is not valid UTF-8 ({}), decoding as Latin-1", e);
                Ok(bytes.iter().map(|&b| b as char).collect())
            }
        }
    }
}

impl TextExtractor for PlainTextExtractor {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text", "md"]
    }

    fn name(&self) -> &str {
        "plain"
    }

    fn extract_bytes(&self, bytes: &[u8]) -> Result<ExtractedText> {
        Self::decode(bytes).map(ExtractedText::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_utf8() {
        let text = PlainTextExtractor::decode("José Núñez\nSkills".as_bytes()).unwrap();
        assert_eq!(text, "José Núñez\nSkills");
    }

    #[test]
    fn test_decode_strips_bom() {
        let text = PlainTextExtractor::decode(b"\xEF\xBB\xBFJane").unwrap();
        assert_eq!(text, "Jane");
    }

    #[test]
    fn test_decode_latin1_fallback() {
        // "José" in Latin-1
        let text = PlainTextExtractor::decode(b"Jos\xE9").unwrap();
        assert_eq!(text, "José");
    }

    #[test]
    fn test_decode_rejects_binary() {
        let result = PlainTextExtractor::decode(b"ab\x00cd");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_extract_bytes_has_no_font_size() {
        let extracted = PlainTextExtractor::new().extract_bytes(b"Jane Doe").unwrap();
        assert_eq!(extracted.text, "Jane Doe");
        assert_eq!(extracted.base_font_size, None);
    }

    #[test]
    fn test_supports_extension() {
        let extractor = PlainTextExtractor::new();
        assert!(extractor.supports_extension("TXT"));
        assert!(extractor.supports_extension("md"));
        assert!(!extractor.supports_extension("pdf"));
    }
}

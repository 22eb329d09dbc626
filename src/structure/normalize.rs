//! Unicode canonicalization for extracted resume text.
//!
//! Every other stage works on the output of [`TextNormalizer`]; none of them
//! does its own unicode cleanup.

use unicode_normalization::UnicodeNormalization;

/// Canonical bullet glyph used in normalized text and entry descriptions.
pub const BULLET: char = '•';

/// Glyphs that open a list item in free-form text.
const BULLET_MARKERS: [char; 3] = [BULLET, '-', '*'];

/// Canonicalizes exotic unicode into a stable working form.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    substitutions: Vec<(char, &'static str)>,
}

impl TextNormalizer {
    /// Create a normalizer with the standard substitution table.
    pub fn new() -> Self {
        Self {
            substitutions: vec![
                ('\u{00A0}', " "), // no-break space
                ('\u{200B}', ""),  // zero-width space
                ('\u{200C}', ""),  // zero-width non-joiner
                ('\u{200D}', ""),  // zero-width joiner
                ('\u{FEFF}', ""),  // byte-order mark
                ('\u{2018}', "'"),
                ('\u{2019}', "'"),
                ('\u{201C}', "\""),
                ('\u{201D}', "\""),
                ('●', "•"),
                ('○', "•"),
                ('■', "•"),
                ('□', "•"),
                ('◆', "•"),
                ('◇', "•"),
                ('▪', "•"),
                ('▫', "•"),
                ('►', "•"),
                ('▻', "•"),
                ('◦', "•"),
                ('‣', "•"),
                ('∙', "•"),
            ],
        }
    }

    /// Apply NFC composition and the substitution table.
    ///
    /// En and em dashes are left alone so they stay distinct from `-`.
    pub fn normalize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let mut result = String::with_capacity(raw.len());
        for c in raw.nfc() {
            match self.substitution(c) {
                Some(replacement) => result.push_str(replacement),
                None => result.push(c),
            }
        }
        result
    }

    /// Split normalized text into right-trimmed lines.
    ///
    /// Accepts every terminator extractors tend to emit, including form
    /// feeds at PDF page breaks. A trailing terminator does not produce an
    /// extra empty line.
    pub fn to_lines(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if is_line_break(c) {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(current.trim_end().to_string());
                current.clear();
            } else {
                current.push(c);
            }
        }

        if !current.is_empty() {
            lines.push(current.trim_end().to_string());
        }

        lines
    }

    fn substitution(&self, c: char) -> Option<&'static str> {
        self.substitutions
            .iter()
            .find(|(from, _)| *from == c)
            .map(|(_, to)| *to)
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{001C}'
            | '\u{001D}'
            | '\u{001E}'
            | '\u{0085}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Remove any leading run of whitespace and bullet glyphs, then trim.
pub fn strip_bullet(line: &str) -> &str {
    line.trim_start_matches(|c: char| c.is_whitespace() || BULLET_MARKERS.contains(&c))
        .trim()
}

/// Check if a trimmed line opens with a bullet glyph.
pub fn starts_with_bullet(line: &str) -> bool {
    line.starts_with(&BULLET_MARKERS[..])
}

//! Final assembly of the structuring result.

use super::normalize::strip_bullet;
use crate::model::{ContactFields, ParsedResume, ParsedSection, StructuringResult};

/// Warning recorded when no name-like line was found.
pub const MISSING_NAME_WARNING: &str = "Could not confidently detect a full name.";

/// Warning recorded when no email address was found.
pub const MISSING_EMAIL_WARNING: &str = "Could not find an email address.";

const IMPORTED_SUFFIX: &str = " (Imported)";

/// Merges contact fields, summary, and sections into one record.
#[derive(Debug, Clone)]
pub struct ResultAssembler {
    default_font_size: u32,
}

impl ResultAssembler {
    /// Create an assembler that falls back to `default_font_size`.
    pub fn new(default_font_size: u32) -> Self {
        Self { default_font_size }
    }

    /// Build the final result.
    pub fn assemble(
        &self,
        contact: ContactFields,
        summary_lines: &[String],
        sections: Vec<ParsedSection>,
        filename: Option<&str>,
        base_font_size: Option<u32>,
    ) -> StructuringResult {
        let mut warnings = Vec::new();
        if contact.full_name.is_empty() {
            warnings.push(MISSING_NAME_WARNING.to_string());
        }
        if contact.email.is_empty() {
            warnings.push(MISSING_EMAIL_WARNING.to_string());
        }
        for warning in &warnings {
            log::debug!("{}", warning);
        }

        let resume = ParsedResume {
            name: filename.map(display_name).unwrap_or_default(),
            full_name: contact.full_name,
            email: contact.email,
            phone: contact.phone,
            summary: summarize(summary_lines),
            linkedin_url: contact.linkedin_url,
            github_url: contact.github_url,
            portfolio_url: contact.portfolio_url,
            base_font_size: base_font_size.unwrap_or(self.default_font_size),
        };

        StructuringResult {
            resume,
            sections,
            warnings,
        }
    }
}

impl Default for ResultAssembler {
    fn default() -> Self {
        Self::new(crate::model::DEFAULT_FONT_SIZE)
    }
}

/// Bullet-stripped summary lines joined by single spaces.
pub fn summarize(lines: &[String]) -> String {
    lines
        .iter()
        .map(|line| strip_bullet(line))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display name for an imported file: its stem plus `" (Imported)"`.
///
/// Returns an empty string when the file name has no usable stem.
pub fn display_name(filename: &str) -> String {
    let base = filename.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(filename);
    let stem = match base.rfind('.') {
        Some(dot) if !base[..dot].chars().all(|c| c == '.') => &base[..dot],
        _ => base,
    };
    let stem = stem.trim();

    if stem.is_empty() {
        String::new()
    } else {
        format!("{stem}{IMPORTED_SUFFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionKind;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("resume.pdf"), "resume (Imported)");
        assert_eq!(display_name("/tmp/uploads/Jane CV.final.docx"), "Jane CV.final (Imported)");
        assert_eq!(display_name("C:\\Users\\jane\\cv.txt"), "cv (Imported)");
        assert_eq!(display_name("notes"), "notes (Imported)");
        assert_eq!(display_name(".profile"), ".profile (Imported)");
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("dir/"), "");
    }

    #[test]
    fn test_summarize() {
        let lines = vec![
            "• Backend engineer".to_string(),
            String::new(),
            "  focused on reliability.  ".to_string(),
        ];
        assert_eq!(summarize(&lines), "Backend engineer focused on reliability.");
        assert_eq!(summarize(&[]), "");
    }

    #[test]
    fn test_warnings() {
        let assembler = ResultAssembler::default();
        let result = assembler.assemble(ContactFields::default(), &[], Vec::new(), None, None);

        assert_eq!(
            result.warnings,
            vec![MISSING_NAME_WARNING.to_string(), MISSING_EMAIL_WARNING.to_string()]
        );
        assert!(result.resume.name.is_empty());
        assert_eq!(result.resume.base_font_size, 11);
    }

    #[test]
    fn test_no_warnings_when_contact_found() {
        let assembler = ResultAssembler::new(12);
        let contact = ContactFields {
            full_name: "Jane Doe".to_string(),
            email: "jane@x.com".to_string(),
            ..Default::default()
        };
        let sections = vec![ParsedSection::new(SectionKind::Awards, Vec::new())];
        let result = assembler.assemble(contact, &[], sections, Some("jane.pdf"), Some(10));

        assert!(result.warnings.is_empty());
        assert_eq!(result.resume.name, "jane (Imported)");
        assert_eq!(result.resume.base_font_size, 10);
        assert_eq!(result.sections[0].section_title, "Awards");
    }

    #[test]
    fn test_default_font_size_override() {
        let assembler = ResultAssembler::new(12);
        let result = assembler.assemble(ContactFields::default(), &[], Vec::new(), None, None);
        assert_eq!(result.resume.base_font_size, 12);
    }
}

//! Document-level contact field extraction.

use crate::model::ContactFields;
use regex::Regex;

/// How many non-empty lines from the top are considered for the name.
const NAME_SCAN_LINES: usize = 5;

/// Longest line (in whitespace-separated tokens) accepted as a name.
const MAX_NAME_TOKENS: usize = 6;

/// Fewest digits a phone number candidate must carry.
const MIN_PHONE_DIGITS: usize = 8;

/// Compiled patterns for contact fields.
#[derive(Debug, Clone)]
pub struct ContactPatterns {
    email: Regex,
    phone: Regex,
    url: Regex,
}

impl ContactPatterns {
    /// Compile the standard pattern set.
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"(?i)[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}")
                .expect("email pattern is valid"),
            phone: Regex::new(r"\+?\d[\d \t().-]{7,}\d").expect("phone pattern is valid"),
            url: Regex::new(r"https?://[^\s)]+").expect("url pattern is valid"),
        }
    }
}

impl Default for ContactPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// Profile links classified by host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileLinks {
    pub linkedin_url: String,
    pub github_url: String,
    pub portfolio_url: String,
}

/// Pulls contact fields out of the whole normalized document.
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    patterns: ContactPatterns,
}

impl FieldExtractor {
    /// Create an extractor over a compiled pattern set.
    pub fn new(patterns: ContactPatterns) -> Self {
        Self { patterns }
    }

    /// Extract every contact field.
    ///
    /// `text` is the full normalized document, `lines` its line split.
    pub fn extract(&self, text: &str, lines: &[String]) -> ContactFields {
        let links = self.links(text);
        ContactFields {
            full_name: self.full_name(lines),
            email: self.email(text),
            phone: self.phone(text),
            linkedin_url: links.linkedin_url,
            github_url: links.github_url,
            portfolio_url: links.portfolio_url,
        }
    }

    /// First email address, or empty.
    pub fn email(&self, text: &str) -> String {
        first_match(&self.patterns.email, text)
    }

    /// First phone-like run of at least eight digits on a single line, or empty.
    pub fn phone(&self, text: &str) -> String {
        self.patterns
            .phone
            .find_iter(text)
            .map(|m| m.as_str())
            .find(|candidate| {
                candidate.chars().filter(|c| c.is_ascii_digit()).count() >= MIN_PHONE_DIGITS
            })
            .map(str::to_string)
            .unwrap_or_default()
    }

    /// Classify every `http(s)://` URL by host.
    pub fn links(&self, text: &str) -> ProfileLinks {
        let mut links = ProfileLinks::default();

        for url in self.patterns.url.find_iter(text).map(|m| m.as_str()) {
            let lower = url.to_lowercase();
            let is_linkedin = lower.contains("linkedin.com");
            let is_github = lower.contains("github.com");

            if is_linkedin && links.linkedin_url.is_empty() {
                links.linkedin_url = url.to_string();
            }
            if is_github && links.github_url.is_empty() {
                links.github_url = url.to_string();
            }
            if !is_linkedin && !is_github && links.portfolio_url.is_empty() {
                links.portfolio_url = url.to_string();
            }
        }

        links
    }

    /// First of the top non-empty lines that looks like a name.
    pub fn full_name(&self, lines: &[String]) -> String {
        lines
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .take(NAME_SCAN_LINES)
            .find(|line| !line.contains('@') && line.split_whitespace().count() <= MAX_NAME_TOKENS)
            .map(str::to_string)
            .unwrap_or_default()
    }
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

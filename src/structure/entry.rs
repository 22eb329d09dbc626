//! Header decomposition and description assembly for entry blocks.

use super::blocks::PROJECT_HEADER_DELIMITER;
use super::normalize::{strip_bullet, BULLET};
use crate::model::{EntryBlock, ParsedEntry, SectionKind};
use regex::Regex;

const DASH_DELIMITER: &str = " - ";

/// Fields recovered from an entry's header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderParts {
    pub title: String,
    pub organization: String,
    pub technologies: String,
}

/// Turns entry blocks into [`ParsedEntry`] records.
#[derive(Debug, Clone)]
pub struct EntryFieldHeuristics {
    at_separator: Regex,
}

impl EntryFieldHeuristics {
    /// Create the heuristics with their compiled separator pattern.
    pub fn new() -> Self {
        Self {
            at_separator: Regex::new(r"(?i)\s+at\s+").expect("at separator pattern is valid"),
        }
    }

    /// Decompose a block into an entry at position `order` within its section.
    ///
    /// Skills blocks carry the whole skill list in `technologies` and leave
    /// every other field empty.
    pub fn decompose(&self, kind: SectionKind, block: &EntryBlock, order: u32) -> ParsedEntry {
        if kind == SectionKind::Skills {
            return ParsedEntry {
                technologies: block.header().to_string(),
                order,
                ..Default::default()
            };
        }

        let header = self.split_header(kind, block.header());
        ParsedEntry {
            title: header.title,
            organization: header.organization,
            technologies: header.technologies,
            description: describe(block.body()),
            order,
            ..Default::default()
        }
    }

    /// Split a header line with the first delimiter rule that applies:
    /// `" at "`, then `" - "`, then `" | "`, else the whole line is the title.
    pub fn split_header(&self, kind: SectionKind, header: &str) -> HeaderParts {
        if header.to_lowercase().contains(" at ") {
            let mut parts = self.at_separator.splitn(header, 2);
            let title = parts.next().unwrap_or(header);
            if let Some(organization) = parts.next() {
                return HeaderParts {
                    title: title.trim().to_string(),
                    organization: organization.trim().to_string(),
                    technologies: String::new(),
                };
            }
        } else if let Some((title, organization)) = header.split_once(DASH_DELIMITER) {
            return HeaderParts {
                title: title.trim().to_string(),
                organization: organization.trim().to_string(),
                technologies: String::new(),
            };
        } else if let Some((title, rest)) = header.split_once(PROJECT_HEADER_DELIMITER) {
            let rest = rest.trim().to_string();
            let (organization, technologies) = if kind == SectionKind::Projects {
                (String::new(), rest)
            } else {
                (rest, String::new())
            };
            return HeaderParts {
                title: title.trim().to_string(),
                organization,
                technologies,
            };
        }

        HeaderParts {
            title: header.to_string(),
            ..Default::default()
        }
    }
}

impl Default for EntryFieldHeuristics {
    fn default() -> Self {
        Self::new()
    }
}

/// Re-bullet body lines: strip any leading markers, prefix `"• "`, join by newline.
pub fn describe(body: &[String]) -> String {
    body.iter()
        .map(|line| strip_bullet(line))
        .filter(|line| !line.is_empty())
        .map(|line| format!("{BULLET} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

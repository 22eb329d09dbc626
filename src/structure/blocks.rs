//! Grouping of section content into entry blocks.

use super::normalize::{starts_with_bullet, strip_bullet};
use crate::model::{EntryBlock, SectionKind};

/// Delimiter that marks a project header line.
pub const PROJECT_HEADER_DELIMITER: &str = " | ";

/// How a section's lines are grouped into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStrategy {
    /// All lines collapse into one synthetic single-line block
    SkillList,
    /// Blank lines separate blocks
    Generic,
    /// Blank lines separate blocks, and so does every `" | "` header line
    ProjectHeaders,
}

impl BlockStrategy {
    /// Strategy used for a section kind.
    pub fn for_kind(kind: SectionKind) -> Self {
        match kind {
            SectionKind::Skills => BlockStrategy::SkillList,
            SectionKind::Projects => BlockStrategy::ProjectHeaders,
            _ => BlockStrategy::Generic,
        }
    }
}

/// Splits section content into [`EntryBlock`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntryBlockSplitter;

impl EntryBlockSplitter {
    /// Create a splitter.
    pub fn new() -> Self {
        Self
    }

    /// Group lines into blocks using the strategy for `kind`.
    pub fn split(&self, kind: SectionKind, lines: &[String]) -> Vec<EntryBlock> {
        let blocks = match BlockStrategy::for_kind(kind) {
            BlockStrategy::SkillList => self.split_skill_list(lines),
            BlockStrategy::Generic => self.split_on_blank_lines(lines, false),
            BlockStrategy::ProjectHeaders => self.split_on_blank_lines(lines, true),
        };

        log::debug!("Split '{}' content into {} block(s)", kind, blocks.len());
        blocks
    }

    fn split_skill_list(&self, lines: &[String]) -> Vec<EntryBlock> {
        let joined = lines
            .iter()
            .map(|line| strip_bullet(line))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            return Vec::new();
        }
        EntryBlock::new(vec![joined]).into_iter().collect()
    }

    fn split_on_blank_lines(&self, lines: &[String], header_splits: bool) -> Vec<EntryBlock> {
        let mut blocks = Vec::new();
        let mut current: Vec<String> = Vec::new();

        for line in lines {
            let stripped = line.trim();
            if stripped.is_empty() {
                blocks.extend(EntryBlock::new(std::mem::take(&mut current)));
                continue;
            }

            if header_splits && is_project_header(stripped) {
                blocks.extend(EntryBlock::new(std::mem::take(&mut current)));
            }

            current.push(stripped.to_string());
        }

        blocks.extend(EntryBlock::new(current));
        blocks
    }
}

/// A non-bullet line carrying the `" | "` delimiter.
fn is_project_header(line: &str) -> bool {
    line.contains(PROJECT_HEADER_DELIMITER) && !starts_with_bullet(line)
}

//! Structuring options and configuration.

use super::{AliasTable, DuplicatePolicy};
use crate::model::{SectionKind, DEFAULT_FONT_SIZE};

/// Options for structuring resume text.
#[derive(Debug, Clone)]
pub struct StructureOptions {
    /// Header phrases recognized per section kind
    pub aliases: AliasTable,

    /// How repeated section headers are resolved
    pub duplicate_policy: DuplicatePolicy,

    /// Font size reported when the extractor measured none
    pub default_font_size: u32,

    /// Whether batch structuring runs in parallel
    pub parallel: bool,
}

impl StructureOptions {
    /// Create new structuring options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the alias table.
    pub fn with_aliases(mut self, aliases: AliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    /// Register one more header phrase.
    pub fn with_alias(mut self, kind: SectionKind, phrase: impl AsRef<str>) -> Self {
        self.aliases = self.aliases.with_alias(kind, phrase);
        self
    }

    /// Set the duplicate-header policy.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Keep only the last occurrence of a repeated section.
    pub fn last_wins(mut self) -> Self {
        self.duplicate_policy = DuplicatePolicy::LastWins;
        self
    }

    /// Set the fallback font size.
    pub fn with_default_font_size(mut self, size: u32) -> Self {
        self.default_font_size = size;
        self
    }

    /// Enable or disable parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel batch processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for StructureOptions {
    fn default() -> Self {
        Self {
            aliases: AliasTable::default(),
            duplicate_policy: DuplicatePolicy::Merge,
            default_font_size: DEFAULT_FONT_SIZE,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_options_builder() {
        let options = StructureOptions::new()
            .with_alias(SectionKind::Custom, "Volunteering")
            .last_wins()
            .with_default_font_size(12)
            .sequential();

        assert_eq!(options.aliases.aliases(SectionKind::Custom), ["volunteering"]);
        assert_eq!(options.duplicate_policy, DuplicatePolicy::LastWins);
        assert_eq!(options.default_font_size, 12);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = StructureOptions::default();
        assert_eq!(options.duplicate_policy, DuplicatePolicy::Merge);
        assert_eq!(options.default_font_size, 11);
        assert!(options.parallel);
        assert_eq!(options.aliases, AliasTable::default());
    }
}

//! Header phrase table used to recognize section headers.

use crate::model::SectionKind;

/// Immutable mapping from section kind to the header phrases that denote it.
///
/// Iteration order matters: phrases are tried one at a time and the first
/// one that matches a line wins. Kinds keep the order in which
/// they were first added, phrases keep insertion order within a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    entries: Vec<(SectionKind, Vec<String>)>,
}

impl AliasTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a header phrase for a kind.
    ///
    /// Phrases are stored lowercased and trimmed; blank or repeated phrases
    /// are ignored.
    pub fn with_alias(mut self, kind: SectionKind, phrase: impl AsRef<str>) -> Self {
        let phrase = phrase.as_ref().trim().to_lowercase();
        if phrase.is_empty() {
            return self;
        }

        match self.entries.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, phrases)) => {
                if !phrases.contains(&phrase) {
                    phrases.push(phrase);
                }
            }
            None => self.entries.push((kind, vec![phrase])),
        }
        self
    }

    /// Add several phrases for a kind.
    pub fn with_aliases<I, S>(self, kind: SectionKind, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        phrases
            .into_iter()
            .fold(self, |table, phrase| table.with_alias(kind, phrase))
    }

    /// Phrases registered for a kind.
    pub fn aliases(&self, kind: SectionKind) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, phrases)| phrases.as_slice())
            .unwrap_or(&[])
    }

    /// Kinds that have at least one phrase, in table order.
    pub fn kinds(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.entries.iter().map(|(kind, _)| *kind)
    }

    /// Every `(kind, phrase)` pair in table order.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKind, &str)> + '_ {
        self.entries
            .iter()
            .flat_map(|(kind, phrases)| phrases.iter().map(move |p| (*kind, p.as_str())))
    }

    /// Total number of phrases.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, phrases)| phrases.len()).sum()
    }

    /// Check if the table holds no phrases.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::new()
            .with_aliases(SectionKind::Summary, ["summary", "objective", "profile"])
            .with_aliases(
                SectionKind::Education,
                ["education", "academics", "academic background"],
            )
            .with_aliases(
                SectionKind::Experience,
                [
                    "experience",
                    "work experience",
                    "professional experience",
                    "employment",
                ],
            )
            .with_aliases(SectionKind::Projects, ["projects", "project experience"])
            .with_aliases(
                SectionKind::Skills,
                ["skills", "technical skills", "technologies"],
            )
            .with_aliases(
                SectionKind::Certifications,
                ["certifications", "certificates"],
            )
            .with_aliases(SectionKind::Awards, ["awards", "honors", "achievements"])
    }
}

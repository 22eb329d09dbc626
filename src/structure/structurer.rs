//! The structuring engine: raw resume text in, [`StructuringResult`] out.

use super::{
    EntryBlockSplitter, EntryFieldHeuristics, FieldExtractor, ResultAssembler, SectionSegmenter,
    StructureOptions, TextNormalizer,
};
use crate::model::{ParsedSection, RawDocument, SectionKind, StructuringResult};
use rayon::prelude::*;

/// Resume structuring engine.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Structurer {
    normalizer: TextNormalizer,
    segmenter: SectionSegmenter,
    splitter: EntryBlockSplitter,
    fields: FieldExtractor,
    heuristics: EntryFieldHeuristics,
    assembler: ResultAssembler,
    parallel: bool,
}

impl Structurer {
    /// Create an engine from options.
    pub fn new(options: StructureOptions) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            segmenter: SectionSegmenter::new(options.aliases, options.duplicate_policy),
            splitter: EntryBlockSplitter::new(),
            fields: FieldExtractor::default(),
            heuristics: EntryFieldHeuristics::new(),
            assembler: ResultAssembler::new(options.default_font_size),
            parallel: options.parallel,
        }
    }

    /// Structure resume text.
    ///
    /// Never fails: empty or non-resume input yields a result with empty
    /// fields, no sections, and warnings for the missing name and email.
    pub fn parse(
        &self,
        text: &str,
        filename: Option<&str>,
        base_font_size: Option<u32>,
    ) -> StructuringResult {
        let normalized = self.normalizer.normalize(text);
        let lines = self.normalizer.to_lines(&normalized);

        let contact = self.fields.extract(&normalized, &lines);

        let mut summary_lines = Vec::new();
        let mut sections = Vec::new();
        for detected in self.segmenter.segment(&lines) {
            if detected.kind == SectionKind::Summary {
                summary_lines.extend(detected.content_lines);
                continue;
            }

            let entries = self
                .splitter
                .split(detected.kind, &detected.content_lines)
                .iter()
                .enumerate()
                .map(|(index, block)| {
                    self.heuristics
                        .decompose(detected.kind, block, entry_order(index))
                })
                .collect();
            sections.push(ParsedSection::new(detected.kind, entries));
        }

        log::debug!(
            "Structured {} line(s) into {} section(s)",
            lines.len(),
            sections.len()
        );

        self.assembler
            .assemble(contact, &summary_lines, sections, filename, base_font_size)
    }

    /// Structure a [`RawDocument`].
    pub fn parse_document(&self, doc: &RawDocument) -> StructuringResult {
        self.parse(&doc.text, doc.filename.as_deref(), doc.base_font_size)
    }

    /// Structure many documents; output order matches input order.
    pub fn parse_batch(&self, docs: &[RawDocument]) -> Vec<StructuringResult> {
        if self.parallel && docs.len() > 1 {
            docs.par_iter().map(|doc| self.parse_document(doc)).collect()
        } else {
            docs.iter().map(|doc| self.parse_document(doc)).collect()
        }
    }
}

impl Default for Structurer {
    fn default() -> Self {
        Self::new(StructureOptions::default())
    }
}

/// Entry position as stored on [`crate::model::ParsedEntry`], saturating at `u32::MAX`.
fn entry_order(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let result = Structurer::default().parse("", None, None);
        assert!(result.sections.is_empty());
        assert_eq!(result.resume.base_font_size, 11);
        assert_eq!(result.warnings.len(), 2);
    }

    #[test]
    fn test_summary_is_folded_into_resume() {
        let text = "Jane Doe\njane@x.com\n\nSummary\n• Platform engineer\nwho likes Rust.\n\nAwards\nHackathon winner";
        let result = Structurer::default().parse(text, None, None);

        assert_eq!(result.resume.summary, "Platform engineer who likes Rust.");
        assert_eq!(result.sections.len(), 1);
        assert_eq!(result.sections[0].section_type, SectionKind::Awards);
        assert_eq!(result.sections[0].entries[0].title, "Hackathon winner");
    }

    #[test]
    fn test_entry_order_is_zero_based() {
        let text = "Education\nBSc | MIT\n\nMSc | Stanford\n\nPhD | CMU";
        let result = Structurer::default().parse(text, None, None);
        let orders: Vec<_> = result.sections[0].entries.iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_entry_order_saturates() {
        assert_eq!(entry_order(0), 0);
        assert_eq!(entry_order(41), 41);
        assert_eq!(entry_order(u32::MAX as usize), u32::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(entry_order(u32::MAX as usize + 1), u32::MAX);
    }

    #[test]
    fn test_entry_order_many_entries() {
        let text: String = std::iter::once("Awards".to_string())
            .chain((0..300).map(|i| format!("Award {i}
")))
            .collect::<Vec<_>>()
            .join("\n");
        let result = Structurer::default().parse(&text, None, None);
        let entries = &result.sections[0].entries;
        assert_eq!(entries.len(), 300);
        assert_eq!(entries[299].order, 299);
        assert_eq!(entries[299].title, "Award 299");
    }

    #[test]
    fn test_parse_batch_keeps_order() {
        let structurer = Structurer::default();
        let docs: Vec<_> = (0..8)
            .map(|i| RawDocument::new(format!("Person {i}\np{i}@x.com")).with_font_size(i))
            .collect();

        let results = structurer.parse_batch(&docs);
        assert_eq!(results.len(), 8);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.resume.full_name, format!("Person {i}"));
            assert_eq!(result.resume.base_font_size, i as u32);
        }
    }

    #[test]
    fn test_parse_batch_sequential() {
        let structurer = Structurer::new(StructureOptions::new().sequential());
        let docs = vec![RawDocument::new("A"), RawDocument::new("B")];
        let results = structurer.parse_batch(&docs);
        assert_eq!(results[0].resume.full_name, "A");
        assert_eq!(results[1].resume.full_name, "B");
    }
}

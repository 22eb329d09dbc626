//! Resume structuring pipeline.
//!
//! normalize → segment → split into blocks → decompose entries, with
//! contact fields extracted once over the whole text, then assembled into a
//! [`crate::model::StructuringResult`].

mod aliases;
mod assemble;
mod blocks;
mod entry;
mod fields;
pub mod normalize;
mod options;
mod segment;
mod structurer;

pub use aliases::AliasTable;
pub use assemble::{
    display_name, summarize, ResultAssembler, MISSING_EMAIL_WARNING, MISSING_NAME_WARNING,
};
pub use blocks::{BlockStrategy, EntryBlockSplitter, PROJECT_HEADER_DELIMITER};
pub use entry::{describe, EntryFieldHeuristics, HeaderParts};
pub use fields::{ContactPatterns, FieldExtractor, ProfileLinks};
pub use normalize::{strip_bullet, TextNormalizer, BULLET};
pub use options::StructureOptions;
pub use segment::{DuplicatePolicy, SectionSegmenter};
pub use structurer::Structurer;

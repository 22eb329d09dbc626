//! Resume model types.
//!
//! These are the explicit records that flow through the structuring pipeline:
//! the raw input, the intermediate section and block types, and the final
//! serializable result.

mod resume;
mod section;

pub use resume::{
    ContactFields, ParsedResume, RawDocument, StructuringResult, DEFAULT_FONT_SIZE,
};
pub use section::{
    DetectedSection, EntryBlock, ParsedEntry, ParsedSection, SectionBoundary, SectionKind,
};

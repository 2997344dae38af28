//! Widget track lists published by the main app into the shared app group.
//!
//! Records arrive untyped; `decode_record` validates them one at a time and
//! `TrackReader` turns a whole list into `Track`s, skipping bad records.

mod decode;
mod model;
mod reader;
mod store;

pub use decode::{RecordOutcome, SkipReason, decode_record};
pub use model::{Artwork, SourceList, Track, UNKNOWN_ARTIST, UNKNOWN_TITLE};
pub use reader::TrackReader;
pub use store::{JsonFileStore, MemoryStore, SharedStore};

#[cfg(test)]
mod tests;

//! Widget timeline generation.
//!
//! The host asks for a batch of future entries plus the instant after which
//! it should ask again. Each entry independently picks a random track from
//! the configured source list, falling back to the other list.

mod entry;
mod provider;

pub use entry::{DisplayEntry, Timeline};
pub use provider::{EvaluationContext, TimelineProvider};

//! Portable core of the M2 song widget and sleep-timer live activity.
//!
//! The main app publishes two track lists into a shared app-group store and
//! reports sleep-timer progress; this crate decodes those lists into widget
//! timelines and mirrors the timer onto a single live countdown.

pub mod activity;
pub mod config;
pub mod deep_link;
pub mod error;
pub mod library;
pub mod timeline;

pub use activity::{
    ActivityAttributes, ActivityContent, ActivityId, ActivityPhase, CountdownCapability,
    SleepTimerSync,
};
pub use config::Settings;
pub use deep_link::DeepLink;
pub use error::{CountdownError, StoreError};
pub use library::{JsonFileStore, MemoryStore, SharedStore, SourceList, Track, TrackReader};
pub use timeline::{DisplayEntry, EvaluationContext, Timeline, TimelineProvider};

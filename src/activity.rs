//! Sleep-timer live activity.
//!
//! The main app reports the remaining sleep-timer time; `SleepTimerSync`
//! turns that into create/update/end calls against the host's countdown
//! capability, keeping at most one countdown alive per process.

mod capability;
mod sync;
mod types;

pub use capability::CountdownCapability;
pub use sync::{LiveCountdown, SleepTimerSync};
pub use types::{ActivityAttributes, ActivityContent, ActivityId, ActivityPhase};

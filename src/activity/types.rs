use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SleepTimerSettings;

/// Host-assigned identity of one countdown instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityId(pub String);

impl ActivityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActivityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static attributes fixed when a countdown is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityAttributes {
    pub timer_id: String,
}

impl ActivityAttributes {
    pub fn sleep_timer(settings: &SleepTimerSettings) -> Self {
        Self {
            timer_id: settings.timer_id.clone(),
        }
    }
}

/// Dynamic countdown state. `end_date` is always after `start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityContent {
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    pub title: String,
    pub subtitle: String,
}

impl ActivityContent {
    /// Countdown of `remaining` starting at `start`.
    ///
    /// Returns `None` unless `remaining` is positive and `start + remaining`
    /// is representable.
    pub fn new(
        start: DateTime<Utc>,
        remaining: TimeDelta,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> Option<Self> {
        if remaining <= TimeDelta::zero() {
            return None;
        }
        let end = start.checked_add_signed(remaining)?;
        Some(Self {
            start_date: start,
            end_date: end,
            title: title.into(),
            subtitle: subtitle.into(),
        })
    }

    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Time left at `now`, clamped at zero.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.end_date - now).max(TimeDelta::zero())
    }
}

/// Whether a countdown is currently live.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum ActivityPhase {
    #[default]
    Idle,
    Active,
}

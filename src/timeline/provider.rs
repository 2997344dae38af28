use chrono::{DateTime, Utc};
use rand::seq::IndexedRandom;

use crate::config::TimelineSettings;
use crate::library::{SharedStore, SourceList, Track, TrackReader};

use super::entry::{DisplayEntry, Timeline};

/// How the host is evaluating the widget.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct EvaluationContext {
    /// Widget gallery / preview rendering. Empty lists then show a stand-in
    /// track instead of the empty state.
    pub preview: bool,
}

impl EvaluationContext {
    pub fn preview() -> Self {
        Self { preview: true }
    }

    pub fn live() -> Self {
        Self { preview: false }
    }
}

/// Builds widget entries out of the shared track lists.
pub struct TimelineProvider<S> {
    reader: TrackReader<S>,
    settings: TimelineSettings,
}

impl<S: SharedStore> TimelineProvider<S> {
    pub fn new(reader: TrackReader<S>, settings: TimelineSettings) -> Self {
        Self { reader, settings }
    }

    pub fn reader(&self) -> &TrackReader<S> {
        &self.reader
    }

    /// Entry shown while the host has nothing else, before any data is read.
    pub fn placeholder(&self, now: DateTime<Utc>) -> DisplayEntry {
        DisplayEntry {
            date: now,
            source: SourceList::Lovely,
            track: Some(Track::new("placeholder", "Lovely Song", "M2")),
        }
    }

    /// Single entry for the current moment.
    pub fn snapshot(
        &self,
        source: SourceList,
        now: DateTime<Utc>,
        ctx: EvaluationContext,
    ) -> DisplayEntry {
        self.make_entry(now, source, ctx)
    }

    /// Entries every `entry_interval` starting at `now`, refreshed after
    /// `refresh_after`.
    pub fn timeline(
        &self,
        source: SourceList,
        now: DateTime<Utc>,
        ctx: EvaluationContext,
    ) -> Timeline {
        let interval = self.settings.entry_interval();
        let entries = (0..self.settings.entry_count)
            .map(|step| {
                let date = i32::try_from(step)
                    .ok()
                    .and_then(|step| interval.checked_mul(step))
                    .and_then(|offset| now.checked_add_signed(offset))
                    .unwrap_or(now);
                self.make_entry(date, source, ctx)
            })
            .collect();

        let refresh_at = now
            .checked_add_signed(self.settings.refresh_after())
            .unwrap_or(now);

        Timeline {
            entries,
            refresh_at,
        }
    }

    fn make_entry(
        &self,
        date: DateTime<Utc>,
        source: SourceList,
        ctx: EvaluationContext,
    ) -> DisplayEntry {
        let tracks = self.tracks_with_fallback(source);
        let track = match tracks.choose(&mut rand::rng()) {
            Some(track) => Some(track.clone()),
            None if ctx.preview => Some(Track::new("preview", "Song", "M2")),
            None => None,
        };

        DisplayEntry {
            date,
            source,
            track,
        }
    }

    /// Tracks of `source`, or of the other list when `source` is empty.
    fn tracks_with_fallback(&self, source: SourceList) -> Vec<Track> {
        let tracks = self.reader.load(source);
        if !tracks.is_empty() {
            return tracks;
        }
        tracing::debug!(%source, fallback = %source.other(), "source list empty, using fallback");
        self.reader.load(source.other())
    }
}

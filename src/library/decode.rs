use std::path::Path;

use serde_json::{Map, Value};

use super::model::{Track, UNKNOWN_ARTIST, UNKNOWN_TITLE};

const ID_KEY: &str = "id";
const TITLE_KEY: &str = "title";
const ARTIST_KEY: &str = "artist";
const ARTWORK_FILE_NAME_KEY: &str = "artworkFileName";
const ARTWORK_THUMB_KEY: &str = "artworkThumb";

/// Why a raw record did not produce a track.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The record is not a string-keyed map.
    NotARecord,
    /// `id` is absent or not text.
    MissingId,
    /// `id` is empty after trimming.
    BlankId,
}

/// Result of decoding one raw record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Valid(Track),
    Skip(SkipReason),
}

impl RecordOutcome {
    pub fn into_track(self) -> Option<Track> {
        match self {
            Self::Valid(track) => Some(track),
            Self::Skip(_) => None,
        }
    }
}

/// Decode one untyped record from a shared track list.
///
/// `artwork_root` is the container's artwork directory; `None` when the app
/// group container is unavailable, in which case no artwork path is produced.
pub fn decode_record(raw: &Value, artwork_root: Option<&Path>) -> RecordOutcome {
    let Some(record) = raw.as_object() else {
        return RecordOutcome::Skip(SkipReason::NotARecord);
    };

    let Some(raw_id) = record.get(ID_KEY).and_then(Value::as_str) else {
        return RecordOutcome::Skip(SkipReason::MissingId);
    };
    let id = raw_id.trim();
    if id.is_empty() {
        return RecordOutcome::Skip(SkipReason::BlankId);
    }

    let title = trimmed_text(record, TITLE_KEY).unwrap_or(UNKNOWN_TITLE);
    let artist = trimmed_text(record, ARTIST_KEY).unwrap_or(UNKNOWN_ARTIST);

    let artwork_path = trimmed_text(record, ARTWORK_FILE_NAME_KEY)
        .and_then(|name| artwork_root.map(|root| root.join(name)));
    let artwork_thumb = trimmed_text(record, ARTWORK_THUMB_KEY).map(str::to_string);

    RecordOutcome::Valid(Track {
        id: id.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
        artwork_path,
        artwork_thumb,
    })
}

/// Text field trimmed of surrounding whitespace; `None` when absent, not a
/// string, or blank.
fn trimmed_text<'a>(record: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

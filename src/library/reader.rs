use std::path::PathBuf;

use serde_json::Value;

use crate::config::SharedSettings;

use super::decode::{RecordOutcome, decode_record};
use super::model::{SourceList, Track};
use super::store::SharedStore;

/// Decodes the published track lists out of a `SharedStore`.
pub struct TrackReader<S> {
    store: S,
    lovely_key: String,
    random_key: String,
    artwork_root: Option<PathBuf>,
}

impl<S: SharedStore> TrackReader<S> {
    pub fn new(store: S, settings: &SharedSettings) -> Self {
        Self {
            store,
            lovely_key: settings.lovely_key.clone(),
            random_key: settings.random_key.clone(),
            artwork_root: settings
                .container_dir
                .as_ref()
                .map(|dir| dir.join(&settings.artwork_dir)),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store key holding `source`.
    pub fn key(&self, source: SourceList) -> &str {
        match source {
            SourceList::Lovely => &self.lovely_key,
            SourceList::Random => &self.random_key,
        }
    }

    /// Valid tracks of `source`, in stored order.
    ///
    /// Absent keys, non-list values and store failures all read as an empty
    /// list; invalid records are skipped individually.
    pub fn load(&self, source: SourceList) -> Vec<Track> {
        let key = self.key(source);
        let raw = match self.store.value(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(%source, key, error = %e, "failed to read shared track list");
                return Vec::new();
            }
        };

        let Value::Array(records) = raw else {
            tracing::debug!(%source, key, "shared track list is not an array");
            return Vec::new();
        };

        let artwork_root = self.artwork_root.as_deref();
        records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| match decode_record(record, artwork_root) {
                RecordOutcome::Valid(track) => Some(track),
                RecordOutcome::Skip(reason) => {
                    tracing::debug!(%source, index, ?reason, "skipping shared track record");
                    None
                }
            })
            .collect()
    }
}

use std::fmt;
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

pub const UNKNOWN_TITLE: &str = "Unknown Song";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// One of the two independently published selection pools.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceList {
    #[default]
    Lovely,
    Random,
}

impl SourceList {
    /// The list consulted when this one is empty.
    pub fn other(self) -> Self {
        match self {
            Self::Lovely => Self::Random,
            Self::Random => Self::Lovely,
        }
    }

    /// Label shown in the widget header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Lovely => "Lovely",
            Self::Random => "Random",
        }
    }
}

impl fmt::Display for SourceList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lovely => "lovely",
            Self::Random => "random",
        })
    }
}

/// A validated widget track. `id` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub artwork_path: Option<PathBuf>,
    pub artwork_thumb: Option<String>,
}

/// Where a track's artwork comes from.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Artwork<'a> {
    /// Image file in the shared container.
    File(&'a Path),
    /// Base64-encoded thumbnail carried inline in the record.
    Thumbnail(&'a str),
}

impl Track {
    /// Build a track with no artwork.
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            artwork_path: None,
            artwork_thumb: None,
        }
    }

    /// Artist line to render, or `None` when it carries no information.
    pub fn display_artist(&self) -> Option<&str> {
        let artist = self.artist.trim();
        if artist.is_empty() || artist.eq_ignore_ascii_case(UNKNOWN_ARTIST) {
            None
        } else {
            Some(artist)
        }
    }

    /// Preferred artwork source: the container file wins over the thumbnail.
    pub fn artwork(&self) -> Option<Artwork<'_>> {
        self.artwork_path
            .as_deref()
            .map(Artwork::File)
            .or_else(|| self.artwork_thumb.as_deref().map(Artwork::Thumbnail))
    }

    /// Load encoded image bytes for this track.
    ///
    /// Reads the container file when it exists, otherwise decodes the inline
    /// thumbnail. Returns `None` if neither yields any bytes.
    pub fn load_artwork(&self) -> Option<Vec<u8>> {
        if let Some(path) = self.artwork_path.as_deref() {
            match std::fs::read(path) {
                Ok(bytes) if !bytes.is_empty() => return Some(bytes),
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(
                        track = %self.id,
                        path = %path.display(),
                        error = %e,
                        "artwork file unreadable"
                    );
                }
            }
        }

        let thumb = self.artwork_thumb.as_deref()?;
        match STANDARD.decode(thumb) {
            Ok(bytes) if !bytes.is_empty() => Some(bytes),
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(
                    track = %self.id,
                    error = %e,
                    "artwork thumbnail is not valid base64"
                );
                None
            }
        }
    }
}

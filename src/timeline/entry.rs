use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::config::DeepLinkSettings;
use crate::deep_link::widget_url;
use crate::library::{SourceList, Track};

/// One display state handed to the rendering host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayEntry {
    pub date: DateTime<Utc>,
    pub source: SourceList,
    /// `None` renders the "open the app to prepare songs" state.
    pub track: Option<Track>,
}

impl DisplayEntry {
    /// URL opened when the widget showing this entry is tapped.
    pub fn deep_link(&self, settings: &DeepLinkSettings) -> Result<Url, url::ParseError> {
        widget_url(settings, self.track.as_ref())
    }
}

/// A batch of entries and the instant the host should refresh after.
#[derive(Debug, Clone, Serialize)]
pub struct Timeline {
    pub entries: Vec<DisplayEntry>,
    pub refresh_at: DateTime<Utc>,
}

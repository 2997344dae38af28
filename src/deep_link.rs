//! Deep links exchanged between the extensions and the main app.
//!
//! The song widget opens `m2://widget/play?trackID=<id>`; the sleep-timer
//! live activity opens `m2://sleep-timer`.

use url::Url;

use crate::config::DeepLinkSettings;
use crate::library::Track;

/// A deep link the main app knows how to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// Start playback, of `track_id` when given, otherwise of anything.
    PlayTrack { track_id: Option<String> },
    /// Show the sleep timer.
    SleepTimer,
}

impl DeepLink {
    /// Classify `url`; `None` when it is not one of our links.
    pub fn parse(settings: &DeepLinkSettings, url: &Url) -> Option<Self> {
        if !url.scheme().eq_ignore_ascii_case(&settings.scheme) {
            return None;
        }
        let host = url.host_str()?;

        if host.eq_ignore_ascii_case(&settings.sleep_timer_host) {
            return Some(Self::SleepTimer);
        }

        if host.eq_ignore_ascii_case(&settings.widget_host)
            && url.path().trim_end_matches('/') == settings.play_path.trim_end_matches('/')
        {
            let track_id = url
                .query_pairs()
                .find(|(name, _)| name == settings.track_id_query.as_str())
                .map(|(_, value)| value.trim().to_string())
                .filter(|id| !id.is_empty());
            return Some(Self::PlayTrack { track_id });
        }

        None
    }

    pub fn to_url(&self, settings: &DeepLinkSettings) -> Result<Url, url::ParseError> {
        match self {
            Self::PlayTrack { track_id } => play_url(settings, track_id.as_deref()),
            Self::SleepTimer => sleep_timer_url(settings),
        }
    }
}

/// Link for a widget showing `track`; carries the id only when there is one.
pub fn widget_url(
    settings: &DeepLinkSettings,
    track: Option<&Track>,
) -> Result<Url, url::ParseError> {
    play_url(settings, track.map(|t| t.id.as_str()))
}

/// Link attached to the sleep-timer countdown.
pub fn sleep_timer_url(settings: &DeepLinkSettings) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}://{}", settings.scheme, settings.sleep_timer_host))
}

fn play_url(settings: &DeepLinkSettings, track_id: Option<&str>) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("{}://{}", settings.scheme, settings.widget_host))?;
    url.set_path(&settings.play_path);

    if let Some(id) = track_id.filter(|id| !id.is_empty()) {
        url.query_pairs_mut().append_pair(&settings.track_id_query, id);
    }
    Ok(url)
}

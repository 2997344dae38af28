use std::path::PathBuf;

use chrono::TimeDelta;
use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/m2-widgets/config.toml`
/// or `~/.config/m2-widgets/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `M2__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shared: SharedSettings,
    pub timeline: TimelineSettings,
    pub deep_link: DeepLinkSettings,
    pub sleep_timer: SleepTimerSettings,
}

/// Where the main app publishes the widget track lists.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SharedSettings {
    /// Application group shared between the app and its extensions.
    pub app_group_id: String,
    /// Root of the app-group container. `None` means the group is not
    /// provisioned: lists read as empty and artwork never resolves.
    pub container_dir: Option<PathBuf>,
    /// JSON file (relative to `container_dir`) backing the shared preferences.
    pub preferences_file: String,
    /// Preferences key holding the "lovely" list.
    pub lovely_key: String,
    /// Preferences key holding the "random" list.
    pub random_key: String,
    /// Directory (relative to `container_dir`) holding artwork files.
    pub artwork_dir: String,
}

impl Default for SharedSettings {
    fn default() -> Self {
        Self {
            app_group_id: "group.ru.hippo.M2.shared".to_string(),
            container_dir: None,
            preferences_file: "shared_preferences.json".to_string(),
            lovely_key: "m2_widget_lovely_tracks_v1".to_string(),
            random_key: "m2_widget_random_tracks_v1".to_string(),
            artwork_dir: "m2_widget_artwork_v1".to_string(),
        }
    }
}

impl SharedSettings {
    /// Absolute path of the shared preferences file, if the container exists.
    pub fn preferences_path(&self) -> Option<PathBuf> {
        self.container_dir
            .as_ref()
            .map(|dir| dir.join(&self.preferences_file))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimelineSettings {
    /// Number of entries produced per timeline request.
    pub entry_count: usize,
    /// Spacing between consecutive entries (minutes).
    pub entry_interval_minutes: u32,
    /// How long the host should wait before asking for a new timeline (minutes).
    pub refresh_after_minutes: u32,
}

impl Default for TimelineSettings {
    fn default() -> Self {
        Self {
            entry_count: 8,
            entry_interval_minutes: 30,
            refresh_after_minutes: 30,
        }
    }
}

impl TimelineSettings {
    pub fn entry_interval(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.entry_interval_minutes))
    }

    pub fn refresh_after(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.refresh_after_minutes))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeepLinkSettings {
    pub scheme: String,
    /// Host of the "play this track" link emitted by the song widget.
    pub widget_host: String,
    pub play_path: String,
    /// Query parameter carrying the selected track id.
    pub track_id_query: String,
    /// Host of the link emitted by the sleep-timer live activity.
    pub sleep_timer_host: String,
}

impl Default for DeepLinkSettings {
    fn default() -> Self {
        Self {
            scheme: "m2".to_string(),
            widget_host: "widget".to_string(),
            play_path: "/play".to_string(),
            track_id_query: "trackID".to_string(),
            sleep_timer_host: "sleep-timer".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SleepTimerSettings {
    /// Static attribute attached to every sleep-timer countdown.
    pub timer_id: String,
}

impl Default for SleepTimerSettings {
    fn default() -> Self {
        Self {
            timer_id: "m2.sleep.timer".to_string(),
        }
    }
}

use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use url::Url;

use m2_widgets::config::Settings;
use m2_widgets::{
    DeepLink, DisplayEntry, EvaluationContext, JsonFileStore, SourceList, TimelineProvider,
    TrackReader,
};

mod settings;

/// Inspect the shared widget state the way the extensions see it.
#[derive(Debug, Parser)]
#[command(name = "m2-widgets", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the decoded tracks of a source list.
    Tracks {
        #[arg(value_enum)]
        source: SourceArg,
    },
    /// Print a full widget timeline.
    Timeline {
        #[arg(long, value_enum, default_value_t = SourceArg::Lovely)]
        source: SourceArg,
        /// Evaluate as a gallery preview.
        #[arg(long)]
        preview: bool,
    },
    /// Print a single widget entry for now.
    Snapshot {
        #[arg(long, value_enum, default_value_t = SourceArg::Lovely)]
        source: SourceArg,
        #[arg(long)]
        preview: bool,
    },
    /// Classify a deep link.
    Link { url: String },
    /// Replace a source list in the shared store with the JSON array in `file`.
    Publish {
        #[arg(value_enum)]
        source: SourceArg,
        file: PathBuf,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
enum SourceArg {
    Lovely,
    Random,
}

impl From<SourceArg> for SourceList {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Lovely => SourceList::Lovely,
            SourceArg::Random => SourceList::Random,
        }
    }
}

#[derive(Serialize)]
struct EntryView<'a> {
    #[serde(flatten)]
    entry: &'a DisplayEntry,
    link: Option<String>,
}

impl<'a> EntryView<'a> {
    fn new(entry: &'a DisplayEntry, settings: &Settings) -> Self {
        Self {
            entry,
            link: entry
                .deep_link(&settings.deep_link)
                .ok()
                .map(|url| url.to_string()),
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = settings::load_settings();

    let store = JsonFileStore::from_settings(&settings.shared);
    if store.path().is_none() {
        tracing::warn!(
            app_group = %settings.shared.app_group_id,
            "app-group container not configured; shared lists read as empty"
        );
    }

    match cli.command {
        Command::Tracks { source } => {
            let reader = TrackReader::new(store, &settings.shared);
            print_json(&reader.load(source.into()))?;
        }
        Command::Timeline { source, preview } => {
            let provider = provider(store, &settings);
            let timeline = provider.timeline(source.into(), Utc::now(), context(preview));
            let entries: Vec<EntryView<'_>> = timeline
                .entries
                .iter()
                .map(|e| EntryView::new(e, &settings))
                .collect();
            print_json(&serde_json::json!({
                "entries": entries,
                "refresh_at": timeline.refresh_at,
            }))?;
        }
        Command::Snapshot { source, preview } => {
            let provider = provider(store, &settings);
            let entry = provider.snapshot(source.into(), Utc::now(), context(preview));
            print_json(&EntryView::new(&entry, &settings))?;
        }
        Command::Link { url } => {
            let url = Url::parse(&url)?;
            match DeepLink::parse(&settings.deep_link, &url) {
                Some(DeepLink::PlayTrack { track_id }) => {
                    print_json(&serde_json::json!({ "play": { "track_id": track_id } }))?
                }
                Some(DeepLink::SleepTimer) => print_json(&serde_json::json!("sleep-timer"))?,
                None => return Err(format!("not an m2 deep link: {url}").into()),
            }
        }
        Command::Publish { source, file } => {
            let raw: serde_json::Value = serde_json::from_slice(&std::fs::read(&file)?)?;
            if !raw.is_array() {
                return Err(format!("{} does not contain a JSON array", file.display()).into());
            }
            let reader = TrackReader::new(store, &settings.shared);
            let key = reader.key(source.into()).to_string();
            reader.store().replace(&key, raw)?;
            tracing::info!(source = %SourceList::from(source), key, "published track list");
        }
    }

    Ok(())
}

fn provider(store: JsonFileStore, settings: &Settings) -> TimelineProvider<JsonFileStore> {
    TimelineProvider::new(
        TrackReader::new(store, &settings.shared),
        settings.timeline.clone(),
    )
}

fn context(preview: bool) -> EvaluationContext {
    if preview {
        EvaluationContext::preview()
    } else {
        EvaluationContext::live()
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

use super::*;
use crate::config::SharedSettings;
use serde_json::json;
use std::path::{Path, PathBuf};

fn settings_with_container(dir: &Path) -> SharedSettings {
    SharedSettings {
        container_dir: Some(dir.to_path_buf()),
        ..SharedSettings::default()
    }
}

#[test]
fn decode_trims_fields_and_resolves_artwork_file() {
    let root = PathBuf::from("/group/m2_widget_artwork_v1");
    let raw = json!({
        "id": "  42 ",
        "title": " Song ",
        "artist": "\tArtist\n",
        "artworkFileName": " cover.jpg ",
        "artworkThumb": " aGVsbG8= ",
    });

    let track = decode_record(&raw, Some(root.as_path())).into_track().unwrap();
    assert_eq!(track.id, "42");
    assert_eq!(track.title, "Song");
    assert_eq!(track.artist, "Artist");
    assert_eq!(track.artwork_path, Some(root.join("cover.jpg")));
    assert_eq!(track.artwork_thumb.as_deref(), Some("aGVsbG8="));
}

#[test]
fn decode_drops_missing_or_blank_ids() {
    assert_eq!(
        decode_record(&json!({"title": "x"}), None),
        RecordOutcome::Skip(SkipReason::MissingId)
    );
    assert_eq!(
        decode_record(&json!({"id": 7}), None),
        RecordOutcome::Skip(SkipReason::MissingId)
    );
    assert_eq!(
        decode_record(&json!({"id": "   "}), None),
        RecordOutcome::Skip(SkipReason::BlankId)
    );
    assert_eq!(
        decode_record(&json!("not a record"), None),
        RecordOutcome::Skip(SkipReason::NotARecord)
    );
}

#[test]
fn decode_substitutes_placeholders_for_blank_title_and_artist() {
    let track = decode_record(&json!({"id": "a", "title": "  ", "artist": 3}), None)
        .into_track()
        .unwrap();
    assert_eq!(track.title, UNKNOWN_TITLE);
    assert_eq!(track.artist, UNKNOWN_ARTIST);

    let track = decode_record(&json!({"id": "b"}), None).into_track().unwrap();
    assert_eq!(track.title, "Unknown Song");
    assert_eq!(track.artist, "Unknown Artist");
}

#[test]
fn decode_without_container_has_no_artwork_path() {
    let track = decode_record(&json!({"id": "a", "artworkFileName": "cover.jpg"}), None)
        .into_track()
        .unwrap();
    assert!(track.artwork_path.is_none());

    let track = decode_record(
        &json!({"id": "a", "artworkFileName": "  "}),
        Some(Path::new("/group")),
    )
    .into_track()
    .unwrap();
    assert!(track.artwork_path.is_none());
}

#[test]
fn reader_skips_bad_records_without_affecting_siblings() {
    let store = MemoryStore::new();
    let settings = SharedSettings::default();
    store.insert(
        settings.lovely_key.clone(),
        json!([
            {"id": "one", "title": "First"},
            {"id": ""},
            {"title": "no id"},
            42,
            {"id": " two ", "artist": "Someone"},
        ]),
    );

    let reader = TrackReader::new(&store, &settings);
    let tracks = reader.load(SourceList::Lovely);
    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["one", "two"]);
    assert_eq!(tracks[1].artist, "Someone");
    assert!(reader.load(SourceList::Random).is_empty());
}

#[test]
fn reader_treats_non_list_values_as_empty() {
    let store = MemoryStore::new();
    let settings = SharedSettings::default();
    store.insert(settings.random_key.clone(), json!({"id": "x"}));

    let reader = TrackReader::new(&store, &settings);
    assert!(reader.load(SourceList::Random).is_empty());
}

#[test]
fn file_store_reads_latest_replacement() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_with_container(dir.path());
    let store = JsonFileStore::from_settings(&settings);

    store
        .replace(&settings.lovely_key, json!([{"id": "old"}]))
        .unwrap();
    store
        .replace(&settings.random_key, json!([{"id": "r"}]))
        .unwrap();
    store
        .replace(
            &settings.lovely_key,
            json!([{"id": "new", "artworkFileName": "new.png"}]),
        )
        .unwrap();

    let reader = TrackReader::new(store, &settings);
    let lovely = reader.load(SourceList::Lovely);
    assert_eq!(lovely.len(), 1);
    assert_eq!(lovely[0].id, "new");
    assert_eq!(
        lovely[0].artwork_path,
        Some(dir.path().join("m2_widget_artwork_v1").join("new.png"))
    );
    assert_eq!(reader.load(SourceList::Random)[0].id, "r");
}

#[test]
fn file_store_without_container_reads_empty() {
    let settings = SharedSettings::default();
    let store = JsonFileStore::from_settings(&settings);
    assert!(store.path().is_none());
    assert!(store.value(&settings.lovely_key).unwrap().is_none());
    assert!(matches!(
        store.replace(&settings.lovely_key, json!([])),
        Err(crate::error::StoreError::NoContainer)
    ));

    let reader = TrackReader::new(store, &settings);
    assert!(reader.load(SourceList::Lovely).is_empty());
}

#[test]
fn file_store_corrupt_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_with_container(dir.path());
    std::fs::write(dir.path().join(&settings.preferences_file), b"{not json").unwrap();

    let store = JsonFileStore::from_settings(&settings);
    assert!(store.value(&settings.lovely_key).is_err());

    let reader = TrackReader::new(store, &settings);
    assert!(reader.load(SourceList::Lovely).is_empty());
}

#[test]
fn source_list_falls_back_to_the_other_list() {
    assert_eq!(SourceList::Lovely.other(), SourceList::Random);
    assert_eq!(SourceList::Random.other(), SourceList::Lovely);
    assert_eq!(SourceList::default(), SourceList::Lovely);
    assert_eq!(SourceList::Random.title(), "Random");
    assert_eq!(SourceList::Lovely.to_string(), "lovely");
}

#[test]
fn display_artist_hides_placeholder() {
    assert_eq!(Track::new("a", "t", "Someone").display_artist(), Some("Someone"));
    assert_eq!(Track::new("a", "t", "unknown artist").display_artist(), None);
    assert_eq!(Track::new("a", "t", "  ").display_artist(), None);
}

#[test]
fn artwork_prefers_file_and_falls_back_to_thumbnail() {
    let dir = tempfile::tempdir().unwrap();
    let cover = dir.path().join("cover.png");
    std::fs::write(&cover, b"png-bytes").unwrap();

    let mut track = Track::new("a", "t", "x");
    track.artwork_thumb = Some("aGVsbG8=".to_string());
    assert_eq!(track.artwork(), Some(Artwork::Thumbnail("aGVsbG8=")));
    assert_eq!(track.load_artwork(), Some(b"hello".to_vec()));

    track.artwork_path = Some(cover.clone());
    assert_eq!(track.artwork(), Some(Artwork::File(cover.as_path())));
    assert_eq!(track.load_artwork(), Some(b"png-bytes".to_vec()));

    // Missing file falls through to the thumbnail.
    track.artwork_path = Some(dir.path().join("gone.png"));
    assert_eq!(track.load_artwork(), Some(b"hello".to_vec()));

    track.artwork_thumb = Some("%%%".to_string());
    assert_eq!(track.load_artwork(), None);
}

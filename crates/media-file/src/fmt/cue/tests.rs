// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tagmerge_core::Status;

use super::*;

fn sheet() -> CueSheet {
    CueSheet {
        album: vec![
            CueCommand::new("PERFORMER", "Various Artists"),
            CueCommand::new("TITLE", "Compilation"),
            CueCommand::new("REM DATE", "1999"),
            CueCommand::new("CATALOG", "1234567890123"),
        ],
        tracks: vec![
            vec![
                CueCommand::new("performer", "First Artist"),
                CueCommand::new("TITLE", "First Title"),
                CueCommand::new("ISRC", "USABC9900001"),
            ],
            vec![
                CueCommand::new("PERFORMER", "Second Artist"),
                CueCommand::new("ISRC", "not an isrc"),
            ],
        ],
    }
}

fn extract(config: &ExtractConfig, track_index: Option<usize>) -> (Vec<Metadata>, Vec<String>) {
    let mut importer = Importer::new();
    let metadata = extract_metadata(
        &mut importer,
        config,
        &SourceId::new("cue"),
        &sheet(),
        track_index,
    );
    (metadata, importer.finish().into_messages())
}

fn find<'a>(metadata: &'a [Metadata], key: &str) -> Option<&'a Metadata> {
    metadata.iter().find(|metadata| metadata.key().as_str() == key)
}

#[test]
fn performer_depends_on_scope() {
    let (metadata, issues) = extract(&ExtractConfig::default(), Some(0));
    assert!(issues.is_empty());
    assert_eq!(
        vec!["Various Artists"],
        find(&metadata, "ALBUM_ARTIST").unwrap().valid_values()
    );
    assert_eq!(
        vec!["First Artist"],
        find(&metadata, "ARTIST").unwrap().valid_values()
    );
    assert_eq!(vec!["Compilation"], find(&metadata, "ALBUM").unwrap().valid_values());
    assert_eq!(vec!["First Title"], find(&metadata, "TITLE").unwrap().valid_values());
}

#[test]
fn album_commands_only_without_track() {
    let (metadata, _) = extract(&ExtractConfig::default(), None);
    assert!(find(&metadata, "ARTIST").is_none());
    assert!(find(&metadata, "ALBUM_ARTIST").is_some());
}

#[test]
fn out_of_range_track_is_ignored() {
    let (with_track, _) = extract(&ExtractConfig::default(), Some(7));
    let (without_track, _) = extract(&ExtractConfig::default(), None);
    assert_eq!(without_track, with_track);
}

#[test]
fn origin_key_contains_command_and_scope() {
    let (metadata, _) = extract(&ExtractConfig::default(), Some(0));
    let artist = find(&metadata, "ARTIST").unwrap();
    let origin_key = artist.origins()[0].key();
    assert_eq!("cue", origin_key.source_id.as_str());
    assert_eq!("PERFORMER", origin_key.field_id.as_str());
    assert_eq!(Some("track"), origin_key.sub_id.as_deref());
}

#[test]
fn invalid_isrc_is_reported() {
    let (metadata, issues) = extract(&ExtractConfig::default(), Some(1));
    let isrc = find(&metadata, "ISRC").unwrap();
    assert_eq!(Status::Invalid, isrc.status());
    assert_eq!(vec!["not an isrc"], isrc.invalid_values());
    assert_eq!(1, issues.len());
}

#[test]
fn values_are_not_validated_without_flag() {
    let config = ExtractConfig {
        flags: ExtractFlags::all() - ExtractFlags::VALIDATE_CUE_VALUES,
    };
    let (metadata, issues) = extract(&config, Some(1));
    assert_eq!(Status::Valid, find(&metadata, "ISRC").unwrap().status());
    assert!(issues.is_empty());
}

#[test]
fn unknown_commands_become_ad_hoc() {
    let (metadata, _) = extract(&ExtractConfig::default(), None);
    let date = find(&metadata, "REM DATE").unwrap();
    assert!(date.key().is_ad_hoc());
    assert_eq!(Status::Discarded, date.status());

    let config = ExtractConfig {
        flags: ExtractFlags::empty(),
    };
    let (metadata, _) = extract(&config, None);
    assert!(find(&metadata, "REM DATE").is_none());
}

#[test]
fn aliases_of_same_key_are_merged() {
    let sheet = CueSheet {
        album: vec![
            CueCommand::new("CATALOG", "1234567890123"),
            CueCommand::new("CATALOGUE", "1234567890123"),
            CueCommand::new("CATALOG", "9876543210987"),
        ],
        tracks: Vec::new(),
    };
    let metadata = extract_metadata(
        &mut Importer::new(),
        &ExtractConfig::default(),
        &SourceId::new("cue"),
        &sheet,
        None,
    );
    assert_eq!(1, metadata.len());
    let catalog_no = &metadata[0];
    assert_eq!(2, catalog_no.origins().len());
    assert_eq!(vec!["1234567890123", "9876543210987"], catalog_no.valid_values());
}

#[test]
fn empty_values_are_skipped() {
    let sheet = CueSheet {
        album: vec![CueCommand::new("TITLE", " \0")],
        tracks: Vec::new(),
    };
    let metadata = extract_metadata(
        &mut Importer::new(),
        &ExtractConfig::default(),
        &SourceId::new("cue"),
        &sheet,
        None,
    );
    assert!(metadata.is_empty());
}

#[test]
fn validate_value_shapes() {
    let valid = |key, value| CueValue { key, value }.validate().is_ok();
    assert!(valid(FieldKey::Isrc, "USABC9900001"));
    assert!(!valid(FieldKey::Isrc, "USABC990000"));
    assert!(valid(FieldKey::CatalogNo, "1234567890123"));
    assert!(!valid(FieldKey::CatalogNo, "123456789012A"));
    assert!(valid(FieldKey::DiscNo, "2"));
    assert!(!valid(FieldKey::DiscTotal, "two"));
    assert!(valid(FieldKey::Year, "1999-05-01"));
    assert!(!valid(FieldKey::Year, "99"));
    assert!(valid(FieldKey::Title, "anything"));
}

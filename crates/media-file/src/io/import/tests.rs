// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use crate::fmt::cue::CueCommand;

use super::*;

#[test]
fn default_flags_enable_everything() {
    assert_eq!(ExtractFlags::all(), ExtractFlags::default());
    assert!(ExtractFlags::default().is_valid());
    assert!(ExtractFlags::empty().is_valid());
    assert!(!ExtractFlags::from_bits_retain(0b1000_0000).is_valid());
}

#[test]
fn importer_collects_issues() {
    let mut importer = Importer::new();
    importer.add_issue("first");
    importer.add_issue(String::from("second"));
    let issues = importer.finish();
    assert_eq!(2, issues.len());
    assert_eq!(["first", "second"], issues.messages());
}

#[test]
fn out_of_range_track_index_is_an_error() {
    let source_id = SourceId::new("cue");
    let sheet = CueSheet {
        album: vec![CueCommand::new("TITLE", "Album")],
        tracks: vec![vec![CueCommand::new("TITLE", "Track")]],
    };
    let source = Source::CueSheet {
        source_id: &source_id,
        sheet: &sheet,
        track_index: Some(1),
    };
    assert!(matches!(
        import_metadata(&ExtractConfig::default(), [source]),
        Err(Error::Other(_))
    ));
}

#[test]
fn import_without_sources() {
    let imported = import_metadata(&ExtractConfig::default(), []).unwrap();
    assert!(imported.metadata.is_empty());
    assert!(imported.issues.is_empty());
}

#[test]
fn source_id_of_source() {
    let source_id = SourceId::new("file");
    let source = Source::Id3v2 {
        source_id: &source_id,
        version: Id3v2Version::V24,
        fields: &[],
    };
    assert_eq!(&source_id, source.source_id());
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tagmerge_core::{SourceId, Status};
use tagmerge_media_file::{
    fmt::{
        cue::{CueCommand, CueSheet},
        id3v2::{Id3v2Field, Id3v2Version},
    },
    io::import::{ExtractConfig, Source, import_metadata},
};

fn cue_sheet() -> CueSheet {
    CueSheet {
        album: vec![
            CueCommand::new("PERFORMER", "Album Artist"),
            CueCommand::new("TITLE", "Album"),
            CueCommand::new("REM GENRE", "Electronic"),
        ],
        tracks: vec![vec![
            CueCommand::new("PERFORMER", "Track Artist"),
            CueCommand::new("TITLE", "Track Title"),
            CueCommand::new("ISRC", "DEAB12345678"),
        ]],
    }
}

#[test]
fn merge_file_tag_and_cue_sheet() {
    let file_id = SourceId::new("file:id3v2.3");
    let cue_id = SourceId::new("cue");
    let fields = [
        Id3v2Field::text("TIT2", "Track Title"),
        Id3v2Field::text("TPE1", "Other Artist"),
        Id3v2Field::text("TSRC", "DE-AB1-23-45678"),
    ];
    let sheet = cue_sheet();
    let sources = [
        Source::Id3v2 {
            source_id: &file_id,
            version: Id3v2Version::V23,
            fields: &fields,
        },
        Source::CueSheet {
            source_id: &cue_id,
            sheet: &sheet,
            track_index: Some(0),
        },
    ];
    let imported = import_metadata(&ExtractConfig::default(), sources).unwrap();
    let metadata = &imported.metadata;

    // Agreeing sources are collapsed into a single value
    let title = metadata.get("TITLE").unwrap();
    assert_eq!(2, title.origins().len());
    assert_eq!(vec!["Track Title"], title.valid_values());

    // Disagreeing sources are preserved in order
    let artist = metadata.get("ARTIST").unwrap();
    assert_eq!("Other Artist; Track Artist", artist.value());
    assert_eq!(&file_id, artist.origins()[0].source_id());
    assert_eq!(&cue_id, artist.origins()[1].source_id());

    // The file tag is not validated
    let isrc = metadata.get("ISRC").unwrap();
    assert_eq!(Status::Valid, isrc.status());
    assert_eq!(vec!["DE-AB1-23-45678", "DEAB12345678"], isrc.valid_values());

    assert_eq!("Album Artist", metadata.get("ALBUM_ARTIST").unwrap().value());
    assert_eq!("Album", metadata.get("ALBUM").unwrap().value());
    assert_eq!(
        Status::Discarded,
        metadata.get("REM GENRE").unwrap().status()
    );
    assert!(imported.issues.is_empty());
}

#[test]
fn importing_the_same_source_twice_is_idempotent() {
    let cue_id = SourceId::new("cue");
    let sheet = cue_sheet();
    let source = Source::CueSheet {
        source_id: &cue_id,
        sheet: &sheet,
        track_index: Some(0),
    };
    let once = import_metadata(&ExtractConfig::default(), [source]).unwrap();
    let twice = import_metadata(&ExtractConfig::default(), [source, source]).unwrap();
    assert_eq!(once.metadata.len(), twice.metadata.len());
    for metadata in once.metadata.iter() {
        let other = twice.metadata.get(metadata.key().as_str()).unwrap();
        assert_eq!(metadata, other);
    }
}

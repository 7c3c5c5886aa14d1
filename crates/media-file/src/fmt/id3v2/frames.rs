// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use tagmerge_core::FieldKey;

use super::Id3v2Version;

/// Identifies the frames that store the values of a [`FieldKey`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameKey {
    pub frame_id: &'static str,

    /// Description, owner, or role that selects among multiple
    /// frames with the same identifier.
    pub sub_id: Option<&'static str>,
}

const fn frame(frame_id: &'static str) -> Option<FrameKey> {
    Some(FrameKey {
        frame_id,
        sub_id: None,
    })
}

const fn described(frame_id: &'static str, sub_id: &'static str) -> Option<FrameKey> {
    Some(FrameKey {
        frame_id,
        sub_id: Some(sub_id),
    })
}

const MUSICBRAINZ_UFID_OWNER: &str = "http://musicbrainz.org";

/// Frames per revision: ID3v2.2, ID3v2.3, ID3v2.4
const fn frames_of(key: FieldKey) -> [Option<FrameKey>; 3] {
    use FieldKey::*;
    match key {
        Album => [frame("TAL"), frame("TALB"), frame("TALB")],
        AlbumArtist => [frame("TP2"), frame("TPE2"), frame("TPE2")],
        AlbumArtistSort => [frame("TS2"), frame("TSO2"), frame("TSO2")],
        AlbumSort => [frame("TSA"), frame("TSOA"), frame("TSOA")],
        AcoustidId => [
            described("TXX", "Acoustid Id"),
            described("TXXX", "Acoustid Id"),
            described("TXXX", "Acoustid Id"),
        ],
        Arranger => [
            described("IPL", "arranger"),
            described("IPLS", "arranger"),
            described("TIPL", "arranger"),
        ],
        Artist => [frame("TP1"), frame("TPE1"), frame("TPE1")],
        ArtistSort => [frame("TSP"), frame("TSOP"), frame("TSOP")],
        Barcode => [
            described("TXX", "BARCODE"),
            described("TXXX", "BARCODE"),
            described("TXXX", "BARCODE"),
        ],
        Bpm => [frame("TBP"), frame("TBPM"), frame("TBPM")],
        CatalogNo => [
            described("TXX", "CATALOGNUMBER"),
            described("TXXX", "CATALOGNUMBER"),
            described("TXXX", "CATALOGNUMBER"),
        ],
        // Only found in cue sheets
        CdTextFile => [None, None, None],
        Comment => [
            described("COM", ""),
            described("COMM", ""),
            described("COMM", ""),
        ],
        Composer => [frame("TCM"), frame("TCOM"), frame("TCOM")],
        ComposerSort => [frame("TSC"), frame("TSOC"), frame("TSOC")],
        Conductor => [frame("TP3"), frame("TPE3"), frame("TPE3")],
        DiscNo | DiscTotal => [frame("TPA"), frame("TPOS"), frame("TPOS")],
        DiscSubtitle => [None, None, frame("TSST")],
        DjMixer => [
            described("IPL", "DJ-mix"),
            described("IPLS", "DJ-mix"),
            described("TIPL", "DJ-mix"),
        ],
        Encoder => [frame("TEN"), frame("TENC"), frame("TENC")],
        Engineer => [
            described("IPL", "engineer"),
            described("IPLS", "engineer"),
            described("TIPL", "engineer"),
        ],
        Genre => [frame("TCO"), frame("TCON"), frame("TCON")],
        Grouping => [frame("TT1"), frame("TIT1"), frame("TIT1")],
        Isrc => [frame("TRC"), frame("TSRC"), frame("TSRC")],
        Key => [frame("TKE"), frame("TKEY"), frame("TKEY")],
        Language => [frame("TLA"), frame("TLAN"), frame("TLAN")],
        Lyricist => [frame("TXT"), frame("TEXT"), frame("TEXT")],
        Lyrics => [frame("ULT"), frame("USLT"), frame("USLT")],
        Media => [frame("TMT"), frame("TMED"), frame("TMED")],
        Mixer => [
            described("IPL", "mix"),
            described("IPLS", "mix"),
            described("TIPL", "mix"),
        ],
        Mood => [
            described("TXX", "MOOD"),
            described("TXXX", "MOOD"),
            frame("TMOO"),
        ],
        MusicbrainzArtistId => [
            described("TXX", "MusicBrainz Artist Id"),
            described("TXXX", "MusicBrainz Artist Id"),
            described("TXXX", "MusicBrainz Artist Id"),
        ],
        MusicbrainzReleaseId => [
            described("TXX", "MusicBrainz Album Id"),
            described("TXXX", "MusicBrainz Album Id"),
            described("TXXX", "MusicBrainz Album Id"),
        ],
        MusicbrainzTrackId => [
            described("UFI", MUSICBRAINZ_UFID_OWNER),
            described("UFID", MUSICBRAINZ_UFID_OWNER),
            described("UFID", MUSICBRAINZ_UFID_OWNER),
        ],
        OriginalYear => [frame("TOR"), frame("TORY"), frame("TDOR")],
        Producer => [
            described("IPL", "producer"),
            described("IPLS", "producer"),
            described("TIPL", "producer"),
        ],
        RecordLabel => [frame("TPB"), frame("TPUB"), frame("TPUB")],
        Title => [frame("TT2"), frame("TIT2"), frame("TIT2")],
        TitleSort => [frame("TST"), frame("TSOT"), frame("TSOT")],
        Track | TrackTotal => [frame("TRK"), frame("TRCK"), frame("TRCK")],
        UrlDiscogsReleaseSite => [
            described("WXX", "DISCOGS_RELEASE"),
            described("WXXX", "DISCOGS_RELEASE"),
            described("WXXX", "DISCOGS_RELEASE"),
        ],
        UrlOfficialArtistSite => [frame("WAR"), frame("WOAR"), frame("WOAR")],
        Year => [frame("TYE"), frame("TYER"), frame("TDRC")],
    }
}

/// Resolve the frame of a key in a particular revision.
///
/// Returns `None` if the revision has no mapping for this key.
#[must_use]
pub const fn frame_key(version: Id3v2Version, key: FieldKey) -> Option<FrameKey> {
    let frames = frames_of(key);
    match version {
        Id3v2Version::V22 => frames[0],
        Id3v2Version::V23 => frames[1],
        Id3v2Version::V24 => frames[2],
    }
}

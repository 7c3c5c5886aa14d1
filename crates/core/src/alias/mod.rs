// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Alternate spellings of metadata keys.
//!
//! Cue sheets and tagging tools use many different names for the same
//! piece of information. The same spelling may refer to different keys
//! depending on where it occurs, e.g. `PERFORMER` denotes the album artist
//! in the header of a cue sheet but the track artist within a `TRACK`
//! section.

use std::sync::LazyLock;

use hashbrown::HashMap;

use crate::key::{CanonicalKey, FieldKey};

/// Where in the source hierarchy a field was found.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Scope {
    Album,
    Track,
}

const ALBUM_ALIASES: &[(&str, FieldKey)] = &[
    ("CATALOG_NO", FieldKey::CatalogNo),
    ("CATALOG", FieldKey::CatalogNo),
    ("CATALOGUE", FieldKey::CatalogNo),
    ("ALBUM_ARTIST", FieldKey::AlbumArtist),
    ("ARTIST", FieldKey::AlbumArtist),
    ("ALBUMARTIST", FieldKey::AlbumArtist),
    ("PERFORMER", FieldKey::AlbumArtist),
    ("ALBUMPERFORMER", FieldKey::AlbumArtist),
    ("ALBUM_PERFORMER", FieldKey::AlbumArtist),
    ("COMPOSER", FieldKey::Composer),
    ("SONGWRITER", FieldKey::Composer),
    ("SONG_WRITER", FieldKey::Composer),
    ("ALBUMSONGWRITER", FieldKey::Composer),
    ("ALBUM_SONGWRITER", FieldKey::Composer),
    ("ALBUM_SONG_WRITER", FieldKey::Composer),
    ("ALBUM", FieldKey::Album),
    ("TITLE", FieldKey::Album),
    ("ALBUMTITLE", FieldKey::Album),
    ("ALBUM_TITLE", FieldKey::Album),
    ("CDTEXTFILE", FieldKey::CdTextFile),
    ("YEAR", FieldKey::Year),
    ("ALBUMYEAR", FieldKey::Year),
    ("ALBUM_YEAR", FieldKey::Year),
    ("DATE", FieldKey::Year),
    ("ALBUMDATE", FieldKey::Year),
    ("ALBUM_DATE", FieldKey::Year),
    ("GENRE", FieldKey::Genre),
    ("ALBUMGENRE", FieldKey::Genre),
    ("ALBUM_GENRE", FieldKey::Genre),
    ("LYRICS", FieldKey::Lyrics),
    ("ALBUMLYRICS", FieldKey::Lyrics),
    ("ALBUM_LYRICS", FieldKey::Lyrics),
    ("COMMENT", FieldKey::Comment),
    ("ALBUMCOMMENT", FieldKey::Comment),
    ("ALBUM_COMMENT", FieldKey::Comment),
    ("DISC_NO", FieldKey::DiscNo),
    ("DISC", FieldKey::DiscNo),
    ("DISC#", FieldKey::DiscNo),
    ("DISCNO", FieldKey::DiscNo),
    ("DISCNUMBER", FieldKey::DiscNo),
    ("DISC_NUMBER", FieldKey::DiscNo),
    ("DISC_TOTAL", FieldKey::DiscTotal),
    ("DISCTOTAL", FieldKey::DiscTotal),
    ("TOTALDISC", FieldKey::DiscTotal),
    ("TOTAL_DISC", FieldKey::DiscTotal),
    ("DISCC", FieldKey::DiscTotal),
];

const TRACK_ALIASES: &[(&str, FieldKey)] = &[
    ("ISRC", FieldKey::Isrc),
    ("ISRCCODE", FieldKey::Isrc),
    ("ISRC_CODE", FieldKey::Isrc),
    ("ARTIST", FieldKey::Artist),
    ("PERFORMER", FieldKey::Artist),
    ("TRACKPERFORMER", FieldKey::Artist),
    ("TRACK_PERFORMER", FieldKey::Artist),
    ("COMPOSER", FieldKey::Composer),
    ("SONGWRITER", FieldKey::Composer),
    ("SONG_WRITER", FieldKey::Composer),
    ("TRACKSONGWRITER", FieldKey::Composer),
    ("TRACK_SONGWRITER", FieldKey::Composer),
    ("TRACK_SONG_WRITER", FieldKey::Composer),
    ("TITLE", FieldKey::Title),
    ("TRACKTITLE", FieldKey::Title),
    ("TRACK_TITLE", FieldKey::Title),
    ("YEAR", FieldKey::Year),
    ("DATE", FieldKey::Year),
    ("TRACKYEAR", FieldKey::Year),
    ("TRACK_YEAR", FieldKey::Year),
    ("TRACKDATE", FieldKey::Year),
    ("TRACK_DATE", FieldKey::Year),
    ("GENRE", FieldKey::Genre),
    ("TRACKGENRE", FieldKey::Genre),
    ("TRACK_GENRE", FieldKey::Genre),
    ("LYRICS", FieldKey::Lyrics),
    ("TRACKLYRICS", FieldKey::Lyrics),
    ("TRACK_LYRICS", FieldKey::Lyrics),
    ("COMMENT", FieldKey::Comment),
    ("TRACKCOMMENT", FieldKey::Comment),
    ("TRACK_COMMENT", FieldKey::Comment),
    ("DISC_NO", FieldKey::DiscNo),
    ("DISC", FieldKey::DiscNo),
    ("DISC#", FieldKey::DiscNo),
    ("DISCNO", FieldKey::DiscNo),
    ("DISCNUMBER", FieldKey::DiscNo),
    ("DISC_NUMBER", FieldKey::DiscNo),
    ("DISC_TOTAL", FieldKey::DiscTotal),
    ("DISCTOTAL", FieldKey::DiscTotal),
    ("TOTALDISC", FieldKey::DiscTotal),
    ("TOTAL_DISC", FieldKey::DiscTotal),
    ("DISCC", FieldKey::DiscTotal),
];

static ALBUM_TABLE: LazyLock<HashMap<&'static str, FieldKey>> =
    LazyLock::new(|| ALBUM_ALIASES.iter().copied().collect());

static TRACK_TABLE: LazyLock<HashMap<&'static str, FieldKey>> =
    LazyLock::new(|| TRACK_ALIASES.iter().copied().collect());

impl Scope {
    fn table(self) -> &'static HashMap<&'static str, FieldKey> {
        match self {
            Self::Album => &ALBUM_TABLE,
            Self::Track => &TRACK_TABLE,
        }
    }
}

/// Resolve a spelling onto its canonical key.
///
/// The spelling must already be upper-case, no further normalization is
/// applied. `None` is not an error, the caller is supposed to keep the field
/// under an ad-hoc key.
#[must_use]
pub fn lookup(scope: Scope, spelling: &str) -> Option<CanonicalKey> {
    scope.table().get(spelling).copied().map(CanonicalKey::Known)
}

/// All registered spellings of a scope, in registration order.
pub fn entries(scope: Scope) -> impl Iterator<Item = (&'static str, FieldKey)> {
    let aliases = match scope {
        Scope::Album => ALBUM_ALIASES,
        Scope::Track => TRACK_ALIASES,
    };
    aliases.iter().copied()
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::{
    borrow::Borrow,
    fmt,
    hash::{Hash, Hasher},
    str::FromStr as _,
};

use semval::prelude::*;
use smol_str::SmolStr;

///////////////////////////////////////////////////////////////////////
// FieldKey
///////////////////////////////////////////////////////////////////////

/// The closed vocabulary of format-independent metadata keys.
///
/// The string representation is the upper-case name, e.g. `ALBUM_ARTIST`.
/// Iteration follows the declaration order.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldKey {
    Album,
    AlbumArtist,
    AlbumArtistSort,
    AlbumSort,
    AcoustidId,
    Arranger,
    Artist,
    ArtistSort,
    Barcode,
    Bpm,
    CatalogNo,
    #[strum(serialize = "CDTEXTFILE")]
    CdTextFile,
    Comment,
    Composer,
    ComposerSort,
    Conductor,
    DiscNo,
    DiscSubtitle,
    DiscTotal,
    #[strum(serialize = "DJMIXER")]
    DjMixer,
    Encoder,
    Engineer,
    Genre,
    Grouping,
    Isrc,
    Key,
    Language,
    Lyricist,
    Lyrics,
    Media,
    Mixer,
    Mood,
    MusicbrainzArtistId,
    MusicbrainzReleaseId,
    MusicbrainzTrackId,
    OriginalYear,
    Producer,
    RecordLabel,
    Title,
    TitleSort,
    Track,
    TrackTotal,
    UrlDiscogsReleaseSite,
    UrlOfficialArtistSite,
    Year,
}

/// Which part of a composite `number/total` value a key refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NumberTotalPart {
    Number,
    Total,
}

impl FieldKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn number_total_part(self) -> Option<NumberTotalPart> {
        match self {
            Self::Track | Self::DiscNo => Some(NumberTotalPart::Number),
            Self::TrackTotal | Self::DiscTotal => Some(NumberTotalPart::Total),
            _ => None,
        }
    }
}

///////////////////////////////////////////////////////////////////////
// CanonicalKey
///////////////////////////////////////////////////////////////////////

/// Key for fields that could not be identified at all.
pub const PLACEHOLDER_KEY: &str = "[?]";

/// The merge key of [`crate::Metadata`].
///
/// Either one of the well-known [`FieldKey`]s or an ad-hoc key for fields
/// that are not covered by the vocabulary. Two keys are equal if and only
/// if their string representations are equal.
#[derive(Clone, Debug)]
pub enum CanonicalKey {
    Known(FieldKey),
    AdHoc(SmolStr),
}

impl CanonicalKey {
    /// Create a key from an arbitrary spelling.
    ///
    /// The spelling is upper-cased. Spellings that match the name of a
    /// [`FieldKey`] are mapped onto the known key.
    #[must_use]
    pub fn new(spelling: impl AsRef<str>) -> Self {
        let upper = spelling.as_ref().to_uppercase();
        match FieldKey::from_str(&upper) {
            Ok(known) => Self::Known(known),
            Err(_) => Self::AdHoc(upper.into()),
        }
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self::AdHoc(SmolStr::new_static(PLACEHOLDER_KEY))
    }

    /// Synthetic key for a field that only has an identifier, e.g. `[TIT3]`.
    #[must_use]
    pub fn bracketed(field_id: impl AsRef<str>) -> Self {
        let field_id = field_id.as_ref().trim();
        if field_id.is_empty() {
            return Self::placeholder();
        }
        Self::AdHoc(format!("[{}]", field_id.to_uppercase()).into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(known) => known.as_str(),
            Self::AdHoc(inner) => inner,
        }
    }

    #[must_use]
    pub const fn known(&self) -> Option<FieldKey> {
        match self {
            Self::Known(known) => Some(*known),
            Self::AdHoc(_) => None,
        }
    }

    #[must_use]
    pub const fn is_ad_hoc(&self) -> bool {
        matches!(self, Self::AdHoc(_))
    }
}

impl From<FieldKey> for CanonicalKey {
    fn from(from: FieldKey) -> Self {
        Self::Known(from)
    }
}

impl From<&str> for CanonicalKey {
    fn from(from: &str) -> Self {
        Self::new(from)
    }
}

impl From<String> for CanonicalKey {
    fn from(from: String) -> Self {
        Self::new(from)
    }
}

impl PartialEq for CanonicalKey {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for CanonicalKey {}

impl PartialEq<FieldKey> for CanonicalKey {
    fn eq(&self, other: &FieldKey) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Hash for CanonicalKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Borrow<str> for CanonicalKey {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for CanonicalKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CanonicalKeyInvalidity {
    Empty,
    LowerCase,
}

impl Validate for CanonicalKey {
    type Invalidity = CanonicalKeyInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let inner = self.as_str();
        ValidationContext::new()
            .invalidate_if(inner.trim().is_empty(), Self::Invalidity::Empty)
            .invalidate_if(
                inner.chars().any(char::is_lowercase),
                Self::Invalidity::LowerCase,
            )
            .into()
    }
}

#[cfg(test)]
mod tests;

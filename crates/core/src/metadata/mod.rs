// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Provenance-tracked metadata.
//!
//! A [`Metadata`] collects the values of a single [`CanonicalKey`] from
//! one or more [`Origin`]s, e.g. an ID3v2 frame in the audio file and a
//! command in an accompanying cue sheet. Every origin sorts its values
//! into three buckets:
//!
//! - *valid*: values of the expected field that passed validation
//! - *discarded*: values that were found but did not match the exact
//!   identity of the field, e.g. a wrong description
//! - *invalid*: values of the expected field that could not be parsed
//!
//! Nothing is dropped. The [`Status`] summarizes which buckets are
//! occupied.

use derive_more::Display;
use smol_str::SmolStr;

use crate::{
    key::CanonicalKey,
    util::{ordered::OrderedSet, string::join_values},
};

mod set;
pub use self::set::MetadataSet;

///////////////////////////////////////////////////////////////////////
// SourceId
///////////////////////////////////////////////////////////////////////

/// Identifies the collaborator that provided the raw fields, e.g.
/// the ID3v2 tag of an audio file or a cue sheet.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[repr(transparent)]
pub struct SourceId(SmolStr);

impl SourceId {
    #[must_use]
    pub fn new(inner: impl Into<SmolStr>) -> Self {
        Self(inner.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        let Self(inner) = self;
        inner
    }
}

impl AsRef<str> for SourceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

///////////////////////////////////////////////////////////////////////
// OriginKey
///////////////////////////////////////////////////////////////////////

/// Where within a source the values of an [`Origin`] have been found.
///
/// Only used for telling origins apart, never for comparing values.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OriginKey {
    pub source_id: SourceId,

    /// Frame identifier or command name, e.g. `TXXX` or `PERFORMER`.
    pub field_id: SmolStr,

    /// Description, owner, or role that qualifies the field.
    pub sub_id: Option<SmolStr>,
}

impl OriginKey {
    #[must_use]
    pub fn new(source_id: SourceId, field_id: impl Into<SmolStr>) -> Self {
        Self {
            source_id,
            field_id: field_id.into(),
            sub_id: None,
        }
    }

    #[must_use]
    pub fn with_sub_id(self, sub_id: impl Into<SmolStr>) -> Self {
        Self {
            sub_id: Some(sub_id.into()),
            ..self
        }
    }
}

///////////////////////////////////////////////////////////////////////
// Origin
///////////////////////////////////////////////////////////////////////

/// The values of a single source for a single key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    key: OriginKey,
    valid_values: Vec<String>,
    discarded_values: Vec<String>,
    invalid_values: Vec<String>,
}

impl Origin {
    /// Empty strings are not considered as values and are dropped.
    #[must_use]
    pub fn new(
        key: OriginKey,
        mut valid_values: Vec<String>,
        mut discarded_values: Vec<String>,
        mut invalid_values: Vec<String>,
    ) -> Self {
        valid_values.retain(|value| !value.is_empty());
        discarded_values.retain(|value| !value.is_empty());
        invalid_values.retain(|value| !value.is_empty());
        Self {
            key,
            valid_values,
            discarded_values,
            invalid_values,
        }
    }

    #[must_use]
    pub const fn key(&self) -> &OriginKey {
        &self.key
    }

    #[must_use]
    pub const fn source_id(&self) -> &SourceId {
        &self.key.source_id
    }

    #[must_use]
    pub fn valid_values(&self) -> &[String] {
        &self.valid_values
    }

    #[must_use]
    pub fn discarded_values(&self) -> &[String] {
        &self.discarded_values
    }

    #[must_use]
    pub fn invalid_values(&self) -> &[String] {
        &self.invalid_values
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid_values.is_empty()
            && self.discarded_values.is_empty()
            && self.invalid_values.is_empty()
    }
}

///////////////////////////////////////////////////////////////////////
// Status
///////////////////////////////////////////////////////////////////////

#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr, strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Only valid values
    Valid,

    /// Only discarded values
    Discarded,

    /// Only invalid values
    Invalid,

    /// Discarded and invalid values, but no valid values
    DiscardedAndInvalid,

    /// Valid values, some discarded values
    HasDiscardedOrigins,

    /// Valid values, some invalid values
    HasInvalidOrigins,

    /// Valid values, some discarded and some invalid values
    HasDiscardedAndInvalidOrigins,

    /// No values at all
    Empty,
}

impl Status {
    /// Classify by the occupancy of the value buckets.
    #[must_use]
    pub const fn from_occupancy(valid: bool, discarded: bool, invalid: bool) -> Self {
        match (valid, discarded, invalid) {
            (false, false, false) => Self::Empty,
            (false, false, true) => Self::Invalid,
            (false, true, false) => Self::Discarded,
            (false, true, true) => Self::DiscardedAndInvalid,
            (true, false, false) => Self::Valid,
            (true, false, true) => Self::HasInvalidOrigins,
            (true, true, false) => Self::HasDiscardedOrigins,
            (true, true, true) => Self::HasDiscardedAndInvalidOrigins,
        }
    }

    #[must_use]
    pub const fn has_valid_values(self) -> bool {
        matches!(
            self,
            Self::Valid
                | Self::HasDiscardedOrigins
                | Self::HasInvalidOrigins
                | Self::HasDiscardedAndInvalidOrigins
        )
    }
}

///////////////////////////////////////////////////////////////////////
// Metadata
///////////////////////////////////////////////////////////////////////

/// All values of a single key, collected from different origins.
///
/// Origins are unique by [`OriginKey`]. Adding an origin with an existing
/// key has no effect, the first one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    key: CanonicalKey,
    origins: Vec<Origin>,
}

impl Metadata {
    #[must_use]
    pub fn new(key: impl Into<CanonicalKey>, origin: Origin) -> Self {
        Self {
            key: key.into(),
            origins: vec![origin],
        }
    }

    #[must_use]
    pub fn with_origins(
        key: impl Into<CanonicalKey>,
        origins: impl IntoIterator<Item = Origin>,
    ) -> Self {
        let mut metadata = Self {
            key: key.into(),
            origins: Vec::new(),
        };
        metadata.add_origins(origins);
        metadata
    }

    #[must_use]
    pub const fn key(&self) -> &CanonicalKey {
        &self.key
    }

    #[must_use]
    pub fn origins(&self) -> &[Origin] {
        &self.origins
    }

    #[must_use]
    pub fn into_origins(self) -> Vec<Origin> {
        let Self { key: _, origins } = self;
        origins
    }

    #[must_use]
    pub fn contains_origin(&self, key: &OriginKey) -> bool {
        self.origins.iter().any(|origin| origin.key() == key)
    }

    /// Returns `true` if the origin has been added.
    pub fn add_origin(&mut self, origin: Origin) -> bool {
        if self.contains_origin(origin.key()) {
            return false;
        }
        self.origins.push(origin);
        true
    }

    pub fn add_origins(&mut self, origins: impl IntoIterator<Item = Origin>) {
        for origin in origins {
            self.add_origin(origin);
        }
    }

    fn collect_values<'a>(&'a self, bucket: impl Fn(&'a Origin) -> &'a [String]) -> Vec<&'a str> {
        self.origins
            .iter()
            .flat_map(bucket)
            .map(String::as_str)
            .collect::<OrderedSet<_>>()
            .into_vec()
    }

    /// Valid values of all origins without duplicates, in order of appearance.
    #[must_use]
    pub fn valid_values(&self) -> Vec<&str> {
        self.collect_values(Origin::valid_values)
    }

    #[must_use]
    pub fn discarded_values(&self) -> Vec<&str> {
        self.collect_values(Origin::discarded_values)
    }

    #[must_use]
    pub fn invalid_values(&self) -> Vec<&str> {
        self.collect_values(Origin::invalid_values)
    }

    #[must_use]
    pub fn valid_value(&self) -> String {
        join_values(self.valid_values())
    }

    #[must_use]
    pub fn discarded_value(&self) -> String {
        join_values(self.discarded_values())
    }

    #[must_use]
    pub fn invalid_value(&self) -> String {
        join_values(self.invalid_values())
    }

    /// The best available value.
    ///
    /// Falls back from valid to discarded to invalid values. Returns an
    /// empty string if there is no value at all.
    #[must_use]
    pub fn value(&self) -> String {
        [
            self.valid_value(),
            self.discarded_value(),
            self.invalid_value(),
        ]
        .into_iter()
        .find(|value| !value.is_empty())
        .unwrap_or_default()
    }

    #[must_use]
    pub fn status(&self) -> Status {
        let occupied = |bucket: fn(&Origin) -> &[String]| {
            self.origins
                .iter()
                .any(|origin| !bucket(origin).is_empty())
        };
        Status::from_occupancy(
            occupied(Origin::valid_values),
            occupied(Origin::discarded_values),
            occupied(Origin::invalid_values),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origins.iter().all(Origin::is_empty)
    }
}

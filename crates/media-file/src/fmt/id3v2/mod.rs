// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reconciliation of ID3v2 frames.
//!
//! The frames of a tag are matched against the frame identifiers and
//! sub-identifiers of each [`FieldKey`]. Frames that are not claimed by
//! any key are reported under an ad-hoc key.

use std::fmt;

use itertools::Itertools as _;
use smol_str::SmolStr;
use strum::IntoEnumIterator as _;
use tagmerge_core::{
    CanonicalKey, FieldKey, Metadata, MetadataSet, NumberTotalPart, Origin, OriginKey, SourceId,
    util::string::{join_values, trim_readable, trimmed_readable_non_empty_from},
};

use super::AdHocFields;
use crate::{
    Error, Result,
    io::import::{ExtractConfig, ExtractFlags, Importer},
};

mod frames;
pub use self::frames::{FrameKey, frame_key};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Id3v2Version {
    V22,
    V23,
    V24,
}

impl Id3v2Version {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V22 => "2.2",
            Self::V23 => "2.3",
            Self::V24 => "2.4",
        }
    }

    /// The revision that uses the same kind of frame identifiers.
    ///
    /// ID3v2.3 and ID3v2.4 share 4-character identifiers while ID3v2.2
    /// uses 3-character identifiers.
    #[must_use]
    pub const fn sibling(self) -> Option<Self> {
        match self {
            Self::V22 => None,
            Self::V23 => Some(Self::V24),
            Self::V24 => Some(Self::V23),
        }
    }
}

impl fmt::Display for Id3v2Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///////////////////////////////////////////////////////////////////////
// Frames
///////////////////////////////////////////////////////////////////////

/// The decoded content of a frame.
#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
pub enum FrameBody {
    /// Text information, e.g. TIT2 or TCON
    ///
    /// Multiple values are separated by NUL characters.
    Text(String),

    /// Composite `number/total` text, e.g. TRCK or TPOS
    NumberTotal(String),

    /// TXXX
    UserText { description: String, value: String },

    /// WXXX
    UserUrl { description: String, url: String },

    /// COMM or USLT
    Comment {
        language: String,
        description: String,
        text: String,
    },

    /// UFID
    UniqueFileId { owner: String, identifier: String },

    /// Involved people, e.g. IPLS or TIPL
    ///
    /// Pairs of role and name.
    KeyedPairs(Vec<(String, String)>),

    /// Content that could not be decoded
    Unsupported(Vec<u8>),
}

impl FrameBody {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// The free-text description of user-defined frames.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::UserText { description, .. }
            | Self::UserUrl { description, .. }
            | Self::Comment { description, .. } => Some(description),
            Self::Text(_)
            | Self::NumberTotal(_)
            | Self::UniqueFileId { .. }
            | Self::KeyedPairs(_)
            | Self::Unsupported(_) => None,
        }
    }

    /// The content as displayable text.
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Text(text) => join_values(split_text_values(text)),
            Self::NumberTotal(text)
            | Self::UserText { value: text, .. }
            | Self::UserUrl { url: text, .. }
            | Self::Comment { text, .. }
            | Self::UniqueFileId {
                identifier: text, ..
            } => trim_readable(text).to_owned(),
            Self::KeyedPairs(pairs) => pairs
                .iter()
                .map(|(role, name)| format!("{role}: {name}"))
                .join(", "),
            Self::Unsupported(data) => trim_readable(&String::from_utf8_lossy(data)).to_owned(),
        }
    }

    /// The description (or an empty string) and the text.
    #[must_use]
    pub fn value_pair(&self) -> (&str, String) {
        (self.description().unwrap_or_default(), self.text())
    }

    /// Non-empty values of the content.
    #[must_use]
    pub fn values(&self) -> Vec<String> {
        match self {
            Self::Text(text) => split_text_values(text)
                .into_iter()
                .map(ToOwned::to_owned)
                .collect(),
            _ => trimmed_readable_non_empty_from(self.text())
                .into_iter()
                .collect(),
        }
    }
}

fn split_text_values(text: &str) -> Vec<&str> {
    text.split('\0')
        .map(trim_readable)
        .filter(|value| !value.is_empty())
        .collect()
}

/// Parse either part of a composite `number/total` text.
///
/// Returns `None` if the part is missing and the unparsed text of
/// the part if it is not a number.
#[must_use]
pub fn parse_number_total_part(
    text: &str,
    part: NumberTotalPart,
) -> Option<std::result::Result<u32, &str>> {
    let text = trim_readable(text);
    let (number, total) = match text.split_once('/') {
        Some((number, total)) => (number, Some(total)),
        None => (text, None),
    };
    let raw = match part {
        NumberTotalPart::Number => number,
        NumberTotalPart::Total => total?,
    }
    .trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.parse().map_err(|_| raw))
}

/// A single frame of a parsed tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Id3v2Field {
    pub frame_id: SmolStr,
    pub body: FrameBody,
}

impl Id3v2Field {
    #[must_use]
    pub fn new(frame_id: impl Into<SmolStr>, body: FrameBody) -> Self {
        Self {
            frame_id: frame_id.into(),
            body,
        }
    }

    #[must_use]
    pub fn text(frame_id: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        Self::new(frame_id, FrameBody::Text(text.into()))
    }

    #[must_use]
    pub fn number_total(frame_id: impl Into<SmolStr>, text: impl Into<String>) -> Self {
        Self::new(frame_id, FrameBody::NumberTotal(text.into()))
    }

    #[must_use]
    pub fn user_text(
        frame_id: impl Into<SmolStr>,
        description: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::new(
            frame_id,
            FrameBody::UserText {
                description: description.into(),
                value: value.into(),
            },
        )
    }

    #[must_use]
    pub fn comment(
        frame_id: impl Into<SmolStr>,
        description: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self::new(
            frame_id,
            FrameBody::Comment {
                language: "eng".to_owned(),
                description: description.into(),
                text: text.into(),
            },
        )
    }
}

///////////////////////////////////////////////////////////////////////
// Schema
///////////////////////////////////////////////////////////////////////

/// Indexes into the field list.
#[derive(Debug, Default)]
struct Classified {
    filtered: Vec<usize>,
    invalid: Vec<usize>,
}

impl Classified {
    fn indexes(&self) -> impl Iterator<Item = usize> {
        self.filtered.iter().chain(&self.invalid).copied()
    }
}

#[derive(Debug, Clone)]
pub struct Id3v2Schema<'a> {
    source_id: SourceId,
    version: Id3v2Version,
    fields: &'a [Id3v2Field],
}

impl<'a> Id3v2Schema<'a> {
    #[must_use]
    pub const fn new(source_id: SourceId, version: Id3v2Version, fields: &'a [Id3v2Field]) -> Self {
        Self {
            source_id,
            version,
            fields,
        }
    }

    #[must_use]
    pub const fn version(&self) -> Id3v2Version {
        self.version
    }

    #[must_use]
    pub const fn fields(&self) -> &'a [Id3v2Field] {
        self.fields
    }

    fn fields_with_id(&self, frame_id: &str) -> impl Iterator<Item = (usize, &'a Id3v2Field)> {
        self.fields
            .iter()
            .enumerate()
            .filter(move |(_, field)| field.frame_id == frame_id)
    }

    fn classify(&self, key: FieldKey, frame_key: FrameKey) -> Result<Classified> {
        let mut classified = Classified::default();
        if let Some(sub_id) = frame_key.sub_id {
            for (index, field) in self.fields_with_id(frame_key.frame_id) {
                let matches = match &field.body {
                    FrameBody::UserText { description, .. }
                    | FrameBody::UserUrl { description, .. }
                    | FrameBody::Comment { description, .. } => description == sub_id,
                    FrameBody::UniqueFileId { owner, .. } => owner == sub_id,
                    FrameBody::KeyedPairs(pairs) => pairs.iter().any(|(role, _)| role == sub_id),
                    FrameBody::Unsupported(_) => {
                        // Opaque content cannot be matched, take all
                        classified.filtered = self
                            .fields_with_id(frame_key.frame_id)
                            .map(|(index, _)| index)
                            .collect();
                        break;
                    }
                    FrameBody::Text(_) | FrameBody::NumberTotal(_) => {
                        return Err(unclassifiable(key, field));
                    }
                };
                if matches {
                    classified.filtered.push(index);
                }
            }
        } else if let Some(part) = key.number_total_part() {
            for (index, field) in self.fields_with_id(frame_key.frame_id) {
                match &field.body {
                    FrameBody::NumberTotal(text) => match parse_number_total_part(text, part) {
                        Some(Ok(_)) => classified.filtered.push(index),
                        // A missing part is as unusable as a malformed one
                        Some(Err(_)) | None => classified.invalid.push(index),
                    },
                    FrameBody::Unsupported(_) => classified.invalid.push(index),
                    _ => {
                        return Err(unclassifiable(key, field));
                    }
                }
            }
        } else {
            classified.filtered = self
                .fields_with_id(frame_key.frame_id)
                .map(|(index, _)| index)
                .collect();
        }
        Ok(classified)
    }

    fn build_origin(&self, key: FieldKey, frame_key: FrameKey, classified: &Classified) -> Origin {
        let mut valid_values = Vec::with_capacity(classified.filtered.len());
        for &index in &classified.filtered {
            let body = &self.fields[index].body;
            match (body, frame_key.sub_id, key.number_total_part()) {
                (FrameBody::NumberTotal(text), _, Some(part)) => {
                    if let Some(Ok(value)) = parse_number_total_part(text, part) {
                        valid_values.push(value.to_string());
                    }
                }
                (FrameBody::KeyedPairs(pairs), Some(sub_id), _) => {
                    valid_values.extend(
                        pairs
                            .iter()
                            .filter(|(role, _)| role == sub_id)
                            .filter_map(|(_, name)| trimmed_readable_non_empty_from(name)),
                    );
                }
                (body, _, _) => valid_values.extend(body.values()),
            }
        }
        let invalid_values = classified
            .invalid
            .iter()
            .map(|&index| self.fields[index].body.text())
            .collect();
        let mut origin_key = OriginKey::new(self.source_id.clone(), frame_key.frame_id);
        if let Some(sub_id) = frame_key.sub_id {
            origin_key = origin_key.with_sub_id(sub_id);
        }
        Origin::new(origin_key, valid_values, Vec::new(), invalid_values)
    }

    /// The origin of a key.
    ///
    /// Returns `None` if the key has no mapping in the revision of this tag.
    /// Frames with a matching identifier but a different sub-identifier are
    /// ignored, they remain available for other keys.
    pub fn origin(&self, key: FieldKey) -> Result<Option<Origin>> {
        let Some(frame_key) = frames::frame_key(self.version, key) else {
            return Ok(None);
        };
        let classified = self.classify(key, frame_key)?;
        Ok(Some(self.build_origin(key, frame_key, &classified)))
    }

    pub fn metadata(&self, key: FieldKey) -> Result<Option<Metadata>> {
        let origin = self.origin(key)?;
        Ok(origin.map(|origin| Metadata::new(key, origin)))
    }

    /// Metadata for all keys that are mapped in this revision, empty or not.
    pub fn existing_metadata(&self) -> Result<Vec<Metadata>> {
        FieldKey::iter()
            .filter_map(|key| self.metadata(key).transpose())
            .collect()
    }

    fn resolve_frame_key(
        &self,
        config: &ExtractConfig,
        importer: &mut Importer,
        key: FieldKey,
    ) -> Option<FrameKey> {
        if let Some(frame_key) = frames::frame_key(self.version, key) {
            return Some(frame_key);
        }
        if !config.flags.contains(ExtractFlags::REVISION_FALLBACK) {
            return None;
        }
        let fallback = frames::frame_key(self.version.sibling()?, key)?;
        self.fields_with_id(fallback.frame_id).next()?;
        importer.add_issue(format!(
            "Found {frame_id} frame for {key} that is not defined in ID3v{version}",
            frame_id = fallback.frame_id,
            version = self.version,
        ));
        Some(fallback)
    }

    fn ad_hoc_key(&self, field: &Id3v2Field) -> (CanonicalKey, OriginKey) {
        let origin_key = OriginKey::new(self.source_id.clone(), field.frame_id.clone());
        match field
            .body
            .description()
            .map(trim_readable)
            .filter(|description| !description.is_empty())
        {
            Some(description) => (
                CanonicalKey::new(description),
                origin_key.with_sub_id(description),
            ),
            None => (CanonicalKey::bracketed(&field.frame_id), origin_key),
        }
    }

    /// Extract the metadata of all fields.
    ///
    /// Each non-empty result for a known key is reported, even if it
    /// only contains invalid values. The remaining fields that are not
    /// claimed by any key are reported under ad-hoc keys if enabled.
    /// The result contains at most one entry per canonical key.
    pub fn extract_all(
        &self,
        config: &ExtractConfig,
        importer: &mut Importer,
    ) -> Result<Vec<Metadata>> {
        let mut claimed = vec![false; self.fields.len()];
        let mut extracted = MetadataSet::new();
        for key in FieldKey::iter() {
            let Some(frame_key) = self.resolve_frame_key(config, importer, key) else {
                continue;
            };
            let classified = self.classify(key, frame_key).inspect_err(|err| {
                log::warn!("Failed to extract {key} from ID3v{version} tag: {err}", version = self.version);
            })?;
            for index in classified.indexes() {
                claimed[index] = true;
            }
            let origin = self.build_origin(key, frame_key, &classified);
            if origin.is_empty() {
                continue;
            }
            log::trace!("Extracted {key} from {frame_id}", frame_id = frame_key.frame_id);
            extracted.merge_origin(key, origin);
        }
        let unclaimed = self
            .fields
            .iter()
            .zip(claimed)
            .filter_map(|(field, claimed)| (!claimed).then_some(field));
        if config.flags.contains(ExtractFlags::AD_HOC_FIELDS) {
            let mut ad_hoc = AdHocFields::default();
            for field in unclaimed {
                let (key, origin_key) = self.ad_hoc_key(field);
                ad_hoc.add(key, origin_key, field.body.values());
            }
            // Descriptions may coincide with keys that have already been extracted
            extracted.merge_all(ad_hoc.into_metadata());
        } else {
            let num_unclaimed = unclaimed.count();
            if num_unclaimed > 0 {
                log::debug!("Skipped {num_unclaimed} unclaimed frame(s)");
            }
        }
        Ok(extracted.into_vec())
    }
}

fn unclassifiable(key: FieldKey, field: &Id3v2Field) -> Error {
    Error::UnclassifiableField {
        key,
        frame_id: field.frame_id.clone(),
        body: field.body.kind(),
    }
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Reconciliation of cue sheet commands.
//!
//! Command names are resolved through the alias table of the section
//! in which they occur.

use semval::prelude::*;
use tagmerge_core::{
    CanonicalKey, FieldKey, Metadata, MetadataSet, Origin, OriginKey, Scope, SourceId, alias,
    util::string::trim_readable,
};

use super::AdHocFields;
use crate::io::import::{ExtractConfig, ExtractFlags, Importer};

/// A single command of a cue sheet, e.g. `PERFORMER` or `REM GENRE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CueCommand {
    pub name: String,
    pub value: String,
}

impl CueCommand {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The commands of a parsed cue sheet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CueSheet {
    /// Commands before the first `TRACK`
    pub album: Vec<CueCommand>,

    /// Commands of each `TRACK` section, in order
    pub tracks: Vec<Vec<CueCommand>>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CueValueInvalidity {
    /// Not 12 alphanumeric characters
    Isrc,

    /// Not 13 digits
    CatalogNo,

    /// Not an unsigned integer
    Number,

    /// Not starting with a 4-digit year
    Year,
}

/// The value of a command that has been resolved onto a known key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CueValue<'a> {
    pub key: FieldKey,
    pub value: &'a str,
}

impl Validate for CueValue<'_> {
    type Invalidity = CueValueInvalidity;

    fn validate(&self) -> ValidationResult<Self::Invalidity> {
        let Self { key, value } = *self;
        let context = ValidationContext::new();
        match key {
            FieldKey::Isrc => context.invalidate_if(
                value.len() != 12 || !value.chars().all(|c| c.is_ascii_alphanumeric()),
                Self::Invalidity::Isrc,
            ),
            FieldKey::CatalogNo => context.invalidate_if(
                value.len() != 13 || !value.chars().all(|c| c.is_ascii_digit()),
                Self::Invalidity::CatalogNo,
            ),
            FieldKey::DiscNo | FieldKey::DiscTotal | FieldKey::Track => context
                .invalidate_if(value.parse::<u32>().is_err(), Self::Invalidity::Number),
            FieldKey::Year => context.invalidate_if(
                value.len() < 4 || !value.bytes().take(4).all(|b| b.is_ascii_digit()),
                Self::Invalidity::Year,
            ),
            _ => context,
        }
        .into()
    }
}

const fn scope_label(scope: Scope) -> &'static str {
    match scope {
        Scope::Album => "album",
        Scope::Track => "track",
    }
}

#[derive(Debug)]
struct Group {
    key: FieldKey,
    origin_key: OriginKey,
    valid_values: Vec<String>,
    invalid_values: Vec<String>,
}

fn extract_commands(
    importer: &mut Importer,
    config: &ExtractConfig,
    source_id: &SourceId,
    scope: Scope,
    commands: &[CueCommand],
    groups: &mut Vec<Group>,
    ad_hoc: &mut AdHocFields,
) {
    for CueCommand { name, value } in commands {
        let name = trim_readable(name).to_uppercase();
        if name.is_empty() {
            importer.add_issue(format!(
                "Skipped {scope} command without a name in cue sheet {source_id}",
                scope = scope_label(scope),
            ));
            continue;
        }
        let value = trim_readable(value);
        if value.is_empty() {
            log::trace!("Skipped empty {name} command in cue sheet {source_id}");
            continue;
        }
        let origin_key =
            OriginKey::new(source_id.clone(), name.as_str()).with_sub_id(scope_label(scope));
        let Some(key) = alias::lookup(scope, &name).and_then(|key| key.known()) else {
            if config.flags.contains(ExtractFlags::AD_HOC_FIELDS) {
                ad_hoc.add(CanonicalKey::new(&name), origin_key, [value.to_owned()]);
            } else {
                log::debug!("Skipped unknown {name} command in cue sheet {source_id}");
            }
            continue;
        };
        let invalid = config.flags.contains(ExtractFlags::VALIDATE_CUE_VALUES)
            && CueValue { key, value }.validate().is_err();
        if invalid {
            importer.add_issue(format!(
                "Invalid {key} value in {name} command of cue sheet {source_id}: {value}"
            ));
        }
        let index = match groups
            .iter()
            .position(|group| group.key == key && group.origin_key == origin_key)
        {
            Some(index) => index,
            None => {
                groups.push(Group {
                    key,
                    origin_key,
                    valid_values: Vec::new(),
                    invalid_values: Vec::new(),
                });
                groups.len() - 1
            }
        };
        let group = &mut groups[index];
        if invalid {
            group.invalid_values.push(value.to_owned());
        } else {
            group.valid_values.push(value.to_owned());
        }
    }
}

/// Extract the metadata of the album section and optionally of a
/// single track section.
///
/// Album commands are processed before track commands. Commands with
/// the same name are collected into a single origin. A `track_index`
/// that is out of range is ignored.
#[must_use]
pub fn extract_metadata(
    importer: &mut Importer,
    config: &ExtractConfig,
    source_id: &SourceId,
    sheet: &CueSheet,
    track_index: Option<usize>,
) -> Vec<Metadata> {
    let mut groups = Vec::new();
    let mut ad_hoc = AdHocFields::default();
    extract_commands(
        importer,
        config,
        source_id,
        Scope::Album,
        &sheet.album,
        &mut groups,
        &mut ad_hoc,
    );
    if let Some(track_commands) = track_index.and_then(|index| sheet.tracks.get(index)) {
        extract_commands(
            importer,
            config,
            source_id,
            Scope::Track,
            track_commands,
            &mut groups,
            &mut ad_hoc,
        );
    }
    let mut extracted = MetadataSet::new();
    for Group {
        key,
        origin_key,
        valid_values,
        invalid_values,
    } in groups
    {
        extracted.merge_origin(
            key,
            Origin::new(origin_key, valid_values, Vec::new(), invalid_values),
        );
    }
    extracted.merge_all(ad_hoc.into_metadata());
    extracted.into_vec()
}

#[cfg(test)]
mod tests;

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use semval::prelude::*;
use tagmerge_core::{CanonicalKey, Metadata, Origin, OriginKey};

pub mod cue;

pub mod id3v2;

/// Values of fields that are not claimed by any known key.
///
/// Values are grouped by origin, i.e. multiple fields with the same
/// identifier end up in a single origin. None of these values has
/// been validated, so all of them are reported as discarded.
#[derive(Debug, Default)]
struct AdHocFields {
    groups: Vec<(CanonicalKey, OriginKey, Vec<String>)>,
}

impl AdHocFields {
    /// Keys that would not survive validation, e.g. descriptions with
    /// lower-case characters that have no upper-case form, are replaced
    /// by the placeholder key.
    fn add(&mut self, key: CanonicalKey, origin_key: OriginKey, values: impl IntoIterator<Item = String>) {
        let key = if key.is_valid() {
            key
        } else {
            log::debug!("Replacing invalid ad-hoc key {key:?} with placeholder");
            CanonicalKey::placeholder()
        };
        if let Some((_, _, group_values)) = self
            .groups
            .iter_mut()
            .find(|(group_key, group_origin_key, _)| *group_key == key && *group_origin_key == origin_key)
        {
            group_values.extend(values);
            return;
        }
        self.groups.push((key, origin_key, values.into_iter().collect()));
    }

    fn into_metadata(self) -> impl Iterator<Item = Metadata> {
        let Self { groups } = self;
        groups
            .into_iter()
            .map(|(key, origin_key, values)| {
                Metadata::new(key, Origin::new(origin_key, Vec::new(), values, Vec::new()))
            })
            .filter(|metadata| !metadata.is_empty())
    }
}

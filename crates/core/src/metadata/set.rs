// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use hashbrown::HashMap;

use super::{Metadata, Origin};
use crate::key::CanonicalKey;

/// The metadata of a single reconciliation run.
///
/// Contains at most one [`Metadata`] per [`CanonicalKey`]. Metadata for
/// an existing key is merged by adding its origins, so the same logical
/// field from different sources ends up in a single entry. Entries are
/// kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MetadataSet {
    entries: Vec<Metadata>,
    index: HashMap<CanonicalKey, usize>,
}

impl MetadataSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Metadata> {
        self.index.get(key).map(|&index| &self.entries[index])
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Metadata> {
        self.entries.iter()
    }

    /// Add the origins of an existing key or insert a new entry.
    pub fn merge(&mut self, metadata: Metadata) {
        if let Some(&index) = self.index.get(metadata.key().as_str()) {
            self.entries[index].add_origins(metadata.into_origins());
            return;
        }
        self.index.insert(metadata.key().clone(), self.entries.len());
        self.entries.push(metadata);
    }

    pub fn merge_all(&mut self, metadata: impl IntoIterator<Item = Metadata>) {
        for metadata in metadata {
            self.merge(metadata);
        }
    }

    /// Shortcut for merging a single origin.
    pub fn merge_origin(&mut self, key: impl Into<CanonicalKey>, origin: Origin) {
        self.merge(Metadata::new(key, origin));
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Metadata> {
        let Self { entries, index: _ } = self;
        entries
    }
}

impl Extend<Metadata> for MetadataSet {
    fn extend<I: IntoIterator<Item = Metadata>>(&mut self, iter: I) {
        self.merge_all(iter);
    }
}

impl FromIterator<Metadata> for MetadataSet {
    fn from_iter<I: IntoIterator<Item = Metadata>>(iter: I) -> Self {
        let mut set = Self::new();
        set.merge_all(iter);
        set
    }
}

impl IntoIterator for MetadataSet {
    type Item = Metadata;
    type IntoIter = std::vec::IntoIter<Metadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

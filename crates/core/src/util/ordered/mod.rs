// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use std::hash::Hash;

use hashbrown::HashSet;

/// An insertion-ordered set.
///
/// Elements are unique by equality and iterated in the order in which
/// they have been inserted first.
#[derive(Debug, Clone)]
pub struct OrderedSet<T> {
    ordered: Vec<T>,
    unique: HashSet<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self {
            ordered: Vec::new(),
            unique: HashSet::new(),
        }
    }
}

impl<T> OrderedSet<T>
where
    T: Clone + Eq + Hash,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the element has not been present before.
    pub fn insert(&mut self, element: T) -> bool {
        if self.unique.contains(&element) {
            return false;
        }
        self.unique.insert(element.clone());
        self.ordered.push(element);
        true
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        let Self { ordered, unique: _ } = self;
        ordered
    }
}

impl<T> Extend<T> for OrderedSet<T>
where
    T: Clone + Eq + Hash,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Clone + Eq + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T> IntoIterator for OrderedSet<T>
where
    T: Clone + Eq + Hash,
{
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_vec().into_iter()
    }
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

/// Separator for displaying multiple values as a single string.
pub const VALUE_SEPARATOR: &str = "; ";

/// Strip leading/trailing whitespace and control characters.
///
/// Text frames are often padded with NUL terminators.
#[must_use]
pub fn trim_readable(input: &str) -> &str {
    input.trim_matches(|c: char| c.is_whitespace() || c.is_control())
}

pub fn non_empty_from(s: impl AsRef<str> + Into<String>) -> Option<String> {
    if s.as_ref().is_empty() {
        None
    } else {
        Some(s.into())
    }
}

pub fn trimmed_readable_non_empty_from(s: impl AsRef<str>) -> Option<String> {
    non_empty_from(trim_readable(s.as_ref()))
}

/// Join values with [`VALUE_SEPARATOR`].
///
/// Returns an empty string if there are no values.
pub fn join_values<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let mut joined = String::new();
    for value in values {
        if !joined.is_empty() {
            joined.push_str(VALUE_SEPARATOR);
        }
        joined.push_str(value);
    }
    joined
}

#[cfg(test)]
mod tests;

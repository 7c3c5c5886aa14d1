// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use super::*;

#[test]
fn trim_readable_nul_padding() {
    assert_eq!("Rock", trim_readable("\0 Rock\0\0"));
    assert_eq!("", trim_readable(" \n \t \r \0"));
}

#[test]
fn trimmed_readable_non_empty_from_whitespace() {
    assert_eq!(None, trimmed_readable_non_empty_from(" \n \t \r "));
    assert_eq!(
        Some("This \n is\ta \r Text".to_owned()),
        trimmed_readable_non_empty_from(" \n \tThis \n is\ta \r Text\r ")
    );
}

#[test]
fn non_empty_from_empty() {
    assert_eq!(None, non_empty_from(""));
    assert_eq!(None, non_empty_from(String::new()));
}

#[test]
fn non_empty_from_non_empty() {
    assert_eq!(Some(" ".into()), non_empty_from(" "));
}

#[test]
fn join_values_separator() {
    assert_eq!("", join_values(std::iter::empty()));
    assert_eq!("a", join_values(["a"]));
    assert_eq!("a; b; c", join_values(["a", "b", "c"]));
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use strum::IntoEnumIterator as _;

use super::*;

#[test]
fn field_key_names_are_upper_case() {
    assert_eq!("ALBUM_ARTIST", FieldKey::AlbumArtist.as_str());
    assert_eq!("CATALOG_NO", FieldKey::CatalogNo.as_str());
    assert_eq!("CDTEXTFILE", FieldKey::CdTextFile.as_str());
    assert_eq!("DJMIXER", FieldKey::DjMixer.as_str());
    assert_eq!("MUSICBRAINZ_TRACK_ID", FieldKey::MusicbrainzTrackId.as_str());
    for key in FieldKey::iter() {
        assert_eq!(key.as_str().to_uppercase(), key.as_str());
        assert_eq!(key.to_string(), key.as_str());
    }
}

#[test]
fn new_maps_known_spellings() {
    assert_eq!(
        CanonicalKey::Known(FieldKey::Artist),
        CanonicalKey::new("artist")
    );
    assert_eq!(Some(FieldKey::Year), CanonicalKey::new("Year").known());
    assert!(CanonicalKey::new("ReplayGain_Track_Gain").is_ad_hoc());
    assert_eq!(
        "REPLAYGAIN_TRACK_GAIN",
        CanonicalKey::new("ReplayGain_Track_Gain").as_str()
    );
}

#[test]
fn equality_by_string_form() {
    let ad_hoc = CanonicalKey::AdHoc("TITLE".into());
    assert_eq!(ad_hoc, CanonicalKey::Known(FieldKey::Title));
    assert_eq!(ad_hoc, FieldKey::Title);
    assert_ne!(CanonicalKey::new("TITLE2"), FieldKey::Title);
}

#[test]
fn bracketed_and_placeholder() {
    assert_eq!("[TIT3]", CanonicalKey::bracketed("tit3").as_str());
    assert_eq!(PLACEHOLDER_KEY, CanonicalKey::bracketed(" ").as_str());
    assert_eq!(PLACEHOLDER_KEY, CanonicalKey::placeholder().as_str());
}

#[test]
fn number_total_parts() {
    assert_eq!(
        Some(NumberTotalPart::Number),
        FieldKey::Track.number_total_part()
    );
    assert_eq!(
        Some(NumberTotalPart::Total),
        FieldKey::DiscTotal.number_total_part()
    );
    assert_eq!(None, FieldKey::Title.number_total_part());
}

#[test]
fn validate() {
    assert!(CanonicalKey::new("custom").is_valid());
    assert!(CanonicalKey::from(FieldKey::Genre).is_valid());
    assert!(CanonicalKey::AdHoc("".into()).validate().is_err());
    assert!(CanonicalKey::AdHoc("lower".into()).validate().is_err());
}

// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

//! Provenance-tracked reconciliation of audio track metadata.
//!
//! Values for the same piece of information are collected from
//! multiple sources, e.g. the ID3v2 tag of a file and an accompanying
//! cue sheet. Each value remembers where it came from and whether it
//! passed validation.

pub use tagmerge_core as core;

#[cfg(feature = "media-file")]
pub use tagmerge_media_file as media_file;

pub mod prelude {
    pub use tagmerge_core::prelude::*;

    #[cfg(feature = "media-file")]
    pub use tagmerge_media_file::{
        io::import::{ExtractConfig, ExtractFlags, ImportedMetadata, Source, import_metadata},
        prelude::*,
    };
}

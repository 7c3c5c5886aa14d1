// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use anyhow::anyhow;
use bitflags::bitflags;
use tagmerge_core::{MetadataSet, SourceId};

use crate::{
    Error, Result,
    fmt::{
        cue::{self, CueSheet},
        id3v2::{Id3v2Field, Id3v2Schema, Id3v2Version},
    },
};

#[rustfmt::skip]
bitflags! {
    /// Flags for controlling the extraction
    ///
    /// It is recommended to enable all for maximum information.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ExtractFlags: u8 {
        /// Report fields that are not claimed by any known key
        ///
        /// Their values are reported as discarded under an ad-hoc key.
        const AD_HOC_FIELDS                 = 0b0000_0001;

        /// Look up frames of the sibling ID3v2 revision
        ///
        /// Applies to keys that have no mapping in the revision of the tag,
        /// e.g. a TSST frame written into an ID3v2.3 tag.
        const REVISION_FALLBACK             = 0b0000_0010;

        /// Validate the shape of well-known cue sheet values
        ///
        /// Values that fail validation are reported as invalid.
        const VALIDATE_CUE_VALUES           = 0b0000_0100;
    }
}

impl ExtractFlags {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        Self::all().contains(self)
    }
}

impl Default for ExtractFlags {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractConfig {
    pub flags: ExtractFlags,
}

/// Recoverable errors and warnings
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Issues {
    messages: Vec<String>,
}

impl Issues {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        let Self { messages } = self;
        messages.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        let Self { messages } = self;
        messages.len()
    }

    pub fn add_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug_assert!(!message.trim().is_empty());
        self.messages.push(message);
    }

    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<String> {
        let Self { messages } = self;
        messages
    }
}

#[derive(Debug, Default)]
pub struct Importer {
    issues: Issues,
}

impl Importer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issues: Issues::new(),
        }
    }

    pub fn add_issue(&mut self, message: impl Into<String>) {
        let message = message.into();
        log::debug!("{message}");
        self.issues.add_message(message);
    }

    #[must_use]
    pub fn finish(self) -> Issues {
        let Self { issues } = self;
        issues
    }
}

/// A parsed field list together with its provenance.
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    Id3v2 {
        source_id: &'a SourceId,
        version: Id3v2Version,
        fields: &'a [Id3v2Field],
    },
    CueSheet {
        source_id: &'a SourceId,
        sheet: &'a CueSheet,
        /// Zero-based index of the track, `None` for album-level
        /// commands only.
        track_index: Option<usize>,
    },
}

impl Source<'_> {
    #[must_use]
    pub const fn source_id(&self) -> &SourceId {
        match self {
            Self::Id3v2 { source_id, .. } | Self::CueSheet { source_id, .. } => *source_id,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ImportedMetadata {
    pub metadata: MetadataSet,
    pub issues: Issues,
}

/// Extract the metadata of a single source and merge it into `metadata`.
pub fn import_source_into(
    importer: &mut Importer,
    config: &ExtractConfig,
    source: Source<'_>,
    metadata: &mut MetadataSet,
) -> Result<()> {
    debug_assert!(config.flags.is_valid());
    match source {
        Source::Id3v2 {
            source_id,
            version,
            fields,
        } => {
            log::debug!(
                "Importing {num_fields} field(s) from ID3v{version} tag of source {source_id}",
                num_fields = fields.len(),
            );
            let schema = Id3v2Schema::new(source_id.clone(), version, fields);
            metadata.merge_all(schema.extract_all(config, importer)?);
        }
        Source::CueSheet {
            source_id,
            sheet,
            track_index,
        } => {
            if let Some(track_index) = track_index {
                if track_index >= sheet.tracks.len() {
                    return Err(Error::Other(anyhow!(
                        "cue sheet {source_id} has {num_tracks} track(s), no track #{track_number}",
                        num_tracks = sheet.tracks.len(),
                        track_number = track_index + 1,
                    )));
                }
            }
            log::debug!("Importing cue sheet commands from source {source_id}");
            metadata.merge_all(cue::extract_metadata(
                importer,
                config,
                source_id,
                sheet,
                track_index,
            ));
        }
    }
    Ok(())
}

/// Reconcile the metadata of multiple sources.
///
/// Sources are processed in order. Metadata for the same key is merged
/// into a single entry.
pub fn import_metadata<'a>(
    config: &ExtractConfig,
    sources: impl IntoIterator<Item = Source<'a>>,
) -> Result<ImportedMetadata> {
    let mut importer = Importer::new();
    let mut metadata = MetadataSet::new();
    for source in sources {
        import_source_into(&mut importer, config, source, &mut metadata)?;
    }
    log::debug!(
        "Imported {num_keys} key(s), {num_valid} with valid values",
        num_keys = metadata.len(),
        num_valid = metadata
            .iter()
            .filter(|metadata| metadata.status().has_valid_values())
            .count(),
    );
    Ok(ImportedMetadata {
        metadata,
        issues: importer.finish(),
    })
}

#[cfg(test)]
mod tests;

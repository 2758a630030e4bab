// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy shared by every morse-kit operation.

/// Failures that abort an operation before any output is produced.
///
/// Unknown characters and unknown codes met while transcoding are not
/// errors: they degrade to the caller's error glyph.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MorseError {
    #[error("invalid symbols: dots, dashes and separators must each be a single character")]
    InvalidGlyphs,

    #[error("invalid characters: use only the configured dots, dashes, spaces and separators")]
    InvalidCharacters,

    #[error("invalid language '{0}': run `morse-kit languages` for the supported list")]
    UnknownLanguage(String),

    #[error("invalid delay {0}: the delay must be at least 0.3 seconds")]
    InvalidDelay(f64),

    #[error("invalid volume {0}: the volume must be above 0.0 and at most 1.0")]
    InvalidVolume(f64),

    #[error("table data unavailable: {0}")]
    DataUnavailable(String),
}

impl MorseError {
    /// True for caller configuration mistakes, false for broken table data.
    pub fn is_config(&self) -> bool {
        !matches!(self, MorseError::DataUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, MorseError>;

/// Emits the diagnostic for an aborted operation and hands the error back.
pub(crate) fn logged(err: MorseError) -> MorseError {
    tracing::error!("{}", err);
    err
}

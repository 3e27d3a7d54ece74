//! Error taxonomy for the generation pipeline.
//!
//! Two families matter to callers: configuration errors, caught before any
//! entropy or I/O happens, and entropy/I-O errors, which are fatal and never
//! retried. [`Error::is_config`] tells them apart.

use thiserror::Error;

use crate::config::SourceKind;

/// Everything that can go wrong during a single generation run.
#[derive(Debug, Error)]
pub enum Error {
    /// `--seed` given, but the selected source is not a seedable PRNG.
    #[error("--seed requires a deterministic source (--prng or --chacha), not {0}")]
    SeedWithoutPrng(SourceKind),

    /// `--sequence` given, but only the chacha source has sequence streams.
    #[error("--sequence is only valid with --chacha, not {0}")]
    SequenceWithoutChaCha(SourceKind),

    /// Raw bytes would be dumped straight into an interactive terminal.
    #[error("refusing to write raw bytes to a terminal; redirect stdout or pick an encoding")]
    RawToTerminal,

    /// The OS secure random API failed. Indicates a broken platform.
    #[error("OS random source failed: {0}")]
    OsRandom(getrandom::Error),

    /// An entropy device file could not be opened.
    #[error("{path}: {source}")]
    DeviceOpen {
        path: String,
        source: std::io::Error,
    },

    /// An entropy device closed before delivering the requested bytes.
    #[error("{path}: device closed after {got} of {want} bytes")]
    DeviceExhausted {
        path: String,
        want: usize,
        got: usize,
    },

    /// Read or write failure on the device stream or the output sink.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for errors detectable before any entropy or I/O operation.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::SeedWithoutPrng(_) | Self::SequenceWithoutChaCha(_) | Self::RawToTerminal
        )
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

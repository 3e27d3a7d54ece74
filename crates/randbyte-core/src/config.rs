//! Run configuration: source selection, output format, byte count, wrapping.
//!
//! A [`Config`] is built once by the caller (the CLI's argument parser, or a
//! library user directly), validated with [`Config::validate`], and never
//! mutated afterwards. Positivity of the byte count and line width is a
//! type-level fact (`NonZero*`), so validation only covers the cross-field
//! compatibility rules.

use std::num::{NonZeroU32, NonZeroUsize};

use crate::error::{Error, Result};

/// Byte count used when the caller does not specify one.
pub const DEFAULT_BYTE_COUNT: NonZeroU32 = NonZeroU32::new(16).unwrap();

/// Origin of the generated bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum SourceKind {
    /// OS cryptographically secure entropy API. Not seedable.
    #[default]
    Secure,
    /// Deterministic software PRNG, parameterized by a 64-bit seed.
    Prng,
    /// Deterministic ChaCha20 PRNG with a 64-bit seed and an independent
    /// 64-bit sequence stream. Reproducible across platforms.
    ChaCha,
    /// The blocking OS entropy device (`/dev/random`).
    BlockingDevice,
    /// The non-blocking OS entropy device (`/dev/urandom`).
    NonBlockingDevice,
}

impl SourceKind {
    /// Whether this source accepts an explicit seed.
    pub fn is_seedable(&self) -> bool {
        matches!(self, Self::Prng | Self::ChaCha)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Secure => write!(f, "secure"),
            Self::Prng => write!(f, "prng"),
            Self::ChaCha => write!(f, "chacha"),
            Self::BlockingDevice => write!(f, "/dev/random"),
            Self::NonBlockingDevice => write!(f, "/dev/urandom"),
        }
    }
}

/// Output representation of the generated bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Default)]
pub enum Format {
    /// Standard-alphabet base64, padded.
    Base64,
    /// URL-safe-alphabet base64, padded. Never emits `+` or `/`.
    UrlBase64,
    /// The bytes themselves, unencoded.
    Raw,
    /// Two uppercase hex digits per byte.
    HexUpper,
    /// Two lowercase hex digits per byte.
    #[default]
    HexLower,
    /// Percent-encoding: `[A-Za-z0-9_.~/-]` pass through, everything else
    /// becomes `%XX` with uppercase hex.
    UrlEncoded,
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Base64 => write!(f, "base64"),
            Self::UrlBase64 => write!(f, "url-base64"),
            Self::Raw => write!(f, "raw"),
            Self::HexUpper => write!(f, "hex-upper"),
            Self::HexLower => write!(f, "hex"),
            Self::UrlEncoded => write!(f, "url-encoded"),
        }
    }
}

/// Immutable configuration for one generation run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where the bytes come from.
    pub source: SourceKind,
    /// Explicit PRNG seed. Only valid for the deterministic sources; when
    /// absent, seedable sources draw a random seed at construction.
    pub seed: Option<u64>,
    /// Sequence stream discriminator. Only valid for [`SourceKind::ChaCha`];
    /// defaults to 0 there.
    pub sequence: Option<u64>,
    /// Output encoding.
    pub format: Format,
    /// Number of raw bytes to generate.
    pub byte_count: NonZeroU32,
    /// Insert a newline into the output after this many encoded bytes.
    pub line_width: Option<NonZeroUsize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceKind::default(),
            seed: None,
            sequence: None,
            format: Format::default(),
            byte_count: DEFAULT_BYTE_COUNT,
            line_width: None,
        }
    }
}

impl Config {
    /// Check the cross-field compatibility rules.
    ///
    /// Runs before any entropy source is constructed or any output is
    /// written, so a rejected config leaves the sink untouched.
    pub fn validate(&self, sink_is_terminal: bool) -> Result<()> {
        if self.seed.is_some() && !self.source.is_seedable() {
            return Err(Error::SeedWithoutPrng(self.source));
        }
        if self.sequence.is_some() && self.source != SourceKind::ChaCha {
            return Err(Error::SequenceWithoutChaCha(self.source));
        }
        if self.format == Format::Raw && sink_is_terminal {
            return Err(Error::RawToTerminal);
        }
        Ok(())
    }
}

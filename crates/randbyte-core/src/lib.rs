//! # randbyte-core
//!
//! Core library behind the `randbyte` CLI: generate a requested number of
//! random bytes from a selectable source and render them in a selectable
//! encoding, optionally wrapped at a fixed line width.
//!
//! ## Quick Start
//!
//! ```
//! use randbyte_core::{Config, Format, Generator, SourceKind};
//! use std::num::NonZeroU32;
//!
//! let config = Config {
//!     source: SourceKind::ChaCha,
//!     seed: Some(42),
//!     byte_count: NonZeroU32::new(32).unwrap(),
//!     format: Format::HexLower,
//!     ..Config::default()
//! };
//!
//! let mut out = Vec::new();
//! Generator::new(config).run(&mut out, false).unwrap();
//! assert_eq!(out.len(), 64); // two hex digits per byte
//! ```
//!
//! ## Architecture
//!
//! Config → ByteSource.fill(buffer) → Codec.encode(buffer) → sink
//!
//! Every source implements the [`ByteSource`] trait and every output format
//! implements the [`Codec`] trait, so each stage can be tested in isolation.
//! The [`Generator`] wires them together for exactly one run. Line wrapping
//! is a decorator over the output sink ([`LineWriter`]), never a concern of
//! the codecs themselves.

pub mod codec;
pub mod config;
pub mod error;
pub mod generator;
pub mod source;
pub mod sources;
pub mod wrap;

pub use codec::Codec;
pub use config::{Config, DEFAULT_BYTE_COUNT, Format, SourceKind};
pub use error::{Error, Result};
pub use generator::Generator;
pub use source::ByteSource;
pub use wrap::LineWriter;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! CLI for randbyte: emit random bytes from a selectable source in a
//! selectable encoding.
//!
//! Flag parsing stays here; everything behind the typed [`Config`] lives in
//! `randbyte-core`. Mutual exclusion inside the source and format flag
//! groups is clap's job; cross-field rules (seed/sequence compatibility,
//! raw-to-terminal refusal) are validated by the core before any output.

use std::io::{self, IsTerminal, Write};
use std::num::{NonZeroU32, NonZeroUsize};
use std::process::ExitCode;

use clap::Parser;

use randbyte_core::{Config, DEFAULT_BYTE_COUNT, Format, Generator, SourceKind};

#[derive(Parser)]
#[command(name = "randbyte")]
#[command(about = "Emit random bytes from a selectable entropy source")]
#[command(version = randbyte_core::VERSION)]
struct Cli {
    /// Number of random bytes to generate
    #[arg(value_name = "COUNT", default_value_t = DEFAULT_BYTE_COUNT)]
    count: NonZeroU32,

    /// Use the OS secure random API (default)
    #[arg(long, group = "source")]
    secure: bool,

    /// Use a seedable deterministic PRNG
    #[arg(long, group = "source")]
    prng: bool,

    /// Use the seedable ChaCha20 PRNG with sequence streams
    #[arg(long, group = "source")]
    chacha: bool,

    /// Read from the blocking entropy device (/dev/random)
    #[arg(long, group = "source")]
    random: bool,

    /// Read from the non-blocking entropy device (/dev/urandom)
    #[arg(long, group = "source")]
    urandom: bool,

    /// PRNG seed (deterministic sources only)
    #[arg(long, value_name = "U64")]
    seed: Option<u64>,

    /// Sequence stream discriminator (--chacha only)
    #[arg(long, value_name = "U64")]
    sequence: Option<u64>,

    /// Encode as standard base64
    #[arg(long, group = "format")]
    base64: bool,

    /// Encode as URL-safe base64
    #[arg(long, group = "format")]
    url_base64: bool,

    /// Write the raw bytes unencoded (refused on a terminal)
    #[arg(long, group = "format")]
    raw: bool,

    /// Encode as uppercase hex
    #[arg(long, group = "format")]
    hex_upper: bool,

    /// Encode as lowercase hex (default)
    #[arg(long, group = "format")]
    hex: bool,

    /// Percent-encode the bytes
    #[arg(long, group = "format")]
    url_encode: bool,

    /// Insert a newline after every WIDTH output bytes
    #[arg(long, value_name = "WIDTH")]
    line_feed: Option<NonZeroUsize>,
}

impl Cli {
    fn source(&self) -> SourceKind {
        if self.prng {
            SourceKind::Prng
        } else if self.chacha {
            SourceKind::ChaCha
        } else if self.random {
            SourceKind::BlockingDevice
        } else if self.urandom {
            SourceKind::NonBlockingDevice
        } else {
            SourceKind::Secure
        }
    }

    fn format(&self) -> Format {
        if self.base64 {
            Format::Base64
        } else if self.url_base64 {
            Format::UrlBase64
        } else if self.raw {
            Format::Raw
        } else if self.hex_upper {
            Format::HexUpper
        } else if self.url_encode {
            Format::UrlEncoded
        } else {
            Format::HexLower
        }
    }

    fn into_config(self) -> Config {
        Config {
            source: self.source(),
            format: self.format(),
            seed: self.seed,
            sequence: self.sequence,
            byte_count: self.count,
            line_width: self.line_feed,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let generator = Generator::new(cli.into_config());

    let stdout = io::stdout();
    let is_terminal = stdout.is_terminal();
    let mut out = stdout.lock();

    if let Err(e) = generator.run(&mut out, is_terminal) {
        let _ = out.flush();
        eprintln!("randbyte: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

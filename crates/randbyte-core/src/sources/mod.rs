//! Concrete byte source implementations and the source factory.

pub mod device;
pub mod os;
pub mod prng;

pub use device::{DeviceSource, RANDOM_DEVICE, URANDOM_DEVICE};
pub use os::OsSource;
pub use prng::{ChaChaSource, PrngSource};

use crate::config::{Config, SourceKind};
use crate::error::Result;
use crate::source::ByteSource;

/// Construct the byte source selected by `config`.
///
/// Device-backed variants open their device file here, so this is the first
/// point a fatal I/O error can occur.
pub fn build(config: &Config) -> Result<Box<dyn ByteSource>> {
    Ok(match config.source {
        SourceKind::Secure => Box::new(OsSource),
        SourceKind::Prng => Box::new(PrngSource::new(config.seed)),
        SourceKind::ChaCha => Box::new(ChaChaSource::new(config.seed, config.sequence)),
        SourceKind::BlockingDevice => Box::new(DeviceSource::open(RANDOM_DEVICE)?),
        SourceKind::NonBlockingDevice => Box::new(DeviceSource::open(URANDOM_DEVICE)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prng_sources_without_io() {
        for source in [SourceKind::Secure, SourceKind::Prng, SourceKind::ChaCha] {
            let config = Config {
                source,
                ..Config::default()
            };
            assert!(build(&config).is_ok());
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_build_nonblocking_device_and_fill() {
        let config = Config {
            source: SourceKind::NonBlockingDevice,
            ..Config::default()
        };
        let mut src = build(&config).unwrap();
        let mut buf = [0u8; 8];
        src.fill(&mut buf).unwrap();
    }

    // Open only: reading /dev/random can block on a starved pool.
    #[cfg(unix)]
    #[test]
    fn test_build_blocking_device_opens() {
        let config = Config {
            source: SourceKind::BlockingDevice,
            ..Config::default()
        };
        assert!(build(&config).is_ok());
    }
}

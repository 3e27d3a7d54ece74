//! Device-backed entropy sources.
//!
//! Opens an OS entropy device read-only and reads exactly as many bytes as
//! requested. Blocking semantics are the device's business: `/dev/random`
//! may block while the kernel pool is starved, `/dev/urandom` never does.
//! No timeout and no retry; a device that hits EOF early is a fatal error.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::source::ByteSource;

/// The blocking OS entropy device.
pub const RANDOM_DEVICE: &str = "/dev/random";

/// The non-blocking OS entropy device.
pub const URANDOM_DEVICE: &str = "/dev/urandom";

/// Byte source reading from an entropy device file.
#[derive(Debug)]
pub struct DeviceSource {
    path: String,
    file: File,
}

impl DeviceSource {
    /// Open the device at `path` read-only.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::DeviceOpen {
            path: path.display().to_string(),
            source,
        })?;
        debug!("opened entropy device {}", path.display());
        Ok(Self {
            path: path.display().to_string(),
            file,
        })
    }
}

impl ByteSource for DeviceSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let want = buf.len();
        let mut got = 0;
        while got < want {
            match self.file.read(&mut buf[got..]) {
                Ok(0) => {
                    return Err(Error::DeviceExhausted {
                        path: self.path.clone(),
                        want,
                        got,
                    });
                }
                Ok(n) => got += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(())
    }
}

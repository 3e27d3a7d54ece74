//! OS secure random source.
//!
//! Delegates to the platform CSPRNG through the `getrandom` crate, which
//! picks the right syscall per platform (`getrandom(2)`, `getentropy`, ...).
//! Not seedable. A failure here means the platform itself is broken and is
//! propagated as fatal rather than retried.

use crate::error::{Error, Result};
use crate::source::ByteSource;

/// Byte source backed by the OS cryptographically secure entropy API.
pub struct OsSource;

impl ByteSource for OsSource {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        getrandom::fill(buf).map_err(Error::OsRandom)
    }
}

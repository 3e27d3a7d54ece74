//! Abstract byte source trait.
//!
//! Every origin of random bytes implements [`ByteSource`]: fill a caller
//! owned buffer completely, or fail. Concrete variants live in
//! [`crate::sources`].

use crate::error::Result;

/// A producer of raw random bytes.
pub trait ByteSource {
    /// Populate every byte of `buf`.
    ///
    /// On error the buffer contents are unspecified and must not be used.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

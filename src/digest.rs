//! Content digests for file equality comparison.
//!
//! Digests only answer "do these two files hold the same bytes"; they are
//! never used for any security purpose.

use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    pub fn of_bytes(bytes: &[u8]) -> Self {
        Self(*blake3::hash(bytes).as_bytes())
    }

    pub async fn of_file(path: &Path) -> io::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(Self::of_bytes(&bytes))
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

//! Content fingerprints for change detection.
//!
//! A fingerprint is a 64-bit xxHash of the source content, encoded as base64
//! of its big-endian bytes. It is embedded as the first line of every
//! generated file so a later run can tell whether the source changed.

use std::fmt;

use base64::{Engine, engine::general_purpose::STANDARD};
use xxhash_rust::xxh64::xxh64;

/// Prefix of the marker line carrying the fingerprint.
pub const HASH_MARKER_PREFIX: &str = "//#hash:";

/// Fast, non-cryptographic content hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Hash the given content.
    pub fn of(content: impl AsRef<[u8]>) -> Self {
        Self(xxh64(content.as_ref(), 0))
    }

    /// Base64 encoding of the big-endian hash bytes.
    pub fn encode(&self) -> String {
        STANDARD.encode(self.0.to_be_bytes())
    }

    /// Decode a base64-encoded fingerprint.
    pub fn decode(encoded: &str) -> Option<Self> {
        let bytes = STANDARD.decode(encoded.trim()).ok()?;
        let bytes: [u8; 8] = bytes.try_into().ok()?;
        Some(Self(u64::from_be_bytes(bytes)))
    }

    /// The full marker line, without a trailing newline.
    pub fn marker_line(&self) -> String {
        format!("{}{}", HASH_MARKER_PREFIX, self.encode())
    }

    /// Parse a marker line. Returns `None` when the line is not a marker or
    /// carries an undecodable hash.
    pub fn from_marker_line(line: &str) -> Option<Self> {
        let encoded = line.trim_end_matches(['\r', '\n']).strip_prefix(HASH_MARKER_PREFIX)?;
        Self::decode(encoded)
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

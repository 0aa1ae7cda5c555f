//! Opaque record identifiers.

use std::{fmt, str::FromStr};

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;
use uuid::Uuid;

/// Number of raw bytes in an identifier.
const OBJECT_ID_BYTES: usize = 12;

/// Length of the hexadecimal text form.
pub const OBJECT_ID_HEX_LEN: usize = OBJECT_ID_BYTES * 2;

/// Error returned when text is not a well-formed identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid object id: {0:?}")]
pub struct ParseObjectIdError(pub String);

/// A 12-byte record identifier rendered as 24 lowercase hex characters.
///
/// The first four bytes hold the creation time in seconds (big-endian) and
/// the remaining eight are random, so identifiers minted later compare
/// greater at second granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId([u8; OBJECT_ID_BYTES]);

impl ObjectId {
    /// Mints a fresh identifier.
    pub fn new() -> Self {
        let seconds = u32::try_from(Utc::now().timestamp()).unwrap_or(u32::MAX);
        let random = Uuid::new_v4().into_bytes();

        let mut bytes = [0u8; OBJECT_ID_BYTES];
        bytes[..4].copy_from_slice(&seconds.to_be_bytes());
        bytes[4..].copy_from_slice(&random[..8]);
        Self(bytes)
    }

    /// Builds an identifier from its raw bytes.
    pub const fn from_bytes(bytes: [u8; OBJECT_ID_BYTES]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    pub const fn bytes(&self) -> [u8; OBJECT_ID_BYTES] {
        self.0
    }

    /// Returns true if `raw` has the identifier's syntax. Existence is not
    /// checked.
    pub fn is_valid(raw: &str) -> bool {
        raw.len() == OBJECT_ID_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !Self::is_valid(s) {
            return Err(ParseObjectIdError(s.to_string()));
        }

        let mut bytes = [0u8; OBJECT_ID_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16)
                .map_err(|_| ParseObjectIdError(s.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl Serialize for ObjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ObjectId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

//! # Document Identifiers
//!
//! Every stored document is keyed by a 12-byte ObjectId. On the wire the
//! identifier travels as its 24-character hexadecimal form; in the database it
//! keeps the native ObjectId type.

use std::fmt;
use std::str::FromStr;

use bson::oid::ObjectId;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Length of the external hexadecimal form
pub const HEX_LEN: usize = 24;

/// Identifier decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// Text is not a 24-character hexadecimal ObjectId
    #[error("invalid identifier: {0:?}")]
    InvalidIdentifier(String),
}

/// Opaque document identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(ObjectId);

impl DocumentId {
    /// Allocate a fresh identifier
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Decode the external hexadecimal form
    pub fn parse(text: &str) -> Result<Self, IdError> {
        if text.len() != HEX_LEN {
            return Err(IdError::InvalidIdentifier(text.to_string()));
        }

        ObjectId::parse_str(text)
            .map(Self)
            .map_err(|_| IdError::InvalidIdentifier(text.to_string()))
    }

    /// Encode to the external hexadecimal form
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }

    /// Native store key
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for DocumentId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for DocumentId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(de::Error::custom)
    }
}

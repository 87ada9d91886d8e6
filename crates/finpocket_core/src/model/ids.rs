//! Record identifiers
//!
//! Ids are opaque strings. Uniqueness within a collection is the only hard
//! requirement, so the generator is a trait: UUID v4 in production and a
//! deterministic counter in tests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a stored record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId(value)
    }
}

/// Source of fresh record ids
pub trait IdGenerator {
    fn next_id(&mut self) -> RecordId;
}

/// Random UUID v4 ids
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> RecordId {
        RecordId(uuid::Uuid::new_v4().to_string())
    }
}

/// Deterministic ids (`{prefix}-1`, `{prefix}-2`, ...)
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> RecordId {
        let id = RecordId(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

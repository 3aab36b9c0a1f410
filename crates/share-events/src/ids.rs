//! Identifier Types
//!
//! Newtype handles shared between the simulation core and anything reading
//! its output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arena handle for an agent slot in the network.
///
/// Handed out when an agent is added, whether or not it is registered.
/// Stable for the whole run since agents are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentKey(pub usize);

impl AgentKey {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for AgentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "agent#{}", self.0)
    }
}

/// Public identity assigned by the network on registration (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl UserId {
    /// The first id handed out by a fresh network
    pub const FIRST: UserId = UserId(1);

    pub fn next(self) -> Self {
        UserId(self.0 + 1)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Handle of a document in the network's document index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(pub usize);

impl DocumentId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc#{}", self.0)
    }
}

/// Category tag used to bias document discovery and liking
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Taste(pub String);

impl Taste {
    pub fn new(taste: impl Into<String>) -> Self {
        Self(taste.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Taste {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Taste {
    fn from(taste: &str) -> Self {
        Self(taste.to_string())
    }
}

impl From<String> for Taste {
    fn from(taste: String) -> Self {
        Self(taste)
    }
}

//! Error Types
//!
//! Failures surfaced by network operations.

use share_events::{AgentKey, DocumentId, UserId};
use thiserror::Error;

/// Errors from simulation operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("no agent with key {0}")]
    UnknownAgent(AgentKey),

    #[error("no document with id {0}")]
    UnknownDocument(DocumentId),

    /// A document listener handle did not resolve while dispatching a like
    #[error("listener {listener} on {document} does not resolve to an agent")]
    UnknownListener {
        listener: AgentKey,
        document: DocumentId,
    },

    #[error("{0} has no producer capability")]
    NotAProducer(AgentKey),

    #[error("{key} is already registered as user {user_id}")]
    AlreadyRegistered { key: AgentKey, user_id: UserId },
}

pub type SimResult<T> = Result<T, SimError>;

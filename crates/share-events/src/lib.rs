//! Shared event types and serialization for the file-sharing simulation.
//!
//! This crate contains pure data structures with no simulation logic.
//! It is a dependency for all other crates in the workspace.

pub mod event;
pub mod ids;
pub mod snapshot;

// Re-export identifier types
pub use ids::{AgentKey, DocumentId, Taste, UserId};

// Re-export event types
pub use event::{DocumentLikeEvent, EventType, LogEntry, NetworkEvent};

// Re-export snapshot types
pub use snapshot::{
    generate_snapshot_id, AgentRole, AgentSnapshot, DocumentSnapshot, NetworkSnapshot,
};

//! Snapshot Types
//!
//! Serialization structs for network snapshots.
//!
//! A snapshot captures every agent and document at the end of an iteration,
//! used for the run report and for determinism checks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ids::{AgentKey, DocumentId, Taste, UserId};

/// Generates a snapshot ID with the given sequence number.
pub fn generate_snapshot_id(sequence: u64) -> String {
    format!("snap_{:06}", sequence)
}

/// Whether an agent carries the producer capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Consumer,
    Producer,
}

/// Agent snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentSnapshot {
    pub key: AgentKey,
    /// None while the agent is unregistered
    pub user_id: Option<UserId>,
    pub name: String,
    pub taste: Taste,
    pub role: AgentRole,
    /// Act strategy name, producers only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub act_strategy: Option<String>,
    #[serde(default)]
    pub followers: Vec<AgentKey>,
    #[serde(default)]
    pub following: Vec<AgentKey>,
    #[serde(default)]
    pub liked_documents: Vec<DocumentId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documents_produced: Vec<DocumentId>,
    pub payoff: u32,
    #[serde(default)]
    pub payoff_history: Vec<u32>,
}

/// Document snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub id: DocumentId,
    pub name: String,
    pub taste: Taste,
    pub producer: AgentKey,
    #[serde(default)]
    pub likes: Vec<AgentKey>,
}

/// Complete network state at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub snapshot_id: String,
    /// Identifies the run this snapshot belongs to
    pub run_id: Uuid,
    /// Number of iterations completed when the snapshot was taken
    pub iteration: u64,
    pub agents: Vec<AgentSnapshot>,
    pub documents: Vec<DocumentSnapshot>,
}

impl NetworkSnapshot {
    pub fn agent_by_name(&self, name: &str) -> Option<&AgentSnapshot> {
        self.agents.iter().find(|a| a.name == name)
    }

    pub fn producers(&self) -> impl Iterator<Item = &AgentSnapshot> {
        self.agents.iter().filter(|a| a.role == AgentRole::Producer)
    }

    /// Total likes across all documents
    pub fn total_likes(&self) -> usize {
        self.documents.iter().map(|d| d.likes.len()).sum()
    }

    /// Highest-payoff agent, earliest key winning ties
    pub fn top_agent(&self) -> Option<&AgentSnapshot> {
        self.agents
            .iter()
            .max_by(|a, b| a.payoff.cmp(&b.payoff).then(b.key.cmp(&a.key)))
    }
}

//! Agents
//!
//! An agent is a user record with an optional producer capability attached.
//! Agents without one are consumers.

pub mod producer;
pub mod user;

pub use producer::Producer;
pub use user::User;

use share_events::{AgentRole, Taste};

/// A participant in the network
#[derive(Debug)]
pub struct Agent {
    user: User,
    producer: Option<Producer>,
}

impl Agent {
    /// An unregistered consumer
    pub fn consumer(name: impl Into<String>, taste: impl Into<Taste>) -> Self {
        Self {
            user: User::new(name, taste),
            producer: None,
        }
    }

    /// An unregistered producer with default strategies
    pub fn producer(name: impl Into<String>, taste: impl Into<Taste>) -> Self {
        Self::producer_with(name, taste, Producer::default())
    }

    pub fn producer_with(
        name: impl Into<String>,
        taste: impl Into<Taste>,
        producer: Producer,
    ) -> Self {
        Self {
            user: User::new(name, taste),
            producer: Some(producer),
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub(crate) fn user_mut(&mut self) -> &mut User {
        &mut self.user
    }

    pub fn producer_capability(&self) -> Option<&Producer> {
        self.producer.as_ref()
    }

    pub(crate) fn producer_capability_mut(&mut self) -> Option<&mut Producer> {
        self.producer.as_mut()
    }

    pub fn is_producer(&self) -> bool {
        self.producer.is_some()
    }

    pub fn role(&self) -> AgentRole {
        if self.is_producer() {
            AgentRole::Producer
        } else {
            AgentRole::Consumer
        }
    }

    pub fn name(&self) -> &str {
        self.user.name()
    }
}

/// Producers compare equal when their users match and they have produced
/// the same number of documents; which documents is not considered.
impl PartialEq for Agent {
    fn eq(&self, other: &Self) -> bool {
        if self.user != other.user {
            return false;
        }
        match (&self.producer, &other.producer) {
            (Some(a), Some(b)) => a.document_count() == b.document_count(),
            (None, None) => true,
            _ => false,
        }
    }
}

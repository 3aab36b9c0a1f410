//! Documents
//!
//! A document has a fixed producer and taste, and a growing set of users who
//! liked it. Listeners are handles to agents notified on every new like.

use std::collections::BTreeSet;

use share_events::{AgentKey, DocumentId, DocumentLikeEvent, Taste};

/// Upper bound (exclusive) of the random discriminator in generated names
pub const NAME_DISCRIMINATOR_RANGE: u32 = 500;

/// Builds a document name from its taste and a discriminator
pub fn document_name(taste: &Taste, discriminator: u32) -> String {
    format!("Document {} ({})", taste, discriminator)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    id: DocumentId,
    /// Informational only, not unique
    name: String,
    taste: Taste,
    producer: AgentKey,
    likes: BTreeSet<AgentKey>,
    /// Notified in registration order
    listeners: Vec<AgentKey>,
}

impl Document {
    pub fn new(id: DocumentId, name: impl Into<String>, taste: Taste, producer: AgentKey) -> Self {
        Self {
            id,
            name: name.into(),
            taste,
            producer,
            likes: BTreeSet::new(),
            listeners: Vec::new(),
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn taste(&self) -> &Taste {
        &self.taste
    }

    pub fn producer(&self) -> AgentKey {
        self.producer
    }

    pub fn user_likes(&self) -> &BTreeSet<AgentKey> {
        &self.likes
    }

    pub fn like_count(&self) -> usize {
        self.likes.len()
    }

    pub fn is_liked_by(&self, user: AgentKey) -> bool {
        self.likes.contains(&user)
    }

    /// Record a like from `user`.
    ///
    /// Returns the event to dispatch to listeners, or None if `user` had
    /// already liked this document.
    pub fn like(&mut self, user: AgentKey) -> Option<DocumentLikeEvent> {
        if self.likes.insert(user) {
            Some(DocumentLikeEvent::new(self.id, user))
        } else {
            None
        }
    }

    /// Register a listener. Returns false if it was already registered.
    pub fn add_listener(&mut self, listener: AgentKey) -> bool {
        if self.listeners.contains(&listener) {
            return false;
        }
        self.listeners.push(listener);
        true
    }

    pub fn listeners(&self) -> &[AgentKey] {
        &self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::new(DocumentId(0), "Document sports (7)", Taste::new("sports"), AgentKey(1))
    }

    #[test]
    fn test_document_name_format() {
        assert_eq!(document_name(&Taste::new("sports"), 42), "Document sports (42)");
    }

    #[test]
    fn test_like_emits_event_once() {
        let mut doc = sample();

        let event = doc.like(AgentKey(3)).unwrap();
        assert_eq!(event.document, DocumentId(0));
        assert_eq!(event.liking_user, AgentKey(3));

        assert!(doc.like(AgentKey(3)).is_none());
        assert_eq!(doc.like_count(), 1);
        assert!(doc.is_liked_by(AgentKey(3)));
    }

    #[test]
    fn test_listeners_keep_registration_order() {
        let mut doc = sample();
        assert!(doc.add_listener(AgentKey(5)));
        assert!(doc.add_listener(AgentKey(2)));
        assert!(!doc.add_listener(AgentKey(5)));
        assert_eq!(doc.listeners(), &[AgentKey(5), AgentKey(2)]);
    }

    #[test]
    fn test_producer_is_fixed() {
        let mut doc = sample();
        doc.like(AgentKey(9));
        assert_eq!(doc.producer(), AgentKey(1));
        assert_eq!(doc.taste().as_str(), "sports");
    }
}

//! Event Types
//!
//! The like notification passed to document listeners, and the records the
//! network writes to its log sink.

use serde::{Deserialize, Serialize};

use crate::ids::{AgentKey, DocumentId};

/// Emitted at the moment a like is recorded on a document.
///
/// Not persisted; listeners receive it synchronously before the like call
/// returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLikeEvent {
    pub document: DocumentId,
    pub liking_user: AgentKey,
}

impl DocumentLikeEvent {
    pub fn new(document: DocumentId, liking_user: AgentKey) -> Self {
        Self {
            document,
            liking_user,
        }
    }
}

/// Event type categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    DocumentLiked,
    Followed,
}

impl EventType {
    /// Returns all event type variants.
    pub fn all() -> &'static [EventType] {
        &[EventType::DocumentLiked, EventType::Followed]
    }
}

/// A change in a producer's standing, as written to the log sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NetworkEvent {
    /// A user liked a document; `payoff` is the producer's updated payoff
    DocumentLiked {
        document: DocumentId,
        liking_user: AgentKey,
        producer: AgentKey,
        payoff: u32,
    },
    /// A producer gained a follower; `payoff` is the producer's updated payoff
    Followed {
        follower: AgentKey,
        producer: AgentKey,
        payoff: u32,
    },
}

impl NetworkEvent {
    pub fn event_type(&self) -> EventType {
        match self {
            NetworkEvent::DocumentLiked { .. } => EventType::DocumentLiked,
            NetworkEvent::Followed { .. } => EventType::Followed,
        }
    }
}

/// A single line handed to the log sink: human-readable message plus the
/// structured event it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Iteration during which the event happened
    pub iteration: u64,
    pub message: String,
    pub event: NetworkEvent,
}

impl LogEntry {
    pub fn new(iteration: u64, message: impl Into<String>, event: NetworkEvent) -> Self {
        Self {
            iteration,
            message: message.into(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_mapping() {
        let event = NetworkEvent::DocumentLiked {
            document: DocumentId(0),
            liking_user: AgentKey(0),
            producer: AgentKey(0),
            payoff: 1,
        };
        assert_eq!(event.event_type(), EventType::DocumentLiked);

        let event = NetworkEvent::Followed {
            follower: AgentKey(1),
            producer: AgentKey(0),
            payoff: 2,
        };
        assert_eq!(event.event_type(), EventType::Followed);
    }

    #[test]
    fn test_network_event_tagged_serialization() {
        let event = NetworkEvent::DocumentLiked {
            document: DocumentId(4),
            liking_user: AgentKey(2),
            producer: AgentKey(1),
            payoff: 5,
        };

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "document_liked");
        assert_eq!(json["document"], 4);
        assert_eq!(json["payoff"], 5);
    }

    #[test]
    fn test_log_entry_parses_back() {
        let entry = LogEntry::new(
            3,
            "Bob has been followed by Alice. Updated Producer Payoff: 2",
            NetworkEvent::Followed {
                follower: AgentKey(0),
                producer: AgentKey(1),
                payoff: 2,
            },
        );

        let line = serde_json::to_string(&entry).unwrap();
        let parsed: LogEntry = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, entry);
    }
}

//! User Record
//!
//! Identity, social links, like bookkeeping and payoff history shared by
//! every agent.

use std::collections::BTreeSet;

use share_events::{AgentKey, DocumentId, Taste, UserId};

/// Base agent record
#[derive(Debug, Clone)]
pub struct User {
    /// Assigned by the network; None until registered
    user_id: Option<UserId>,
    /// Display label, not guaranteed unique
    name: String,
    taste: Taste,
    /// Agents following this one
    followers: BTreeSet<AgentKey>,
    /// Agents this one follows
    following: BTreeSet<AgentKey>,
    liked_documents: BTreeSet<DocumentId>,
    /// One entry per completed iteration, indexed by iteration number
    payoff_history: Vec<u32>,
}

impl User {
    pub fn new(name: impl Into<String>, taste: impl Into<Taste>) -> Self {
        Self {
            user_id: None,
            name: name.into(),
            taste: taste.into(),
            followers: BTreeSet::new(),
            following: BTreeSet::new(),
            liked_documents: BTreeSet::new(),
            payoff_history: Vec::new(),
        }
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    pub fn is_registered(&self) -> bool {
        self.user_id.is_some()
    }

    pub(crate) fn assign_id(&mut self, user_id: UserId) {
        self.user_id = Some(user_id);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn taste(&self) -> &Taste {
        &self.taste
    }

    /// Add `follower` unless it is this user (`own_key`) or already present.
    /// Returns whether the follower set changed.
    pub fn add_follower(&mut self, own_key: AgentKey, follower: AgentKey) -> bool {
        if follower == own_key {
            return false;
        }
        self.followers.insert(follower)
    }

    pub(crate) fn start_following(&mut self, target: AgentKey) -> bool {
        self.following.insert(target)
    }

    pub fn followers(&self) -> &BTreeSet<AgentKey> {
        &self.followers
    }

    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    pub fn following(&self) -> &BTreeSet<AgentKey> {
        &self.following
    }

    pub fn is_following(&self, target: AgentKey) -> bool {
        self.following.contains(&target)
    }

    /// Remember a liked document. Returns false if it was already liked.
    pub fn record_like(&mut self, document: DocumentId) -> bool {
        self.liked_documents.insert(document)
    }

    pub fn has_liked(&self, document: DocumentId) -> bool {
        self.liked_documents.contains(&document)
    }

    pub fn liked_documents(&self) -> &BTreeSet<DocumentId> {
        &self.liked_documents
    }

    pub fn payoff_history(&self) -> &[u32] {
        &self.payoff_history
    }

    /// Append `payoff` only when `iteration` is the next unrecorded index.
    ///
    /// Stale and future indices are ignored, so repeated calls within one
    /// iteration append at most once.
    pub fn record_payoff(&mut self, iteration: u64, payoff: u32) -> bool {
        if iteration != self.payoff_history.len() as u64 {
            return false;
        }
        self.payoff_history.push(payoff);
        true
    }
}

/// Users are equal when their identity fields match
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.user_id == other.user_id && self.name == other.name && self.taste == other.taste
    }
}

impl Eq for User {}

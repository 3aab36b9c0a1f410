//! Payoff Strategies
//!
//! How a producer's standing in the network turns into an integer payoff.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Weight constants for the default producer payoff
pub mod payoff_weights {
    /// Points per follower
    pub const FOLLOWER_WEIGHT: u32 = 2;
    /// Points per like on any produced document
    pub const LIKE_WEIGHT: u32 = 1;
}

/// What a payoff strategy gets to see of a producer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProducerStanding {
    pub followers: usize,
    /// Like count of each produced document, in production order
    pub likes_per_document: Vec<usize>,
}

impl ProducerStanding {
    pub fn new(followers: usize, likes_per_document: Vec<usize>) -> Self {
        Self {
            followers,
            likes_per_document,
        }
    }

    pub fn total_likes(&self) -> usize {
        self.likes_per_document.iter().sum()
    }
}

/// Computes a producer's payoff.
///
/// Implementations must return a value that never decreases when followers
/// or likes are added.
pub trait PayoffStrategy: fmt::Debug {
    fn compute_payoff(&self, standing: &ProducerStanding) -> u32;

    /// Short label used in logs and snapshots
    fn name(&self) -> &str {
        "custom"
    }
}

/// Built-in payoff strategies, selectable from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProducerPayoff {
    /// Two points per follower, one per like
    #[default]
    Default,
    /// Caller-chosen weights
    Weighted {
        follower_weight: u32,
        like_weight: u32,
    },
}

impl ProducerPayoff {
    /// (follower weight, like weight)
    pub fn weights(&self) -> (u32, u32) {
        match self {
            ProducerPayoff::Default => (
                payoff_weights::FOLLOWER_WEIGHT,
                payoff_weights::LIKE_WEIGHT,
            ),
            ProducerPayoff::Weighted {
                follower_weight,
                like_weight,
            } => (*follower_weight, *like_weight),
        }
    }
}

impl PayoffStrategy for ProducerPayoff {
    fn compute_payoff(&self, standing: &ProducerStanding) -> u32 {
        let (follower_weight, like_weight) = self.weights();
        let followers = saturating_u32(standing.followers).saturating_mul(follower_weight);
        let likes = saturating_u32(standing.total_likes()).saturating_mul(like_weight);
        followers.saturating_add(likes)
    }

    fn name(&self) -> &str {
        match self {
            ProducerPayoff::Default => "default",
            ProducerPayoff::Weighted { .. } => "weighted",
        }
    }
}

/// Consumer payoff: one point per liked document matching the consumer's taste
pub fn consumer_payoff(matching_likes: usize) -> u32 {
    saturating_u32(matching_likes)
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

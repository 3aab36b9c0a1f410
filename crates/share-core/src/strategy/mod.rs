//! Strategies
//!
//! Pluggable payoff computation and per-iteration act policies.

pub mod act;
pub mod payoff;

pub use act::{consumer_act, ActSummary, ProducerActStrategy};
pub use payoff::{consumer_payoff, payoff_weights, PayoffStrategy, ProducerPayoff, ProducerStanding};

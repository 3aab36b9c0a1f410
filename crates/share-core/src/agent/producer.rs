//! Producer Capability
//!
//! Document authorship plus the payoff and act strategies a producer runs.

use share_events::DocumentId;

use crate::strategy::{PayoffStrategy, ProducerActStrategy, ProducerPayoff, ProducerStanding};

/// Producer-only state, attached to an agent's user record
#[derive(Debug)]
pub struct Producer {
    /// In creation order
    documents_produced: Vec<DocumentId>,
    payoff_strategy: Box<dyn PayoffStrategy>,
    act_strategy: ProducerActStrategy,
}

impl Default for Producer {
    fn default() -> Self {
        Self::new(Box::new(ProducerPayoff::Default), ProducerActStrategy::Default)
    }
}

impl Producer {
    pub fn new(payoff_strategy: Box<dyn PayoffStrategy>, act_strategy: ProducerActStrategy) -> Self {
        Self {
            documents_produced: Vec::new(),
            payoff_strategy,
            act_strategy,
        }
    }

    pub fn with_payoff_strategy(mut self, payoff_strategy: Box<dyn PayoffStrategy>) -> Self {
        self.payoff_strategy = payoff_strategy;
        self
    }

    pub fn with_act_strategy(mut self, act_strategy: ProducerActStrategy) -> Self {
        self.act_strategy = act_strategy;
        self
    }

    pub fn documents_produced(&self) -> &[DocumentId] {
        &self.documents_produced
    }

    pub fn document_count(&self) -> usize {
        self.documents_produced.len()
    }

    pub(crate) fn push_document(&mut self, document: DocumentId) {
        self.documents_produced.push(document);
    }

    pub fn act_strategy(&self) -> ProducerActStrategy {
        self.act_strategy
    }

    /// Replace the act strategy. `None` keeps the current one.
    pub fn set_act_strategy(&mut self, act_strategy: Option<ProducerActStrategy>) {
        if let Some(strategy) = act_strategy {
            self.act_strategy = strategy;
        }
    }

    pub fn payoff_strategy(&self) -> &dyn PayoffStrategy {
        self.payoff_strategy.as_ref()
    }

    pub fn set_payoff_strategy(&mut self, payoff_strategy: Box<dyn PayoffStrategy>) {
        self.payoff_strategy = payoff_strategy;
    }

    pub fn calculate_payoff(&self, standing: &ProducerStanding) -> u32 {
        self.payoff_strategy.compute_payoff(standing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct FlatPayoff(u32);

    impl PayoffStrategy for FlatPayoff {
        fn compute_payoff(&self, _standing: &ProducerStanding) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_defaults() {
        let producer = Producer::default();
        assert_eq!(producer.act_strategy(), ProducerActStrategy::Default);
        assert_eq!(producer.payoff_strategy().name(), "default");
        assert!(producer.documents_produced().is_empty());
    }

    #[test]
    fn test_set_act_strategy_none_is_noop() {
        let mut producer = Producer::default().with_act_strategy(ProducerActStrategy::ProduceOnly);
        producer.set_act_strategy(None);
        assert_eq!(producer.act_strategy(), ProducerActStrategy::ProduceOnly);

        producer.set_act_strategy(Some(ProducerActStrategy::LikeSimilarDocuments));
        assert_eq!(producer.act_strategy(), ProducerActStrategy::LikeSimilarDocuments);
    }

    #[test]
    fn test_custom_payoff_strategy_is_used() {
        let producer = Producer::default().with_payoff_strategy(Box::new(FlatPayoff(11)));
        let standing = ProducerStanding::new(4, vec![3]);
        assert_eq!(producer.calculate_payoff(&standing), 11);
        assert_eq!(producer.payoff_strategy().name(), "custom");
    }

    #[test]
    fn test_documents_keep_creation_order() {
        let mut producer = Producer::default();
        producer.push_document(DocumentId(5));
        producer.push_document(DocumentId(2));
        assert_eq!(producer.documents_produced(), &[DocumentId(5), DocumentId(2)]);
        assert_eq!(producer.document_count(), 2);
    }
}

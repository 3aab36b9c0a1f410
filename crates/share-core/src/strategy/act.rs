//! Act Strategies
//!
//! What an agent does with the network once its own document (if any) is
//! uploaded. Producers pick one of a fixed set of policies; consumers always
//! run the same one.

use serde::{Deserialize, Serialize};
use share_events::{AgentKey, DocumentId, Taste};

use crate::error::SimResult;
use crate::network::FileSharingSystem;

/// Producer interaction policy, chosen at configuration time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProducerActStrategy {
    /// Like matching top-k documents and follow everyone who liked them
    #[default]
    Default,
    /// Like matching top-k documents only
    LikeSimilarDocuments,
    /// Follow the producers of matching top-k documents only
    FollowSimilarProducers,
    /// Upload and stop
    ProduceOnly,
}

/// Interactions performed during one act
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActSummary {
    /// New likes given, including the self-like on a fresh document
    pub likes_given: usize,
    /// New follows given
    pub follows_given: usize,
}

impl ActSummary {
    pub fn merge(&mut self, other: ActSummary) {
        self.likes_given += other.likes_given;
        self.follows_given += other.follows_given;
    }
}

impl ProducerActStrategy {
    pub fn all() -> &'static [ProducerActStrategy] {
        &[
            ProducerActStrategy::Default,
            ProducerActStrategy::LikeSimilarDocuments,
            ProducerActStrategy::FollowSimilarProducers,
            ProducerActStrategy::ProduceOnly,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ProducerActStrategy::Default => "default",
            ProducerActStrategy::LikeSimilarDocuments => "like_similar_documents",
            ProducerActStrategy::FollowSimilarProducers => "follow_similar_producers",
            ProducerActStrategy::ProduceOnly => "produce_only",
        }
    }

    /// Run one iteration of network interaction for `producer`
    pub fn act(
        self,
        net: &mut FileSharingSystem,
        producer: AgentKey,
        k_results: usize,
    ) -> SimResult<ActSummary> {
        let mut summary = ActSummary::default();
        if self == ProducerActStrategy::ProduceOnly {
            return Ok(summary);
        }

        let taste = net.agent(producer)?.user().taste().clone();
        for document in matching_top_k(net, &taste, k_results)? {
            match self {
                ProducerActStrategy::Default => {
                    if net.like_document(producer, document)? {
                        summary.likes_given += 1;
                    }
                    let likers: Vec<AgentKey> =
                        net.document(document)?.user_likes().iter().copied().collect();
                    for liker in likers {
                        if net.follow(producer, liker)? {
                            summary.follows_given += 1;
                        }
                    }
                }
                ProducerActStrategy::LikeSimilarDocuments => {
                    if net.like_document(producer, document)? {
                        summary.likes_given += 1;
                    }
                }
                ProducerActStrategy::FollowSimilarProducers => {
                    let owner = net.document(document)?.producer();
                    if net.follow(producer, owner)? {
                        summary.follows_given += 1;
                    }
                }
                ProducerActStrategy::ProduceOnly => {}
            }
        }

        Ok(summary)
    }
}

/// Consumer policy: like every matching top-k document and follow its producer
pub fn consumer_act(
    net: &mut FileSharingSystem,
    consumer: AgentKey,
    k_results: usize,
) -> SimResult<ActSummary> {
    let mut summary = ActSummary::default();
    let taste = net.agent(consumer)?.user().taste().clone();

    for document in matching_top_k(net, &taste, k_results)? {
        if net.like_document(consumer, document)? {
            summary.likes_given += 1;
        }
        let owner = net.document(document)?.producer();
        if net.follow(consumer, owner)? {
            summary.follows_given += 1;
        }
    }

    Ok(summary)
}

/// Top-k results for `taste`, keeping only documents of that taste
fn matching_top_k(
    net: &FileSharingSystem,
    taste: &Taste,
    k_results: usize,
) -> SimResult<Vec<DocumentId>> {
    let mut matching = Vec::new();
    for id in net.top_k(taste, k_results) {
        if net.document(id)?.taste() == taste {
            matching.push(id);
        }
    }
    Ok(matching)
}

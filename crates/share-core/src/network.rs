//! File-Sharing Network
//!
//! Owns every agent and document, mediates publication, discovery, likes
//! and follows, and drives the per-iteration act cycle.
//!
//! Likes are dispatched synchronously: by the time `like_document` returns,
//! every listener on the document has run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use share_events::{
    generate_snapshot_id, AgentKey, AgentSnapshot, DocumentId, DocumentLikeEvent,
    DocumentSnapshot, LogEntry, NetworkEvent, NetworkSnapshot, Taste, UserId,
};

use crate::agent::{Agent, Producer};
use crate::document::{document_name, Document, NAME_DISCRIMINATOR_RANGE};
use crate::error::{SimError, SimResult};
use crate::sink::{LogSink, TracingSink};
use crate::strategy::{consumer_act, consumer_payoff, ActSummary, ProducerStanding};

/// Defaults used when no configuration is supplied
pub mod network_defaults {
    /// Documents returned by a top-k query
    pub const K_RESULTS: usize = 3;
    /// RNG seed
    pub const SEED: u64 = 42;
}

/// Result of asking one agent to act
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActOutcome {
    /// The agent is not registered; nothing happened
    Skipped,
    Acted {
        /// The document uploaded this act, producers only
        produced: Option<DocumentId>,
        summary: ActSummary,
    },
}

/// Totals for one completed iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IterationReport {
    pub iteration: u64,
    pub acted: usize,
    pub skipped: usize,
    pub documents_produced: usize,
    pub likes: usize,
    pub follows: usize,
    pub payoffs_recorded: usize,
}

impl IterationReport {
    fn new(iteration: u64) -> Self {
        Self {
            iteration,
            ..Default::default()
        }
    }
}

/// The network: registry of agents and documents
pub struct FileSharingSystem {
    agents: Vec<Agent>,
    documents: Vec<Document>,
    next_user_id: UserId,
    /// Index of the iteration currently running (or about to run)
    iteration: u64,
    k_results: usize,
    rng: SmallRng,
    sink: Box<dyn LogSink>,
    run_id: Uuid,
}

impl Default for FileSharingSystem {
    fn default() -> Self {
        Self::new(network_defaults::SEED)
    }
}

impl FileSharingSystem {
    /// Create an empty network logging through `tracing`
    pub fn new(seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let run_id = uuid::Builder::from_random_bytes(rng.gen()).into_uuid();

        Self {
            agents: Vec::new(),
            documents: Vec::new(),
            next_user_id: UserId::FIRST,
            iteration: 0,
            k_results: network_defaults::K_RESULTS,
            rng,
            sink: Box::new(TracingSink),
            run_id,
        }
    }

    pub fn with_sink(mut self, sink: Box<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_k_results(mut self, k_results: usize) -> Self {
        self.k_results = k_results;
        self
    }

    pub fn set_sink(&mut self, sink: Box<dyn LogSink>) {
        self.sink = sink;
    }

    pub fn k_results(&self) -> usize {
        self.k_results
    }

    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    // ------------------------------------------------------------------
    // Registry
    // ------------------------------------------------------------------

    /// Store an agent without registering it
    pub fn add_agent(&mut self, agent: Agent) -> AgentKey {
        let key = AgentKey(self.agents.len());
        self.agents.push(agent);
        key
    }

    /// Assign the next user id to the agent at `key`
    pub fn register(&mut self, key: AgentKey) -> SimResult<UserId> {
        let user_id = self.next_user_id;
        let user = self.agent_mut(key)?.user_mut();
        if let Some(existing) = user.user_id() {
            return Err(SimError::AlreadyRegistered {
                key,
                user_id: existing,
            });
        }
        user.assign_id(user_id);
        self.next_user_id = user_id.next();
        tracing::debug!("Registered {} as user {}", key, user_id);
        Ok(user_id)
    }

    /// Store and register an agent
    pub fn add_user(&mut self, agent: Agent) -> SimResult<AgentKey> {
        let key = self.add_agent(agent);
        self.register(key)?;
        Ok(key)
    }

    pub fn agent(&self, key: AgentKey) -> SimResult<&Agent> {
        self.agents
            .get(key.index())
            .ok_or(SimError::UnknownAgent(key))
    }

    fn agent_mut(&mut self, key: AgentKey) -> SimResult<&mut Agent> {
        self.agents
            .get_mut(key.index())
            .ok_or(SimError::UnknownAgent(key))
    }

    /// Producer capability of the agent at `key`, for reconfiguring strategies
    pub fn producer_mut(&mut self, key: AgentKey) -> SimResult<&mut Producer> {
        self.agent_mut(key)?
            .producer_capability_mut()
            .ok_or(SimError::NotAProducer(key))
    }

    pub fn agents(&self) -> impl Iterator<Item = (AgentKey, &Agent)> {
        self.agents
            .iter()
            .enumerate()
            .map(|(i, agent)| (AgentKey(i), agent))
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// First agent with the given display name
    pub fn find_by_name(&self, name: &str) -> Option<AgentKey> {
        self.agents().find(|(_, a)| a.name() == name).map(|(k, _)| k)
    }

    pub fn document(&self, id: DocumentId) -> SimResult<&Document> {
        self.documents
            .get(id.index())
            .ok_or(SimError::UnknownDocument(id))
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    // ------------------------------------------------------------------
    // Publication and discovery
    // ------------------------------------------------------------------

    /// Register a new document by `producer`.
    ///
    /// The document takes the producer's taste, is appended to the
    /// producer's list and gets the producer as its first listener.
    pub fn add_document(&mut self, producer: AgentKey, name: impl Into<String>) -> SimResult<DocumentId> {
        let id = DocumentId(self.documents.len());
        let agent = self.agent_mut(producer)?;
        let taste = agent.user().taste().clone();
        agent
            .producer_capability_mut()
            .ok_or(SimError::NotAProducer(producer))?
            .push_document(id);

        let mut document = Document::new(id, name, taste, producer);
        document.add_listener(producer);
        self.documents.push(document);
        Ok(id)
    }

    /// Add a listener handle to a document.
    ///
    /// Handles are resolved when a like is dispatched, not here.
    pub fn subscribe(&mut self, document: DocumentId, listener: AgentKey) -> SimResult<bool> {
        let doc = self
            .documents
            .get_mut(document.index())
            .ok_or(SimError::UnknownDocument(document))?;
        Ok(doc.add_listener(listener))
    }

    /// The `k` most relevant documents for `taste`.
    ///
    /// Matching taste first, then most liked, then oldest. Deterministic for
    /// a given network state.
    pub fn top_k(&self, taste: &Taste, k: usize) -> Vec<DocumentId> {
        let mut ranked: Vec<&Document> = self.documents.iter().collect();
        ranked.sort_by(|a, b| {
            let a_match = a.taste() == taste;
            let b_match = b.taste() == taste;
            b_match
                .cmp(&a_match)
                .then(b.like_count().cmp(&a.like_count()))
                .then(a.id().cmp(&b.id()))
        });
        ranked.into_iter().take(k).map(|d| d.id()).collect()
    }

    // ------------------------------------------------------------------
    // Likes and follows
    // ------------------------------------------------------------------

    /// `user` likes `document`. Returns false if it was already liked.
    ///
    /// A new like is dispatched to the document's listeners in registration
    /// order; the first listener error is returned with the like already
    /// recorded.
    pub fn like_document(&mut self, user: AgentKey, document: DocumentId) -> SimResult<bool> {
        if self.agent(user)?.user().has_liked(document) {
            return Ok(false);
        }

        let doc = self
            .documents
            .get_mut(document.index())
            .ok_or(SimError::UnknownDocument(document))?;
        let Some(event) = doc.like(user) else {
            return Ok(false);
        };
        let listeners = doc.listeners().to_vec();
        self.agent_mut(user)?.user_mut().record_like(document);

        for listener in listeners {
            self.on_document_liked(listener, &event)?;
        }
        Ok(true)
    }

    /// Like handler: only the producer of the liked document reacts, by
    /// reporting its updated payoff.
    fn on_document_liked(&mut self, listener: AgentKey, event: &DocumentLikeEvent) -> SimResult<()> {
        let listening = self
            .agents
            .get(listener.index())
            .ok_or(SimError::UnknownListener {
                listener,
                document: event.document,
            })?;
        let document = self.document(event.document)?;
        if document.producer() != listener || !listening.is_producer() {
            return Ok(());
        }

        let payoff = self.calculate_payoff(listener)?;
        let message = format!(
            "{} has liked '{}'. {} Payoff: {}",
            self.agent(event.liking_user)?.name(),
            document.name(),
            listening.name(),
            payoff
        );
        self.emit(
            message,
            NetworkEvent::DocumentLiked {
                document: event.document,
                liking_user: event.liking_user,
                producer: listener,
                payoff,
            },
        );
        Ok(())
    }

    /// `follower` follows `target`. Returns false for repeats and self-follows.
    pub fn follow(&mut self, follower: AgentKey, target: AgentKey) -> SimResult<bool> {
        self.agent(follower)?;
        if !self.agent_mut(target)?.user_mut().add_follower(target, follower) {
            return Ok(false);
        }
        self.agent_mut(follower)?.user_mut().start_following(target);

        let followed = self.agent(target)?;
        if followed.is_producer() {
            let payoff = self.calculate_payoff(target)?;
            let message = format!(
                "{} has been followed by {}. Updated Producer Payoff: {}",
                followed.name(),
                self.agent(follower)?.name(),
                payoff
            );
            self.emit(
                message,
                NetworkEvent::Followed {
                    follower,
                    producer: target,
                    payoff,
                },
            );
        }
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Payoff
    // ------------------------------------------------------------------

    /// Follower count and per-document likes of a producer
    pub fn standing(&self, key: AgentKey) -> SimResult<ProducerStanding> {
        let agent = self.agent(key)?;
        let producer = agent
            .producer_capability()
            .ok_or(SimError::NotAProducer(key))?;

        let likes_per_document = producer
            .documents_produced()
            .iter()
            .map(|id| self.document(*id).map(Document::like_count))
            .collect::<SimResult<Vec<_>>>()?;

        Ok(ProducerStanding::new(
            agent.user().follower_count(),
            likes_per_document,
        ))
    }

    /// Current payoff: the producer's strategy, or the consumer formula
    pub fn calculate_payoff(&self, key: AgentKey) -> SimResult<u32> {
        let agent = self.agent(key)?;
        match agent.producer_capability() {
            Some(producer) => Ok(producer.calculate_payoff(&self.standing(key)?)),
            None => {
                let taste = agent.user().taste();
                let matching = agent
                    .user()
                    .liked_documents()
                    .iter()
                    .filter_map(|id| self.documents.get(id.index()))
                    .filter(|doc| doc.taste() == taste)
                    .count();
                Ok(consumer_payoff(matching))
            }
        }
    }

    /// Append the current payoff to the agent's history if `iteration` is
    /// the next unrecorded index.
    pub fn add_iteration_payoff(&mut self, key: AgentKey, iteration: u64) -> SimResult<bool> {
        let payoff = self.calculate_payoff(key)?;
        let recorded = self
            .agent_mut(key)?
            .user_mut()
            .record_payoff(iteration, payoff);
        if recorded {
            tracing::debug!("Recorded payoff {} for {} at iteration {}", payoff, key, iteration);
        }
        Ok(recorded)
    }

    // ------------------------------------------------------------------
    // Act cycle
    // ------------------------------------------------------------------

    /// Run one agent's act for this iteration.
    ///
    /// Unregistered agents are skipped with a warning. Producers upload and
    /// self-like a new document, then run their act strategy; consumers run
    /// the consumer policy.
    pub fn act(&mut self, key: AgentKey, k_results: usize) -> SimResult<ActOutcome> {
        let agent = self.agent(key)?;
        if !agent.user().is_registered() {
            tracing::warn!("{} ({}) is not currently registered; skipping", agent.name(), key);
            return Ok(ActOutcome::Skipped);
        }

        let strategy = agent.producer_capability().map(Producer::act_strategy);
        match strategy {
            Some(strategy) => {
                let document = self.produce_document(key)?;
                let mut summary = ActSummary {
                    likes_given: usize::from(self.like_document(key, document)?),
                    follows_given: 0,
                };
                summary.merge(strategy.act(self, key, k_results)?);
                Ok(ActOutcome::Acted {
                    produced: Some(document),
                    summary,
                })
            }
            None => {
                let summary = consumer_act(self, key, k_results)?;
                Ok(ActOutcome::Acted {
                    produced: None,
                    summary,
                })
            }
        }
    }

    fn produce_document(&mut self, producer: AgentKey) -> SimResult<DocumentId> {
        let taste = self.agent(producer)?.user().taste().clone();
        let discriminator = self.rng.gen_range(0..NAME_DISCRIMINATOR_RANGE);
        let id = self.add_document(producer, document_name(&taste, discriminator))?;
        tracing::debug!("{} uploaded {} ({})", producer, id, self.documents[id.index()].name());
        Ok(id)
    }

    /// Act every agent in key order, then record one payoff entry per
    /// registered agent and advance the iteration counter.
    pub fn run_iteration(&mut self) -> SimResult<IterationReport> {
        let iteration = self.iteration;
        let mut report = IterationReport::new(iteration);
        let keys: Vec<AgentKey> = (0..self.agents.len()).map(AgentKey).collect();

        for &key in &keys {
            match self.act(key, self.k_results)? {
                ActOutcome::Skipped => report.skipped += 1,
                ActOutcome::Acted { produced, summary } => {
                    report.acted += 1;
                    if produced.is_some() {
                        report.documents_produced += 1;
                    }
                    report.likes += summary.likes_given;
                    report.follows += summary.follows_given;
                }
            }
        }

        for key in keys {
            if self.agent(key)?.user().is_registered() && self.add_iteration_payoff(key, iteration)? {
                report.payoffs_recorded += 1;
            }
        }

        self.iteration += 1;
        if let Err(e) = self.sink.flush() {
            tracing::warn!("Log sink flush failed: {}", e);
        }

        tracing::info!(
            "Iteration {} complete: {} acted, {} skipped, {} documents, {} likes, {} follows",
            iteration,
            report.acted,
            report.skipped,
            report.documents_produced,
            report.likes,
            report.follows
        );
        Ok(report)
    }

    /// Run `iterations` iterations back to back
    pub fn run(&mut self, iterations: u64) -> SimResult<Vec<IterationReport>> {
        (0..iterations).map(|_| self.run_iteration()).collect()
    }

    // ------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------

    pub fn snapshot(&self) -> SimResult<NetworkSnapshot> {
        let agents = self
            .agents()
            .map(|(key, agent)| -> SimResult<AgentSnapshot> {
                let user = agent.user();
                let producer = agent.producer_capability();
                Ok(AgentSnapshot {
                    key,
                    user_id: user.user_id(),
                    name: user.name().to_string(),
                    taste: user.taste().clone(),
                    role: agent.role(),
                    act_strategy: producer.map(|p| p.act_strategy().name().to_string()),
                    followers: user.followers().iter().copied().collect(),
                    following: user.following().iter().copied().collect(),
                    liked_documents: user.liked_documents().iter().copied().collect(),
                    documents_produced: producer
                        .map(|p| p.documents_produced().to_vec())
                        .unwrap_or_default(),
                    payoff: self.calculate_payoff(key)?,
                    payoff_history: user.payoff_history().to_vec(),
                })
            })
            .collect::<SimResult<Vec<_>>>()?;

        let documents = self
            .documents
            .iter()
            .map(|doc| DocumentSnapshot {
                id: doc.id(),
                name: doc.name().to_string(),
                taste: doc.taste().clone(),
                producer: doc.producer(),
                likes: doc.user_likes().iter().copied().collect(),
            })
            .collect();

        Ok(NetworkSnapshot {
            snapshot_id: generate_snapshot_id(self.iteration),
            run_id: self.run_id,
            iteration: self.iteration,
            agents,
            documents,
        })
    }

    /// Hand an entry to the sink; failures are reported and dropped
    fn emit(&mut self, message: String, event: NetworkEvent) {
        let entry = LogEntry::new(self.iteration, message, event);
        if let Err(e) = self.sink.append_log(&entry) {
            tracing::warn!("Log sink rejected entry: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemorySink, SinkError};
    use crate::strategy::ProducerActStrategy;

    struct FailingSink;

    impl LogSink for FailingSink {
        fn append_log(&mut self, _entry: &LogEntry) -> Result<(), SinkError> {
            Err(SinkError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "gui closed",
            )))
        }
    }

    fn network_with_sink() -> (FileSharingSystem, MemorySink) {
        let sink = MemorySink::new();
        let net = FileSharingSystem::new(7).with_sink(Box::new(sink.clone()));
        (net, sink)
    }

    #[test]
    fn test_registration_assigns_sequential_ids() {
        let mut net = FileSharingSystem::new(1);
        let a = net.add_user(Agent::producer("A", "sports")).unwrap();
        let b = net.add_user(Agent::consumer("B", "music")).unwrap();

        assert_eq!(net.agent(a).unwrap().user().user_id(), Some(UserId(1)));
        assert_eq!(net.agent(b).unwrap().user().user_id(), Some(UserId(2)));
    }

    #[test]
    fn test_register_twice_is_an_error() {
        let mut net = FileSharingSystem::new(1);
        let a = net.add_user(Agent::producer("A", "sports")).unwrap();
        assert_eq!(
            net.register(a),
            Err(SimError::AlreadyRegistered {
                key: a,
                user_id: UserId(1)
            })
        );
    }

    #[test]
    fn test_unregistered_agent_is_skipped() {
        let mut net = FileSharingSystem::new(1);
        let key = net.add_agent(Agent::producer("Ghost", "sports"));

        assert_eq!(net.act(key, 3).unwrap(), ActOutcome::Skipped);
        assert!(net.documents().is_empty());
        assert_eq!(
            net.agent(key)
                .unwrap()
                .producer_capability()
                .unwrap()
                .document_count(),
            0
        );
    }

    #[test]
    fn test_add_document_requires_producer() {
        let mut net = FileSharingSystem::new(1);
        let c = net.add_user(Agent::consumer("C", "music")).unwrap();
        assert_eq!(net.add_document(c, "nope"), Err(SimError::NotAProducer(c)));
    }

    #[test]
    fn test_add_document_sets_owner_and_listener() {
        let mut net = FileSharingSystem::new(1);
        let p = net.add_user(Agent::producer("P", "sports")).unwrap();
        let doc = net.add_document(p, "Document sports (1)").unwrap();

        let document = net.document(doc).unwrap();
        assert_eq!(document.producer(), p);
        assert_eq!(document.listeners(), &[p]);
        assert_eq!(document.taste().as_str(), "sports");
        assert_eq!(
            net.agent(p).unwrap().producer_capability().unwrap().documents_produced(),
            &[doc]
        );
    }

    #[test]
    fn test_like_logs_for_owner() {
        let (mut net, sink) = network_with_sink();
        let p = net.add_user(Agent::producer("Pat", "sports")).unwrap();
        let c = net.add_user(Agent::consumer("Cam", "sports")).unwrap();
        let doc = net.add_document(p, "Document sports (9)").unwrap();

        assert!(net.like_document(c, doc).unwrap());
        assert!(!net.like_document(c, doc).unwrap());

        assert_eq!(
            sink.messages(),
            vec!["Cam has liked 'Document sports (9)'. Pat Payoff: 1"]
        );
    }

    #[test]
    fn test_non_owner_listener_is_silent() {
        let (mut net, sink) = network_with_sink();
        let p = net.add_user(Agent::producer("Pat", "sports")).unwrap();
        let q = net.add_user(Agent::producer("Quinn", "sports")).unwrap();
        let c = net.add_user(Agent::consumer("Cam", "sports")).unwrap();
        let doc = net.add_document(p, "Document sports (1)").unwrap();
        net.subscribe(doc, q).unwrap();

        net.like_document(c, doc).unwrap();
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.entries()[0].event.event_type(), share_events::EventType::DocumentLiked);
    }

    #[test]
    fn test_dangling_listener_surfaces_error() {
        let mut net = FileSharingSystem::new(1);
        let p = net.add_user(Agent::producer("Pat", "sports")).unwrap();
        let doc = net.add_document(p, "Document sports (1)").unwrap();
        net.subscribe(doc, AgentKey(99)).unwrap();

        assert_eq!(
            net.like_document(p, doc),
            Err(SimError::UnknownListener {
                listener: AgentKey(99),
                document: doc
            })
        );
    }

    #[test]
    fn test_follow_logs_producer_payoff() {
        let (mut net, sink) = network_with_sink();
        let p = net.add_user(Agent::producer("Pat", "sports")).unwrap();
        let c = net.add_user(Agent::consumer("Cam", "sports")).unwrap();

        assert!(net.follow(c, p).unwrap());
        assert!(!net.follow(c, p).unwrap());
        assert!(!net.follow(p, p).unwrap());

        assert_eq!(
            sink.messages(),
            vec!["Pat has been followed by Cam. Updated Producer Payoff: 2"]
        );
        assert!(net.agent(c).unwrap().user().is_following(p));
    }

    #[test]
    fn test_following_a_consumer_is_not_logged() {
        let (mut net, sink) = network_with_sink();
        let p = net.add_user(Agent::producer("Pat", "sports")).unwrap();
        let c = net.add_user(Agent::consumer("Cam", "sports")).unwrap();

        assert!(net.follow(p, c).unwrap());
        assert!(sink.is_empty());
    }

    #[test]
    fn test_failing_sink_does_not_abort() {
        let mut net = FileSharingSystem::new(3).with_sink(Box::new(FailingSink));
        let p = net.add_user(Agent::producer("Pat", "sports")).unwrap();
        let c = net.add_user(Agent::consumer("Cam", "sports")).unwrap();

        let report = net.run_iteration().unwrap();
        assert_eq!(report.acted, 2);
        assert!(net.follow(c, p).is_ok());
        assert_eq!(net.calculate_payoff(p).unwrap(), 2 + 2);
    }

    #[test]
    fn test_top_k_ranking() {
        let mut net = FileSharingSystem::new(1);
        let p = net.add_user(Agent::producer("P", "sports")).unwrap();
        let q = net.add_user(Agent::producer("Q", "music")).unwrap();
        let c = net.add_user(Agent::consumer("C", "sports")).unwrap();

        let s0 = net.add_document(p, "s0").unwrap();
        let m0 = net.add_document(q, "m0").unwrap();
        let s1 = net.add_document(p, "s1").unwrap();
        net.like_document(c, s1).unwrap();

        let taste = Taste::new("sports");
        assert_eq!(net.top_k(&taste, 3), vec![s1, s0, m0]);
        assert_eq!(net.top_k(&taste, 1), vec![s1]);
        assert_eq!(net.top_k(&Taste::new("music"), 2), vec![m0, s1]);
        assert!(net.top_k(&taste, 0).is_empty());
    }

    #[test]
    fn test_consumer_payoff_counts_matching_likes() {
        let mut net = FileSharingSystem::new(1);
        let p = net.add_user(Agent::producer("P", "sports")).unwrap();
        let q = net.add_user(Agent::producer("Q", "music")).unwrap();
        let c = net.add_user(Agent::consumer("C", "sports")).unwrap();
        let s = net.add_document(p, "s").unwrap();
        let m = net.add_document(q, "m").unwrap();

        net.like_document(c, s).unwrap();
        net.like_document(c, m).unwrap();
        assert_eq!(net.calculate_payoff(c).unwrap(), 1);
    }

    #[test]
    fn test_produce_only_strategy_leaves_others_alone() {
        let mut net = FileSharingSystem::new(1);
        let p = net.add_user(Agent::producer("P", "sports")).unwrap();
        let q = net
            .add_user(Agent::producer_with(
                "Q",
                "sports",
                Producer::default().with_act_strategy(ProducerActStrategy::ProduceOnly),
            ))
            .unwrap();
        net.act(p, 3).unwrap();

        let outcome = net.act(q, 3).unwrap();
        let ActOutcome::Acted { summary, .. } = outcome else {
            panic!("expected an act");
        };
        assert_eq!(summary.likes_given, 1);
        assert_eq!(summary.follows_given, 0);
        assert!(net.agent(q).unwrap().user().following().is_empty());
    }

    #[test]
    fn test_snapshot_reflects_state() {
        let mut net = FileSharingSystem::new(1);
        let p = net.add_user(Agent::producer("P", "sports")).unwrap();
        net.add_agent(Agent::consumer("Lurker", "sports"));
        net.run_iteration().unwrap();

        let snapshot = net.snapshot().unwrap();
        assert_eq!(snapshot.iteration, 1);
        assert_eq!(snapshot.snapshot_id, "snap_000001");
        assert_eq!(snapshot.documents.len(), 1);

        let pat = snapshot.agent_by_name("P").unwrap();
        assert_eq!(pat.key, p);
        assert_eq!(pat.payoff, 1);
        assert_eq!(pat.payoff_history, vec![1]);
        assert_eq!(pat.act_strategy.as_deref(), Some("default"));

        let lurker = snapshot.agent_by_name("Lurker").unwrap();
        assert_eq!(lurker.user_id, None);
        assert!(lurker.payoff_history.is_empty());
    }
}

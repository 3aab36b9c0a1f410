//! Network Setup
//!
//! Builds a populated network from configuration.

use std::collections::BTreeMap;

use share_events::AgentRole;

use crate::agent::{Agent, Producer};
use crate::config::{SimConfig, UserConfig};
use crate::error::SimResult;
use crate::network::FileSharingSystem;
use crate::sink::LogSink;

/// Build the agent described by one config entry
pub fn agent_from_config(user: &UserConfig) -> Agent {
    match user.role {
        AgentRole::Producer => {
            let producer = Producer::new(
                Box::new(user.payoff),
                user.act_strategy.unwrap_or_default(),
            );
            Agent::producer_with(user.name.as_str(), user.taste.as_str(), producer)
        }
        AgentRole::Consumer => Agent::consumer(user.name.as_str(), user.taste.as_str()),
    }
}

/// Create a network with every configured user added in order.
///
/// Users marked unregistered are stored but never given an id.
pub fn build_network(config: &SimConfig, sink: Box<dyn LogSink>) -> SimResult<FileSharingSystem> {
    let mut net = FileSharingSystem::new(config.simulation.seed)
        .with_k_results(config.simulation.k_results)
        .with_sink(sink);

    for user in &config.users {
        let key = net.add_agent(agent_from_config(user));
        if user.registered {
            net.register(key)?;
        }
    }

    let summary = get_setup_summary(&net);
    tracing::info!(
        "Network ready: {} agents ({} producers, {} consumers, {} unregistered)",
        summary.total_agents,
        summary.producers,
        summary.consumers,
        summary.unregistered
    );
    Ok(net)
}

/// Get summary stats for a built network
pub fn get_setup_summary(net: &FileSharingSystem) -> SetupSummary {
    let mut summary = SetupSummary::default();
    for (_, agent) in net.agents() {
        summary.total_agents += 1;
        match agent.role() {
            AgentRole::Producer => summary.producers += 1,
            AgentRole::Consumer => summary.consumers += 1,
        }
        if !agent.user().is_registered() {
            summary.unregistered += 1;
        }
        *summary
            .by_taste
            .entry(agent.user().taste().to_string())
            .or_insert(0) += 1;
    }
    summary
}

/// Summary of a built network
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetupSummary {
    pub total_agents: u32,
    pub producers: u32,
    pub consumers: u32,
    pub unregistered: u32,
    pub by_taste: BTreeMap<String, u32>,
}

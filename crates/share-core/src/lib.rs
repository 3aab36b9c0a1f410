//! File-Sharing Network Simulation Library
//!
//! Producers upload documents, users like and follow, and every agent's
//! payoff is recomputed as the network evolves over discrete iterations.

pub mod agent;
pub mod config;
pub mod document;
pub mod error;
pub mod network;
pub mod setup;
pub mod sink;
pub mod strategy;

pub use agent::{Agent, Producer, User};
pub use config::{ConfigError, SimConfig, SimulationConfig, UserConfig};
pub use document::Document;
pub use error::{SimError, SimResult};
pub use network::{ActOutcome, FileSharingSystem, IterationReport};
pub use setup::{build_network, get_setup_summary, SetupSummary};
pub use sink::{JsonlSink, LogSink, MemorySink, SinkError, TracingSink};
pub use strategy::{ActSummary, PayoffStrategy, ProducerActStrategy, ProducerPayoff, ProducerStanding};

//! Client-side state pipeline for carbon-match.
//!
//! This crate provides:
//! - InvestmentStore / ProjectStore: the two pieces of user-driven state
//! - yield_engine: the pure yield derivation and stable yield sort
//! - Dashboard: mediator that recomputes the derived view on every write
//!   and notifies subscribers
//! - PreferenceCollector: the uncommitted preference query
//! - Session: drives fetch / match / reset against a MatchingGateway
//! - present: cell formatting and rating colours shared by the front ends

mod dashboard;
mod gateway;
mod investment;
mod preferences;
pub mod present;
mod projects;
mod session;
pub mod yield_engine;

pub use dashboard::{Dashboard, Listener, SubscriptionId};
pub use gateway::MatchingGateway;
pub use investment::{InvestmentStore, parse_investment_input};
pub use preferences::{PreferenceCollector, parse_range_input};
pub use projects::ProjectStore;
pub use session::{Session, SyncOutcome};
pub use yield_engine::{ProjectView, SortOrder, YieldConfig, compute_yield};

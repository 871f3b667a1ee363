//! Search session state types.

use serde::{Deserialize, Serialize};

use steamshelf_steam_api::GameRecord;

/// Result phase of the query keyed by the debounced username.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SearchPhase {
    /// No query has been issued yet.
    Idle,
    /// The query for the current key is in flight.
    Pending,
    /// Ordered library for the current key (may be empty).
    Success { games: Vec<GameRecord> },
    /// The query failed; the message is shown verbatim.
    Error { message: String },
}

/// Snapshot of a search session, published on every transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    /// The debounced username the phase refers to.
    pub query: String,
    #[serde(flatten)]
    pub phase: SearchPhase,
}

impl SearchState {
    /// Initial state before any input arrives.
    pub fn idle() -> Self {
        Self {
            query: String::new(),
            phase: SearchPhase::Idle,
        }
    }
}

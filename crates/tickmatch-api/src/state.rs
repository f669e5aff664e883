use std::sync::Arc;

use tickmatch_matchcore::MatchingEngine;
use tokio::sync::Mutex;

/// Shared handler state.
///
/// The engine is single-writer; this mutex is the one place every request
/// passes through, so all engine calls are serialized.
#[derive(Clone, Default)]
pub struct AppState {
    pub engine: Arc<Mutex<MatchingEngine>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engine(engine: MatchingEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}

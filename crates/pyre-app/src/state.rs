//! Host state shared between callers and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use pyre_core::commands::MatchCommand;
use pyre_core::state::MatchSnapshot;

/// Commands sent from callers to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A command to forward to the match engine.
    Match(MatchCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared host state. Send + Sync, so callers on any thread can drive the match:
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` for the channel, which does not exist before `start_match`
/// - `Arc<Mutex<...>>` for the latest snapshot (shared with the game loop thread)
pub struct AppState {
    /// Channel to the game loop. `None` before `start_match` is called.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot, updated by the game loop after each tick.
    pub latest_snapshot: Arc<Mutex<Option<MatchSnapshot>>>,
    /// Whether the game loop is currently running.
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

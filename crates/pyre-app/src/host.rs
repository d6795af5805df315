//! Host commands: the surface a UI or network layer calls.
//!
//! These functions bridge callers to the game loop thread via channels.

use std::thread::JoinHandle;

use pyre_core::commands::MatchCommand;
use pyre_core::config::MatchConfig;
use pyre_core::state::MatchSnapshot;
use pyre_sim::MatchEngine;

use crate::error::{HostError, Result};
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start a match. Spawns the game loop thread if not already running.
pub fn start_match(state: &AppState, config: MatchConfig) -> Result<JoinHandle<()>> {
    let mut running = state.running.lock().map_err(|_| HostError::LockPoisoned)?;

    if *running {
        return Err(HostError::AlreadyRunning);
    }

    let engine = MatchEngine::new(config)?;
    let (cmd_tx, handle) = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone())?;

    let mut tx_lock = state.command_tx.lock().map_err(|_| HostError::LockPoisoned)?;
    *tx_lock = Some(cmd_tx);
    *running = true;

    Ok(handle)
}

/// Send a command to the running match.
pub fn send_command(state: &AppState, command: MatchCommand) -> Result<()> {
    send(state, GameLoopCommand::Match(command))
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<MatchSnapshot>> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| HostError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Ask the game loop to exit and forget its channel.
pub fn stop_match(state: &AppState) -> Result<()> {
    let mut running = state.running.lock().map_err(|_| HostError::LockPoisoned)?;
    let mut tx_lock = state.command_tx.lock().map_err(|_| HostError::LockPoisoned)?;

    let tx = tx_lock.take().ok_or(HostError::NotStarted)?;
    // the loop may already have exited on its own
    let _ = tx.send(GameLoopCommand::Shutdown);
    *running = false;
    Ok(())
}

fn send(state: &AppState, command: GameLoopCommand) -> Result<()> {
    let tx_lock = state.command_tx.lock().map_err(|_| HostError::LockPoisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx.send(command).map_err(|_| HostError::LoopClosed),
        None => Err(HostError::NotStarted),
    }
}

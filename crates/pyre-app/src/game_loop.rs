//! Game loop thread: runs the match engine at 30Hz and publishes snapshots.
//!
//! The engine is built by the caller (so configuration errors surface before
//! any thread exists) and moved into the loop. Commands arrive via `mpsc`
//! channel. Snapshots are stored in shared state for synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use pyre_core::constants::TICK_RATE;
use pyre_core::events::MatchEvent;
use pyre_core::state::MatchSnapshot;
use pyre_sim::MatchEngine;

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Longest real-time gap fed into a single tick. Longer stalls (debugger,
/// suspended laptop) are absorbed rather than replayed in one jump.
pub const MAX_TICK_DELTA: Duration = Duration::from_millis(250);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for callers to use and the thread handle.
pub fn spawn_game_loop(
    engine: MatchEngine,
    latest_snapshot: Arc<Mutex<Option<MatchSnapshot>>>,
) -> std::io::Result<(mpsc::Sender<GameLoopCommand>, JoinHandle<()>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("pyre-game-loop".into())
        .spawn(move || {
            run_game_loop(engine, cmd_rx, &latest_snapshot);
        })?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut engine: MatchEngine,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<MatchSnapshot>>,
) {
    let mut last_tick = Instant::now();
    let mut next_tick_time = last_tick;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Match(cmd)) => engine.handle_command(cmd),
                Ok(GameLoopCommand::Shutdown) => {
                    info!("game loop shutting down");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance by the real time elapsed since the previous tick
        let now = Instant::now();
        let elapsed = now.duration_since(last_tick).min(MAX_TICK_DELTA);
        last_tick = now;
        let snapshot = engine.tick(elapsed.as_secs_f64());
        log_events(&snapshot);

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

fn log_events(snapshot: &MatchSnapshot) {
    for event in &snapshot.events {
        match event {
            MatchEvent::ActionRejected { .. } | MatchEvent::ActionApplied { .. } => {
                debug!(?event, "match event");
            }
            MatchEvent::MatchFinished { outcome } => {
                info!(?outcome, tick = snapshot.time.tick, "outcome published");
            }
            _ => {}
        }
    }
}

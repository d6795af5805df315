//! PYRE - headless bot match.
//!
//! Usage: `pyre-app [config.json] [room]`
//!
//! Plays one match between scripted factions. Competitive matches then
//! publish every faction's result through an in-memory result exchange and
//! resolve the winners the way networked clients would. `RUST_LOG` controls verbosity.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pyre_app::bots::BotDriver;
use pyre_app::error::Result;
use pyre_app::host;
use pyre_app::state::AppState;
use pyre_core::commands::MatchCommand;
use pyre_core::config::MatchConfig;
use pyre_core::enums::{GameMode, MatchPhase};
use pyre_core::state::MatchSnapshot;
use pyre_sim::exchange::{MemoryStore, ResultExchange};
use pyre_sim::scoreboard::{ScoreBoard, ScoreRecord};

/// How often the bots look at the match.
const BOT_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            let config: MatchConfig = serde_json::from_str(&text)?;
            tracing::info!(%path, "loaded match configuration");
            config
        }
        None => MatchConfig::default(),
    };
    let room = args.next().unwrap_or_else(|| "local".to_string());

    let state = AppState::new();
    let economy = config.economy.clone();
    let mut bots = BotDriver::new(config.seed ^ 0x5eed);
    let handle = host::start_match(&state, config)?;
    tracing::info!(%room, "match started");

    let finished = loop {
        std::thread::sleep(BOT_INTERVAL);
        let Some(snapshot) = host::get_snapshot(&state)? else {
            continue;
        };
        if snapshot.phase == MatchPhase::Finish {
            break snapshot;
        }
        for action in bots.plan(&snapshot, &economy) {
            host::send_command(
                &state,
                MatchCommand::Act {
                    version: snapshot.version,
                    action,
                },
            )?;
        }
    };

    host::stop_match(&state)?;
    if handle.join().is_err() {
        tracing::error!("game loop thread panicked");
    }

    tracing::info!(
        outcome = ?finished.outcome,
        damage_percent = finished.stats.damage_percent,
        burnt = finished.stats.burnt_buildings,
        total = finished.stats.total_buildings,
        "match over"
    );
    if finished.mode == GameMode::Competitive {
        exchange_results(&finished, &room)?;
    }
    Ok(())
}

/// Publish each faction's record and resolve winners from the store, as
/// separate networked clients would.
fn exchange_results(snapshot: &MatchSnapshot, room: &str) -> Result<()> {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut exchange = ResultExchange::new(MemoryStore::new(), room);
    for faction in &snapshot.factions {
        exchange.publish(&ScoreRecord {
            faction: faction.id,
            percentage: faction.burnt_percentage,
            count: faction.burnt_count,
            total_buildings: snapshot.stats.total_buildings,
            timestamp_ms: now_ms,
        })?;
    }

    let mut board = ScoreBoard::default();
    exchange.poll_into(&mut board);
    for record in board.fresh(now_ms) {
        tracing::info!(
            faction = %record.faction,
            percentage = record.percentage,
            count = record.count,
            "result"
        );
    }
    tracing::info!(winners = ?board.resolve(now_ms), "resolved from exchanged results");
    Ok(())
}

//! Simulation constants and default tuning parameters.

/// Host tick rate (Hz).
pub const TICK_RATE: u32 = 30;

// --- Factions ---

/// Upper bound on concurrent factions.
pub const MAX_FACTIONS: u8 = 4;

/// Lower bound on factions in a match.
pub const MIN_FACTIONS: u8 = 2;

// --- City grid ---

/// Structures per grid side.
pub const GRID_SIZE: u32 = 16;

/// Footprint edge length of one grid structure.
pub const CUBE_SIZE: f64 = 2.0;

/// Spacing between neighbouring grid structures.
pub const GAP: f64 = 0.5;

/// Maximum extra height as a multiple of the cube size (height = cube * (1 + U * jitter)).
pub const HEIGHT_JITTER: f64 = 2.0;

/// Spread range for grid cities, as a multiple of the cube size.
pub const GRID_SPREAD_FACTOR: f64 = 1.5;

/// Spread range for imported cities, before scaling.
pub const IMPORTED_SPREAD_RANGE: f64 = 40.0;

// --- Timing ---

/// Setup phase duration (seconds).
pub const SETUP_SECS: f64 = 15.0;

/// Battle phase duration (seconds).
pub const BATTLE_SECS: f64 = 60.0;

// --- Thermal ---

/// Heat at which a structure ignites.
pub const HEAT_THRESHOLD: f64 = 100.0;

/// Heat per second a burning structure adds to each neighbour (asymmetric profile).
pub const ASYMMETRIC_TRANSFER_RATE: f64 = 20.0;

/// Natural cooling per second (asymmetric profile).
pub const ASYMMETRIC_DECAY_RATE: f64 = 5.0;

/// Heat per second a burning structure adds to each neighbour (competitive profile).
pub const COMPETITIVE_TRANSFER_RATE: f64 = 35.0;

/// Natural cooling per second (competitive profile).
pub const COMPETITIVE_DECAY_RATE: f64 = 3.0;

/// Minimum interval between propagation passes (seconds).
pub const PROPAGATION_INTERVAL_SECS: f64 = 0.1;

/// A spatial index cell may be no smaller than the spread range divided by this.
pub const MIN_CELLS_PER_RANGE: f64 = 4.0;

// --- Economy ---

/// Defense starting budget.
pub const INITIAL_BUDGET: f64 = 2000.0;

/// Defense income per second before the difficulty ramp.
pub const INCOME_BASE: f64 = 50.0;

/// Extra income per second at full battle progress.
pub const INCOME_RAMP: f64 = 100.0;

/// Cost to fortify (build a wall on) a structure.
pub const WALL_COST: f64 = 100.0;

/// Cost to extinguish a heated structure.
pub const EXTINGUISH_COST: f64 = 300.0;

/// Offense ignite cooldown before the difficulty ramp (seconds).
pub const OFFENSE_COOLDOWN_BASE: f64 = 3.0;

/// Cooldown reduction at full battle progress (seconds).
pub const COOLDOWN_RAMP: f64 = 2.0;

/// Floor for the ramped cooldown (seconds).
pub const COOLDOWN_FLOOR: f64 = 0.5;

/// Competitive ignite cooldown (seconds).
pub const COMPETITIVE_COOLDOWN: f64 = 2.0;

// --- Scoring ---

/// City-wide damage percentage at which the offense wins.
pub const WIN_THRESHOLD: f64 = 50.0;

/// Published peer results older than this are ignored (milliseconds).
pub const RESULT_STALENESS_CUTOFF_MS: u64 = 10 * 60 * 1000;

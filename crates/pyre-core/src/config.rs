//! Match configuration: city layout, timing, thermal, economy and scoring.
//!
//! Everything here is consumed when a match is reset. Nothing is mutable
//! mid-match; a new configuration takes effect only through a reset.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{FactionRole, GameMode};
use crate::error::ConfigError;
use crate::types::{FactionId, Position};

/// Complete configuration for one match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// RNG seed for procedural generation. Same seed = same city.
    pub seed: u64,
    pub mode: GameMode,
    /// Participating factions (exactly 2 in asymmetric mode, 2-4 otherwise).
    pub faction_count: u8,
    pub city: CityLayout,
    pub timing: TimingConfig,
    pub thermal: ThermalConfig,
    pub economy: EconomyConfig,
    /// Damage percentage at which the offense wins (asymmetric only).
    pub win_threshold: f64,
}

/// Where structures come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CityLayout {
    /// Procedural rows x columns grid.
    Grid(GridLayout),
    /// Positional descriptors supplied by an external loader.
    Imported(ImportedCity),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub rows: u32,
    pub columns: u32,
    pub cube_size: f64,
    pub gap: f64,
    /// Maximum extra height as a multiple of `cube_size`.
    pub height_jitter: f64,
}

impl GridLayout {
    /// Centre-to-centre distance between neighbouring structures.
    pub fn pitch(&self) -> f64 {
        self.cube_size + self.gap
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            rows: GRID_SIZE,
            columns: GRID_SIZE,
            cube_size: CUBE_SIZE,
            gap: GAP,
            height_jitter: HEIGHT_JITTER,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportedCity {
    pub structures: Vec<StructureDescriptor>,
    /// Uniform scale applied to positions and heights.
    pub scale: f64,
    /// Vertical offset applied after scaling.
    pub offset_y: f64,
}

/// One externally loaded structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureDescriptor {
    /// Renderer-side handle (mesh name or similar).
    pub label: String,
    pub position: Position,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingConfig {
    pub setup_secs: f64,
    pub battle_secs: f64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            setup_secs: SETUP_SECS,
            battle_secs: BATTLE_SECS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermalConfig {
    pub threshold: f64,
    /// Heat per second a burning structure adds to each neighbour in range.
    pub transfer_rate: f64,
    /// Heat per second a non-ignited structure loses.
    pub decay_rate: f64,
    /// Ground-plane distance within which fire spreads.
    pub spread_range: f64,
    /// Propagation runs at most once per this many seconds.
    pub propagation_interval_secs: f64,
    /// Spatial index cell size. Defaults to the spread range.
    #[serde(default)]
    pub cell_size: Option<f64>,
}

impl ThermalConfig {
    /// Cell size the spatial index is built with.
    pub fn effective_cell_size(&self) -> f64 {
        match self.cell_size {
            Some(size) => size,
            None if self.spread_range > 0.0 => self.spread_range,
            None => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomyConfig {
    /// Ignite cooldown (offense base cooldown in asymmetric mode).
    pub ignite_cooldown_secs: f64,
    pub initial_budget: f64,
    pub income_base: f64,
    pub wall_cost: f64,
    pub extinguish_cost: f64,
    /// Raise defense income and shorten ignite cooldowns as the battle progresses.
    pub difficulty_ramp: bool,
}

impl MatchConfig {
    /// Defense-versus-offense profile.
    pub fn asymmetric() -> Self {
        let grid = GridLayout::default();
        Self {
            seed: 42,
            mode: GameMode::Asymmetric,
            faction_count: 2,
            thermal: ThermalConfig {
                threshold: HEAT_THRESHOLD,
                transfer_rate: ASYMMETRIC_TRANSFER_RATE,
                decay_rate: ASYMMETRIC_DECAY_RATE,
                spread_range: grid.cube_size * GRID_SPREAD_FACTOR,
                propagation_interval_secs: PROPAGATION_INTERVAL_SECS,
                cell_size: None,
            },
            city: CityLayout::Grid(grid),
            timing: TimingConfig::default(),
            economy: EconomyConfig {
                ignite_cooldown_secs: OFFENSE_COOLDOWN_BASE,
                initial_budget: INITIAL_BUDGET,
                income_base: INCOME_BASE,
                wall_cost: WALL_COST,
                extinguish_cost: EXTINGUISH_COST,
                difficulty_ramp: true,
            },
            win_threshold: WIN_THRESHOLD,
        }
    }

    /// Symmetric free-for-all profile for `faction_count` factions.
    pub fn competitive(faction_count: u8) -> Self {
        let grid = GridLayout::default();
        Self {
            seed: 42,
            mode: GameMode::Competitive,
            faction_count,
            thermal: ThermalConfig {
                threshold: HEAT_THRESHOLD,
                transfer_rate: COMPETITIVE_TRANSFER_RATE,
                decay_rate: COMPETITIVE_DECAY_RATE,
                spread_range: grid.cube_size * GRID_SPREAD_FACTOR,
                propagation_interval_secs: PROPAGATION_INTERVAL_SECS,
                cell_size: None,
            },
            city: CityLayout::Grid(grid),
            timing: TimingConfig::default(),
            economy: EconomyConfig {
                ignite_cooldown_secs: COMPETITIVE_COOLDOWN,
                initial_budget: 0.0,
                income_base: 0.0,
                wall_cost: WALL_COST,
                extinguish_cost: EXTINGUISH_COST,
                difficulty_ramp: false,
            },
            win_threshold: WIN_THRESHOLD,
        }
    }

    /// Replace the city with imported descriptors, scaling the spread range to match.
    pub fn with_imported_city(mut self, city: ImportedCity) -> Self {
        self.thermal.spread_range = IMPORTED_SPREAD_RANGE * city.scale;
        self.city = CityLayout::Imported(city);
        self
    }

    /// Factions taking part, in slot order.
    pub fn factions(&self) -> impl Iterator<Item = FactionId> {
        FactionId::first(self.faction_count)
    }

    /// Role of a faction under this configuration, if it takes part.
    pub fn role_of(&self, faction: FactionId) -> Option<FactionRole> {
        if faction.slot() > self.faction_count {
            return None;
        }
        Some(match self.mode {
            GameMode::Asymmetric if faction == FactionId::P1 => FactionRole::Defense,
            GameMode::Asymmetric => FactionRole::Offense,
            GameMode::Competitive => FactionRole::Competitor,
        })
    }

    /// Reject configurations that would produce a nonsensical match.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factions_ok = match self.mode {
            GameMode::Asymmetric => self.faction_count == 2,
            GameMode::Competitive => (MIN_FACTIONS..=MAX_FACTIONS).contains(&self.faction_count),
        };
        if !factions_ok {
            return Err(ConfigError::FactionCount {
                mode: self.mode,
                count: self.faction_count,
            });
        }

        non_negative("timing.setup_secs", self.timing.setup_secs)?;
        positive("timing.battle_secs", self.timing.battle_secs)?;

        let thermal = &self.thermal;
        positive("thermal.threshold", thermal.threshold)?;
        non_negative("thermal.transfer_rate", thermal.transfer_rate)?;
        non_negative("thermal.decay_rate", thermal.decay_rate)?;
        non_negative("thermal.spread_range", thermal.spread_range)?;
        non_negative(
            "thermal.propagation_interval_secs",
            thermal.propagation_interval_secs,
        )?;
        if let Some(size) = thermal.cell_size {
            positive("thermal.cell_size", size)?;
            let min = thermal.spread_range / MIN_CELLS_PER_RANGE;
            if size < min {
                return Err(ConfigError::OutOfRange {
                    field: "thermal.cell_size",
                    value: size,
                    min,
                    max: f64::INFINITY,
                });
            }
        }

        let economy = &self.economy;
        non_negative("economy.ignite_cooldown_secs", economy.ignite_cooldown_secs)?;
        non_negative("economy.initial_budget", economy.initial_budget)?;
        non_negative("economy.income_base", economy.income_base)?;
        non_negative("economy.wall_cost", economy.wall_cost)?;
        non_negative("economy.extinguish_cost", economy.extinguish_cost)?;

        if !(0.0..=100.0).contains(&self.win_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "win_threshold",
                value: self.win_threshold,
                min: 0.0,
                max: 100.0,
            });
        }

        match &self.city {
            CityLayout::Grid(grid) => {
                positive("city.cube_size", grid.cube_size)?;
                non_negative("city.gap", grid.gap)?;
                non_negative("city.height_jitter", grid.height_jitter)?;
            }
            CityLayout::Imported(city) => {
                positive("city.scale", city.scale)?;
                if !city.offset_y.is_finite() {
                    return Err(ConfigError::NotFinite {
                        field: "city.offset_y",
                        value: city.offset_y,
                    });
                }
                if let Some(bad) = city
                    .structures
                    .iter()
                    .find(|s| !s.position.is_finite() || !s.height.is_finite())
                {
                    return Err(ConfigError::InvalidDescriptor {
                        label: bad.label.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::competitive(2)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

//! Fundamental identifiers, geometric and simulation types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::MAX_FACTIONS;

/// World-space position. x = East, y = Up, z = South.
/// Fire spread and spatial bucketing use the ground plane (x, z).
pub type Position = glam::DVec3;

/// Squared distance between two positions on the ground plane.
pub fn ground_distance_sq(a: Position, b: Position) -> f64 {
    let dx = b.x - a.x;
    let dz = b.z - a.z;
    dx * dx + dz * dz
}

/// Stable identifier of a structure, unique within a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructureId(pub u32);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Faction tag. Slots 1..=4, written as `P1`..`P4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FactionId(u8);

impl FactionId {
    pub const P1: FactionId = FactionId(1);
    pub const P2: FactionId = FactionId(2);
    pub const P3: FactionId = FactionId(3);
    pub const P4: FactionId = FactionId(4);

    /// Faction for a 1-based slot, if the slot is in range.
    pub fn new(slot: u8) -> Option<Self> {
        (1..=MAX_FACTIONS).contains(&slot).then_some(Self(slot))
    }

    /// 1-based slot number.
    pub fn slot(&self) -> u8 {
        self.0
    }

    /// The first `count` factions in slot order.
    pub fn first(count: u8) -> impl Iterator<Item = FactionId> {
        (1..=count.min(MAX_FACTIONS)).map(FactionId)
    }
}

impl fmt::Display for FactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

impl FromStr for FactionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('P')
            .and_then(|n| n.parse::<u8>().ok())
            .and_then(FactionId::new)
            .ok_or_else(|| format!("invalid faction tag: {s:?}"))
    }
}

impl TryFrom<String> for FactionId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FactionId> for String {
    fn from(id: FactionId) -> Self {
        id.to_string()
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks processed since the last reset.
    pub tick: u64,
    /// Elapsed simulation time in seconds since the last reset.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

//! Phase clock: SETUP -> BATTLE -> FINISH.

use pyre_core::config::TimingConfig;
use pyre_core::enums::MatchPhase;

/// A phase boundary crossed during `advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub from: MatchPhase,
    pub to: MatchPhase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseClock {
    phase: MatchPhase,
    /// Seconds remaining in the current phase.
    timer: f64,
}

impl PhaseClock {
    /// Clock at the start of a match.
    pub fn new(timing: &TimingConfig) -> Self {
        Self {
            phase: MatchPhase::Setup,
            timer: timing.setup_secs,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn timer(&self) -> f64 {
        self.timer
    }

    /// Count down by `dt` and cross at most one phase boundary.
    ///
    /// Crossing into BATTLE re-arms the timer with the full battle duration;
    /// crossing into FINISH pins it at zero. FINISH is terminal.
    pub fn advance(&mut self, dt: f64, timing: &TimingConfig) -> Option<PhaseTransition> {
        if self.phase == MatchPhase::Finish {
            return None;
        }

        self.timer -= dt;
        if self.timer > 0.0 {
            return None;
        }

        let from = self.phase;
        match from {
            MatchPhase::Setup => {
                self.phase = MatchPhase::Battle;
                self.timer = timing.battle_secs;
            }
            MatchPhase::Battle | MatchPhase::Finish => {
                self.phase = MatchPhase::Finish;
                self.timer = 0.0;
            }
        }
        Some(PhaseTransition {
            from,
            to: self.phase,
        })
    }

    /// End the battle early. Returns the transition if one happened.
    pub fn finish(&mut self) -> Option<PhaseTransition> {
        if self.phase == MatchPhase::Finish {
            return None;
        }
        let from = self.phase;
        self.phase = MatchPhase::Finish;
        self.timer = self.timer.max(0.0);
        Some(PhaseTransition {
            from,
            to: MatchPhase::Finish,
        })
    }

    /// Battle progress in [0, 1]; 0 outside BATTLE.
    pub fn progress(&self, timing: &TimingConfig) -> f64 {
        if self.phase != MatchPhase::Battle {
            return 0.0;
        }
        (1.0 - self.timer / timing.battle_secs).clamp(0.0, 1.0)
    }
}

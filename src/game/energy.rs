//! Energy bar and phase state machine.
//!
//! One bounded scalar drives everything: it decays every tick, collisions
//! nudge it, half a bar transforms the runner into the flyer and a full
//! bar wins. The machine also tracks the elapsed-time clock and folds the
//! finish time into the best-time record on victory.

use super::best_time::BestTimeFile;
use super::constants::*;

/// The four mutually exclusive gameplay modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PhaseOne,
    PhaseTwo,
    Victory,
    GameOver,
}

/// How a running phase ended this tick, if it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEnd {
    Victory,
    GameOver,
}

pub struct EnergyMachine {
    phase: Phase,
    energy: f32,
    elapsed_ticks: u64,
    finish_secs: u64,
    /// Displayed best after a victory (smaller of stored record and finish)
    best_secs: Option<u64>,
    best_file: BestTimeFile,
}

impl EnergyMachine {
    pub fn new(best_file: BestTimeFile) -> Self {
        Self {
            phase: Phase::PhaseOne,
            energy: ENERGY_START,
            elapsed_ticks: 0,
            finish_secs: 0,
            best_secs: None,
            best_file,
        }
    }

    /// Advance the elapsed clock by one tick. Only running phases call this.
    pub fn tick_clock(&mut self) {
        self.elapsed_ticks += 1;
    }

    /// Phase-1 transformation gate, checked before the per-tick decay.
    /// Returns true when the machine just moved to phase 2.
    pub fn try_transform(&mut self) -> bool {
        if self.phase == Phase::PhaseOne && self.energy >= ENERGY_TRANSFORM {
            self.phase = Phase::PhaseTwo;
            true
        } else {
            false
        }
    }

    /// Per-tick decay plus bound checks. Reaching the lower bound ends the
    /// run; reaching the upper bound in phase 2 clamps to exactly the cap,
    /// records the finish time and settles the best-time file.
    pub fn decay(&mut self) -> Option<PhaseEnd> {
        self.energy -= ENERGY_DECAY;

        if self.energy <= 0.0 {
            self.finish_secs = self.elapsed_secs();
            self.phase = Phase::GameOver;
            Some(PhaseEnd::GameOver)
        } else if self.phase == Phase::PhaseTwo && self.energy >= ENERGY_VICTORY {
            self.energy = ENERGY_VICTORY;
            self.finish_secs = self.elapsed_secs();
            self.best_secs = Some(self.best_file.record(self.finish_secs));
            self.phase = Phase::Victory;
            Some(PhaseEnd::Victory)
        } else {
            None
        }
    }

    /// Favorable collision (attack hit or orb pickup).
    pub fn gain_orb(&mut self) {
        self.energy += ENERGY_ORB_BONUS;
    }

    /// Unfavorable collision (fireball).
    pub fn hit_fireball(&mut self) {
        self.energy -= ENERGY_FIREBALL_PENALTY;
    }

    /// Retry from a terminal screen: fresh bar, fresh clock, phase 1.
    pub fn retry(&mut self) {
        self.energy = ENERGY_START;
        self.elapsed_ticks = 0;
        self.phase = Phase::PhaseOne;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Whole seconds since the run started, truncated.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ticks / TICK_RATE
    }

    pub fn finish_secs(&self) -> u64 {
        self.finish_secs
    }

    pub fn best_secs(&self) -> Option<u64> {
        self.best_secs
    }

    #[cfg(test)]
    pub(crate) fn set_energy(&mut self, energy: f32) {
        self.energy = energy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machine(dir: &tempfile::TempDir) -> EnergyMachine {
        EnergyMachine::new(BestTimeFile::new(dir.path().join("best_score.txt")))
    }

    #[test]
    fn test_unattended_decay_reaches_game_over() {
        // E starts at 100, decays 0.25/tick: 400 ticks to zero
        let dir = tempfile::tempdir().unwrap();
        let mut m = machine(&dir);

        let mut end = None;
        let mut ticks = 0u64;
        while end.is_none() {
            m.tick_clock();
            end = m.decay();
            ticks += 1;
            assert!(ticks <= 400, "decay must hit the floor by tick 400");
        }
        assert_eq!(end, Some(PhaseEnd::GameOver));
        assert_eq!(m.phase(), Phase::GameOver);
        assert_eq!(ticks, 400);
        // finish time = elapsed ticks / 60, truncated
        assert_eq!(m.finish_secs(), 400 / TICK_RATE);
    }

    #[test]
    fn test_transform_gate_at_half_bar() {
        let dir = tempfile::tempdir().unwrap();
        let mut m = machine(&dir);
        assert!(!m.try_transform(), "not at 250 yet");

        for _ in 0..5 {
            m.gain_orb();
        }
        assert!(m.energy() >= ENERGY_TRANSFORM);
        assert!(m.try_transform());
        assert_eq!(m.phase(), Phase::PhaseTwo);
        // Gate only fires out of phase 1
        assert!(!m.try_transform());
    }

    #[test]
    fn test_victory_clamps_to_exactly_full() {
        let dir = tempfile::tempdir().unwrap();
        let mut m = machine(&dir);
        m.set_energy(ENERGY_TRANSFORM);
        assert!(m.try_transform());

        m.set_energy(480.0);
        m.gain_orb(); // 510, above the cap
        for _ in 0..120 {
            m.tick_clock();
        }
        let end = m.decay();
        assert_eq!(end, Some(PhaseEnd::Victory));
        assert_eq!(m.phase(), Phase::Victory);
        assert_eq!(m.energy(), ENERGY_VICTORY, "clamped to exactly 500");
        assert_eq!(m.finish_secs(), 2);
        assert_eq!(m.best_secs(), Some(2));
    }

    #[test]
    fn test_no_victory_from_phase_one() {
        // Phase 1 never reaches the cap: the transform gate fires first.
        // Even if energy is forced high, decay in phase 1 must not declare
        // victory.
        let dir = tempfile::tempdir().unwrap();
        let mut m = machine(&dir);
        m.set_energy(600.0);
        assert_eq!(m.decay(), None);
        assert_eq!(m.phase(), Phase::PhaseOne);
    }

    #[test]
    fn test_fireball_can_push_into_game_over() {
        let dir = tempfile::tempdir().unwrap();
        let mut m = machine(&dir);
        m.set_energy(ENERGY_TRANSFORM);
        assert!(m.try_transform());

        m.set_energy(15.0);
        m.hit_fireball(); // -20 -> below zero
        let end = m.decay();
        assert_eq!(end, Some(PhaseEnd::GameOver), "terminal before the next draw");
    }

    #[test]
    fn test_retry_resets_bar_clock_and_phase() {
        let dir = tempfile::tempdir().unwrap();
        let mut m = machine(&dir);
        m.set_energy(0.1);
        m.tick_clock();
        assert_eq!(m.decay(), Some(PhaseEnd::GameOver));

        m.retry();
        assert_eq!(m.phase(), Phase::PhaseOne);
        assert_eq!(m.energy(), ENERGY_START);
        assert_eq!(m.elapsed_secs(), 0);
    }

    #[test]
    fn test_victory_updates_best_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("best_score.txt"), "50").unwrap();
        let mut m = machine(&dir);
        m.set_energy(ENERGY_TRANSFORM);
        assert!(m.try_transform());

        m.set_energy(ENERGY_VICTORY + 10.0);
        for _ in 0..(42 * TICK_RATE) {
            m.tick_clock();
        }
        assert_eq!(m.decay(), Some(PhaseEnd::Victory));
        assert_eq!(m.best_secs(), Some(42));
        let content = std::fs::read_to_string(dir.path().join("best_score.txt")).unwrap();
        assert_eq!(content, "42");
    }
}

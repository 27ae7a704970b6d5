//! Game session - the state driven by the fixed-tick loop.
//!
//! Owns the registry and the energy machine, runs the spawn timers and
//! dispatches the per-phase update: input intent, actor physics,
//! projectile motion, collision resolution, energy update. Draw dispatch
//! lives in the renderer; sound playback in the sound bank. One tick,
//! one direction of data flow.

use macroquad::prelude::*;
use ::rand::Rng;

use super::constants::*;
use super::energy::{EnergyMachine, Phase, PhaseEnd};
use super::events::{EventQueue, SoundCue};
use super::projectile::{Fireball, Orb, SpawnRange};
use super::registry::Registry;
use crate::input::InputFrame;

/// Fixed-interval spawn timer, counted in ticks. Fires on the tick the
/// interval completes, then rearms.
#[derive(Debug)]
struct SpawnTimer {
    interval: u32,
    counter: u32,
}

impl SpawnTimer {
    fn new(interval: u32) -> Self {
        Self { interval, counter: 0 }
    }

    fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter >= self.interval {
            self.counter = 0;
            true
        } else {
            false
        }
    }

    fn reset(&mut self) {
        self.counter = 0;
    }
}

pub struct GameSession {
    pub registry: Registry,
    pub machine: EnergyMachine,
    pub cues: EventQueue<SoundCue>,
    orb_timer: SpawnTimer,
    fireball_timer: SpawnTimer,
    orb_size: Vec2,
    fireball_size: Vec2,
}

impl GameSession {
    pub fn new(machine: EnergyMachine, orb_size: Vec2, fireball_size: Vec2) -> Self {
        let mut cues = EventQueue::new();
        cues.send(SoundCue::MusicStart);
        Self {
            registry: Registry::new(),
            machine,
            cues,
            orb_timer: SpawnTimer::new(ORB_SPAWN_TICKS),
            fireball_timer: SpawnTimer::new(FIREBALL_SPAWN_TICKS),
            orb_size,
            fireball_size,
        }
    }

    /// Run one fixed tick against this tick's input snapshot.
    pub fn tick(&mut self, input: &InputFrame, rng: &mut impl Rng) {
        match self.machine.phase() {
            Phase::PhaseOne => self.tick_phase_one(input, rng),
            Phase::PhaseTwo => self.tick_phase_two(input, rng),
            Phase::Victory | Phase::GameOver => self.tick_end_screen(input),
        }
    }

    fn tick_phase_one(&mut self, input: &InputFrame, rng: &mut impl Rng) {
        self.machine.tick_clock();

        if self.orb_timer.tick() {
            self.registry.add_orb(Orb::spawn(
                SpawnRange::ORB_PHASE_ONE,
                ORB_SPEED_PHASE_ONE,
                self.orb_size,
                rng,
            ));
        }

        // Attack swing: the cue plays on every press, the bonus only on a hit
        if input.pointer_pressed {
            self.cues.send(SoundCue::Attack);
            if self.registry.runner_orb_hits() > 0 {
                self.cues.send(SoundCue::OrbBreak);
                self.machine.gain_orb();
            }
        }

        self.registry.runner.update(input);
        self.registry.advance_projectiles();

        if self.machine.try_transform() {
            // Phase-1 orbs never follow into the sky
            self.registry.clear_orbs();
            self.cues.send(SoundCue::Transform);
        }

        if let Some(PhaseEnd::GameOver) = self.machine.decay() {
            self.cues.send(SoundCue::MusicStop);
        }
    }

    fn tick_phase_two(&mut self, input: &InputFrame, rng: &mut impl Rng) {
        self.machine.tick_clock();

        if self.orb_timer.tick() {
            self.registry.add_orb(Orb::spawn(
                SpawnRange::ORB_PHASE_TWO,
                ORB_SPEED_PHASE_TWO,
                self.orb_size,
                rng,
            ));
        }
        if self.fireball_timer.tick() {
            self.registry
                .add_fireball(Fireball::spawn(self.fireball_size, rng));
        }

        self.registry.flyer.update(input);
        self.registry.advance_projectiles();

        if self.registry.flyer_orb_hits() > 0 {
            self.cues.send(SoundCue::OrbBreak);
            self.machine.gain_orb();
        }
        if self.registry.flyer_fireball_hits() > 0 {
            self.cues.send(SoundCue::FireballHit);
            self.machine.hit_fireball();
        }

        match self.machine.decay() {
            Some(PhaseEnd::GameOver) => self.cues.send(SoundCue::MusicStop),
            Some(PhaseEnd::Victory) => {
                self.cues.send(SoundCue::MusicStop);
                self.cues.send(SoundCue::Victory);
            }
            None => {}
        }
    }

    fn tick_end_screen(&mut self, input: &InputFrame) {
        let (x, y, w, h) = RETRY_BUTTON;
        let button = Rect::new(x, y, w, h);
        if input.pointer_pressed && button.contains(input.pointer) {
            self.retry();
        }
    }

    /// Back to a fresh phase 1. Safe to call any number of times.
    fn retry(&mut self) {
        self.machine.retry();
        self.registry.clear_projectiles();
        self.registry.runner.reset();
        self.registry.flyer.reset();
        self.orb_timer.reset();
        self.fireball_timer.reset();
        self.cues.send(SoundCue::MusicStart);
    }
}

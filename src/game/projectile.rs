//! Orbs and fireballs - plain moving hazards/pickups.
//!
//! Both spawn at a random point inside a phase-specific rectangle, march
//! left at a fixed speed and despawn once they pass the off-screen
//! threshold. Fireballs additionally loop through their frame cycle.

use macroquad::prelude::*;
use ::rand::Rng;

use super::constants::*;
use super::frames::FrameCursor;

/// Inclusive spawn coordinate ranges for one projectile kind.
#[derive(Debug, Clone, Copy)]
pub struct SpawnRange {
    pub x: (i32, i32),
    pub y: (i32, i32),
}

impl SpawnRange {
    pub const ORB_PHASE_ONE: SpawnRange = SpawnRange {
        x: ORB_PHASE_ONE_X,
        y: ORB_PHASE_ONE_Y,
    };
    pub const ORB_PHASE_TWO: SpawnRange = SpawnRange {
        x: ORB_PHASE_TWO_X,
        y: ORB_PHASE_TWO_Y,
    };
    pub const FIREBALL: SpawnRange = SpawnRange {
        x: FIREBALL_X,
        y: FIREBALL_Y,
    };

    fn roll(&self, rng: &mut impl Rng) -> Vec2 {
        vec2(
            rng.gen_range(self.x.0..=self.x.1) as f32,
            rng.gen_range(self.y.0..=self.y.1) as f32,
        )
    }
}

/// An energy orb. Topleft-anchored; speed is fixed at spawn time.
#[derive(Debug, Clone)]
pub struct Orb {
    rect: Rect,
    speed: f32,
}

impl Orb {
    pub fn spawn(range: SpawnRange, speed: f32, size: Vec2, rng: &mut impl Rng) -> Self {
        let pos = range.roll(rng);
        Self {
            rect: Rect::new(pos.x, pos.y, size.x, size.y),
            speed,
        }
    }

    pub fn advance(&mut self) {
        self.rect.x -= self.speed;
    }

    pub fn off_screen(&self) -> bool {
        self.rect.x <= DESPAWN_X
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/// A fireball hazard. Animates continuously, independent of movement.
#[derive(Debug, Clone)]
pub struct Fireball {
    rect: Rect,
    cursor: FrameCursor,
}

impl Fireball {
    pub fn spawn(size: Vec2, rng: &mut impl Rng) -> Self {
        let pos = SpawnRange::FIREBALL.roll(rng);
        Self {
            rect: Rect::new(pos.x, pos.y, size.x, size.y),
            cursor: FrameCursor::new(),
        }
    }

    pub fn advance(&mut self) {
        self.rect.x -= FIREBALL_SPEED;
        self.cursor.advance(FIREBALL_STEP, FIREBALL_FRAMES);
    }

    pub fn off_screen(&self) -> bool {
        self.rect.x <= DESPAWN_X
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn frame(&self) -> usize {
        self.cursor.frame(FIREBALL_FRAMES)
    }
}

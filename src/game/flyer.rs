//! Phase-2 actor: the flyer.
//!
//! Free four-directional movement, no gravity. Edge clamping is a
//! first-match chain (left, right, bottom, top) - a corner overshoot only
//! gets one axis corrected per tick. That short-circuit order is inherited
//! behavior and must not be "fixed" into independent axis clamps.

use macroquad::prelude::*;

use super::constants::*;
use super::frames::FrameCursor;
use super::runner::midbottom_rect;
use crate::input::InputFrame;

/// Which animation track the flyer is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlyerTrack {
    FlyUp,
    FlyDown,
    FlyNeutral,
}

impl FlyerTrack {
    pub fn len(&self) -> usize {
        match self {
            FlyerTrack::FlyUp => FLYER_UP_FRAMES,
            FlyerTrack::FlyDown => FLYER_DOWN_FRAMES,
            FlyerTrack::FlyNeutral => FLYER_NEUTRAL_FRAMES,
        }
    }

    fn step(&self) -> f32 {
        match self {
            FlyerTrack::FlyUp => FLYER_UP_STEP,
            FlyerTrack::FlyDown => FLYER_DOWN_STEP,
            FlyerTrack::FlyNeutral => FLYER_NEUTRAL_STEP,
        }
    }
}

pub struct Flyer {
    rect: Rect,
    vel: Vec2,
    cursor: FrameCursor,
    track: FlyerTrack,
    /// Immutable midbottom spawn point, used on retry
    start: Vec2,
}

impl Flyer {
    pub fn new() -> Self {
        let w = FLYER_NEUTRAL_CELL.0 as f32 * FLYER_SCALE;
        let h = FLYER_NEUTRAL_CELL.1 as f32 * FLYER_SCALE;
        let start = vec2(FLYER_START.0, FLYER_START.1);
        Self {
            rect: midbottom_rect(start, w, h),
            vel: Vec2::ZERO,
            cursor: FrameCursor::new(),
            track: FlyerTrack::FlyNeutral,
            start,
        }
    }

    /// Advance one tick: sample intent, integrate, animate.
    pub fn update(&mut self, input: &InputFrame) {
        self.apply_input(input);
        self.apply_movement();
        self.animate(input);
    }

    fn apply_input(&mut self, input: &InputFrame) {
        if input.up {
            self.vel.y -= FLYER_ACCEL;
        }
        if input.down {
            self.vel.y += FLYER_ACCEL;
        }
        if input.right {
            self.vel.x += FLYER_ACCEL;
        }
        if input.left {
            self.vel.x -= FLYER_ACCEL;
        }
        // All-or-nothing: both axes stop dead once the keyboard is idle
        if !input.any_key {
            self.vel = Vec2::ZERO;
        }
    }

    fn apply_movement(&mut self) {
        // First-match clamp chain on the pre-move position
        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        } else if self.rect.right() > SCREEN_WIDTH {
            self.rect.x = SCREEN_WIDTH - self.rect.w;
        } else if self.rect.bottom() > SCREEN_HEIGHT {
            self.rect.y = SCREEN_HEIGHT - self.rect.h;
        } else if self.rect.y < 0.0 {
            self.rect.y = 0.0;
        }

        self.rect.x += self.vel.x.trunc();
        self.rect.y += self.vel.y.trunc();
    }

    fn animate(&mut self, input: &InputFrame) {
        self.track = if input.up {
            FlyerTrack::FlyUp
        } else if input.down {
            FlyerTrack::FlyDown
        } else {
            FlyerTrack::FlyNeutral
        };
        self.cursor.advance(self.track.step(), self.track.len());
    }

    /// Active track and whole-frame index for drawing.
    pub fn active_frame(&self) -> (FlyerTrack, usize) {
        (self.track, self.cursor.frame(self.track.len()))
    }

    /// Return to the spawn point. The frame cursor deliberately persists.
    pub fn reset(&mut self) {
        self.rect = midbottom_rect(self.start, self.rect.w, self.rect.h);
        self.vel = Vec2::ZERO;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

impl Default for Flyer {
    fn default() -> Self {
        Self::new()
    }
}

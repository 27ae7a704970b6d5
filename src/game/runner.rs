//! Phase-1 actor: the runner.
//!
//! Gravity, jump, attack. Animation tracks are selected by priority
//! Attack > Jump (airborne) > Run; run and jump share one cursor while the
//! attack track keeps its own, matching the original tuning.

use macroquad::prelude::*;

use super::constants::*;
use super::frames::FrameCursor;
use crate::input::InputFrame;

/// Which animation track the runner is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerTrack {
    Run,
    Jump,
    Attack,
}

pub struct Runner {
    rect: Rect,
    vel: Vec2,
    cursor: FrameCursor,
    attack_cursor: FrameCursor,
    attacking: bool,
    /// Immutable midbottom spawn point, used on retry
    start: Vec2,
}

impl Runner {
    pub fn new() -> Self {
        let w = RUNNER_CELL.0 as f32 * RUNNER_SCALE;
        let h = RUNNER_CELL.1 as f32 * RUNNER_SCALE;
        let start = vec2(RUNNER_START.0, RUNNER_START.1);
        Self {
            rect: midbottom_rect(start, w, h),
            vel: Vec2::ZERO,
            cursor: FrameCursor::new(),
            attack_cursor: FrameCursor::new(),
            attacking: false,
            start,
        }
    }

    /// Advance one tick: sample intent, integrate, animate.
    pub fn update(&mut self, input: &InputFrame) {
        self.apply_input(input);
        self.apply_movement();
        self.animate();
    }

    fn apply_input(&mut self, input: &InputFrame) {
        if input.jump && self.grounded() {
            self.vel.y = RUNNER_JUMP_VELOCITY;
        }
        if input.right {
            self.vel.x += RUNNER_ACCEL;
        }
        if input.left {
            self.vel.x -= RUNNER_ACCEL;
        }
        // Horizontal momentum only survives while some key is held
        if !input.any_key {
            self.vel.x = 0.0;
        }
        if input.pointer_down {
            self.attacking = true;
        }
    }

    fn apply_movement(&mut self) {
        // Screen-edge clamp runs on the pre-move position, first match only
        if self.rect.x < 0.0 {
            self.rect.x = 0.0;
        } else if self.rect.right() > SCREEN_WIDTH {
            self.rect.x = SCREEN_WIDTH - self.rect.w;
        }

        // Gravity accumulates every tick; the floor clamp absorbs it while
        // grounded and a jump overwrites it
        self.vel.y += GRAVITY;
        self.rect.y += self.vel.y.trunc();
        if self.rect.bottom() > GROUND_Y {
            self.rect.y = GROUND_Y - self.rect.h;
        }

        self.rect.x += self.vel.x.trunc();
    }

    fn animate(&mut self) {
        if self.attacking {
            if self.attack_cursor.advance(RUNNER_ATTACK_STEP, RUNNER_ATTACK_FRAMES) {
                self.attacking = false;
            }
        } else if self.airborne() {
            self.cursor.advance(RUNNER_JUMP_STEP, RUNNER_JUMP_FRAMES);
        } else {
            self.cursor.advance(RUNNER_RUN_STEP, RUNNER_RUN_FRAMES);
        }
    }

    /// Active track and whole-frame index for drawing.
    pub fn active_frame(&self) -> (RunnerTrack, usize) {
        if self.attacking {
            (RunnerTrack::Attack, self.attack_cursor.frame(RUNNER_ATTACK_FRAMES))
        } else if self.airborne() {
            (RunnerTrack::Jump, self.cursor.frame(RUNNER_JUMP_FRAMES))
        } else {
            (RunnerTrack::Run, self.cursor.frame(RUNNER_RUN_FRAMES))
        }
    }

    /// Return to the spawn point. Frame cursors deliberately persist.
    pub fn reset(&mut self) {
        self.rect = midbottom_rect(self.start, self.rect.w, self.rect.h);
        self.vel = Vec2::ZERO;
        self.attacking = false;
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn grounded(&self) -> bool {
        self.rect.bottom() >= GROUND_Y
    }

    fn airborne(&self) -> bool {
        self.rect.bottom() < GROUND_Y
    }

    pub fn attacking(&self) -> bool {
        self.attacking
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a rect whose bottom-center sits at `anchor`.
pub(crate) fn midbottom_rect(anchor: Vec2, w: f32, h: f32) -> Rect {
    Rect::new(anchor.x - w / 2.0, anchor.y - h, w, h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idle() -> InputFrame {
        InputFrame::default()
    }

    fn held(f: impl FnOnce(&mut InputFrame)) -> InputFrame {
        let mut input = InputFrame { any_key: true, ..Default::default() };
        f(&mut input);
        input
    }

    #[test]
    fn test_spawns_on_ground_at_start() {
        let runner = Runner::new();
        assert_eq!(runner.rect().bottom(), GROUND_Y);
        assert_eq!(runner.rect().x + runner.rect().w / 2.0, RUNNER_START.0);
        assert!(runner.grounded());
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut runner = Runner::new();
        runner.update(&held(|i| i.jump = true));
        assert!(!runner.grounded(), "jump should lift the runner off the floor");

        let height_after_jump = runner.rect().y;
        // A second jump press mid-air must not re-apply the impulse
        runner.update(&held(|i| i.jump = true));
        assert!(runner.rect().y < height_after_jump, "still rising under the old impulse");
    }

    #[test]
    fn test_gravity_returns_runner_to_floor() {
        let mut runner = Runner::new();
        runner.update(&held(|i| i.jump = true));
        for _ in 0..120 {
            runner.update(&idle());
        }
        assert_eq!(runner.rect().bottom(), GROUND_Y, "floor clamp, not a bounce");
    }

    #[test]
    fn test_horizontal_velocity_accumulates() {
        let mut runner = Runner::new();
        let x0 = runner.rect().x;
        // 0.25/tick needs four ticks before a whole-unit step lands
        for _ in 0..4 {
            runner.update(&held(|i| i.right = true));
        }
        assert!(runner.rect().x < x0 + 1.5);
        for _ in 0..8 {
            runner.update(&held(|i| i.right = true));
        }
        assert!(runner.rect().x > x0 + 5.0, "velocity keeps building while held");
    }

    #[test]
    fn test_idle_keyboard_zeroes_horizontal_velocity() {
        let mut runner = Runner::new();
        for _ in 0..12 {
            runner.update(&held(|i| i.right = true));
        }
        let x = runner.rect().x;
        runner.update(&idle());
        runner.update(&idle());
        assert_eq!(runner.rect().x, x, "no residual drift once the keyboard is idle");
    }

    #[test]
    fn test_left_edge_clamp() {
        let mut runner = Runner::new();
        for _ in 0..600 {
            runner.update(&held(|i| i.left = true));
        }
        // Clamp runs pre-move, so the rect can sit past the edge for one
        // tick; the next tick snaps it back
        assert!(runner.rect().x <= 0.0);
        runner.update(&idle());
        assert_eq!(runner.rect().x, 0.0);
    }

    #[test]
    fn test_attack_latches_and_clears_after_one_cycle() {
        let mut runner = Runner::new();
        runner.update(&held(|i| i.pointer_down = true));
        assert!(runner.attacking());
        assert_eq!(runner.active_frame().0, RunnerTrack::Attack);

        // 6 frames at 0.2/tick is one cycle in ~30 ticks; float rounding
        // may move the wrap by one tick
        let mut ticks = 1;
        while runner.attacking() && ticks < 40 {
            runner.update(&idle());
            ticks += 1;
        }
        assert!(!runner.attacking());
        assert!((30..=31).contains(&ticks), "cycle took {} ticks", ticks);
        assert_eq!(runner.active_frame().0, RunnerTrack::Run);
    }

    #[test]
    fn test_track_priority_attack_over_jump() {
        let mut runner = Runner::new();
        runner.update(&held(|i| {
            i.jump = true;
            i.pointer_down = true;
        }));
        assert!(!runner.grounded());
        assert_eq!(runner.active_frame().0, RunnerTrack::Attack);
    }

    #[test]
    fn test_jump_track_while_airborne() {
        let mut runner = Runner::new();
        runner.update(&held(|i| i.jump = true));
        runner.update(&idle());
        assert_eq!(runner.active_frame().0, RunnerTrack::Jump);
    }

    #[test]
    fn test_reset_restores_start_and_clears_attack() {
        let mut runner = Runner::new();
        for _ in 0..20 {
            runner.update(&held(|i| {
                i.right = true;
                i.jump = true;
                i.pointer_down = true;
            }));
        }
        runner.reset();
        assert_eq!(runner.rect().bottom(), GROUND_Y);
        assert_eq!(runner.rect().x + runner.rect().w / 2.0, RUNNER_START.0);
        assert!(!runner.attacking());
    }
}

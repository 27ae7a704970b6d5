//! Screen, physics and balance constants.
//!
//! The energy thresholds encode a fixed budget: half a bar triggers the
//! transformation, a full bar wins. Balancing happens through the decay
//! rate and the collision deltas, never through the thresholds.

// Window resolution
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

/// Floor line for the runner phase. The runner's bottom edge never goes below it.
pub const GROUND_Y: f32 = 605.0;

/// Fixed simulation step. Tick-based constants below assume a stable 60 Hz;
/// no delta-time scaling is performed anywhere.
pub const TICK_RATE: u64 = 60;

// Runner (phase 1)
pub const RUNNER_START: (f32, f32) = (90.0, 605.0); // midbottom
pub const RUNNER_CELL: (u16, u16) = (42, 42);
pub const RUNNER_SCALE: f32 = 4.0;
pub const RUNNER_RUN_FRAMES: usize = 6;
pub const RUNNER_JUMP_FRAMES: usize = 8;
pub const RUNNER_ATTACK_FRAMES: usize = 6;
pub const RUNNER_RUN_STEP: f32 = 0.3;
pub const RUNNER_JUMP_STEP: f32 = 0.1;
pub const RUNNER_ATTACK_STEP: f32 = 0.2;
pub const RUNNER_ACCEL: f32 = 0.25;
pub const RUNNER_JUMP_VELOCITY: f32 = -25.0;
pub const GRAVITY: f32 = 1.0;

// Flyer (phase 2)
pub const FLYER_START: (f32, f32) = (120.0, 400.0); // midbottom
pub const FLYER_NEUTRAL_CELL: (u16, u16) = (52, 28);
pub const FLYER_UP_CELL: (u16, u16) = (48, 28);
pub const FLYER_DOWN_CELL: (u16, u16) = (51, 28);
pub const FLYER_SCALE: f32 = 3.5;
pub const FLYER_NEUTRAL_FRAMES: usize = 3;
pub const FLYER_UP_FRAMES: usize = 4;
pub const FLYER_DOWN_FRAMES: usize = 4;
pub const FLYER_NEUTRAL_STEP: f32 = 0.1;
pub const FLYER_UP_STEP: f32 = 0.2;
pub const FLYER_DOWN_STEP: f32 = 0.1;
pub const FLYER_ACCEL: f32 = 0.30;

// Projectiles. Spawn ranges are inclusive, mirroring the phase the
// projectile belongs to. Anything past DESPAWN_X is removed.
pub const ORB_PHASE_ONE_X: (i32, i32) = (1300, 1500);
pub const ORB_PHASE_ONE_Y: (i32, i32) = (250, 475);
pub const ORB_PHASE_TWO_X: (i32, i32) = (1500, 1700);
pub const ORB_PHASE_TWO_Y: (i32, i32) = (200, 600);
pub const ORB_SPEED_PHASE_ONE: f32 = 10.0;
pub const ORB_SPEED_PHASE_TWO: f32 = 20.0;
pub const FIREBALL_X: (i32, i32) = (1500, 1700);
pub const FIREBALL_Y: (i32, i32) = (250, 600);
pub const FIREBALL_SPEED: f32 = 25.0;
pub const FIREBALL_CELL: (u16, u16) = (63, 43);
pub const FIREBALL_SCALE: f32 = 4.0;
pub const FIREBALL_FRAMES: usize = 8;
pub const FIREBALL_STEP: f32 = 0.05;
pub const DESPAWN_X: f32 = -100.0;

// Spawn cadence, expressed in ticks at the fixed 60 Hz step
// (1000 ms and 1400 ms in wall-clock terms).
pub const ORB_SPAWN_TICKS: u32 = 60;
pub const FIREBALL_SPAWN_TICKS: u32 = 84;

// Energy bar
pub const ENERGY_START: f32 = 100.0;
pub const ENERGY_DECAY: f32 = 0.25;
pub const ENERGY_ORB_BONUS: f32 = 30.0;
pub const ENERGY_FIREBALL_PENALTY: f32 = 20.0;
pub const ENERGY_TRANSFORM: f32 = 250.0;
pub const ENERGY_VICTORY: f32 = 500.0;

// HUD layout
pub const ENERGY_BAR_POS: (f32, f32) = (400.0, 70.0);
pub const ENERGY_BAR_HEIGHT: f32 = 70.0;
pub const RETRY_BUTTON: (f32, f32, f32, f32) = (475.0, 450.0, 300.0, 80.0);

// Background scroll speed per tick
pub const SCROLL_SPEED_PHASE_ONE: f32 = 10.0;
pub const SCROLL_SPEED_PHASE_TWO: f32 = 8.0;

/// Best finish time lives next to the executable, one integer, whole seconds.
pub const BEST_TIME_FILE: &str = "best_score.txt";

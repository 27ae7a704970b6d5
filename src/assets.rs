//! Asset loading
//!
//! Loads sprite sheets, slices them into scaled frame sequences and uploads
//! the results to textures. Any missing or undersized asset is fatal at
//! startup - the game never runs with partial state.

use macroquad::prelude::*;

use crate::game::constants::*;
use crate::game::frames::slice_frames;

/// Error type for asset operations
#[derive(Debug)]
pub enum AssetError {
    /// File I/O error (missing or unreadable asset)
    Io(String),
    /// A sprite sheet is smaller than a frame region it must contain
    SheetTooSmall(String),
}

impl std::fmt::Display for AssetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetError::Io(msg) => write!(f, "I/O error: {}", msg),
            AssetError::SheetTooSmall(msg) => write!(f, "sheet too small: {}", msg),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<std::io::Error> for AssetError {
    fn from(e: std::io::Error) -> Self {
        AssetError::Io(e.to_string())
    }
}

/// An ordered, immutable sequence of uploaded animation frames.
pub struct FrameSet {
    frames: Vec<Texture2D>,
}

impl FrameSet {
    /// Load a sheet, slice `count` cells of `cell` size scaled by `scale`,
    /// and upload every frame.
    pub async fn from_sheet(
        path: &str,
        count: usize,
        cell: (u16, u16),
        scale: f32,
    ) -> Result<Self, AssetError> {
        let sheet = load_image(path)
            .await
            .map_err(|e| AssetError::Io(format!("{}: {}", path, e)))?;

        let frames = slice_frames(&sheet, count, cell, scale)?
            .into_iter()
            .map(|image| {
                let texture = Texture2D::from_image(&image);
                texture.set_filter(FilterMode::Nearest);
                texture
            })
            .collect();

        Ok(Self { frames })
    }

    pub fn texture(&self, index: usize) -> &Texture2D {
        // Cursors are defensively wrapped upstream; this is a plain index.
        &self.frames[index]
    }
}

/// Frame sequences for the phase-1 actor, one per animation track.
pub struct RunnerFrames {
    pub run: FrameSet,
    pub jump: FrameSet,
    pub attack: FrameSet,
}

/// Frame sequences for the phase-2 actor, one per animation track.
pub struct FlyerFrames {
    pub neutral: FrameSet,
    pub up: FrameSet,
    pub down: FrameSet,
}

/// Every texture the game draws, loaded once at startup.
pub struct GameAssets {
    pub runner: RunnerFrames,
    pub flyer: FlyerFrames,
    pub fireball: FrameSet,
    pub orb: Texture2D,
    pub background_one: Texture2D,
    pub background_two: Texture2D,
}

impl GameAssets {
    pub async fn load() -> Result<Self, AssetError> {
        let runner = RunnerFrames {
            run: FrameSet::from_sheet(
                "gfx/char_phase_one/Run.png",
                RUNNER_RUN_FRAMES,
                RUNNER_CELL,
                RUNNER_SCALE,
            )
            .await?,
            jump: FrameSet::from_sheet(
                "gfx/char_phase_one/Jump.png",
                RUNNER_JUMP_FRAMES,
                RUNNER_CELL,
                RUNNER_SCALE,
            )
            .await?,
            attack: FrameSet::from_sheet(
                "gfx/char_phase_one/Attack.png",
                RUNNER_ATTACK_FRAMES,
                RUNNER_CELL,
                RUNNER_SCALE,
            )
            .await?,
        };

        let flyer = FlyerFrames {
            neutral: FrameSet::from_sheet(
                "gfx/char_phase_two/fly_n.png",
                FLYER_NEUTRAL_FRAMES,
                FLYER_NEUTRAL_CELL,
                FLYER_SCALE,
            )
            .await?,
            up: FrameSet::from_sheet(
                "gfx/char_phase_two/fly_up.png",
                FLYER_UP_FRAMES,
                FLYER_UP_CELL,
                FLYER_SCALE,
            )
            .await?,
            down: FrameSet::from_sheet(
                "gfx/char_phase_two/fly_down.png",
                FLYER_DOWN_FRAMES,
                FLYER_DOWN_CELL,
                FLYER_SCALE,
            )
            .await?,
        };

        let fireball = FrameSet::from_sheet(
            "gfx/fireball.png",
            FIREBALL_FRAMES,
            FIREBALL_CELL,
            FIREBALL_SCALE,
        )
        .await?;

        let orb = load_texture_checked("gfx/orb.png").await?;
        let background_one = load_texture_checked("gfx/backround.png").await?;
        let background_two = load_texture_checked("gfx/backround2.png").await?;

        Ok(Self {
            runner,
            flyer,
            fireball,
            orb,
            background_one,
            background_two,
        })
    }

    /// Orb hitbox size, taken from the loaded texture.
    pub fn orb_size(&self) -> Vec2 {
        vec2(self.orb.width(), self.orb.height())
    }

    /// Fireball hitbox size, taken from the first animation frame.
    pub fn fireball_size(&self) -> Vec2 {
        let texture = self.fireball.texture(0);
        vec2(texture.width(), texture.height())
    }
}

async fn load_texture_checked(path: &str) -> Result<Texture2D, AssetError> {
    let texture = load_texture(path)
        .await
        .map_err(|e| AssetError::Io(format!("{}: {}", path, e)))?;
    texture.set_filter(FilterMode::Nearest);
    Ok(texture)
}

//! Sound playback
//!
//! Loads every sound once at startup and maps drained cues to playback
//! calls. The background music is the only looped sound; everything else
//! is fire-and-forget.

use macroquad::audio::{load_sound, play_sound, play_sound_once, stop_sound, PlaySoundParams, Sound};

use crate::assets::AssetError;
use crate::game::SoundCue;

pub struct SoundBank {
    attack: Sound,
    orb_break: Sound,
    music: Sound,
    transform: Sound,
    fireball_hit: Sound,
    victory: Sound,
}

impl SoundBank {
    pub async fn load() -> Result<Self, AssetError> {
        Ok(Self {
            attack: load_sound_checked("sounds/attack.mp3").await?,
            orb_break: load_sound_checked("sounds/orb_break.mp3").await?,
            music: load_sound_checked("sounds/music.mp3").await?,
            transform: load_sound_checked("sounds/transformation.mp3").await?,
            fireball_hit: load_sound_checked("sounds/fireball_hit.mp3").await?,
            victory: load_sound_checked("sounds/victory.mp3").await?,
        })
    }

    pub fn handle(&self, cue: SoundCue) {
        match cue {
            SoundCue::Attack => play_sound_once(&self.attack),
            SoundCue::OrbBreak => play_sound_once(&self.orb_break),
            SoundCue::Transform => play_sound_once(&self.transform),
            SoundCue::FireballHit => play_sound_once(&self.fireball_hit),
            SoundCue::Victory => play_sound_once(&self.victory),
            SoundCue::MusicStart => play_sound(
                &self.music,
                PlaySoundParams {
                    looped: true,
                    volume: 1.0,
                },
            ),
            SoundCue::MusicStop => stop_sound(&self.music),
        }
    }
}

async fn load_sound_checked(path: &str) -> Result<Sound, AssetError> {
    load_sound(path)
        .await
        .map_err(|e| AssetError::Io(format!("{}: {}", path, e)))
}

//! ASCENSION: a two-phase 2D arcade game
//!
//! Phase 1: run, jump and swing at incoming orbs to charge the energy bar.
//! Half a bar transforms the runner into the flyer. Phase 2: free flight,
//! collect orbs, dodge fireballs, fill the bar to win. The bar decays every
//! tick, so standing still is also losing.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod game;
mod input;

use macroquad::prelude::*;

use assets::GameAssets;
use audio::SoundBank;
use game::best_time::BestTimeFile;
use game::constants::{BEST_TIME_FILE, SCREEN_HEIGHT, SCREEN_WIDTH, TICK_RATE};
use game::energy::EnergyMachine;
use game::{GameSession, Renderer};
use input::InputFrame;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Ascension v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let assets = match GameAssets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            eprintln!("failed to load graphics: {}", e);
            return;
        }
    };
    let sounds = match SoundBank::load().await {
        Ok(sounds) => sounds,
        Err(e) => {
            eprintln!("failed to load sounds: {}", e);
            return;
        }
    };

    // Hitbox sizes come from the loaded textures; grab them before the
    // renderer takes ownership
    let orb_size = assets.orb_size();
    let fireball_size = assets.fireball_size();

    let machine = EnergyMachine::new(BestTimeFile::new(BEST_TIME_FILE));
    let mut session = GameSession::new(machine, orb_size, fireball_size);
    let mut renderer = Renderer::new(assets);
    let mut rng = ::rand::thread_rng();

    println!("=== ASCENSION ===");

    let target_frame_time = 1.0 / TICK_RATE as f64;

    loop {
        let frame_start = get_time();

        let input = InputFrame::poll();
        session.tick(&input, &mut rng);

        for cue in session.cues.drain() {
            sounds.handle(cue);
        }

        renderer.draw(&session);

        // Hold the loop at the fixed tick rate; the simulation assumes it
        let elapsed = get_time() - frame_start;
        if target_frame_time - elapsed > 0.0 {
            // Native: use sleep for bulk, then spin-wait for precision
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < target_frame_time {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while get_time() - frame_start < target_frame_time {
                    std::hint::spin_loop();
                }
            }
            // WASM: just spin-wait (no thread::sleep available)
            #[cfg(target_arch = "wasm32")]
            {
                while get_time() - frame_start < target_frame_time {
                    // Busy wait - browser will handle frame pacing
                }
            }
        }

        next_frame().await;
    }
}

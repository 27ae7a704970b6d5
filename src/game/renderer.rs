//! Draw dispatch.
//!
//! Pure presentation: reads the session state and paints it. The only
//! state kept here is the background scroll offsets, which are visual and
//! deliberately not part of the simulation.

use macroquad::prelude::*;

use super::constants::*;
use super::energy::Phase;
use super::flyer::FlyerTrack;
use super::runner::RunnerTrack;
use super::runtime::GameSession;
use crate::assets::{FrameSet, GameAssets};

pub struct Renderer {
    assets: GameAssets,
    scroll_one: f32,
    scroll_two: f32,
}

impl Renderer {
    pub fn new(assets: GameAssets) -> Self {
        Self {
            assets,
            scroll_one: 0.0,
            scroll_two: 0.0,
        }
    }

    pub fn draw(&mut self, session: &GameSession) {
        match session.machine.phase() {
            Phase::PhaseOne => self.draw_phase_one(session),
            Phase::PhaseTwo => self.draw_phase_two(session),
            Phase::Victory => self.draw_victory(session),
            Phase::GameOver => self.draw_game_over(session),
        }
    }

    fn draw_phase_one(&mut self, session: &GameSession) {
        self.scroll_one = scroll_background(
            &self.assets.background_one,
            self.scroll_one,
            SCROLL_SPEED_PHASE_ONE,
        );

        for orb in session.registry.orbs() {
            let rect = orb.rect();
            draw_texture(&self.assets.orb, rect.x, rect.y, WHITE);
        }

        let (track, frame) = session.registry.runner.active_frame();
        let frames = match track {
            RunnerTrack::Run => &self.assets.runner.run,
            RunnerTrack::Jump => &self.assets.runner.jump,
            RunnerTrack::Attack => &self.assets.runner.attack,
        };
        draw_actor(frames, frame, session.registry.runner.rect());

        self.draw_hud(session, BLACK);
    }

    fn draw_phase_two(&mut self, session: &GameSession) {
        self.scroll_two = scroll_background(
            &self.assets.background_two,
            self.scroll_two,
            SCROLL_SPEED_PHASE_TWO,
        );

        for orb in session.registry.orbs() {
            let rect = orb.rect();
            draw_texture(&self.assets.orb, rect.x, rect.y, WHITE);
        }
        for fireball in session.registry.fireballs() {
            let rect = fireball.rect();
            let texture = self.assets.fireball.texture(fireball.frame());
            draw_texture(texture, rect.x, rect.y, WHITE);
        }

        let (track, frame) = session.registry.flyer.active_frame();
        let frames = match track {
            FlyerTrack::FlyNeutral => &self.assets.flyer.neutral,
            FlyerTrack::FlyUp => &self.assets.flyer.up,
            FlyerTrack::FlyDown => &self.assets.flyer.down,
        };
        draw_actor(frames, frame, session.registry.flyer.rect());

        self.draw_hud(session, WHITE);
    }

    fn draw_hud(&self, session: &GameSession, text_color: Color) {
        let (bar_x, bar_y) = ENERGY_BAR_POS;

        // Fill width maps energy 1:1 onto pixels, so the frame is the cap
        draw_rectangle(
            bar_x,
            bar_y,
            session.machine.energy(),
            ENERGY_BAR_HEIGHT,
            YELLOW,
        );
        draw_rectangle_lines(bar_x, bar_y, ENERGY_VICTORY, ENERGY_BAR_HEIGHT, 6.0, text_color);

        draw_text_centered("Energy", SCREEN_WIDTH / 2.0, 50.0, 50.0, text_color);
        draw_text_centered("Time", 150.0, 80.0, 50.0, text_color);
        draw_text_centered(
            &format!("{}", session.machine.elapsed_secs()),
            150.0,
            120.0,
            50.0,
            text_color,
        );
    }

    fn draw_victory(&self, session: &GameSession) {
        clear_background(BLACK);
        draw_text_centered("Congratulations!", 625.0, 300.0, 150.0, GOLD);
        draw_text_centered(
            &format!("Your time: {} s", session.machine.finish_secs()),
            625.0,
            375.0,
            75.0,
            WHITE,
        );
        if let Some(best) = session.machine.best_secs() {
            draw_text_centered(&format!("Best time: {} s", best), 625.0, 415.0, 75.0, WHITE);
        }
        draw_retry_button();
    }

    fn draw_game_over(&self, session: &GameSession) {
        clear_background(BLACK);
        draw_text_centered("Game Over", 625.0, 300.0, 150.0, RED);
        draw_text_centered(
            &format!("You lasted {} s", session.machine.finish_secs()),
            625.0,
            375.0,
            75.0,
            WHITE,
        );
        draw_retry_button();
    }
}

/// Tile the background across the screen, advancing the scroll offset one
/// tick. Returns the new offset, wrapped at the texture width.
fn scroll_background(texture: &Texture2D, offset: f32, speed: f32) -> f32 {
    let width = texture.width();
    let tiles = (SCREEN_WIDTH / width).ceil() as i32 + 1;
    for i in 0..tiles {
        draw_texture(texture, offset + i as f32 * width, 0.0, WHITE);
    }
    let next = offset - speed;
    if next <= -width {
        next + width
    } else {
        next
    }
}

fn draw_actor(frames: &FrameSet, frame: usize, rect: Rect) {
    draw_texture(frames.texture(frame), rect.x, rect.y, WHITE);
}

fn draw_retry_button() {
    let (x, y, w, h) = RETRY_BUTTON;
    draw_rectangle_lines(x, y, w, h, 6.0, WHITE);
    draw_text_centered("Retry", x + w / 2.0, y + h / 2.0 + 10.0, 90.0, WHITE);
}

/// Draw text with its horizontal center at `x` and baseline at `y`.
fn draw_text_centered(text: &str, x: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, x - dims.width / 2.0, y, size, color);
}

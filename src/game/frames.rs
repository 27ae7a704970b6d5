//! Frame provider
//!
//! Slices animation frames out of a horizontal sprite sheet and advances
//! fractional frame cursors. Slicing is a pure function over CPU-side
//! images; the caller uploads the results to textures once at load time.

use macroquad::prelude::{Color, Image};

use crate::assets::AssetError;

/// Sheet background color treated as transparent after slicing.
const COLORKEY: (f32, f32, f32) = (0.0, 0.0, 0.0);

/// Cut frame `index` out of `sheet` and magnify it by `scale`.
///
/// The source region is `(index * cell_w, 0, cell_w, cell_h)`; scaling is
/// nearest-neighbour. Pixels matching the colorkey come out fully
/// transparent. Fails if the requested region exceeds the sheet bounds.
pub fn slice_frame(
    sheet: &Image,
    index: usize,
    cell: (u16, u16),
    scale: f32,
) -> Result<Image, AssetError> {
    let (cell_w, cell_h) = cell;
    let x0 = index as u32 * cell_w as u32;

    if x0 + cell_w as u32 > sheet.width as u32 || cell_h as u32 > sheet.height as u32 {
        return Err(AssetError::SheetTooSmall(format!(
            "frame {} needs region {}x{} at x={}, sheet is {}x{}",
            index, cell_w, cell_h, x0, sheet.width, sheet.height
        )));
    }

    let out_w = (cell_w as f32 * scale) as u16;
    let out_h = (cell_h as f32 * scale) as u16;
    let mut out = Image::gen_image_color(out_w, out_h, Color::new(0.0, 0.0, 0.0, 0.0));

    for dy in 0..out_h as u32 {
        for dx in 0..out_w as u32 {
            let sx = x0 + (dx as f32 / scale) as u32;
            let sy = (dy as f32 / scale) as u32;
            let color = sheet.get_pixel(sx, sy);
            if (color.r, color.g, color.b) == COLORKEY {
                out.set_pixel(dx, dy, Color::new(0.0, 0.0, 0.0, 0.0));
            } else {
                out.set_pixel(dx, dy, color);
            }
        }
    }

    Ok(out)
}

/// Slice an ordered frame sequence (frames `0..count`) out of a sheet.
pub fn slice_frames(
    sheet: &Image,
    count: usize,
    cell: (u16, u16),
    scale: f32,
) -> Result<Vec<Image>, AssetError> {
    (0..count).map(|i| slice_frame(sheet, i, cell, scale)).collect()
}

/// Fractional index into a frame sequence.
///
/// Advanced by a per-track step each tick; resets to 0 once it reaches the
/// track length. Reading the frame defensively wraps out-of-range values
/// instead of faulting.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameCursor {
    pos: f32,
}

impl FrameCursor {
    pub fn new() -> Self {
        Self { pos: 0.0 }
    }

    /// Advance by `step` over a track of `len` frames.
    /// Returns true when the cursor wrapped (one full cycle completed).
    pub fn advance(&mut self, step: f32, len: usize) -> bool {
        self.pos += step;
        if self.pos >= len as f32 {
            self.pos = 0.0;
            true
        } else {
            false
        }
    }

    /// Whole-frame index into a track of `len` frames.
    pub fn frame(&self, len: usize) -> usize {
        let idx = self.pos as usize;
        if idx >= len {
            0
        } else {
            idx
        }
    }
}

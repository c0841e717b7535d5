//! Cosmetic animation.
//!
//! Every function here is a pure function of the animation clock (seconds)
//! and the state being drawn. Nothing is stored between frames.

use ratatui::style::Color;

/// Pulse speed of glows, in radians per second.
const GLOW_SPEED: f32 = 4.0;
/// Phase offset between neighbouring blocks.
const BLOCK_PHASE_STEP: f32 = 0.15;

/// Glow intensity in `[0, 1]` for a block, offset by its id so the grid
/// ripples.
pub fn block_glow(time: f32, block_id: u32) -> f32 {
    0.5 * (1.0 + (time * GLOW_SPEED + block_id as f32 * BLOCK_PHASE_STEP).sin())
}

/// Glow intensity in `[0, 1]` for a hovered button or the input box.
pub fn pulse(time: f32) -> f32 {
    0.5 * (1.0 + (time * GLOW_SPEED).sin())
}

/// Dim `base` by up to half as `glow` rises, mimicking a fading outline.
pub fn glow_outline(base: Color, glow: f32) -> Color {
    scale(base, 1.0 - 0.5 * glow.clamp(0.0, 1.0))
}

/// Lighten `base` toward white by `amount` in `[0, 1]`.
pub fn brighten(base: Color, amount: f32) -> Color {
    match base {
        Color::Rgb(r, g, b) => {
            let amount = amount.clamp(0.0, 1.0);
            let lift = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
            Color::Rgb(lift(r), lift(g), lift(b))
        }
        other => other,
    }
}

/// Title color cycling through the blue-cyan range.
pub fn title_color(time: f32) -> Color {
    let wave = |phase: f32| (30.0 * (time * 2.0 + phase).sin()) as i16;
    Color::Rgb(
        (120 + wave(0.0)).clamp(0, 255) as u8,
        (200 + wave(1.0)).clamp(0, 255) as u8,
        255,
    )
}

/// Status line color cycling through warm reds.
pub fn status_color(time: f32) -> Color {
    let wave = |phase: f32| (50.0 * (time * 2.0 + phase).sin()) as i16;
    Color::Rgb(
        255,
        (120 + wave(0.0)).clamp(0, 255) as u8,
        (120 + wave(1.0)).clamp(0, 255) as u8,
    )
}

/// Prompt color for the size entry box.
pub fn prompt_color(time: f32) -> Color {
    let r = 160.0 + 50.0 * (time * 3.0).sin();
    let g = 220.0 + 35.0 * (time * 3.0 + 1.0).sin();
    Color::Rgb(r.clamp(0.0, 255.0) as u8, g.clamp(0.0, 255.0) as u8, 255)
}

fn scale(base: Color, factor: f32) -> Color {
    match base {
        Color::Rgb(r, g, b) => {
            let mul = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(mul(r), mul(g), mul(b))
        }
        other => other,
    }
}

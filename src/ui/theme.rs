//! Color theme constants for the memory visualizer.
//!
//! A dark "space" palette with neon-blue outlines.

use ratatui::style::Color;

// ============================================================================
// Panels
// ============================================================================

/// Panel background
pub const COLOR_PANEL_BG: Color = Color::Rgb(20, 30, 50);

/// Memory panel background (slightly darker than side panels)
pub const COLOR_MEMORY_BG: Color = Color::Rgb(15, 25, 40);

/// Panel borders
pub const COLOR_BORDER: Color = Color::Rgb(60, 160, 255);

/// Summary report text
pub const COLOR_SUMMARY_TEXT: Color = Color::Rgb(160, 220, 255);

// ============================================================================
// Buttons
// ============================================================================

/// Button fill
pub const COLOR_BUTTON_BG: Color = Color::Rgb(40, 70, 110);

/// Button label at rest
pub const COLOR_BUTTON_TEXT: Color = Color::Rgb(180, 220, 255);

// ============================================================================
// Blocks
// ============================================================================

/// Allocated block fill - pink-red
pub const COLOR_ALLOCATED: Color = Color::Rgb(255, 90, 120);

/// Freed block fill - green
pub const COLOR_FREED: Color = Color::Rgb(80, 255, 140);

/// Untouched block fill - dark blue
pub const COLOR_UNTOUCHED: Color = Color::Rgb(30, 40, 60);

/// Block outline base color (modulated by glow)
pub const COLOR_BLOCK_OUTLINE: Color = Color::Rgb(50, 180, 255);

/// Outline of the selected block
pub const COLOR_SELECTED: Color = Color::Rgb(220, 220, 255);

/// Block id label
pub const COLOR_BLOCK_ID: Color = Color::Rgb(180, 220, 255);

/// Size label inside allocated blocks
pub const COLOR_SIZE_TEXT: Color = Color::Rgb(240, 240, 255);

/// Screen background
pub const COLOR_BACKGROUND: Color = Color::Rgb(5, 10, 20);

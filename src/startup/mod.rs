//! Startup configuration and asset loading.
//!
//! - [`config`] - [`VisualizerConfig`] defaults, builder and environment overrides
//! - [`assets`] - [`GlyphSet`] resolution with ASCII fallback

pub mod assets;
pub mod config;

pub use assets::{load_glyphs, GlyphSet, GlyphStyle};
pub use config::{VisualizerConfig, BLOCK_COUNT, GRID_COLUMNS};

//! memviz - an interactive memory allocation visualizer for the terminal.
//!
//! A fixed pool of blocks is drawn as a grid. Toolbar buttons arm an
//! allocate or free action, a block click picks the target and typed digits
//! give the allocation size. A summary panel reports usage and a size
//! histogram.
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod cli;
pub mod error;
pub mod events;
pub mod logging;
pub mod memory;
pub mod startup;
pub mod terminal;
pub mod ui;

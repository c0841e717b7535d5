//! Reusable UI Components
//!
//! - `DialogFrame` - framed overlay with rounded borders

mod dialog_frame;

pub use dialog_frame::{dialog_inner, render_dialog_frame, DialogFrameConfig};

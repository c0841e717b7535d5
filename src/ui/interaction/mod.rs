//! Mouse interaction: hit testing, hover tracking and click dispatch.

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};

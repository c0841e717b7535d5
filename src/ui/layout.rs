//! Screen geometry.
//!
//! [`ScreenLayout`] is a pure function of the terminal area and the grid
//! shape. Both the renderer and the hit area registry are fed from it, so
//! a click at a given cell always lands on what is drawn there. The input
//! box has no hit area of its own; while it is shown the controller drops
//! clicks inside it before they reach the blocks it covers.
//!
//! ```text
//! ┌ control ─┐┌ memory ─────────────────┐┌ summary ──────┐
//! │ title    ││ [1] [2] [3] ... [10]    ││ SYSTEM STATUS │
//! │ Allocate ││ [11] ...                ││ ...           │
//! │ Free     ││        ┌ input ┐        ││ MEMORY DIST.. │
//! │ Clear All││        └───────┘        ││               │
//! │ status   ││ ...         [100]       ││               │
//! └──────────┘└─────────────────────────┘└───────────────┘
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;

use crate::memory::BlockRegistry;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};

/// Width of the left control panel.
pub const CONTROL_PANEL_WIDTH: u16 = 30;
/// Width of the right summary panel.
pub const SUMMARY_PANEL_WIDTH: u16 = 32;
/// Button width (clamped to the panel).
pub const BUTTON_WIDTH: u16 = 18;
/// Button height including borders.
pub const BUTTON_HEIGHT: u16 = 3;
/// Rows between the tops of consecutive buttons.
pub const BUTTON_SPACING: u16 = 4;
/// Size entry box dimensions including borders.
pub const INPUT_BOX_WIDTH: u16 = 34;
pub const INPUT_BOX_HEIGHT: u16 = 4;

/// Toolbar buttons, top to bottom.
pub const BUTTONS: [(ClickAction, &str); 3] = [
    (ClickAction::Allocate, "Allocate"),
    (ClickAction::Free, "Free"),
    (ClickAction::ClearAll, "Clear All"),
];

/// Geometry of every element on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    pub control_panel: Rect,
    pub memory_panel: Rect,
    pub summary_panel: Rect,
    pub title: Rect,
    /// Button rects in [`BUTTONS`] order
    pub buttons: [Rect; 3],
    pub status: Rect,
    /// One rect per block, by registry index
    pub blocks: Vec<Rect>,
    pub input_box: Rect,
    pub columns: u16,
}

impl ScreenLayout {
    /// Compute the layout for `block_count` blocks in `columns` columns.
    pub fn compute(area: Rect, block_count: usize, columns: u16) -> Self {
        let columns = columns.max(1);
        let [control_panel, memory_panel, summary_panel] = Layout::horizontal([
            Constraint::Length(CONTROL_PANEL_WIDTH),
            Constraint::Min(0),
            Constraint::Length(SUMMARY_PANEL_WIDTH),
        ])
        .areas(area);

        let control_inner = inner(control_panel);
        let title = clip(
            Rect::new(control_inner.x + 1, control_inner.y, control_inner.width.saturating_sub(1), 1),
            control_inner,
        );

        let button_width = BUTTON_WIDTH.min(control_inner.width.saturating_sub(2));
        let buttons = std::array::from_fn(|i| {
            let rect = Rect::new(
                control_inner.x + 1,
                control_inner.y + 2 + i as u16 * BUTTON_SPACING,
                button_width,
                BUTTON_HEIGHT,
            );
            clip(rect, control_inner)
        });

        let status_height = 2.min(control_inner.height);
        let status = Rect::new(
            control_inner.x,
            control_inner.y + control_inner.height - status_height,
            control_inner.width,
            status_height,
        );

        let memory_inner = inner(memory_panel);
        let blocks = block_rects(memory_inner, block_count, columns);

        let input_width = INPUT_BOX_WIDTH.min(memory_inner.width);
        let input_height = INPUT_BOX_HEIGHT.min(memory_inner.height);
        let input_box = Rect::new(
            memory_inner.x + (memory_inner.width - input_width) / 2,
            memory_inner.y + (memory_inner.height - input_height) / 2,
            input_width,
            input_height,
        );

        Self {
            area,
            control_panel,
            memory_panel,
            summary_panel,
            title,
            buttons,
            status,
            blocks,
            input_box,
            columns,
        }
    }

    /// Rect of a toolbar button.
    pub fn button_rect(&self, action: ClickAction) -> Option<Rect> {
        BUTTONS
            .iter()
            .position(|(a, _)| *a == action)
            .map(|i| self.buttons[i])
    }

    /// Rebuild `registry` from this layout.
    ///
    /// Blocks are registered first so buttons win any overlap.
    pub fn register_hit_areas(&self, registry: &mut HitAreaRegistry, button_hover: Style) {
        registry.clear();
        for (index, rect) in self.blocks.iter().enumerate() {
            registry.register(*rect, ClickAction::SelectBlock(index), None);
        }
        for ((action, _), rect) in BUTTONS.iter().zip(self.buttons.iter()) {
            registry.register(*rect, *action, Some(button_hover));
        }
    }
}

/// Area inside a one-cell border.
fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

/// Clip `rect` to `bounds`, collapsing to zero size when outside.
fn clip(rect: Rect, bounds: Rect) -> Rect {
    let clipped = rect.intersection(bounds);
    if clipped.width == 0 || clipped.height == 0 {
        Rect::new(clipped.x, clipped.y, 0, 0)
    } else {
        clipped
    }
}

/// Grid cells for the blocks, row-major.
///
/// Each cell leaves one blank column on its right when there is room.
fn block_rects(area: Rect, block_count: usize, columns: u16) -> Vec<Rect> {
    let columns_usize = columns as usize;
    let rows = block_count.div_ceil(columns_usize).max(1) as u16;
    let cell_width = area.width / columns;
    let cell_height = area.height / rows;
    let block_width = if cell_width >= 2 { cell_width - 1 } else { cell_width };

    (0..block_count)
        .map(|index| {
            let (row, col) = BlockRegistry::grid_position(index, columns_usize);
            let (row, col) = (row as u16, col as u16);
            Rect::new(
                area.x + col * cell_width,
                area.y + row * cell_height,
                block_width,
                cell_height,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 160, 48), 100, 10)
    }

    #[test]
    fn test_panels_partition_width() {
        let layout = default_layout();
        assert_eq!(layout.control_panel.width, CONTROL_PANEL_WIDTH);
        assert_eq!(layout.summary_panel.width, SUMMARY_PANEL_WIDTH);
        assert_eq!(
            layout.memory_panel.width,
            160 - CONTROL_PANEL_WIDTH - SUMMARY_PANEL_WIDTH
        );
        assert_eq!(layout.memory_panel.x, CONTROL_PANEL_WIDTH);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let layout = default_layout();
        for i in 0..3 {
            assert_eq!(layout.buttons[i].height, BUTTON_HEIGHT);
            for j in (i + 1)..3 {
                assert!(!layout.buttons[i].intersects(layout.buttons[j]));
            }
        }
        assert_eq!(layout.button_rect(ClickAction::Free), Some(layout.buttons[1]));
        assert_eq!(layout.button_rect(ClickAction::SelectBlock(0)), None);
    }

    #[test]
    fn test_blocks_follow_grid_mapping() {
        let layout = default_layout();
        assert_eq!(layout.blocks.len(), 100);

        // Same row shares y, same column shares x
        assert_eq!(layout.blocks[0].y, layout.blocks[9].y);
        assert_eq!(layout.blocks[0].x, layout.blocks[10].x);
        assert!(layout.blocks[10].y > layout.blocks[0].y);
        assert!(layout.blocks[1].x > layout.blocks[0].x);

        for rect in &layout.blocks {
            assert!(rect.width > 0 && rect.height > 0);
            assert!(layout.memory_panel.contains(rect.as_position()));
        }
    }

    #[test]
    fn test_block_cells_follow_registry_grid_position() {
        let layout = default_layout();
        let origin = layout.blocks[0];
        let (cell_width, cell_height) = (
            layout.blocks[1].x - origin.x,
            layout.blocks[10].y - origin.y,
        );
        for (index, rect) in layout.blocks.iter().enumerate() {
            let (row, col) = BlockRegistry::grid_position(index, 10);
            assert_eq!(rect.x, origin.x + col as u16 * cell_width);
            assert_eq!(rect.y, origin.y + row as u16 * cell_height);
        }
    }

    #[test]
    fn test_blocks_do_not_overlap() {
        let layout = default_layout();
        for (i, a) in layout.blocks.iter().enumerate() {
            for b in layout.blocks.iter().skip(i + 1) {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_input_box_centered_in_memory_panel() {
        let layout = default_layout();
        let panel = layout.memory_panel;
        let input = layout.input_box;
        assert_eq!(input.width, INPUT_BOX_WIDTH);
        assert!(input.x > panel.x && input.right() < panel.right());
        assert!(input.y > panel.y && input.bottom() < panel.bottom());
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let layout = ScreenLayout::compute(Rect::new(0, 0, 10, 3), 100, 10);
        assert_eq!(layout.blocks.len(), 100);
    }

    #[test]
    fn test_register_hit_areas() {
        let layout = default_layout();
        let mut registry = HitAreaRegistry::new();
        layout.register_hit_areas(&mut registry, Style::default());
        assert_eq!(registry.len(), 103);

        let allocate = layout.buttons[0];
        assert_eq!(
            registry.hit_test(allocate.x, allocate.y),
            Some(ClickAction::Allocate)
        );
        let block = layout.blocks[42];
        assert_eq!(
            registry.hit_test(block.x, block.y),
            Some(ClickAction::SelectBlock(42))
        );
    }
}

//! Hit area system for mouse interaction.
//!
//! Clickable regions are derived from the screen layout, not from the
//! renderer, so the controller can be driven with plain coordinates in
//! tests. The event loop asks the registry which action a click maps to.

use ratatui::layout::Rect;
use ratatui::style::Style;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickAction {
    /// "Allocate" toolbar button
    Allocate,
    /// "Free" toolbar button
    Free,
    /// "Clear All" toolbar button
    ClearAll,
    /// A block in the memory grid, by registry index
    SelectBlock(usize),
}

impl ClickAction {
    /// True for the three toolbar buttons.
    pub fn is_button(&self) -> bool {
        !matches!(self, ClickAction::SelectBlock(_))
    }
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Create a new hit area with a hover style.
    pub fn with_hover_style(rect: Rect, action: ClickAction, hover_style: Style) -> Self {
        Self {
            rect,
            action,
            hover_style: Some(hover_style),
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && (x as u32) < self.rect.x as u32 + self.rect.width as u32
            && y >= self.rect.y
            && (y as u32) < self.rect.y as u32 + self.rect.height as u32
    }
}

/// Registry of hit areas for the current layout.
///
/// Rebuilt whenever the layout changes. Supports hit testing (which area
/// was clicked) and hover tracking for visual feedback.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Index of the currently hovered area (if any)
    hovered: Option<usize>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas and reset hover state.
    pub fn clear(&mut self) {
        self.areas.clear();
        self.hovered = None;
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for overlapping
    /// regions (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Register a hit area from an existing HitArea struct.
    pub fn register_area(&mut self, area: HitArea) {
        self.areas.push(area);
    }

    /// Return the action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|idx| self.areas[idx].action)
    }

    /// Update the hover state based on pointer position.
    ///
    /// Returns true if the hovered area changed (requiring a redraw).
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let new_hovered = self.find_index(x, y);
        let changed = new_hovered != self.hovered;
        self.hovered = new_hovered;
        changed
    }

    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }

    /// Hover style for `action` if it is the hovered area.
    pub fn get_hover_style(&self, action: ClickAction) -> Option<Style> {
        self.get_hovered()
            .filter(|area| area.action == action)
            .and_then(|area| area.hover_style)
    }

    /// Whether the pointer currently rests on `action`'s area.
    pub fn is_hovered(&self, action: ClickAction) -> bool {
        self.get_hovered().is_some_and(|area| area.action == action)
    }

    /// Check if any area is currently hovered.
    pub fn is_hovering(&self) -> bool {
        self.hovered.is_some()
    }

    /// Get the currently hovered area (if any).
    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered.and_then(|idx| self.areas.get(idx))
    }

    /// Rect registered for `action`, if any.
    pub fn rect_for(&self, action: ClickAction) -> Option<Rect> {
        self.areas.iter().find(|a| a.action == action).map(|a| a.rect)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

//! End-to-end interaction flows driven through pointer and text events.

mod common;

use common::{allocate, click, click_block, free, type_text};
use memviz::app::{App, ArmedAction, PendingAction, Phase};
use memviz::events::{InputEvent, BACKSPACE, CONFIRM};
use memviz::memory::BlockState;
use memviz::ui::interaction::ClickAction;

#[test]
fn test_allocate_through_pointer_and_text() {
    let mut app = App::default();

    click(&mut app, ClickAction::Allocate);
    assert_eq!(app.interaction.pending_action(), PendingAction::Allocating);
    assert!(!app.interaction.input_box_visible());

    click_block(&mut app, 4);
    assert_eq!(app.interaction.selected_block(), Some(4));
    assert!(app.interaction.input_box_visible());

    type_text(&mut app, "50");
    assert_eq!(app.interaction.pending_input_text(), "50");
    app.handle_event(InputEvent::Text(CONFIRM));

    assert_eq!(app.registry.get(4).state(), BlockState::Allocated { size_kb: 50 });
    assert_eq!(app.interaction.phase, Phase::Idle);
    assert_eq!(app.interaction.pending_input_text(), "");
    assert_eq!(app.summary.allocated_count, 1);
    assert_eq!(app.summary.total_size_kb, 50);
    assert_eq!(app.status(), "Allocated block 5 (50 KB)");
}

#[test]
fn test_out_of_range_size_keeps_entry_open() {
    let mut app = App::default();
    click(&mut app, ClickAction::Allocate);
    click_block(&mut app, 0);
    type_text(&mut app, "5\r");

    assert_eq!(app.status(), "Size must be 10-100 KB");
    assert_eq!(app.interaction.phase, Phase::AwaitingSizeEntry { block: 0 });
    assert!(!app.registry.get(0).is_allocated());

    // Fix the entry and retry
    type_text(&mut app, "\u{8}25\r");
    assert_eq!(app.registry.get(0).size_kb(), 25);
}

#[test]
fn test_free_through_pointer() {
    let mut app = App::default();
    allocate(&mut app, 12, "80");
    free(&mut app, 12);

    assert!(app.registry.get(12).is_freed());
    assert_eq!(app.interaction.phase, Phase::Idle);
    assert_eq!(app.summary.freed_count, 1);
    assert_eq!(app.summary.allocated_count, 0);
    assert_eq!(app.status(), "Freed block 13");
}

#[test]
fn test_free_click_on_untouched_block_keeps_armed() {
    let mut app = App::default();
    click(&mut app, ClickAction::Free);
    click_block(&mut app, 3);

    assert_eq!(
        app.interaction.phase,
        Phase::AwaitingBlockSelection(ArmedAction::Free)
    );
    assert_eq!(app.registry.get(3).state(), BlockState::Untouched);
}

#[test]
fn test_clear_all_through_pointer() {
    let mut app = App::default();
    allocate(&mut app, 0, "10");
    allocate(&mut app, 1, "100");
    free(&mut app, 0);

    click(&mut app, ClickAction::Allocate);
    click_block(&mut app, 2);
    type_text(&mut app, "4");

    click(&mut app, ClickAction::ClearAll);

    assert!(app.registry.iter().all(|b| b.state() == BlockState::Untouched));
    assert_eq!(app.interaction.phase, Phase::Idle);
    assert_eq!(app.interaction.pending_input_text(), "");
    assert_eq!(app.summary.available_count, 100);
    assert_eq!(app.status(), "All blocks cleared");
}

#[test]
fn test_backspace_and_digit_cap() {
    let mut app = App::default();
    click(&mut app, ClickAction::Allocate);
    click_block(&mut app, 9);
    type_text(&mut app, "1234");
    assert_eq!(app.interaction.pending_input_text(), "123");

    app.handle_event(InputEvent::Text(BACKSPACE));
    assert_eq!(app.interaction.pending_input_text(), "12");
}

#[test]
fn test_click_outside_any_area_changes_nothing() {
    let mut app = App::default();
    click(&mut app, ClickAction::Allocate);
    let before = app.interaction.clone();

    // Summary panel has no hit areas
    let summary = app.layout.summary_panel;
    app.handle_event(InputEvent::PointerPressed {
        x: summary.x + 2,
        y: summary.y + 2,
    });

    assert_eq!(app.interaction.phase, before.phase);
    assert_eq!(app.status(), before.status);
}

#[test]
fn test_layout_survives_resize() {
    let mut app = App::default();
    app.handle_event(InputEvent::Resize {
        width: 180,
        height: 50,
    });
    allocate(&mut app, 99, "64");
    assert_eq!(app.registry.get(99).size_kb(), 64);
}

#[test]
fn test_quit_event() {
    let mut app = App::default();
    app.handle_event(InputEvent::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_click_on_size_entry_box_keeps_selection() {
    let mut app = App::default();
    click(&mut app, ClickAction::Allocate);
    click_block(&mut app, 0);
    type_text(&mut app, "5");

    let input = app.layout.input_box;
    let (x, y) = (input.x + input.width / 2, input.y + input.height / 2);
    // The box is drawn over some block of the grid
    assert!(matches!(
        app.hit_registry.hit_test(x, y),
        Some(ClickAction::SelectBlock(_))
    ));

    app.handle_event(InputEvent::PointerPressed { x, y });

    assert_eq!(app.interaction.phase, Phase::AwaitingSizeEntry { block: 0 });
    assert_eq!(app.status(), "Enter size for block 1");
    assert_eq!(app.interaction.pending_input_text(), "5");
}

#[test]
fn test_grid_under_hidden_input_box_stays_clickable() {
    let mut app = App::default();
    let input = app.layout.input_box;
    let (x, y) = (input.x + input.width / 2, input.y + input.height / 2);
    let Some(ClickAction::SelectBlock(index)) = app.hit_registry.hit_test(x, y) else {
        panic!("expected a block under the input box area");
    };

    click(&mut app, ClickAction::Allocate);
    app.handle_event(InputEvent::PointerPressed { x, y });
    assert_eq!(app.interaction.selected_block(), Some(index));
}

//! The dirty flag (`needs_redraw`) gates drawing in the event loop. Every
//! visible change must set it; events that change nothing may leave it
//! clear.

mod common;

use common::{click, click_block};
use memviz::app::App;
use memviz::events::InputEvent;
use memviz::ui::interaction::ClickAction;

fn clean_app() -> App {
    let mut app = App::default();
    app.needs_redraw = false;
    app
}

#[test]
fn test_app_initializes_with_needs_redraw_true() {
    let app = App::default();
    assert!(app.needs_redraw, "App should initialize with needs_redraw=true");
}

#[test]
fn test_button_click_marks_dirty() {
    let mut app = clean_app();
    click(&mut app, ClickAction::Allocate);
    assert!(app.needs_redraw);
}

#[test]
fn test_digit_marks_dirty() {
    let mut app = App::default();
    click(&mut app, ClickAction::Allocate);
    click_block(&mut app, 0);
    app.needs_redraw = false;

    app.handle_event(InputEvent::Text('7'));
    assert!(app.needs_redraw);
}

#[test]
fn test_ignored_text_does_not_mark_dirty() {
    let mut app = clean_app();
    app.handle_event(InputEvent::Text('7'));
    assert!(!app.needs_redraw, "text outside size entry changes nothing");
}

#[test]
fn test_hover_change_marks_dirty() {
    let mut app = clean_app();
    let rect = app.layout.buttons[1];
    app.handle_event(InputEvent::PointerMoved {
        x: rect.x + 1,
        y: rect.y + 1,
    });
    assert!(app.needs_redraw);
    assert!(app.is_button_hovered(ClickAction::Free));

    app.needs_redraw = false;
    app.handle_event(InputEvent::PointerMoved {
        x: rect.x + 2,
        y: rect.y + 1,
    });
    assert!(!app.needs_redraw, "moving within the same button is not a change");
}

#[test]
fn test_tick_marks_dirty() {
    let mut app = clean_app();
    app.tick();
    assert!(app.needs_redraw);
}

//! Input events consumed by the controller.
//!
//! The terminal delivers crossterm events; [`translate`] maps the ones we
//! care about onto [`InputEvent`], which is all the controller ever sees.
//! Backspace and Enter arrive as the text code points [`BACKSPACE`] and
//! [`CONFIRM`], matching how a text-entry source reports them.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Code point for backspace in a text event.
pub const BACKSPACE: char = '\u{8}';
/// Code point for the confirm (enter) key in a text event.
pub const CONFIRM: char = '\r';

/// A discrete input event, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary pointer button pressed at a cell
    PointerPressed { x: u16, y: u16 },
    /// Pointer moved to a cell
    PointerMoved { x: u16, y: u16 },
    /// A typed character, including [`BACKSPACE`] and [`CONFIRM`]
    Text(char),
    /// Terminal resized
    Resize { width: u16, height: u16 },
    /// Leave the program
    Quit,
}

/// Map a crossterm event to an [`InputEvent`], or `None` if irrelevant.
pub fn translate(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => translate_key(key),
        Event::Mouse(mouse) => translate_mouse(mouse),
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputEvent::Quit)
        }
        KeyCode::Esc => Some(InputEvent::Quit),
        KeyCode::Char(_) if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            None
        }
        KeyCode::Char(ch) => Some(InputEvent::Text(ch)),
        KeyCode::Backspace => Some(InputEvent::Text(BACKSPACE)),
        KeyCode::Enter => Some(InputEvent::Text(CONFIRM)),
        _ => None,
    }
}

fn translate_mouse(mouse: &MouseEvent) -> Option<InputEvent> {
    let (x, y) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::PointerPressed { x, y }),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(InputEvent::PointerMoved { x, y }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_translate_text_keys() {
        assert_eq!(
            translate(&key(KeyCode::Char('7'), KeyModifiers::NONE)),
            Some(InputEvent::Text('7'))
        );
        assert_eq!(
            translate(&key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputEvent::Text(BACKSPACE))
        );
        assert_eq!(
            translate(&key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputEvent::Text(CONFIRM))
        );
    }

    #[test]
    fn test_translate_quit_keys() {
        assert_eq!(
            translate(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            translate(&key(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputEvent::Quit)
        );
        assert_eq!(translate(&key(KeyCode::Char('x'), KeyModifiers::ALT)), None);
    }

    #[test]
    fn test_translate_ignores_key_release() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&event), None);
    }

    #[test]
    fn test_translate_mouse() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), 4, 9)),
            Some(InputEvent::PointerPressed { x: 4, y: 9 })
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Moved, 1, 2)),
            Some(InputEvent::PointerMoved { x: 1, y: 2 })
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Right), 4, 9)),
            None
        );
        assert_eq!(translate(&mouse(MouseEventKind::ScrollUp, 0, 0)), None);
    }

    #[test]
    fn test_translate_resize() {
        assert_eq!(
            translate(&Event::Resize(100, 30)),
            Some(InputEvent::Resize {
                width: 100,
                height: 30
            })
        );
        assert_eq!(translate(&Event::FocusGained), None);
    }
}

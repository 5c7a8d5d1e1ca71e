//! Mapping from terminal events to platform events.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::engine::{GlobalEvent, PlatformEvent};

/// A key as seen by screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    pub shift: bool,
}

impl KeyInput {
    pub fn new(code: KeyCode) -> Self {
        Self { code, shift: false }
    }

    /// The character this key types, with shift applied to letters.
    pub fn typed_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if self.shift => Some(c.to_ascii_uppercase()),
            KeyCode::Char(c) => Some(c),
            _ => None,
        }
    }
}

/// Input forwarded to the active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key pressed (or auto-repeated by the terminal).
    Key(KeyInput),
    KeyRelease(KeyCode),
    MouseMove { column: u16, row: u16 },
    MouseDown { column: u16, row: u16 },
}

impl InputEvent {
    /// True for the "any key or click" inputs that dismiss passive screens.
    pub fn is_press(&self) -> bool {
        matches!(self, InputEvent::Key(_) | InputEvent::MouseDown { .. })
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Map a terminal event. Returns `None` for events nothing cares about.
pub fn map_event(event: Event) -> Option<PlatformEvent<InputEvent>> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(width, height) => Some(PlatformEvent::Global(GlobalEvent::Resize {
            width,
            height,
        })),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<PlatformEvent<InputEvent>> {
    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => {
            if should_quit(key) {
                return Some(PlatformEvent::Quit);
            }
            if key.code == KeyCode::F(3) {
                // Only the initial press toggles.
                return (key.kind == KeyEventKind::Press)
                    .then_some(PlatformEvent::Global(GlobalEvent::ToggleMetrics));
            }
            Some(PlatformEvent::Input(InputEvent::Key(KeyInput {
                code: key.code,
                shift: key.modifiers.contains(KeyModifiers::SHIFT),
            })))
        }
        KeyEventKind::Release => Some(PlatformEvent::Input(InputEvent::KeyRelease(key.code))),
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<PlatformEvent<InputEvent>> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Some(PlatformEvent::Input(InputEvent::MouseMove { column, row }))
        }
        MouseEventKind::Down(MouseButton::Left) => {
            Some(PlatformEvent::Input(InputEvent::MouseDown { column, row }))
        }
        _ => None,
    }
}

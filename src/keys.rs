use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::app::Message;

/// Lines scrolled per mouse wheel notch.
const WHEEL_LINES: i32 = 3;

/// A declarative keybinding map that can be composed and extended.
#[derive(Clone)]
pub struct Keymap {
    bindings: Vec<(KeyCode, KeyModifiers, Message)>,
}

impl Keymap {
    pub const fn new() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }

    /// Add a key binding with no modifiers.
    pub fn bind(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::NONE, message));
        self
    }

    /// Add a key binding with Ctrl modifier.
    pub fn bind_ctrl(mut self, code: KeyCode, message: Message) -> Self {
        self.bindings.push((code, KeyModifiers::CONTROL, message));
        self
    }

    /// Look up a message for a key event.
    /// Later bindings take precedence over earlier ones.
    pub fn get(&self, event: &KeyEvent) -> Option<Message> {
        self.bindings
            .iter()
            .rev()
            .find(|(code, mods, _)| *code == event.code && event.modifiers.contains(*mods))
            .map(|(_, _, msg)| msg.clone())
    }

    /// Extend this keymap with another. The other keymap's bindings take precedence.
    pub fn extend(mut self, other: Self) -> Self {
        self.bindings.extend(other.bindings);
        self
    }

    /// Find the first key bound to a specific message.
    pub fn find_key(&self, message: &Message) -> Option<(KeyCode, KeyModifiers)> {
        self.bindings
            .iter()
            .find(|(_, _, msg)| msg == message)
            .map(|(code, mods, _)| (*code, *mods))
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a key binding for display in help text.
pub fn format_key(code: KeyCode, mods: KeyModifiers) -> String {
    let key_str = match code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::PageUp => "PgUp".to_string(),
        KeyCode::PageDown => "PgDn".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        _ => "?".to_string(),
    };
    if mods.contains(KeyModifiers::CONTROL) {
        format!("C-{key_str}")
    } else {
        key_str
    }
}

/// Keybindings that work regardless of scroll position.
pub fn global_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('q'), Message::Quit)
        .bind_ctrl(KeyCode::Char('c'), Message::Quit)
        .bind(KeyCode::Char('?'), Message::ToggleHelp)
        .bind(KeyCode::Char('`'), Message::ToggleDebug)
}

pub fn scroll_keymap() -> Keymap {
    Keymap::new()
        .bind(KeyCode::Char('j'), Message::ScrollLines(1))
        .bind(KeyCode::Down, Message::ScrollLines(1))
        .bind(KeyCode::Char('k'), Message::ScrollLines(-1))
        .bind(KeyCode::Up, Message::ScrollLines(-1))
        .bind_ctrl(KeyCode::Char('d'), Message::HalfPageDown)
        .bind_ctrl(KeyCode::Char('u'), Message::HalfPageUp)
        .bind(KeyCode::PageDown, Message::PageDown)
        .bind(KeyCode::Char(' '), Message::PageDown)
        .bind(KeyCode::PageUp, Message::PageUp)
        .bind(KeyCode::Char('g'), Message::ScrollTop)
        .bind(KeyCode::Home, Message::ScrollTop)
        .bind(KeyCode::Char('G'), Message::ScrollBottom)
        .bind(KeyCode::End, Message::ScrollBottom)
}

pub fn handle_key(key: KeyEvent) -> Option<Message> {
    global_keymap().extend(scroll_keymap()).get(&key)
}

pub fn handle_mouse(mouse: MouseEvent) -> Option<Message> {
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(Message::ScrollLines(WHEEL_LINES)),
        MouseEventKind::ScrollUp => Some(Message::ScrollLines(-WHEEL_LINES)),
        _ => None,
    }
}

const HELP_ITEMS: &[(Message, &str)] = &[
    (Message::ScrollLines(1), "down"),
    (Message::ScrollLines(-1), "up"),
    (Message::HalfPageDown, "half page"),
    (Message::PageDown, "page"),
    (Message::ScrollTop, "top"),
    (Message::ScrollBottom, "bottom"),
    (Message::ToggleDebug, "debug"),
    (Message::Quit, "quit"),
    (Message::ToggleHelp, "hide"),
];

/// One-line help built from the active keymaps.
pub fn help_line() -> String {
    let keymap = global_keymap().extend(scroll_keymap());
    HELP_ITEMS
        .iter()
        .filter_map(|(message, label)| {
            let (code, mods) = keymap.find_key(message)?;
            Some(format!("{}:{}", format_key(code, mods), label))
        })
        .collect::<Vec<_>>()
        .join("  ")
}

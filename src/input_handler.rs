use {
    std::collections::HashSet,
    winit::keyboard::{Key, NamedKey},
};

const ESCAPE: char = '\u{1b}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleSnow,
    Jump,
    ToggleDiagnostics,
    Quit,
}

impl Action {
    /// Case-insensitive key binding. Unbound keys map to `None`.
    pub fn from_key(key: char) -> Option<Action> {
        match key.to_ascii_lowercase() {
            's' => Some(Action::ToggleSnow),
            'j' | ' ' => Some(Action::Jump),
            'd' => Some(Action::ToggleDiagnostics),
            'q' | ESCAPE => Some(Action::Quit),
            _ => None,
        }
    }
}

/// Turns raw key presses into one action per physical press.
pub struct InputHandler {
    held: HashSet<char>,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: HashSet::new(),
        }
    }

    /// Reduces a winit logical key to the single character it is bound by.
    pub fn key_char(key: &Key) -> Option<char> {
        match key {
            Key::Character(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c.to_ascii_lowercase()),
                    _ => None,
                }
            }
            Key::Named(NamedKey::Escape) => Some(ESCAPE),
            Key::Named(NamedKey::Space) => Some(' '),
            _ => None,
        }
    }

    /// Records a key transition and returns the action for a rising edge.
    pub fn set_key(&mut self, key: char, pressed: bool) -> Option<Action> {
        let key = key.to_ascii_lowercase();

        if !pressed {
            self.held.remove(&key);
            return None;
        }

        if !self.held.insert(key) {
            return None;
        }

        Action::from_key(key)
    }
}

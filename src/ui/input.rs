use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Toggle,
    Quit,
}

impl KeyAction {
    pub fn label(self) -> &'static str {
        match self {
            KeyAction::Toggle => "Start/Stop",
            KeyAction::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    /// Shown in the footer.
    pub label: &'static str,
    pub action: KeyAction,
}

impl KeyBinding {
    fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.modifiers
    }
}

/// The key map. The footer hints are generated from it.
pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        code: KeyCode::Char(' '),
        modifiers: KeyModifiers::NONE,
        label: "Space",
        action: KeyAction::Toggle,
    },
    KeyBinding {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        label: "Enter",
        action: KeyAction::Toggle,
    },
    KeyBinding {
        code: KeyCode::Char('q'),
        modifiers: KeyModifiers::NONE,
        label: "q",
        action: KeyAction::Quit,
    },
    KeyBinding {
        code: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        label: "Esc",
        action: KeyAction::Quit,
    },
    KeyBinding {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        label: "Ctrl+C",
        action: KeyAction::Quit,
    },
];

pub fn action_for(key: &KeyEvent) -> Option<KeyAction> {
    KEY_BINDINGS
        .iter()
        .find(|binding| binding.matches(key))
        .map(|binding| binding.action)
}

/// Key labels joined per action (`"Space/Enter"`), in key-map order.
pub fn key_hints() -> Vec<(String, KeyAction)> {
    let mut hints: Vec<(String, KeyAction)> = Vec::new();
    for binding in KEY_BINDINGS {
        match hints.iter_mut().find(|(_, action)| *action == binding.action) {
            Some((keys, _)) => {
                keys.push('/');
                keys.push_str(binding.label);
            }
            None => hints.push((binding.label.to_string(), binding.action)),
        }
    }
    hints
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match action_for(&key) {
        Some(KeyAction::Quit) => app.request_quit(),
        Some(KeyAction::Toggle) => app.toggle(),
        None => {}
    }
}

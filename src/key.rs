//! Key bindings for load-more lists.
//!
//! A [`Binding`] is a set of key presses plus the help text shown for them.
//! Components group their bindings in a key map that implements [`KeyMap`],
//! so help views can list them.

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Modifiers held with it.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"r/f5"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses that trigger one action.
///
/// ```rust
/// use bubbletea_loadmore::key::Binding;
/// use bubbletea_rs::KeyMsg;
/// use crossterm::event::{KeyCode, KeyModifiers};
///
/// let refresh = Binding::new(vec![KeyCode::Char('r'), KeyCode::F(5)]).with_help("r/f5", "refresh");
///
/// let msg = KeyMsg { key: KeyCode::F(5), modifiers: KeyModifiers::NONE };
/// assert!(refresh.matches(&msg));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key presses.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            enabled: true,
        }
    }

    /// Sets the help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// The key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding responds to key presses.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the key message is one of this binding's presses.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled()
            && self
                .keys
                .iter()
                .any(|k| k.code == msg.key && k.modifiers == msg.modifiers)
    }
}

/// A group of bindings that can describe itself for help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings for the expanded help, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_matches_plain_key() {
        let binding = Binding::new(vec![KeyCode::Char('r')]);
        assert!(binding.matches(&press(KeyCode::Char('r'), KeyModifiers::NONE)));
        assert!(!binding.matches(&press(KeyCode::Char('x'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_modifiers_must_match() {
        let binding = Binding::new(vec![(KeyCode::Char('n'), KeyModifiers::CONTROL)]);
        assert!(binding.matches(&press(KeyCode::Char('n'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&press(KeyCode::Char('n'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding() {
        let mut binding = Binding::new(vec![KeyCode::Enter]).with_help("enter", "go");
        binding.set_enabled(false);
        assert!(!binding.matches(&press(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(binding.help().desc, "go");
    }
}

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use derive_deref::{Deref, DerefMut};
use serde::{de::Deserializer, Deserialize};

use crate::action::Action;

/// Single-key bindings such as `"<q>": "Quit"`.
#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    /// Looks up a key, ignoring the press/release kind and state flags.
    pub fn action_for(&self, key: &KeyEvent) -> Option<&Action> {
        self.0.get(&KeyEvent::new(key.code, key.modifiers))
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_sequence(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<HashMap<_, _>, D::Error>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Parses a bracketed key such as `<q>`, `<esc>` or `<ctrl-c>`.
pub fn parse_key_sequence(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Unable to parse `{raw}`: missing angle brackets"))?;
    parse_key_event(inner)
}

fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let lowercase = raw.to_ascii_lowercase();
    let (remaining, modifiers) = extract_modifiers(&lowercase);
    parse_key_code_with_modifiers(remaining, modifiers)
}

fn extract_modifiers(raw: &str) -> (&str, KeyModifiers) {
    let mut modifiers = KeyModifiers::empty();
    let mut current = raw;

    loop {
        match current {
            rest if rest.starts_with("ctrl-") => {
                modifiers.insert(KeyModifiers::CONTROL);
                current = &rest[5..];
            }
            rest if rest.starts_with("alt-") => {
                modifiers.insert(KeyModifiers::ALT);
                current = &rest[4..];
            }
            rest if rest.starts_with("shift-") => {
                modifiers.insert(KeyModifiers::SHIFT);
                current = &rest[6..];
            }
            _ => break,
        };
    }

    (current, modifiers)
}

fn parse_key_code_with_modifiers(
    raw: &str,
    mut modifiers: KeyModifiers,
) -> Result<KeyEvent, String> {
    let c = match raw {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backtab" => {
            modifiers.insert(KeyModifiers::SHIFT);
            KeyCode::BackTab
        }
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "hyphen" | "minus" => KeyCode::Char('-'),
        f if f.len() > 1 && f.starts_with('f') => {
            let n = f[1..]
                .parse::<u8>()
                .map_err(|_| format!("Unable to parse `{raw}`"))?;
            KeyCode::F(n)
        }
        c if c.chars().count() == 1 => {
            let mut c = c.chars().next().ok_or_else(|| format!("Unable to parse `{raw}`"))?;
            if modifiers.contains(KeyModifiers::SHIFT) {
                c = c.to_ascii_uppercase();
            }
            KeyCode::Char(c)
        }
        _ => return Err(format!("Unable to parse `{raw}`")),
    };
    Ok(KeyEvent::new(c, modifiers))
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[rstest]
    #[case("<q>", KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()))]
    #[case("<esc>", KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()))]
    #[case("<Esc>", KeyEvent::new(KeyCode::Esc, KeyModifiers::empty()))]
    #[case("<ctrl-c>", KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    #[case(
        "<ctrl-alt-d>",
        KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL | KeyModifiers::ALT)
    )]
    #[case("<shift-q>", KeyEvent::new(KeyCode::Char('Q'), KeyModifiers::SHIFT))]
    #[case("<f5>", KeyEvent::new(KeyCode::F(5), KeyModifiers::empty()))]
    #[case("<space>", KeyEvent::new(KeyCode::Char(' '), KeyModifiers::empty()))]
    fn test_parse_key_sequence(#[case] raw: &str, #[case] expected: KeyEvent) {
        assert_eq!(parse_key_sequence(raw), Ok(expected));
    }

    #[rstest]
    #[case("q")]
    #[case("<>")]
    #[case("<ctrl->")]
    #[case("<unknown>")]
    #[case("<fx>")]
    fn test_parse_key_sequence_rejects(#[case] raw: &str) {
        assert!(parse_key_sequence(raw).is_err());
    }

    #[test]
    fn test_deserialize_keybindings() -> serde_json::Result<()> {
        let bindings: KeyBindings =
            serde_json::from_str(r#"{ "<q>": "Quit", "<ctrl-c>": "Quit" }"#)?;
        assert_eq!(bindings.len(), 2);
        assert_eq!(
            bindings.action_for(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(&Action::Quit)
        );
        Ok(())
    }

    #[test]
    fn test_deserialize_keybindings_rejects_bad_key() {
        let result: serde_json::Result<KeyBindings> =
            serde_json::from_str(r#"{ "q": "Quit" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_action_for_ignores_event_kind() {
        let mut bindings = KeyBindings::default();
        bindings.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()),
            Action::Quit,
        );
        let mut pressed = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty());
        pressed.kind = KeyEventKind::Repeat;
        pressed.state = KeyEventState::CAPS_LOCK;
        assert_eq!(bindings.action_for(&pressed), Some(&Action::Quit));
    }
}

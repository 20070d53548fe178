use std::collections::hash_map::Entry;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "KeybindingMap", into = "KeybindingMap")]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `MoveForward` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    key_to_action: HashMap<String, KeyAction>,
}

/// Serialized form: only the forward map. Actions missing from a file keep
/// their default key.
#[derive(Default, Serialize, Deserialize)]
#[serde(default)]
struct KeybindingMap {
    bindings: HashMap<KeyAction, String>,
}

impl From<KeybindingMap> for KeybindingOptions {
    fn from(map: KeybindingMap) -> Self {
        let mut opts = Self::default();
        let mut overrides: Vec<_> = map.bindings.into_iter().collect();
        overrides.sort_unstable_by_key(|(action, _)| *action);

        // Listed actions drop their default key first, so swapping two keys
        // within one file is not a clash.
        for (action, _) in &overrides {
            let _ = opts.bindings.remove(action);
        }
        for (action, key) in overrides {
            opts.bind(action, key);
        }
        opts
    }
}

impl From<KeybindingOptions> for KeybindingMap {
    fn from(opts: KeybindingOptions) -> Self {
        Self {
            bindings: opts.bindings,
        }
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::MoveForward, "KeyW".into()),
            (KeyAction::MoveBackward, "KeyS".into()),
            (KeyAction::MoveLeft, "KeyA".into()),
            (KeyAction::MoveRight, "KeyD".into()),
            (KeyAction::MoveUp, "Space".into()),
            (KeyAction::MoveDown, "ControlLeft".into()),
            (KeyAction::ResetCamera, "KeyR".into()),
            (KeyAction::Exit, "Escape".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// If `bindings` was edited directly and two actions share a key, the
    /// action declared first in [`KeyAction`] keeps it.
    pub fn rebuild_reverse_map(&mut self) {
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_unstable_by_key(|(action, _)| **action);

        self.key_to_action.clear();
        for (action, key) in entries {
            match self.key_to_action.entry(key.clone()) {
                Entry::Occupied(kept) => {
                    let first = kept.get();
                    log::warn!(
                        "{key} is bound to both {first:?} and {action:?}; keeping {first:?}"
                    );
                }
                Entry::Vacant(slot) => {
                    let _ = slot.insert(*action);
                }
            }
        }
    }

    /// Bind `action` to `key`, replacing its previous key.
    ///
    /// Any other action holding `key` loses it and is left unbound.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        let mut displaced: Vec<KeyAction> = self
            .bindings
            .iter()
            .filter(|(other, bound)| **other != action && **bound == key)
            .map(|(other, _)| *other)
            .collect();
        displaced.sort_unstable();
        for other in displaced {
            log::warn!(
                "{key} moved from {other:?} to {action:?}; {other:?} is now unbound"
            );
            let _ = self.bindings.remove(&other);
        }

        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_movement() {
        let opts = KeybindingOptions::default();
        assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.lookup("KeyS"), Some(KeyAction::MoveBackward));
        assert_eq!(opts.lookup("KeyA"), Some(KeyAction::MoveLeft));
        assert_eq!(opts.lookup("KeyD"), Some(KeyAction::MoveRight));
        assert_eq!(opts.lookup("Space"), Some(KeyAction::MoveUp));
        assert_eq!(opts.lookup("ControlLeft"), Some(KeyAction::MoveDown));
        assert_eq!(opts.lookup("Escape"), Some(KeyAction::Exit));
        assert_eq!(opts.lookup("KeyZ"), None);
    }

    #[test]
    fn rebinding_replaces_old_key() {
        let mut opts = KeybindingOptions::default();
        opts.bind(KeyAction::MoveForward, "ArrowUp");
        assert_eq!(opts.lookup("ArrowUp"), Some(KeyAction::MoveForward));
        assert_eq!(opts.lookup("KeyW"), None);
    }

    #[test]
    fn reverse_map_rebuilt_after_deserialize() {
        let opts: KeybindingOptions = toml::from_str(
            r#"
[bindings]
move_forward = "ArrowUp"
exit = "KeyQ"
"#,
        )
        .unwrap();
        assert_eq!(opts.lookup("ArrowUp"), Some(KeyAction::MoveForward));
        assert_eq!(opts.lookup("KeyQ"), Some(KeyAction::Exit));
        assert_eq!(opts.lookup("KeyW"), None);
        assert_eq!(opts.lookup("Escape"), None);
    }

    #[test]
    fn unlisted_actions_keep_default_keys() {
        let opts: KeybindingOptions =
            toml::from_str("[bindings]\nmove_up = \"KeyE\"\n").unwrap();
        assert_eq!(opts.lookup("KeyE"), Some(KeyAction::MoveUp));
        assert_eq!(opts.lookup("Space"), None);
        assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveForward));
        assert_eq!(opts.lookup("KeyR"), Some(KeyAction::ResetCamera));
        assert_eq!(opts.bindings.len(), 8);
    }

    #[test]
    fn empty_table_yields_defaults() {
        let opts: KeybindingOptions = toml::from_str("").unwrap();
        assert_eq!(opts, KeybindingOptions::default());
    }

    #[test]
    fn bind_takes_key_from_previous_action() {
        for _ in 0..64 {
            let mut opts = KeybindingOptions::default();
            opts.bind(KeyAction::MoveUp, "KeyW");
            assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveUp));
            assert_eq!(opts.lookup("Space"), None);
            assert!(!opts.bindings.contains_key(&KeyAction::MoveForward));
            assert_eq!(opts.bindings.len(), 7);
        }
    }

    #[test]
    fn rebinding_same_key_keeps_action() {
        let mut opts = KeybindingOptions::default();
        opts.bind(KeyAction::MoveForward, "KeyW");
        assert_eq!(opts, KeybindingOptions::default());
    }

    #[test]
    fn file_override_takes_key_from_default() {
        for _ in 0..64 {
            let opts: KeybindingOptions =
                toml::from_str("[bindings]\nmove_up = \"KeyW\"\n").unwrap();
            assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveUp));
            assert!(!opts.bindings.contains_key(&KeyAction::MoveForward));
            assert_eq!(opts.lookup("KeyS"), Some(KeyAction::MoveBackward));
        }
    }

    #[test]
    fn duplicate_keys_in_file_resolve_by_action_order() {
        for _ in 0..64 {
            let opts: KeybindingOptions = toml::from_str(
                r#"
[bindings]
exit = "KeyQ"
move_forward = "KeyQ"
"#,
            )
            .unwrap();
            assert_eq!(opts.lookup("KeyQ"), Some(KeyAction::Exit));
            assert_eq!(opts.lookup("KeyW"), None);
            assert_eq!(opts.lookup("Escape"), None);
            assert!(!opts.bindings.contains_key(&KeyAction::MoveForward));
        }
    }

    #[test]
    fn swapping_keys_in_file_loses_nothing() {
        let opts: KeybindingOptions = toml::from_str(
            r#"
[bindings]
move_forward = "Space"
move_up = "KeyW"
"#,
        )
        .unwrap();
        assert_eq!(opts.lookup("Space"), Some(KeyAction::MoveForward));
        assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveUp));
        assert_eq!(opts.bindings.len(), 8);
    }

    #[test]
    fn direct_edits_resolve_shared_key_by_action_order() {
        for _ in 0..64 {
            let mut opts = KeybindingOptions::default();
            let _ = opts.bindings.insert(KeyAction::Exit, "KeyW".into());
            opts.rebuild_reverse_map();
            assert_eq!(opts.lookup("KeyW"), Some(KeyAction::MoveForward));
        }
    }
}

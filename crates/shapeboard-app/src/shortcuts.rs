//! Keyboard shortcut registry and documentation.

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    /// Remove every shape from the board.
    Clear,
    /// Close the window.
    Close,
}

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub description: &'static str,
    pub action: ShortcutAction,
}

impl Shortcut {
    pub const fn new(key: &'static str, description: &'static str, action: ShortcutAction) -> Self {
        Self {
            key,
            description,
            action,
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("C", "Clear all shapes", ShortcutAction::Clear),
            Shortcut::new("Escape", "Close the window", ShortcutAction::Close),
        ]
    }

    /// Find the action bound to a key name (case-insensitive).
    pub fn lookup(key: &str) -> Option<ShortcutAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.key.eq_ignore_ascii_case(key))
            .map(|shortcut| shortcut.action)
    }

    /// Log all shortcuts.
    pub fn log_all() {
        for shortcut in Self::all() {
            log::info!("  {:10} {}", shortcut.key, shortcut.description);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(ShortcutRegistry::lookup("c"), Some(ShortcutAction::Clear));
        assert_eq!(ShortcutRegistry::lookup("C"), Some(ShortcutAction::Clear));
        assert_eq!(ShortcutRegistry::lookup("escape"), Some(ShortcutAction::Close));
        assert_eq!(ShortcutRegistry::lookup("x"), None);
    }

    #[test]
    fn test_keys_are_unique() {
        let shortcuts = ShortcutRegistry::all();
        for (i, a) in shortcuts.iter().enumerate() {
            for b in &shortcuts[i + 1..] {
                assert!(!a.key.eq_ignore_ascii_case(b.key));
            }
        }
    }
}

//! Keyboard shortcut scopes.
//!
//! Every open overlay (and the home screen) owns a [`Scope`] of key bindings.
//! Scopes live on a [`ShortcutStack`]; a key press is resolved against the
//! topmost scope first and walks downward until a scope binds the key or a
//! blocking scope stops the walk.

use crossterm::event::KeyCode;

/// One key bound to an action, with a description for the help window.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<A> {
    pub key: KeyCode,
    pub action: A,
    pub description: &'static str,
}

impl<A> Binding<A> {
    pub fn new(key: KeyCode, action: A, description: &'static str) -> Self {
        Self {
            key,
            action,
            description,
        }
    }

    /// Whether this binding answers to `key`. Letters ignore case.
    pub fn matches(&self, key: KeyCode) -> bool {
        match (self.key, key) {
            (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
            (a, b) => a == b,
        }
    }

    /// Short human-readable key name.
    pub fn key_label(&self) -> String {
        key_label(self.key)
    }
}

/// Display name for a key.
pub fn key_label(key: KeyCode) -> String {
    match key {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        other => format!("{:?}", other),
    }
}

/// A named set of bindings owned by `owner`.
#[derive(Debug, Clone)]
pub struct Scope<O, A> {
    pub owner: O,
    pub name: &'static str,
    /// A blocking scope hides every scope below it for keys it doesn't bind.
    pub blocking: bool,
    pub bindings: Vec<Binding<A>>,
}

impl<O, A> Scope<O, A> {
    pub fn new(owner: O, name: &'static str, blocking: bool, bindings: Vec<Binding<A>>) -> Self {
        Self {
            owner,
            name,
            blocking,
            bindings,
        }
    }

    /// First binding for `key`, in declaration order.
    pub fn lookup(&self, key: KeyCode) -> Option<&Binding<A>> {
        self.bindings.iter().find(|b| b.matches(key))
    }
}

/// Stack of scopes, bottom first.
#[derive(Debug, Clone)]
pub struct ShortcutStack<O, A> {
    scopes: Vec<Scope<O, A>>,
}

impl<O: PartialEq, A: Clone> ShortcutStack<O, A> {
    pub fn new() -> Self {
        Self { scopes: Vec::new() }
    }

    /// Put `scope` on top. If its owner already has a scope, that one is
    /// replaced and the new one moves to the top.
    pub fn push(&mut self, scope: Scope<O, A>) {
        self.scopes.retain(|s| s.owner != scope.owner);
        self.scopes.push(scope);
    }

    /// Remove the scope owned by `owner`. Returns false if there was none.
    pub fn remove(&mut self, owner: &O) -> bool {
        let before = self.scopes.len();
        self.scopes.retain(|s| &s.owner != owner);
        self.scopes.len() != before
    }

    /// Resolve `key` to an action, top scope first.
    pub fn dispatch(&self, key: KeyCode) -> Option<A> {
        for scope in self.scopes.iter().rev() {
            if let Some(binding) = scope.lookup(key) {
                return Some(binding.action.clone());
            }
            if scope.blocking {
                return None;
            }
        }
        None
    }

    pub fn top(&self) -> Option<&Scope<O, A>> {
        self.scopes.last()
    }

    pub fn contains(&self, owner: &O) -> bool {
        self.scopes.iter().any(|s| &s.owner == owner)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Scopes from bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &Scope<O, A>> {
        self.scopes.iter()
    }
}

impl<O: PartialEq, A: Clone> Default for ShortcutStack<O, A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Act {
        Home,
        Overlay,
        Close,
    }

    fn home() -> Scope<&'static str, Act> {
        Scope::new(
            "home",
            "Home",
            false,
            vec![
                Binding::new(KeyCode::Char('s'), Act::Home, "open"),
                Binding::new(KeyCode::Char('q'), Act::Home, "quit"),
            ],
        )
    }

    fn overlay(owner: &'static str, blocking: bool) -> Scope<&'static str, Act> {
        Scope::new(
            owner,
            "Overlay",
            blocking,
            vec![
                Binding::new(KeyCode::Char('s'), Act::Overlay, "overlay s"),
                Binding::new(KeyCode::Esc, Act::Close, "close"),
            ],
        )
    }

    #[test]
    fn test_empty_stack_dispatches_nothing() {
        let stack: ShortcutStack<&str, Act> = ShortcutStack::new();
        assert_eq!(stack.dispatch(KeyCode::Char('s')), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_top_scope_wins() {
        let mut stack = ShortcutStack::new();
        stack.push(home());
        stack.push(overlay("a", true));
        assert_eq!(stack.dispatch(KeyCode::Char('s')), Some(Act::Overlay));
        assert_eq!(stack.dispatch(KeyCode::Esc), Some(Act::Close));
    }

    #[test]
    fn test_blocking_scope_hides_lower_bindings() {
        let mut stack = ShortcutStack::new();
        stack.push(home());
        stack.push(overlay("a", true));
        assert_eq!(stack.dispatch(KeyCode::Char('q')), None);
    }

    #[test]
    fn test_non_blocking_scope_falls_through() {
        let mut stack = ShortcutStack::new();
        stack.push(home());
        stack.push(overlay("a", false));
        assert_eq!(stack.dispatch(KeyCode::Char('q')), Some(Act::Home));
    }

    #[test]
    fn test_letters_ignore_case() {
        let mut stack = ShortcutStack::new();
        stack.push(home());
        assert_eq!(stack.dispatch(KeyCode::Char('S')), Some(Act::Home));
    }

    #[test]
    fn test_remove_restores_lower_scope() {
        let mut stack = ShortcutStack::new();
        stack.push(home());
        stack.push(overlay("a", true));
        assert!(stack.remove(&"a"));
        assert!(!stack.remove(&"a"));
        assert_eq!(stack.dispatch(KeyCode::Char('s')), Some(Act::Home));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_remove_from_middle_keeps_order() {
        let mut stack = ShortcutStack::new();
        stack.push(home());
        stack.push(overlay("a", true));
        stack.push(overlay("b", true));
        stack.remove(&"a");
        let owners: Vec<_> = stack.iter().map(|s| s.owner).collect();
        assert_eq!(owners, vec!["home", "b"]);
    }

    #[test]
    fn test_push_existing_owner_moves_to_top() {
        let mut stack = ShortcutStack::new();
        stack.push(home());
        stack.push(overlay("a", true));
        stack.push(overlay("b", true));
        stack.push(overlay("a", true));
        let owners: Vec<_> = stack.iter().map(|s| s.owner).collect();
        assert_eq!(owners, vec!["home", "b", "a"]);
        assert_eq!(stack.top().map(|s| s.owner), Some("a"));
    }

    #[test]
    fn test_contains_follows_remove() {
        let mut stack = ShortcutStack::new();
        stack.push(home());
        stack.push(overlay("a", true));
        assert!(stack.contains(&"a"));
        stack.remove(&"a");
        assert!(!stack.contains(&"a"));
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(key_label(KeyCode::Char(' ')), "Space");
        assert_eq!(key_label(KeyCode::Char('m')), "m");
        assert_eq!(key_label(KeyCode::Esc), "Esc");
    }
}

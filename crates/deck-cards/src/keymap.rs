#![forbid(unsafe_code)]

//! Keyboard shortcuts for card commands.
//!
//! Default bindings: arrow keys map to the matching direction and `+`
//! to the adopt-style right commit.

use ahash::AHashMap;
use deck_core::KeyCode;

use crate::command::SwipeCommand;

#[derive(Debug, Clone)]
pub struct SwipeKeymap {
    bindings: AHashMap<KeyCode, SwipeCommand>,
}

impl Default for SwipeKeymap {
    fn default() -> Self {
        let mut keymap = Self::empty();
        keymap.bind(KeyCode::Right, SwipeCommand::Right);
        keymap.bind(KeyCode::Left, SwipeCommand::Left);
        keymap.bind(KeyCode::Up, SwipeCommand::Up);
        keymap.bind(KeyCode::Down, SwipeCommand::Down);
        keymap.bind(KeyCode::Char('+'), SwipeCommand::RightWithPlus);
        keymap
    }
}

impl SwipeKeymap {
    /// A keymap with no bindings.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            bindings: AHashMap::new(),
        }
    }

    /// Bind `key`, returning the command it previously mapped to.
    pub fn bind(&mut self, key: KeyCode, command: SwipeCommand) -> Option<SwipeCommand> {
        self.bindings.insert(key, command)
    }

    pub fn unbind(&mut self, key: KeyCode) -> Option<SwipeCommand> {
        self.bindings.remove(&key)
    }

    #[must_use]
    pub fn lookup(&self, key: KeyCode) -> Option<SwipeCommand> {
        self.bindings.get(&key).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_command() {
        let keymap = SwipeKeymap::default();
        assert_eq!(keymap.len(), SwipeCommand::ALL.len());
        assert_eq!(keymap.lookup(KeyCode::Left), Some(SwipeCommand::Left));
        assert_eq!(
            keymap.lookup(KeyCode::Char('+')),
            Some(SwipeCommand::RightWithPlus)
        );
        assert_eq!(keymap.lookup(KeyCode::Enter), None);
    }

    #[test]
    fn rebinding_replaces() {
        let mut keymap = SwipeKeymap::default();
        assert_eq!(
            keymap.bind(KeyCode::Right, SwipeCommand::RightWithPlus),
            Some(SwipeCommand::Right)
        );
        assert_eq!(keymap.unbind(KeyCode::Up), Some(SwipeCommand::Up));
        assert_eq!(keymap.lookup(KeyCode::Up), None);
    }

    #[test]
    fn empty_keymap_maps_nothing() {
        let keymap = SwipeKeymap::empty();
        assert!(keymap.is_empty());
        assert_eq!(keymap.lookup(KeyCode::Right), None);
    }
}

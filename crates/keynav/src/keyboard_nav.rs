//! Keyboard Bindings
//!
//! Maps key presses to navigation actions. Arrow keys move, Enter activates.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use keynav_geometry::Direction;

use crate::NavError;

/// Navigation action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveClosest,
    /// Click the focused element
    Activate,
}

impl NavAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::MoveLeft => "move-left",
            Self::MoveRight => "move-right",
            Self::MoveUp => "move-up",
            Self::MoveDown => "move-down",
            Self::MoveClosest => "move-closest",
            Self::Activate => "activate",
        }
    }

    /// Direction of a directional move
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Self::MoveLeft => Some(Direction::Left),
            Self::MoveRight => Some(Direction::Right),
            Self::MoveUp => Some(Direction::Up),
            Self::MoveDown => Some(Direction::Down),
            Self::MoveClosest | Self::Activate => None,
        }
    }
}

impl From<Direction> for NavAction {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::MoveLeft,
            Direction::Right => Self::MoveRight,
            Direction::Up => Self::MoveUp,
            Direction::Down => Self::MoveDown,
        }
    }
}

impl fmt::Display for NavAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NavAction {
    type Err = NavError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "closest" | "move-closest" => Ok(Self::MoveClosest),
            "click" | "enter" | "activate" => Ok(Self::Activate),
            other => match other.strip_prefix("move-") {
                Some(direction) => Ok(direction.parse::<Direction>()?.into()),
                None => other
                    .parse::<Direction>()
                    .map(Self::from)
                    .map_err(|_| NavError::UnknownAction(s.to_string())),
            },
        }
    }
}

/// Key press
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyInput {
    pub key: String,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl KeyInput {
    pub fn new(key: &str) -> Self {
        Self { key: key.into(), ctrl: false, alt: false, shift: false, meta: false }
    }

    pub fn ctrl(mut self) -> Self { self.ctrl = true; self }
    pub fn alt(mut self) -> Self { self.alt = true; self }
    pub fn shift(mut self) -> Self { self.shift = true; self }
    pub fn meta(mut self) -> Self { self.meta = true; self }

    /// Legacy DOM key codes for the navigation keys
    pub fn from_key_code(code: u32) -> Option<Self> {
        let key = match code {
            37 => "ArrowLeft",
            38 => "ArrowUp",
            39 => "ArrowRight",
            40 => "ArrowDown",
            13 => "Enter",
            _ => return None,
        };
        Some(Self::new(key))
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl { parts.push("Ctrl"); }
        if self.alt { parts.push("Alt"); }
        if self.shift { parts.push("Shift"); }
        if self.meta { parts.push("Cmd"); }
        parts.push(&self.key);
        parts.join("+")
    }
}

/// Key bindings
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
    bindings: HashMap<KeyInput, NavAction>,
}

impl KeyMap {
    /// Arrow keys and Enter
    pub fn new() -> Self {
        let mut map = Self::default();
        map.register(KeyInput::new("ArrowLeft"), NavAction::MoveLeft);
        map.register(KeyInput::new("ArrowRight"), NavAction::MoveRight);
        map.register(KeyInput::new("ArrowUp"), NavAction::MoveUp);
        map.register(KeyInput::new("ArrowDown"), NavAction::MoveDown);
        map.register(KeyInput::new("Enter"), NavAction::Activate);
        map
    }

    /// Bind a key, replacing any previous binding
    pub fn register(&mut self, key: KeyInput, action: NavAction) -> Option<NavAction> {
        self.bindings.insert(key, action)
    }

    pub fn unbind(&mut self, key: &KeyInput) -> Option<NavAction> {
        self.bindings.remove(key)
    }

    pub fn action_for(&self, key: &KeyInput) -> Option<NavAction> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::new();
        assert_eq!(map.len(), 5);
        assert_eq!(map.action_for(&KeyInput::new("ArrowUp")), Some(NavAction::MoveUp));
        assert_eq!(map.action_for(&KeyInput::new("Enter")), Some(NavAction::Activate));
        // Modifiers make a different key
        assert_eq!(map.action_for(&KeyInput::new("ArrowUp").alt()), None);
    }

    #[test]
    fn test_key_codes() {
        let map = KeyMap::new();
        for (code, action) in [
            (37, NavAction::MoveLeft),
            (38, NavAction::MoveUp),
            (39, NavAction::MoveRight),
            (40, NavAction::MoveDown),
            (13, NavAction::Activate),
        ] {
            let key = KeyInput::from_key_code(code).unwrap();
            assert_eq!(map.action_for(&key), Some(action));
        }
        assert!(KeyInput::from_key_code(65).is_none());
    }

    #[test]
    fn test_rebind() {
        let mut map = KeyMap::new();
        map.register(KeyInput::new("h"), NavAction::MoveLeft);
        map.register(KeyInput::new(" "), NavAction::MoveClosest);
        assert_eq!(map.unbind(&KeyInput::new("Enter")), Some(NavAction::Activate));
        assert_eq!(map.action_for(&KeyInput::new("h")), Some(NavAction::MoveLeft));
        assert_eq!(map.action_for(&KeyInput::new("Enter")), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyInput::new("ArrowDown").ctrl().shift().display(), "Ctrl+Shift+ArrowDown");
    }

    #[test]
    fn test_parse_action() {
        assert_eq!("left".parse::<NavAction>().unwrap(), NavAction::MoveLeft);
        assert_eq!("move-down".parse::<NavAction>().unwrap(), NavAction::MoveDown);
        assert_eq!("ArrowUp".parse::<NavAction>().unwrap(), NavAction::MoveUp);
        assert_eq!("closest".parse::<NavAction>().unwrap(), NavAction::MoveClosest);
        assert_eq!("Enter".parse::<NavAction>().unwrap(), NavAction::Activate);

        let err = "sideways".parse::<NavAction>().unwrap_err();
        assert!(matches!(err, NavError::UnknownAction(ref s) if s == "sideways"));

        let err = "move-sideways".parse::<NavAction>().unwrap_err();
        assert!(matches!(err, NavError::UnknownDirection(ref e) if e.0 == "sideways"));
        assert_eq!(err.to_string(), "unknown direction: \"sideways\"");
    }

    #[test]
    fn test_action_direction() {
        for direction in Direction::ALL {
            assert_eq!(NavAction::from(direction).direction(), Some(direction));
        }
        assert_eq!(NavAction::Activate.direction(), None);
    }
}

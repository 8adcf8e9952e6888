//! Theme variables.
//!
//! Named color variables, looked up by components at paint time with a
//! fallback when the variable is unset:
//!
//! ```
//! use panelgrip_ui::{Color, Theme};
//!
//! let mut theme = Theme::new();
//! assert_eq!(theme.color_or("--accent", Color::BLACK), Color::BLACK);
//!
//! theme.set_variable_str("--accent", "#ff8800");
//! assert_eq!(theme.color_or("--accent", Color::BLACK), Color::from_hex(0xFF8800));
//! ```

use panelgrip_core::alloc::HashMap;

use crate::color::Color;

#[derive(Debug, Clone, Default)]
pub struct Theme {
    variables: HashMap<String, Color>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a color variable.
    pub fn set_variable(&mut self, name: impl Into<String>, color: Color) {
        self.variables.insert(name.into(), color);
    }

    /// Set a color variable from a CSS hex string.
    ///
    /// Returns `false` and leaves the theme untouched if the value does not parse.
    pub fn set_variable_str(&mut self, name: impl Into<String>, value: &str) -> bool {
        let name = name.into();
        match Color::parse(value) {
            Some(color) => {
                self.variables.insert(name, color);
                true
            }
            None => {
                tracing::debug!("Ignoring unparsable color {:?} for {}", value, name);
                false
            }
        }
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<Color> {
        self.variables.remove(name)
    }

    pub fn variable(&self, name: &str) -> Option<Color> {
        self.variables.get(name).copied()
    }

    /// Look up a variable, falling back to `fallback` when unset.
    pub fn color_or(&self, name: &str, fallback: Color) -> Color {
        self.variable(name).unwrap_or(fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_value_keeps_previous() {
        let mut theme = Theme::new();
        theme.set_variable("--x", Color::WHITE);
        assert!(!theme.set_variable_str("--x", "not-a-color"));
        assert_eq!(theme.variable("--x"), Some(Color::WHITE));
    }

    #[test]
    fn test_remove_variable_restores_fallback() {
        let mut theme = Theme::new();
        theme.set_variable("--x", Color::WHITE);
        theme.remove_variable("--x");
        assert_eq!(theme.color_or("--x", Color::BLACK), Color::BLACK);
    }
}

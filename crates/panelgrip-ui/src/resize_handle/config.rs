//! Resize handle configuration resolved from element attributes.

use std::str::FromStr;

use crate::element::Attributes;

pub const ATTR_RESIZE: &str = "resize";
pub const ATTR_MIN_WIDTH: &str = "min-width";
pub const ATTR_INITIAL_WIDTH: &str = "initial-width";
pub const ATTR_MAX_WIDTH_PERCENT: &str = "max-width-percent";
pub const ATTR_COLLAPSIBLE: &str = "collapsible";
/// Alternate spelling accepted for [`ATTR_COLLAPSIBLE`].
pub const ATTR_COLLAPSABLE: &str = "collapsable";

pub const DEFAULT_MIN_WIDTH: f32 = 150.0;
pub const DEFAULT_MAX_WIDTH_PERCENT: f32 = 30.0;

/// Which side of the handle the controlled panel sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Controls the preceding sibling.
    Left,
    /// Controls the following sibling.
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            other => Err(ConfigError::InvalidDirection(other.to_string())),
        }
    }
}

/// Invalid configuration input. Reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The `resize` attribute was neither `left` nor `right`.
    InvalidDirection(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidDirection(value) => write!(
                f,
                "Invalid {} value {:?}: expected \"left\" or \"right\"",
                ATTR_RESIZE, value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Operating parameters of a resize handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleConfig {
    /// `None` disables resizing: no target ever resolves.
    pub direction: Option<Direction>,
    /// Lower clamp bound and collapse threshold, in pixels.
    pub min_width: f32,
    /// Width written to the target on mount.
    pub initial_width: f32,
    /// Upper clamp bound as a percentage of the viewport width.
    pub max_width_percent: f32,
    /// Whether dragging below `min_width` hides the target.
    pub collapsible: bool,
}

impl Default for HandleConfig {
    fn default() -> Self {
        Self {
            direction: None,
            min_width: DEFAULT_MIN_WIDTH,
            initial_width: DEFAULT_MIN_WIDTH,
            max_width_percent: DEFAULT_MAX_WIDTH_PERCENT,
            collapsible: false,
        }
    }
}

impl HandleConfig {
    /// Resolve configuration from attributes.
    ///
    /// Numeric attributes that fail to parse silently fall back to their
    /// defaults. An unrecognised `resize` value leaves the direction unset and
    /// is returned as a diagnostic alongside the otherwise usable config.
    pub fn resolve(attrs: &Attributes) -> (Self, Option<ConfigError>) {
        let (direction, diagnostic) = match attrs.get(ATTR_RESIZE) {
            None => (None, None),
            Some(value) => match value.parse::<Direction>() {
                Ok(direction) => (Some(direction), None),
                Err(err) => (None, Some(err)),
            },
        };

        let min_width = attrs
            .get(ATTR_MIN_WIDTH)
            .and_then(parse_leading_int)
            .map(|v| v.max(0) as f32)
            .unwrap_or(DEFAULT_MIN_WIDTH);
        let max_width_percent = attrs
            .get(ATTR_MAX_WIDTH_PERCENT)
            .and_then(parse_leading_int)
            .map(|v| v.clamp(0, 100) as f32)
            .unwrap_or(DEFAULT_MAX_WIDTH_PERCENT);
        let initial_width = attrs
            .get(ATTR_INITIAL_WIDTH)
            .and_then(parse_leading_int)
            .map(|v| v as f32)
            .unwrap_or(min_width);
        let collapsible = [ATTR_COLLAPSIBLE, ATTR_COLLAPSABLE]
            .iter()
            .filter_map(|name| attrs.get(name))
            .any(flag_enabled);

        let config = Self {
            direction,
            min_width,
            initial_width,
            max_width_percent,
            collapsible,
        };
        (config, diagnostic)
    }

    /// Upper width bound for a viewport of the given width.
    pub fn max_width(&self, viewport_width: f32) -> f32 {
        viewport_width * self.max_width_percent / 100.0
    }
}

/// Parse the leading integer of `value`, ignoring surrounding whitespace and
/// any trailing non-digit suffix such as `px`.
fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest[..digits_end].parse::<i64>().ok().map(|v| sign * v)
}

/// A boolean attribute is on when present, unless its value is `"false"`.
fn flag_enabled(value: &str) -> bool {
    !value.trim().eq_ignore_ascii_case("false")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Attributes {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_defaults_without_attributes() {
        let (config, diagnostic) = HandleConfig::resolve(&Attributes::new());
        assert_eq!(config, HandleConfig::default());
        assert_eq!(config.min_width, 150.0);
        assert_eq!(config.initial_width, 150.0);
        assert_eq!(config.max_width_percent, 30.0);
        assert!(!config.collapsible);
        assert!(diagnostic.is_none());
    }

    #[test]
    fn test_full_attribute_set() {
        let (config, diagnostic) = HandleConfig::resolve(&attrs(&[
            ("resize", "right"),
            ("min-width", "120"),
            ("initial-width", "240"),
            ("max-width-percent", "45"),
            ("collapsible", ""),
        ]));
        assert!(diagnostic.is_none());
        assert_eq!(config.direction, Some(Direction::Right));
        assert_eq!(config.min_width, 120.0);
        assert_eq!(config.initial_width, 240.0);
        assert_eq!(config.max_width_percent, 45.0);
        assert!(config.collapsible);
    }

    #[test]
    fn test_invalid_direction_is_reported_and_disables() {
        let (config, diagnostic) = HandleConfig::resolve(&attrs(&[("resize", "up")]));
        assert_eq!(config.direction, None);
        assert_eq!(diagnostic, Some(ConfigError::InvalidDirection("up".into())));

        // Direction literals are exact.
        let (config, diagnostic) = HandleConfig::resolve(&attrs(&[("resize", "Left")]));
        assert_eq!(config.direction, None);
        assert!(diagnostic.is_some());
    }

    #[test]
    fn test_unparsable_numbers_fall_back() {
        let (config, _) = HandleConfig::resolve(&attrs(&[
            ("min-width", "wide"),
            ("max-width-percent", ""),
            ("initial-width", "auto"),
        ]));
        assert_eq!(config.min_width, DEFAULT_MIN_WIDTH);
        assert_eq!(config.max_width_percent, DEFAULT_MAX_WIDTH_PERCENT);
        assert_eq!(config.initial_width, DEFAULT_MIN_WIDTH);
    }

    #[test]
    fn test_initial_width_defaults_to_min_width() {
        let (config, _) = HandleConfig::resolve(&attrs(&[("min-width", "80")]));
        assert_eq!(config.initial_width, 80.0);
    }

    #[test]
    fn test_numbers_with_units_and_bounds() {
        let (config, _) = HandleConfig::resolve(&attrs(&[
            ("min-width", " 200px"),
            ("max-width-percent", "250"),
        ]));
        assert_eq!(config.min_width, 200.0);
        assert_eq!(config.max_width_percent, 100.0);

        let (config, _) = HandleConfig::resolve(&attrs(&[
            ("min-width", "-5"),
            ("max-width-percent", "-1"),
        ]));
        assert_eq!(config.min_width, 0.0);
        assert_eq!(config.max_width_percent, 0.0);
    }

    #[test]
    fn test_collapsible_spellings_and_false() {
        let on = |pairs: &[(&str, &str)]| HandleConfig::resolve(&attrs(pairs)).0.collapsible;
        assert!(on(&[("collapsable", "")]));
        assert!(on(&[("collapsible", "true")]));
        assert!(!on(&[("collapsible", "false")]));
        assert!(!on(&[("collapsable", "FALSE")]));
        assert!(!on(&[]));
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  42px"), Some(42));
        assert_eq!(parse_leading_int("+7"), Some(7));
        assert_eq!(parse_leading_int("-12.5"), Some(-12));
        assert_eq!(parse_leading_int("px42"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn test_max_width_is_viewport_fraction() {
        let config = HandleConfig {
            max_width_percent: 30.0,
            ..HandleConfig::default()
        };
        assert_eq!(config.max_width(1000.0), 300.0);
    }
}

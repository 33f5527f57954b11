//! Input modality (what the player last touched)

use std::fmt;

/// The kind of device the player most recently used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InputSource {
    Controller,
    #[default]
    KeyboardMouse,
    Touchscreen,
}

impl InputSource {
    /// Resolve the short name used in rule text (case-insensitive)
    pub fn from_friendly_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "controller" => Some(InputSource::Controller),
            "keyboardmouse" => Some(InputSource::KeyboardMouse),
            "touchscreen" => Some(InputSource::Touchscreen),
            _ => None,
        }
    }

    pub fn friendly_name(&self) -> &'static str {
        match self {
            InputSource::Controller => "controller",
            InputSource::KeyboardMouse => "keyboardmouse",
            InputSource::Touchscreen => "touchscreen",
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_friendly_name_lookup_ignores_case() {
        assert_eq!(InputSource::from_friendly_name("Controller"), Some(InputSource::Controller));
        assert_eq!(
            InputSource::from_friendly_name("KEYBOARDMOUSE"),
            Some(InputSource::KeyboardMouse)
        );
        assert_eq!(InputSource::from_friendly_name("touchscreen"), Some(InputSource::Touchscreen));
        assert_eq!(InputSource::from_friendly_name("keyboard"), None);
    }
}

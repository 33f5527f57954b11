//! Last-used input modality tracking
//!
//! Layout rulesets can hide elements per input source, so the UI needs to
//! know which device the player touched last. Platform code turns raw
//! device activity into [`InputEvent`]s; the tracker only keeps the result.

use super::{ControllerType, InputSource};

/// A unit of player activity, already attributed to a device
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Key press, mouse move/click or wheel
    KeyboardMouse,
    /// Touch start/move
    Touch,
    /// Button or stick activity on a gamepad with the given device name
    Controller { name: String },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InputTracker {
    last_source: InputSource,
    last_controller: ControllerType,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_source(&self) -> InputSource {
        self.last_source
    }

    /// Type of the most recently used controller. Keeps its value while the
    /// player is on keyboard/mouse or touch.
    pub fn last_controller(&self) -> ControllerType {
        self.last_controller
    }

    /// Record an event. Returns true when the modality or controller type
    /// changed, i.e. input-dependent layout needs recomputing.
    pub fn observe(&mut self, event: &InputEvent) -> bool {
        let (source, controller) = match event {
            InputEvent::KeyboardMouse => (InputSource::KeyboardMouse, self.last_controller),
            InputEvent::Touch => (InputSource::Touchscreen, self.last_controller),
            InputEvent::Controller { name } => {
                (InputSource::Controller, ControllerType::from_name(name))
            }
        };

        let changed = source != self.last_source || controller != self.last_controller;
        if changed {
            log::debug!(
                "input modality: {} ({})",
                source,
                controller.display_name()
            );
        }
        self.last_source = source;
        self.last_controller = controller;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_keyboard_mouse() {
        let tracker = InputTracker::new();
        assert_eq!(tracker.last_source(), InputSource::KeyboardMouse);
    }

    #[test]
    fn test_switching_modality_reports_change() {
        let mut tracker = InputTracker::new();

        assert!(!tracker.observe(&InputEvent::KeyboardMouse));
        assert!(tracker.observe(&InputEvent::Controller {
            name: "DualSense Wireless Controller".to_string(),
        }));
        assert_eq!(tracker.last_source(), InputSource::Controller);
        assert_eq!(tracker.last_controller(), ControllerType::PlayStation);

        // Same pad again: nothing to relayout
        assert!(!tracker.observe(&InputEvent::Controller {
            name: "DualSense Wireless Controller".to_string(),
        }));

        assert!(tracker.observe(&InputEvent::Touch));
        assert_eq!(tracker.last_source(), InputSource::Touchscreen);
        // Controller type is remembered across modality switches
        assert_eq!(tracker.last_controller(), ControllerType::PlayStation);
    }

    #[test]
    fn test_new_pad_brand_is_a_change() {
        let mut tracker = InputTracker::new();
        tracker.observe(&InputEvent::Controller { name: "Xbox Wireless Controller".to_string() });
        assert!(tracker.observe(&InputEvent::Controller {
            name: "Nintendo Switch Pro Controller".to_string(),
        }));
        assert_eq!(tracker.last_controller(), ControllerType::Nintendo);
    }
}

//! Controller type detection and friendly-name lookup
//!
//! Detects controller type from a device name (as reported by the gamepad
//! backend) and resolves the short names used in layout rule text,
//! e.g. `hidden-controller-playstation`.

/// Controller manufacturer/type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ControllerType {
    /// PlayStation (DualShock, DualSense)
    PlayStation,
    /// Xbox (Xbox 360, Xbox One, Xbox Series)
    #[default]
    Xbox,
    /// Nintendo (Switch Pro, Joy-Con)
    Nintendo,
    /// Recognised as a gamepad, but not a known brand
    Generic,
    /// Sentinel for names that don't map to any type.
    /// Never produced by device detection.
    Unknown,
}

impl ControllerType {
    /// Detect controller type from its name string
    pub fn from_name(name: &str) -> Self {
        let name_lower = name.to_lowercase();

        // PlayStation detection
        if name_lower.contains("playstation")
            || name_lower.contains("dualshock")
            || name_lower.contains("dualsense")
            || name_lower.contains("sony")
            || name_lower.contains("ps3")
            || name_lower.contains("ps4")
            || name_lower.contains("ps5")
        {
            return ControllerType::PlayStation;
        }

        // Nintendo detection
        if name_lower.contains("nintendo")
            || name_lower.contains("switch")
            || name_lower.contains("joy-con")
            || name_lower.contains("joycon")
            || name_lower.contains("pro controller")
        {
            return ControllerType::Nintendo;
        }

        // Xbox detection
        if name_lower.contains("xbox")
            || name_lower.contains("microsoft")
            || name_lower.contains("xinput")
        {
            return ControllerType::Xbox;
        }

        ControllerType::Generic
    }

    /// Resolve the short name used in rule text (case-insensitive).
    /// Unrecognised text maps to [`ControllerType::Unknown`] rather than failing.
    pub fn from_friendly_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "playstation" => ControllerType::PlayStation,
            "xbox" => ControllerType::Xbox,
            "nintendo" => ControllerType::Nintendo,
            "generic" => ControllerType::Generic,
            _ => ControllerType::Unknown,
        }
    }

    /// Short name as written in rule text
    pub fn friendly_name(&self) -> &'static str {
        match self {
            ControllerType::PlayStation => "playstation",
            ControllerType::Xbox => "xbox",
            ControllerType::Nintendo => "nintendo",
            ControllerType::Generic => "generic",
            ControllerType::Unknown => "unknown",
        }
    }

    /// Get display name for this controller type
    pub fn display_name(&self) -> &'static str {
        match self {
            ControllerType::PlayStation => "PlayStation",
            ControllerType::Xbox => "Xbox",
            ControllerType::Nintendo => "Nintendo",
            ControllerType::Generic => "Generic",
            ControllerType::Unknown => "Unknown",
        }
    }
}

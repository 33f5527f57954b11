//! Screen size breakpoints
//!
//! Rulesets are written per breakpoint (`xs-12c sm-6c ...`). The window
//! width picks the active breakpoint through [`Breakpoints`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Responsive size category, ordered smallest to largest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum ScreenSize {
    #[default]
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ScreenSize {
    /// Number of breakpoints
    pub const COUNT: usize = 5;

    /// All breakpoints in ascending order.
    pub const ALL: [ScreenSize; Self::COUNT] = [
        ScreenSize::Xs,
        ScreenSize::Sm,
        ScreenSize::Md,
        ScreenSize::Lg,
        ScreenSize::Xl,
    ];

    pub fn smallest_to_largest() -> impl Iterator<Item = ScreenSize> {
        Self::ALL.into_iter()
    }

    /// Position in [`ScreenSize::ALL`], used to index per-breakpoint tables
    pub const fn index(self) -> usize {
        match self {
            ScreenSize::Xs => 0,
            ScreenSize::Sm => 1,
            ScreenSize::Md => 2,
            ScreenSize::Lg => 3,
            ScreenSize::Xl => 4,
        }
    }

    /// Parse a rule-text label (case-insensitive)
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "xs" => Some(ScreenSize::Xs),
            "sm" => Some(ScreenSize::Sm),
            "md" => Some(ScreenSize::Md),
            "lg" => Some(ScreenSize::Lg),
            "xl" => Some(ScreenSize::Xl),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ScreenSize::Xs => "xs",
            ScreenSize::Sm => "sm",
            ScreenSize::Md => "md",
            ScreenSize::Lg => "lg",
            ScreenSize::Xl => "xl",
        }
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Minimum window width (pixels) for each breakpoint above `Xs`
///
/// Deserialized values go through [`Breakpoints::new`]; NaN is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBreakpoints")]
pub struct Breakpoints {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl Breakpoints {
    pub const DEFAULT: Self = Self {
        sm: 768.0,
        md: 992.0,
        lg: 1200.0,
        xl: 1600.0,
    };

    /// Thresholds are clamped so each is at least the previous one
    pub fn new(sm: f32, md: f32, lg: f32, xl: f32) -> Self {
        let sm = sm.max(0.0);
        let md = md.max(sm);
        let lg = lg.max(md);
        let xl = xl.max(lg);
        Self { sm, md, lg, xl }
    }

    /// Largest breakpoint whose minimum width fits in `width`
    pub fn classify(&self, width: f32) -> ScreenSize {
        if width >= self.xl {
            ScreenSize::Xl
        } else if width >= self.lg {
            ScreenSize::Lg
        } else if width >= self.md {
            ScreenSize::Md
        } else if width >= self.sm {
            ScreenSize::Sm
        } else {
            ScreenSize::Xs
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Thresholds as written in a config file, before sanitizing
#[derive(Deserialize)]
struct RawBreakpoints {
    sm: f32,
    md: f32,
    lg: f32,
    xl: f32,
}

impl TryFrom<RawBreakpoints> for Breakpoints {
    type Error = String;

    fn try_from(raw: RawBreakpoints) -> Result<Self, Self::Error> {
        let thresholds = [("sm", raw.sm), ("md", raw.md), ("lg", raw.lg), ("xl", raw.xl)];
        if let Some((label, _)) = thresholds.iter().find(|(_, v)| v.is_nan()) {
            return Err(format!("breakpoint {} is not a number", label));
        }
        Ok(Self::new(raw.sm, raw.md, raw.lg, raw.xl))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let sizes: Vec<_> = ScreenSize::smallest_to_largest().collect();
        assert_eq!(sizes, ScreenSize::ALL.to_vec());
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
        for (i, size) in sizes.iter().enumerate() {
            assert_eq!(size.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ScreenSize::from_label("MD"), Some(ScreenSize::Md));
        assert_eq!(ScreenSize::from_label("xxl"), None);
        for size in ScreenSize::ALL {
            assert_eq!(ScreenSize::from_label(size.label()), Some(size));
        }
    }

    #[test]
    fn test_classify_width() {
        let bp = Breakpoints::DEFAULT;
        assert_eq!(bp.classify(320.0), ScreenSize::Xs);
        assert_eq!(bp.classify(768.0), ScreenSize::Sm);
        assert_eq!(bp.classify(1000.0), ScreenSize::Md);
        assert_eq!(bp.classify(1280.0), ScreenSize::Lg);
        assert_eq!(bp.classify(3840.0), ScreenSize::Xl);
    }

    #[test]
    fn test_thresholds_sanitized() {
        let bp = Breakpoints::new(500.0, 400.0, 900.0, 100.0);
        assert_eq!(bp.md, 500.0);
        assert_eq!(bp.xl, 900.0);
        assert_eq!(bp.classify(450.0), ScreenSize::Xs);
        assert_eq!(bp.classify(950.0), ScreenSize::Xl);
    }

    #[test]
    fn test_deserialize_sanitizes() {
        let bp: Breakpoints =
            ron::from_str("(sm: 1000.0, md: 500.0, lg: 1200.0, xl: 1600.0)").unwrap();
        assert_eq!(bp, Breakpoints::new(1000.0, 500.0, 1200.0, 1600.0));
        assert_eq!(bp.classify(700.0), ScreenSize::Xs);

        assert!(ron::from_str::<Breakpoints>("(sm: NaN, md: 1.0, lg: 2.0, xl: 3.0)").is_err());
    }
}

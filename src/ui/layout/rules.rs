//! Size and offset rule values
//!
//! One rule per breakpoint, evaluated against a [`LayoutState`].

use super::LayoutState;
use std::fmt;

/// How wide (or tall) an element wants to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRule {
    /// Fixed size in pixels (`500px`)
    Absolute(u32),
    /// Span of grid columns (`6c`)
    Responsive(u32),
    /// Fit the content (`auto`, vertical only)
    Auto,
}

impl SizeRule {
    /// Seed for breakpoints without an explicit rule: full row
    pub const FULL_WIDTH: SizeRule = SizeRule::Responsive(12);

    pub fn size(&self, state: &LayoutState) -> f32 {
        match *self {
            SizeRule::Absolute(px) => px as f32,
            SizeRule::Responsive(columns) => state.column_width() * columns as f32,
            SizeRule::Auto => state.content_size,
        }
    }
}

impl fmt::Display for SizeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeRule::Absolute(px) => write!(f, "{}px", px),
            SizeRule::Responsive(columns) => write!(f, "{}c", columns),
            SizeRule::Auto => f.write_str("auto"),
        }
    }
}

/// Leading space before an element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetRule {
    Absolute(u32),
    Responsive(u32),
}

impl OffsetRule {
    pub const ZERO: OffsetRule = OffsetRule::Absolute(0);

    pub fn offset(&self, state: &LayoutState) -> f32 {
        match *self {
            OffsetRule::Absolute(px) => px as f32,
            OffsetRule::Responsive(columns) => state.column_width() * columns as f32,
        }
    }
}

impl fmt::Display for OffsetRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OffsetRule::Absolute(px) => write!(f, "{}px", px),
            OffsetRule::Responsive(columns) => write!(f, "{}c", columns),
        }
    }
}

//! Responsive layout
//!
//! Elements describe their size per screen size with short rule strings
//! (`xs-12c md-6c md-offset-3c hidden-touchscreen`). A ruleset is parsed
//! once and then queried every layout pass with the current [`LayoutState`].

mod flow;
mod rules;
mod ruleset;
mod screen_size;
mod state;

pub use flow::{flow_row, LayoutNode};
pub use rules::{OffsetRule, SizeRule};
pub use ruleset::{
    LayoutRuleset, ParseError, ParseErrorKind, ResolvedLayout, DEFAULT_HORIZONTAL_RULESET,
    DEFAULT_VERTICAL_RULESET,
};
pub use screen_size::{Breakpoints, ScreenSize};
pub use state::{LayoutState, DEFAULT_TOTAL_COLUMNS};

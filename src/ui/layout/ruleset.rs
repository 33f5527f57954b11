//! Layout Ruleset
//!
//! Parses rule text such as `xs-12c sm-8c sm-offset-2c hidden-controller`
//! into a per-breakpoint table of size and offset rules, plus the input
//! sources / controller types that hide the element.
//!
//! Grammar (space-separated tokens, hyphen-separated fields):
//! - `<bp>-<size>`             size is `<n>px`, `<n>c` (horizontal) or `auto` (vertical)
//! - `<bp>-offset-<value>`     value is `<n>px` or `<n>c` (horizontal)
//! - `hidden-<source>`         source is `controller`, `keyboardmouse` or `touchscreen`
//! - `hidden-controller-<type>` type is `playstation`, `xbox`, `nintendo` or `generic`
//!
//! Breakpoints without a rule inherit from the next smaller one (mobile first).
//! The smallest breakpoint defaults to 12 columns and no offset.

use std::collections::HashSet;
use std::fmt;

use super::{LayoutState, OffsetRule, ScreenSize, SizeRule};
use crate::input::{ControllerType, InputSource};

pub const DEFAULT_HORIZONTAL_RULESET: &str = "xs-12c";
pub const DEFAULT_VERTICAL_RULESET: &str = "xs-auto";

const AUTO: &str = "auto";
const HIDDEN: &str = "hidden";
const OFFSET: &str = "offset";
const PIXEL_SUFFIX: &str = "px";
const COLUMN_SUFFIX: &str = "c";

/// Why a rule token was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// First field is not `xs`, `sm`, `md`, `lg`, `xl` or `hidden`
    UnknownBreakpoint,
    /// Size doesn't end with `px`, `c` or isn't `auto`
    InvalidSize,
    /// Offset doesn't end with `px` or `c`
    InvalidOffset,
    /// Number part of a `px`/`c` value isn't an unsigned integer
    InvalidNumber,
    AutoInHorizontal,
    ColumnsInVertical,
    HiddenInVertical,
    UnknownInputSource,
    /// `hidden-<source>-<x>` where source isn't `controller`
    InvalidHiddenRule,
    /// Three fields, but the middle one isn't `offset`
    UnknownRuleKind,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnknownBreakpoint => write!(f, "unknown screen size"),
            ParseErrorKind::InvalidSize => {
                write!(f, "invalid size - must end with c (columns) or px (pixels), or be auto")
            }
            ParseErrorKind::InvalidOffset => {
                write!(f, "invalid offset - must end with c (columns) or px (pixels)")
            }
            ParseErrorKind::InvalidNumber => write!(f, "value is not a whole number"),
            ParseErrorKind::AutoInHorizontal => write!(
                f,
                "cannot use auto size for horizontal rules - must be columns (c) or pixels (px)"
            ),
            ParseErrorKind::ColumnsInVertical => {
                write!(f, "cannot use columns for vertical rules - must be pixels (px) or auto")
            }
            ParseErrorKind::HiddenInVertical => {
                write!(f, "hidden-* rules can only be applied to horizontal rulesets")
            }
            ParseErrorKind::UnknownInputSource => write!(
                f,
                "unknown input source - expected controller, keyboardmouse or touchscreen"
            ),
            ParseErrorKind::InvalidHiddenRule => {
                write!(f, "only hidden-controller-* accepts a third field")
            }
            ParseErrorKind::UnknownRuleKind => write!(f, "expected <size>-offset-<value>"),
        }
    }
}

/// Rule text that couldn't be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub token: String,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn new(token: &str, kind: ParseErrorKind) -> Self {
        Self {
            token: token.to_string(),
            kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid layout rule '{}': {}", self.token, self.kind)
    }
}

impl std::error::Error for ParseError {}

/// Everything a ruleset resolved for one layout pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLayout {
    pub size: f32,
    pub offset: f32,
    pub hidden: bool,
    pub size_rule: SizeRule,
    pub offset_rule: OffsetRule,
}

/// Finalized size/offset/visibility table for one axis of an element
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRuleset {
    horizontal: bool,
    rules: String,
    size_rules: [SizeRule; ScreenSize::COUNT],
    offset_rules: [OffsetRule; ScreenSize::COUNT],
    hidden_by_input: HashSet<InputSource>,
    hidden_by_controller_type: HashSet<ControllerType>,
}

/// Explicit rules collected while tokenizing, before inheritance
#[derive(Default)]
struct RuleBuilder {
    size_rules: [Option<SizeRule>; ScreenSize::COUNT],
    offset_rules: [Option<OffsetRule>; ScreenSize::COUNT],
    hidden_by_input: HashSet<InputSource>,
    hidden_by_controller_type: HashSet<ControllerType>,
}

impl LayoutRuleset {
    /// Parse a ruleset. `horizontal` selects which units are allowed.
    pub fn new(horizontal: bool, rules: &str) -> Result<Self, ParseError> {
        let mut builder = RuleBuilder::default();

        for token in rules.split_whitespace() {
            let mut fields: Vec<&str> = token.split('-').collect();
            // Trailing hyphens don't add fields: `xs-` is one field, `xs-12c-` two
            while fields.last() == Some(&"") {
                fields.pop();
            }
            match fields.as_slice() {
                [] | [_] => {}
                [first, value] => builder.store_size_rule(horizontal, token, first, value)?,
                [first, kind, value] => {
                    builder.store_offset_rule(horizontal, token, first, kind, value)?
                }
                _ => log::warn!("ignoring layout rule '{}': too many fields", token),
            }
        }

        Ok(builder.finalise(horizontal, rules))
    }

    /// The default horizontal ruleset (`xs-12c`)
    pub fn default_horizontal() -> Self {
        Self::seeded(true, DEFAULT_HORIZONTAL_RULESET, SizeRule::FULL_WIDTH)
    }

    /// The default vertical ruleset (`xs-auto`)
    pub fn default_vertical() -> Self {
        Self::seeded(false, DEFAULT_VERTICAL_RULESET, SizeRule::Auto)
    }

    fn seeded(horizontal: bool, rules: &str, size: SizeRule) -> Self {
        Self {
            horizontal,
            rules: rules.to_string(),
            size_rules: [size; ScreenSize::COUNT],
            offset_rules: [OffsetRule::ZERO; ScreenSize::COUNT],
            hidden_by_input: HashSet::new(),
            hidden_by_controller_type: HashSet::new(),
        }
    }

    pub fn resolved_size(&self, state: &LayoutState) -> f32 {
        self.size_rule(state.screen_size).size(state)
    }

    pub fn resolved_offset(&self, state: &LayoutState) -> f32 {
        self.offset_rule(state.screen_size).offset(state)
    }

    /// Whether the element is hidden for the active input source.
    ///
    /// On a controller, a non-empty controller-type set takes over completely:
    /// only the listed controller types hide the element, even if
    /// `hidden-controller` was also given.
    pub fn is_hidden_for_input(&self, state: &LayoutState) -> bool {
        match state.last_input_source {
            InputSource::Controller if !self.hidden_by_controller_type.is_empty() => self
                .hidden_by_controller_type
                .contains(&state.last_controller_type),
            source => self.hidden_by_input.contains(&source),
        }
    }

    /// Size, offset and visibility in one go, along with the rules used
    pub fn resolve(&self, state: &LayoutState) -> ResolvedLayout {
        let size_rule = self.size_rule(state.screen_size);
        let offset_rule = self.offset_rule(state.screen_size);
        ResolvedLayout {
            size: size_rule.size(state),
            offset: offset_rule.offset(state),
            hidden: self.is_hidden_for_input(state),
            size_rule,
            offset_rule,
        }
    }

    pub fn size_rule(&self, screen_size: ScreenSize) -> SizeRule {
        self.size_rules[screen_size.index()]
    }

    pub fn offset_rule(&self, screen_size: ScreenSize) -> OffsetRule {
        self.offset_rules[screen_size.index()]
    }

    pub fn is_horizontal(&self) -> bool {
        self.horizontal
    }

    /// The rule text this ruleset was parsed from
    pub fn rules(&self) -> &str {
        &self.rules
    }

    pub fn hidden_by_input(&self) -> &HashSet<InputSource> {
        &self.hidden_by_input
    }

    pub fn hidden_by_controller_type(&self) -> &HashSet<ControllerType> {
        &self.hidden_by_controller_type
    }
}

impl fmt::Display for LayoutRuleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.rules)
    }
}

impl RuleBuilder {
    // e.g. xs-12c, sm-500px, xs-auto, hidden-controller, hidden-touchscreen
    fn store_size_rule(
        &mut self,
        horizontal: bool,
        token: &str,
        first: &str,
        value: &str,
    ) -> Result<(), ParseError> {
        if first.eq_ignore_ascii_case(HIDDEN) {
            if !horizontal {
                return Err(ParseError::new(token, ParseErrorKind::HiddenInVertical));
            }
            let source = InputSource::from_friendly_name(value)
                .ok_or_else(|| ParseError::new(token, ParseErrorKind::UnknownInputSource))?;
            self.hidden_by_input.insert(source);
            return Ok(());
        }

        let screen_size = parse_screen_size(token, first)?;
        let rule = if value.eq_ignore_ascii_case(AUTO) {
            if horizontal {
                return Err(ParseError::new(token, ParseErrorKind::AutoInHorizontal));
            }
            SizeRule::Auto
        } else if let Some(px) = value.strip_suffix(PIXEL_SUFFIX) {
            SizeRule::Absolute(parse_number(token, px)?)
        } else if let Some(columns) = value.strip_suffix(COLUMN_SUFFIX) {
            if !horizontal {
                return Err(ParseError::new(token, ParseErrorKind::ColumnsInVertical));
            }
            SizeRule::Responsive(parse_number(token, columns)?)
        } else {
            return Err(ParseError::new(token, ParseErrorKind::InvalidSize));
        };

        self.size_rules[screen_size.index()] = Some(rule);
        Ok(())
    }

    // e.g. xs-offset-4c, sm-offset-20px, hidden-controller-playstation
    fn store_offset_rule(
        &mut self,
        horizontal: bool,
        token: &str,
        first: &str,
        kind: &str,
        value: &str,
    ) -> Result<(), ParseError> {
        if first.eq_ignore_ascii_case(HIDDEN) {
            if !horizontal {
                return Err(ParseError::new(token, ParseErrorKind::HiddenInVertical));
            }
            return match InputSource::from_friendly_name(kind) {
                Some(InputSource::Controller) => {
                    // Unrecognised controller types are dropped, not rejected
                    match ControllerType::from_friendly_name(value) {
                        ControllerType::Unknown => {
                            log::debug!("ignoring unknown controller type in '{}'", token);
                        }
                        controller => {
                            self.hidden_by_controller_type.insert(controller);
                        }
                    }
                    Ok(())
                }
                Some(_) => Err(ParseError::new(token, ParseErrorKind::InvalidHiddenRule)),
                None => Err(ParseError::new(token, ParseErrorKind::UnknownInputSource)),
            };
        }

        let screen_size = parse_screen_size(token, first)?;
        if !kind.eq_ignore_ascii_case(OFFSET) {
            return Err(ParseError::new(token, ParseErrorKind::UnknownRuleKind));
        }

        let rule = if let Some(px) = value.strip_suffix(PIXEL_SUFFIX) {
            OffsetRule::Absolute(parse_number(token, px)?)
        } else if let Some(columns) = value.strip_suffix(COLUMN_SUFFIX) {
            if !horizontal {
                return Err(ParseError::new(token, ParseErrorKind::ColumnsInVertical));
            }
            OffsetRule::Responsive(parse_number(token, columns)?)
        } else {
            return Err(ParseError::new(token, ParseErrorKind::InvalidOffset));
        };

        self.offset_rules[screen_size.index()] = Some(rule);
        Ok(())
    }

    /// Fill every breakpoint, smallest first, carrying the last explicit rule up
    fn finalise(self, horizontal: bool, rules: &str) -> LayoutRuleset {
        let mut size_rules = [SizeRule::FULL_WIDTH; ScreenSize::COUNT];
        let mut offset_rules = [OffsetRule::ZERO; ScreenSize::COUNT];
        let mut last_size = SizeRule::FULL_WIDTH;
        let mut last_offset = OffsetRule::ZERO;

        for screen_size in ScreenSize::smallest_to_largest() {
            let i = screen_size.index();
            if let Some(rule) = self.size_rules[i] {
                last_size = rule;
            }
            if let Some(rule) = self.offset_rules[i] {
                last_offset = rule;
            }
            size_rules[i] = last_size;
            offset_rules[i] = last_offset;
        }

        LayoutRuleset {
            horizontal,
            rules: rules.to_string(),
            size_rules,
            offset_rules,
            hidden_by_input: self.hidden_by_input,
            hidden_by_controller_type: self.hidden_by_controller_type,
        }
    }
}

fn parse_screen_size(token: &str, label: &str) -> Result<ScreenSize, ParseError> {
    ScreenSize::from_label(label)
        .ok_or_else(|| ParseError::new(token, ParseErrorKind::UnknownBreakpoint))
}

fn parse_number(token: &str, digits: &str) -> Result<u32, ParseError> {
    digits
        .parse()
        .map_err(|_| ParseError::new(token, ParseErrorKind::InvalidNumber))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(screen_size: ScreenSize) -> LayoutState {
        LayoutState::new(screen_size, 1200.0)
    }

    fn controller(controller: ControllerType) -> LayoutState {
        state(ScreenSize::Md).with_input(InputSource::Controller, controller)
    }

    fn input(source: InputSource) -> LayoutState {
        state(ScreenSize::Xs).with_input(source, ControllerType::Xbox)
    }

    fn kind(horizontal: bool, rules: &str) -> ParseErrorKind {
        LayoutRuleset::new(horizontal, rules).unwrap_err().kind
    }

    #[test]
    fn test_every_breakpoint_resolves() {
        for rules in [
            "",
            "xs-12c",
            "md-4c lg-offset-2c",
            "xl-300px sm-offset-10px hidden-touchscreen",
        ] {
            let ruleset = LayoutRuleset::new(true, rules).unwrap();
            for size in ScreenSize::ALL {
                let s = state(size);
                assert!(ruleset.resolved_size(&s).is_finite());
                assert!(ruleset.resolved_offset(&s).is_finite());
            }
        }
    }

    #[test]
    fn test_inherits_from_smaller_breakpoint() {
        let ruleset = LayoutRuleset::new(true, "xs-12c sm-6c").unwrap();
        assert_eq!(ruleset.size_rule(ScreenSize::Md), SizeRule::Responsive(6));
        assert_eq!(
            ruleset.resolved_size(&state(ScreenSize::Md)),
            ruleset.resolved_size(&state(ScreenSize::Sm))
        );
        assert_eq!(ruleset.resolved_size(&state(ScreenSize::Xl)), 600.0);
        assert_eq!(ruleset.resolved_size(&state(ScreenSize::Xs)), 1200.0);
    }

    #[test]
    fn test_gap_before_first_rule_uses_seed() {
        let ruleset = LayoutRuleset::new(true, "md-4c md-offset-1c").unwrap();
        assert_eq!(ruleset.size_rule(ScreenSize::Xs), SizeRule::FULL_WIDTH);
        assert_eq!(ruleset.size_rule(ScreenSize::Sm), SizeRule::FULL_WIDTH);
        assert_eq!(ruleset.offset_rule(ScreenSize::Sm), OffsetRule::ZERO);
        assert_eq!(ruleset.size_rule(ScreenSize::Lg), SizeRule::Responsive(4));
        assert_eq!(ruleset.offset_rule(ScreenSize::Xl), OffsetRule::Responsive(1));
    }

    #[test]
    fn test_no_size_tokens_defaults_full_width() {
        let ruleset = LayoutRuleset::new(true, "hidden-touchscreen").unwrap();
        for size in ScreenSize::ALL {
            assert_eq!(ruleset.size_rule(size), SizeRule::Responsive(12));
            assert_eq!(ruleset.resolved_size(&state(size)), 1200.0);
            assert_eq!(ruleset.resolved_offset(&state(size)), 0.0);
        }
    }

    #[test]
    fn test_absolute_size_is_literal() {
        let ruleset = LayoutRuleset::new(true, "xs-320px").unwrap();
        for size in ScreenSize::ALL {
            for width in [100.0, 800.0, 2560.0] {
                let s = LayoutState::new(size, width);
                assert_eq!(ruleset.resolved_size(&s), 320.0);
            }
        }
    }

    #[test]
    fn test_offsets() {
        let ruleset =
            LayoutRuleset::new(true, "xs-12c sm-8c sm-offset-2c lg-offset-15px").unwrap();
        assert_eq!(ruleset.resolved_offset(&state(ScreenSize::Xs)), 0.0);
        assert_eq!(ruleset.resolved_offset(&state(ScreenSize::Md)), 200.0);
        assert_eq!(ruleset.resolved_offset(&state(ScreenSize::Xl)), 15.0);
    }

    #[test]
    fn test_vertical_ruleset() {
        let ruleset = LayoutRuleset::new(false, "xs-auto md-48px md-offset-4px").unwrap();
        assert!(!ruleset.is_horizontal());
        let s = state(ScreenSize::Sm).with_content_size(30.0);
        assert_eq!(ruleset.resolved_size(&s), 30.0);
        assert_eq!(ruleset.resolved_size(&state(ScreenSize::Lg)), 48.0);
        assert_eq!(ruleset.resolved_offset(&state(ScreenSize::Lg)), 4.0);
    }

    #[test]
    fn test_later_rule_for_same_breakpoint_wins() {
        let ruleset = LayoutRuleset::new(true, "sm-4c sm-6c").unwrap();
        assert_eq!(ruleset.size_rule(ScreenSize::Sm), SizeRule::Responsive(6));
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(kind(true, "xs-auto"), ParseErrorKind::AutoInHorizontal);
        assert_eq!(kind(false, "xs-12c"), ParseErrorKind::ColumnsInVertical);
        assert_eq!(kind(false, "xs-offset-1c"), ParseErrorKind::ColumnsInVertical);
        assert_eq!(kind(false, "hidden-controller"), ParseErrorKind::HiddenInVertical);
        assert_eq!(kind(false, "hidden-controller-xbox"), ParseErrorKind::HiddenInVertical);
        assert_eq!(kind(true, "hidden-bogus"), ParseErrorKind::UnknownInputSource);
        assert_eq!(kind(true, "hidden-bogus-xbox"), ParseErrorKind::UnknownInputSource);
        assert_eq!(kind(true, "hidden-touchscreen-xbox"), ParseErrorKind::InvalidHiddenRule);
        assert_eq!(kind(true, "xs-12"), ParseErrorKind::InvalidSize);
        assert_eq!(kind(true, "xs-offset-12"), ParseErrorKind::InvalidOffset);
        assert_eq!(kind(true, "xs-twelvec"), ParseErrorKind::InvalidNumber);
        assert_eq!(kind(true, "xxl-12c"), ParseErrorKind::UnknownBreakpoint);
        assert_eq!(kind(true, "xs-margin-2c"), ParseErrorKind::UnknownRuleKind);
    }

    #[test]
    fn test_error_reports_token() {
        let err = LayoutRuleset::new(true, "xs-12c sm-8q").unwrap_err();
        assert_eq!(err.token, "sm-8q");
        assert!(err.to_string().contains("sm-8q"));
    }

    #[test]
    fn test_unknown_controller_type_is_ignored() {
        // Unlike an unknown input source, which is an error
        let ruleset = LayoutRuleset::new(true, "hidden-controller-bogus").unwrap();
        assert!(ruleset.hidden_by_controller_type().is_empty());
        assert!(ruleset.hidden_by_input().is_empty());
        assert!(!ruleset.is_hidden_for_input(&controller(ControllerType::Xbox)));
    }

    #[test]
    fn test_single_field_tokens_ignored() {
        let ruleset = LayoutRuleset::new(true, "junk  xs-6c   ").unwrap();
        assert_eq!(ruleset.size_rule(ScreenSize::Xs), SizeRule::Responsive(6));
    }

    #[test]
    fn test_trailing_hyphens_dropped() {
        let ruleset = LayoutRuleset::new(true, "xs- hidden- -").unwrap();
        assert!(ruleset.hidden_by_input().is_empty());
        for size in ScreenSize::ALL {
            assert_eq!(ruleset.size_rule(size), SizeRule::FULL_WIDTH);
            assert_eq!(ruleset.offset_rule(size), OffsetRule::ZERO);
        }

        let ruleset = LayoutRuleset::new(true, "xs-12c- sm-6c--").unwrap();
        assert_eq!(ruleset.size_rule(ScreenSize::Xs), SizeRule::Responsive(12));
        assert_eq!(ruleset.size_rule(ScreenSize::Sm), SizeRule::Responsive(6));

        let ruleset = LayoutRuleset::new(true, "md-offset-2c- hidden-controller-xbox-").unwrap();
        assert_eq!(ruleset.offset_rule(ScreenSize::Md), OffsetRule::Responsive(2));
        assert!(ruleset.hidden_by_controller_type().contains(&ControllerType::Xbox));
    }

    #[test]
    fn test_hidden_by_input_source() {
        let ruleset =
            LayoutRuleset::new(true, "xs-12c HIDDEN-Touchscreen hidden-keyboardmouse").unwrap();
        let touch = input(InputSource::Touchscreen);
        let mouse = input(InputSource::KeyboardMouse);
        assert!(ruleset.is_hidden_for_input(&touch));
        assert!(ruleset.is_hidden_for_input(&mouse));
        assert!(!ruleset.is_hidden_for_input(&controller(ControllerType::Xbox)));
    }

    #[test]
    fn test_controller_type_takes_precedence() {
        let ruleset =
            LayoutRuleset::new(true, "hidden-controller hidden-controller-playstation").unwrap();
        assert!(ruleset.is_hidden_for_input(&controller(ControllerType::PlayStation)));
        // Generic controller hiding is overridden by the type list
        assert!(!ruleset.is_hidden_for_input(&controller(ControllerType::Xbox)));

        let generic_only = LayoutRuleset::new(true, "hidden-controller").unwrap();
        assert!(generic_only.is_hidden_for_input(&controller(ControllerType::Xbox)));
    }

    #[test]
    fn test_controller_types_dont_affect_other_sources() {
        let ruleset =
            LayoutRuleset::new(true, "hidden-controller-xbox hidden-touchscreen").unwrap();
        assert!(!ruleset.is_hidden_for_input(&input(InputSource::KeyboardMouse)));
        assert!(ruleset.is_hidden_for_input(&input(InputSource::Touchscreen)));
    }

    #[test]
    fn test_resolve_reports_rules_used() {
        let ruleset =
            LayoutRuleset::new(true, "xs-12c sm-8c sm-offset-2c hidden-controller").unwrap();
        let resolved = ruleset.resolve(&state(ScreenSize::Lg));
        assert_eq!(resolved.size_rule, SizeRule::Responsive(8));
        assert_eq!(resolved.offset_rule, OffsetRule::Responsive(2));
        assert_eq!(resolved.size, 800.0);
        assert_eq!(resolved.offset, 200.0);
        assert!(!resolved.hidden);
        assert!(ruleset.resolve(&controller(ControllerType::Nintendo)).hidden);
    }

    #[test]
    fn test_defaults_match_parsed_text() {
        assert_eq!(
            LayoutRuleset::default_horizontal(),
            LayoutRuleset::new(true, DEFAULT_HORIZONTAL_RULESET).unwrap()
        );
        assert_eq!(
            LayoutRuleset::default_vertical(),
            LayoutRuleset::new(false, DEFAULT_VERTICAL_RULESET).unwrap()
        );
        assert_eq!(LayoutRuleset::default_horizontal().to_string(), "xs-12c");
    }
}

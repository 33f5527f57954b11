//! Runtime configuration
//!
//! Loaded from and saved to RON files. Element rulesets are kept as rule
//! text in the file and parsed on load, so a typo is reported with the
//! element it belongs to instead of surfacing at the first layout pass.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::game::{DispersedScheduler, Entity, SchedulerError};
use crate::ui::layout::{
    Breakpoints, LayoutNode, LayoutRuleset, ParseError, DEFAULT_HORIZONTAL_RULESET,
    DEFAULT_TOTAL_COLUMNS, DEFAULT_VERTICAL_RULESET,
};

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    /// An element's rule text didn't parse
    RulesetError { element: String, error: ParseError },
    SchedulerError(SchedulerError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl From<SchedulerError> for ConfigError {
    fn from(e: SchedulerError) -> Self {
        ConfigError::SchedulerError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            ConfigError::RulesetError { element, error } => {
                write!(f, "Element '{}': {}", element, error)
            }
            ConfigError::SchedulerError(e) => write!(f, "Scheduler error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Seconds between full passes over the live set
    pub interval: f32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self { interval: 2.0 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub total_columns: u32,
    pub breakpoints: Breakpoints,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            total_columns: DEFAULT_TOTAL_COLUMNS,
            breakpoints: Breakpoints::DEFAULT,
        }
    }
}

fn default_horizontal() -> String {
    DEFAULT_HORIZONTAL_RULESET.to_string()
}

fn default_vertical() -> String {
    DEFAULT_VERTICAL_RULESET.to_string()
}

/// One UI element and its rule text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementConfig {
    pub id: String,
    #[serde(default = "default_horizontal")]
    pub horizontal: String,
    #[serde(default = "default_vertical")]
    pub vertical: String,
    /// Content height used when the vertical size is `auto`
    #[serde(default)]
    pub content_height: f32,
}

impl ElementConfig {
    pub fn new(id: &str, horizontal: &str, vertical: &str) -> Self {
        Self {
            id: id.to_string(),
            horizontal: horizontal.to_string(),
            vertical: vertical.to_string(),
            content_height: 0.0,
        }
    }

    pub fn build_node(&self) -> Result<LayoutNode, ConfigError> {
        let ruleset_error = |error| ConfigError::RulesetError {
            element: self.id.clone(),
            error,
        };
        let horizontal = LayoutRuleset::new(true, &self.horizontal).map_err(ruleset_error)?;
        let vertical = LayoutRuleset::new(false, &self.vertical).map_err(ruleset_error)?;
        Ok(LayoutNode::new(self.id.clone(), horizontal, vertical)
            .with_content_height(self.content_height))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub scheduler: SchedulerConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub elements: Vec<ElementConfig>,
    /// Entities spawned by the demo
    #[serde(default)]
    pub entities: u32,
}

impl RuntimeConfig {
    /// Parse every element's rulesets, in file order
    pub fn build_nodes(&self) -> Result<Vec<LayoutNode>, ConfigError> {
        self.elements.iter().map(ElementConfig::build_node).collect()
    }

    pub fn build_scheduler(&self) -> Result<DispersedScheduler<Entity>, ConfigError> {
        Ok(DispersedScheduler::new(self.scheduler.interval)?)
    }

    /// Check everything that would fail later at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.build_nodes()?;
        self.build_scheduler()?;
        Ok(())
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            scheduler: SchedulerConfig::default(),
            layout: LayoutConfig::default(),
            elements: vec![
                ElementConfig::new("header", "xs-12c", "xs-48px"),
                ElementConfig::new("sidebar", "xs-12c md-3c", "xs-120px md-400px"),
                ElementConfig::new("content", "xs-12c md-9c", "xs-240px md-400px"),
                ElementConfig::new(
                    "mouse-hint",
                    "xs-6c lg-4c lg-offset-2c hidden-controller hidden-touchscreen",
                    "xs-32px",
                ),
                ElementConfig::new(
                    "pad-prompt",
                    "xs-6c lg-4c hidden-keyboardmouse hidden-touchscreen",
                    "xs-32px",
                ),
                ElementConfig::new(
                    "touch-controls",
                    "xs-12c hidden-controller hidden-keyboardmouse",
                    "xs-96px",
                ),
            ],
            entities: 200,
        }
    }
}

/// Save a config to a file in RON format
pub fn save_config(config: &RuntimeConfig, path: &Path) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Load and validate a config from a RON file
pub fn load_config(path: &Path) -> Result<RuntimeConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_config_from_str(&contents)
}

/// Load and validate a config from a RON string
pub fn load_config_from_str(contents: &str) -> Result<RuntimeConfig, ConfigError> {
    let config: RuntimeConfig = ron::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

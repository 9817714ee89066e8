//! Segmentation mode and analyzer configuration

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Granularity policy forwarded to the segmentation engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SegmentationMode {
    /// Single best path; favors longer words
    Index,
    /// Coverage-maximizing; emits overlapping sub-words alongside compounds
    #[default]
    Search,
}

impl SegmentationMode {
    /// All recognized modes
    pub const ALL: [SegmentationMode; 2] = [SegmentationMode::Index, SegmentationMode::Search];

    /// Get the mode name
    pub fn name(&self) -> &'static str {
        match self {
            SegmentationMode::Index => "index",
            SegmentationMode::Search => "search",
        }
    }

    /// Short human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            SegmentationMode::Index => "single best segmentation path, longer words",
            SegmentationMode::Search => "overlapping sub-words alongside compound words",
        }
    }
}

impl fmt::Display for SegmentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SegmentationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "index" => Ok(SegmentationMode::Index),
            "search" => Ok(SegmentationMode::Search),
            _ => Err(ConfigError::UnknownMode {
                name: s.to_string(),
            }),
        }
    }
}

/// Analyzer configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    pub(crate) mode: SegmentationMode,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            mode: SegmentationMode::Index,
        }
    }
}

impl AnalyzerConfig {
    /// Create a configuration builder
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    /// Configuration with the given mode
    pub fn with_mode(mode: SegmentationMode) -> Self {
        Self { mode }
    }

    /// The configured segmentation mode
    pub fn mode(&self) -> SegmentationMode {
        self.mode
    }
}

/// Fluent builder for [`AnalyzerConfig`]
#[derive(Debug, Default)]
pub struct AnalyzerConfigBuilder {
    mode: Option<SegmentationMode>,
}

impl AnalyzerConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segmentation mode
    pub fn mode(mut self, mode: SegmentationMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Set the segmentation mode by name
    ///
    /// Unknown names fail here, never later at tokenization time.
    pub fn mode_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.mode = Some(name.parse()?);
        Ok(self)
    }

    /// Build the configuration
    pub fn build(self) -> AnalyzerConfig {
        let mut config = AnalyzerConfig::default();

        if let Some(mode) = self.mode {
            config.mode = mode;
        }

        config
    }
}

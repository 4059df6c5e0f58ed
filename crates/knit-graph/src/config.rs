//! Analyzer configuration.
//!
//! Every setting has a default matching the documented behavior, so an empty
//! YAML file (or no file at all) yields the stock analyzer.
//!
//! ```yaml
//! grouping-threshold: 3
//! detect-redundant-edges: false
//! thickness:
//!   default: 2.0
//!   cycle: 4.0
//! layout:
//!   origin: { x: 100.0, y: 100.0 }
//!   columns: 5
//!   spacing: 200.0
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Out-degree above which a node is flagged with a grouping suggestion
pub const DEFAULT_GROUPING_THRESHOLD: usize = 3;

/// Thickness of an ordinary edge
pub const DEFAULT_EDGE_THICKNESS: f64 = 2.0;

/// Thickness of an edge on a circular dependency
pub const CYCLE_EDGE_THICKNESS: f64 = 4.0;

/// Number of grid columns used for default positions
pub const DEFAULT_GRID_COLUMNS: usize = 5;

/// Distance between neighbouring grid cells
pub const DEFAULT_GRID_SPACING: f64 = 200.0;

/// Top-level analyzer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct AnalyzerConfig {
    /// A node with more outgoing edges than this gets `warning` severity
    pub grouping_threshold: usize,

    /// Also flag edges whose target is reachable through another path
    pub detect_redundant_edges: bool,

    /// Edge thickness settings
    pub thickness: ThicknessConfig,

    /// Default layout settings
    pub layout: LayoutConfig,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            grouping_threshold: DEFAULT_GROUPING_THRESHOLD,
            detect_redundant_edges: false,
            thickness: ThicknessConfig::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Configuration for freshly uploaded data, laid out away from the
    /// first-load grid.
    #[must_use]
    pub fn for_upload() -> Self {
        Self {
            layout: LayoutConfig {
                origin: LayoutOrigin::UPLOAD,
                ..LayoutConfig::default()
            },
            ..Self::default()
        }
    }

    /// Parse and validate configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("YAML error: {e}")))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that the settings describe a usable layout and thickness scheme.
    pub fn validate(&self) -> Result<()> {
        if self.layout.columns == 0 {
            return Err(Error::Config(
                "layout.columns must be at least 1".to_string(),
            ));
        }

        validate_positive("layout.spacing", self.layout.spacing)?;
        validate_positive("thickness.default", self.thickness.default)?;
        validate_positive("thickness.cycle", self.thickness.cycle)?;

        if !self.layout.origin.x.is_finite() || !self.layout.origin.y.is_finite() {
            return Err(Error::Config(
                "layout.origin must be finite".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::Config(format!(
            "{name} must be a positive number, got {value}"
        )))
    }
}

/// Edge thickness section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThicknessConfig {
    /// Thickness for edges with no caller-supplied value
    pub default: f64,

    /// Thickness for edges on a circular dependency
    pub cycle: f64,
}

impl Default for ThicknessConfig {
    fn default() -> Self {
        Self {
            default: DEFAULT_EDGE_THICKNESS,
            cycle: CYCLE_EDGE_THICKNESS,
        }
    }
}

/// Default grid layout section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Position of the first grid cell
    pub origin: LayoutOrigin,

    /// Cells per row
    pub columns: usize,

    /// Distance between cells, both horizontally and vertically
    pub spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin: LayoutOrigin::FIRST_LOAD,
            columns: DEFAULT_GRID_COLUMNS,
            spacing: DEFAULT_GRID_SPACING,
        }
    }
}

/// Offset of the default grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutOrigin {
    /// Horizontal offset
    pub x: f64,

    /// Vertical offset
    pub y: f64,
}

impl LayoutOrigin {
    /// Origin for the first graph shown
    pub const FIRST_LOAD: Self = Self { x: 100.0, y: 100.0 };

    /// Origin for freshly uploaded data
    pub const UPLOAD: Self = Self { x: 150.0, y: 150.0 };
}

impl Default for LayoutOrigin {
    fn default() -> Self {
        Self::FIRST_LOAD
    }
}

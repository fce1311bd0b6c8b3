use serde::{Deserialize, Serialize};

use crate::error::LayoutError;
use crate::palette::Palette;

/// Default padding around the content bounding box.
pub const DEFAULT_BOUNDS_MARGIN: f64 = 40.0;

/// Metrics and colors used by the layout engine.
///
/// Every field falls back to its default when missing from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Height of every node box.
    pub node_height: f64,
    /// Fixed width of the root box.
    pub root_width: f64,
    /// Lower bound on non-root box width.
    pub min_width: f64,
    /// Width added per label character.
    pub char_width: f64,
    /// Width added on top of the label.
    pub label_padding: f64,
    pub horizontal_gap: f64,
    pub vertical_gap: f64,
    /// Horizontal advance from the root to its children (before the gap).
    pub root_step: f64,
    /// Horizontal advance between deeper levels (before the gap).
    pub step: f64,
    /// Margin added around the content bounding box.
    pub bounds_margin: f64,
    pub palette: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_height: 44.0,
            root_width: 160.0,
            min_width: 120.0,
            char_width: 8.0,
            label_padding: 40.0,
            horizontal_gap: 60.0,
            vertical_gap: 20.0,
            root_step: 260.0,
            step: 220.0,
            bounds_margin: DEFAULT_BOUNDS_MARGIN,
            palette: Palette::default(),
        }
    }
}

impl LayoutConfig {
    /// Box width for a node at `depth` carrying `label`.
    ///
    /// Label length is measured in UTF-16 code units, so characters outside
    /// the Basic Multilingual Plane (most emoji) count twice.
    pub fn node_width(&self, label: &str, depth: usize) -> f64 {
        if depth == 0 {
            return self.root_width;
        }
        let chars = label.encode_utf16().count() as f64;
        self.min_width.max(chars * self.char_width + self.label_padding)
    }

    /// Horizontal distance from a node's center to its children's centers.
    pub fn level_advance(&self, depth: usize) -> f64 {
        let step = if depth == 0 { self.root_step } else { self.step };
        step + self.horizontal_gap
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let metrics = [
            ("nodeHeight", self.node_height),
            ("rootWidth", self.root_width),
            ("minWidth", self.min_width),
            ("charWidth", self.char_width),
            ("labelPadding", self.label_padding),
            ("horizontalGap", self.horizontal_gap),
            ("verticalGap", self.vertical_gap),
            ("rootStep", self.root_step),
            ("step", self.step),
            ("boundsMargin", self.bounds_margin),
        ];
        for (field, value) in metrics {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig { field, value });
            }
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

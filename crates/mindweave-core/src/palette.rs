use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

/// Default depth colors: primary, cyan, emerald, amber, violet, red.
pub const DEFAULT_COLORS: [&str; 6] = [
    "oklch(0.62 0.22 265)",
    "oklch(0.72 0.18 200)",
    "oklch(0.68 0.18 155)",
    "oklch(0.82 0.18 75)",
    "oklch(0.68 0.22 300)",
    "oklch(0.62 0.2 25)",
];

/// Ordered set of CSS colors assigned to nodes by depth.
///
/// Depth is unbounded, so colors repeat every `len()` levels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<String>,
}

impl Palette {
    pub fn new<I, S>(colors: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(LayoutError::EmptyPalette);
        }
        Ok(Self { colors })
    }

    pub fn color_for_depth(&self, depth: usize) -> &str {
        &self.colors[depth % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = LayoutError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

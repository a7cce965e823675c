//! JSON run configuration for the `grid_view` binary.
//!
//! A run names an input grid, an ordered list of transform steps, and how to
//! render the result. The library itself never sequences operations; callers
//! own the order.
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    Aligned,
    Glyphs,
    #[default]
    Both,
}

impl RenderMode {
    pub fn includes_aligned(self) -> bool {
        matches!(self, Self::Aligned | Self::Both)
    }

    pub fn includes_glyphs(self) -> bool {
        matches!(self, Self::Glyphs | Self::Both)
    }
}

#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub column_width: usize,
    pub spacing: usize,
    pub mode: RenderMode,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            column_width: 4,
            spacing: 3,
            mode: RenderMode::Both,
        }
    }
}

/// One transform step, tagged by operation name.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "snake_case", tag = "op")]
pub enum Step {
    Threshold {
        limit: i32,
    },
    FlipHorizontal,
    RotateCw {
        #[serde(default = "default_turns")]
        turns: u32,
    },
    DrawPoint {
        x: i32,
        y: i32,
        value: i32,
    },
    DrawBox {
        x: i32,
        y: i32,
        w: i32,
        h: i32,
        value: i32,
    },
    DrawEdge,
}

fn default_turns() -> u32 {
    1
}

#[derive(Clone, Debug, Deserialize)]
pub struct ViewConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub save_path: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<ViewConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

//! Public types and constants for the chart module.

use serde::{Deserialize, Serialize};

/// Chart types the image service is asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Line chart, evenly spaced x values.
    Line,
    /// Vertical bars, one group per x label and one bar per series.
    GroupedBar,
}

impl ChartKind {
    /// Value of the `cht` URL parameter.
    pub fn code(self) -> &'static str {
        match self {
            ChartKind::Line => "lc",
            ChartKind::GroupedBar => "bvg",
        }
    }
}

/// Dimensions, palette and stroke shared by both charts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    /// Hex colors without `#`, one per series.
    pub colors: Vec<String>,
    pub line_thickness: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            colors: vec![SERIES_COLOR_1.into(), SERIES_COLOR_2.into()],
            line_thickness: DEFAULT_LINE_THICKNESS,
        }
    }
}

pub const DEFAULT_WIDTH: u32 = 600;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const SERIES_COLOR_1: &str = "207000";
pub const SERIES_COLOR_2: &str = "0077A0";
pub const DEFAULT_LINE_THICKNESS: u32 = 6;

/// Y-axis gridlines are capped at roughly this many labels.
pub const MAX_Y_TICKS: u64 = 14;

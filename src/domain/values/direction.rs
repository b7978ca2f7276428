use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Classify a percentage change. A flat (zero) move counts as `Down`.
    pub fn from_change(percent_change: f64) -> Self {
        if percent_change > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Marker shown next to the move in the ticker and headlines.
    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "🔺",
            Direction::Down => "🔻",
        }
    }
}

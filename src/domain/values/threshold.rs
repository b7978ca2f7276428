use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum absolute percentage move that makes a symbol newsworthy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotableThreshold(f64);

impl NotableThreshold {
    pub const DEFAULT: f64 = 3.0;

    pub fn new(value: f64) -> Result<Self, String> {
        if !value.is_finite() || value <= 0.0 {
            return Err(format!(
                "Threshold must be a positive number of percentage points, got {value}"
            ));
        }
        Ok(NotableThreshold(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// True iff the change is known and `|change| >= threshold`.
    pub fn is_notable(&self, percent_change: Option<f64>) -> bool {
        match percent_change {
            Some(change) => change.abs() >= self.0,
            None => false,
        }
    }
}

impl Default for NotableThreshold {
    fn default() -> Self {
        NotableThreshold(Self::DEFAULT)
    }
}

impl fmt::Display for NotableThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}

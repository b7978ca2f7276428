use crate::domain::values::direction::Direction;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Open and close for one trading session, as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySession {
    pub date: NaiveDate,
    pub open: f64,
    pub close: f64,
}

/// A computed price move for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Movement {
    pub direction: Direction,
    /// Signed, rounded to one decimal place.
    pub percent_change: f64,
    pub session_date: NaiveDate,
}

impl Movement {
    /// Magnitude of the move, as shown in the ticker.
    pub fn magnitude(&self) -> f64 {
        self.percent_change.abs()
    }
}

/// Outcome of asking for a symbol's latest move.
///
/// `Unknown` means no usable session data, which is different from a
/// computed 0.0% move.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum MovementResult {
    Known(Movement),
    Unknown,
}

impl MovementResult {
    /// `round((close - open) / close * 100, 1)`; a non-positive or
    /// non-finite close yields `Unknown`.
    pub fn from_session(session: &DailySession) -> Self {
        let DailySession { date, open, close } = *session;
        if !open.is_finite() || !close.is_finite() || close <= 0.0 {
            return MovementResult::Unknown;
        }
        let percent_change = round_one_decimal((close - open) / close * 100.0);
        MovementResult::Known(Movement {
            direction: Direction::from_change(percent_change),
            percent_change,
            session_date: date,
        })
    }

    pub fn known(&self) -> Option<&Movement> {
        match self {
            MovementResult::Known(m) => Some(m),
            MovementResult::Unknown => None,
        }
    }

    pub fn percent_change(&self) -> Option<f64> {
        self.known().map(|m| m.percent_change)
    }

    pub fn session_date(&self) -> Option<NaiveDate> {
        self.known().map(|m| m.session_date)
    }
}

/// Nearest one-decimal value, halves to even, judged on the exact binary
/// value. `{:.1}` formatting is correctly rounded, so 4.25 gives 4.2 and
/// 0.15 (stored just below) gives 0.1.
fn round_one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(open: f64, close: f64) -> DailySession {
        DailySession {
            date: NaiveDate::from_ymd_opt(2025, 2, 21).unwrap(),
            open,
            close,
        }
    }

    #[test]
    fn test_drop_relative_to_close() {
        let m = MovementResult::from_session(&session(100.0, 97.0));
        let m = m.known().unwrap();
        // (97 - 100) / 97 * 100 = -3.0927...
        assert_eq!(m.percent_change, -3.1);
        assert_eq!(m.direction, Direction::Down);
        assert_eq!(m.magnitude(), 3.1);
    }

    #[test]
    fn test_rise() {
        let m = MovementResult::from_session(&session(50.0, 52.5));
        let m = m.known().unwrap();
        // 2.5 / 52.5 * 100 = 4.7619...
        assert_eq!(m.percent_change, 4.8);
        assert_eq!(m.direction, Direction::Up);
    }

    #[test]
    fn test_flat_session_is_down_not_unknown() {
        let m = MovementResult::from_session(&session(10.0, 10.0));
        let m = m.known().unwrap();
        assert_eq!(m.percent_change, 0.0);
        assert_eq!(m.direction, Direction::Down);
    }

    #[test]
    fn test_tiny_negative_rounds_to_zero_and_is_down() {
        let m = MovementResult::from_session(&session(100.04, 100.0));
        let m = m.known().unwrap();
        assert_eq!(m.percent_change.abs(), 0.0);
        assert_eq!(m.direction, Direction::Down);
    }

    #[test]
    fn test_half_rounds_to_even() {
        // 4.25 / 100 * 100 = 4.25 exactly
        let m = MovementResult::from_session(&session(95.75, 100.0));
        assert_eq!(m.percent_change(), Some(4.2));
        assert_eq!(round_one_decimal(4.25), 4.2);
        assert_eq!(round_one_decimal(-4.25), -4.2);
        assert_eq!(round_one_decimal(4.75), 4.8);
    }

    #[test]
    fn test_rounding_uses_exact_value() {
        // 0.15 is stored as 0.14999..., 0.35 as 0.34999...
        assert_eq!(round_one_decimal(0.15), 0.1);
        assert_eq!(round_one_decimal(0.35), 0.3);
        assert_eq!(round_one_decimal(-3.0927), -3.1);
    }

    #[test]
    fn test_zero_close_is_unknown() {
        assert_eq!(
            MovementResult::from_session(&session(1.0, 0.0)),
            MovementResult::Unknown
        );
    }

    #[test]
    fn test_nan_is_unknown() {
        assert_eq!(
            MovementResult::from_session(&session(f64::NAN, 3.0)),
            MovementResult::Unknown
        );
    }

    #[test]
    fn test_session_date_carried_through() {
        let m = MovementResult::from_session(&session(1.0, 2.0));
        assert_eq!(m.session_date(), NaiveDate::from_ymd_opt(2025, 2, 21));
        assert_eq!(MovementResult::Unknown.session_date(), None);
    }
}

//! Adobe Premiere Pro tick interop.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

/// Premiere's fixed-point time quantum, in ticks per second.
pub const PREMIERE_TICKS_PER_SECOND: i64 = 254_016_000_000;

/// A Premiere tick count, as found in project XML and interchange metadata.
/// The newtype keeps tick values from being mistaken for plain seconds or
/// frame counts in conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PremiereTicks(pub i64);

impl PremiereTicks {
    /// The exact seconds this tick count represents.
    pub fn seconds(self) -> Rational64 {
        Rational64::new(self.0, PREMIERE_TICKS_PER_SECOND)
    }
}

impl From<i64> for PremiereTicks {
    fn from(ticks: i64) -> Self {
        Self(ticks)
    }
}

/// Convert exact seconds to the nearest whole tick.
pub(crate) fn from_seconds(seconds: Rational64) -> i64 {
    (seconds * Rational64::from_integer(PREMIERE_TICKS_PER_SECOND))
        .round()
        .to_integer()
}

//! Rounding and division policies for exact rational arithmetic.
//!
//! Everything in this crate computes on reduced [`Rational64`] values; the
//! helpers here are the single place where a rational collapses onto the
//! whole-frame grid, so every call site names its rounding policy.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

/// How to collapse an exact rational onto an integer grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Round to the nearest integer; half-way values round away from zero.
    #[default]
    Closest,
    /// Round toward negative infinity.
    Floor,
    /// Round toward positive infinity.
    Ceiling,
    /// Round toward zero.
    Truncate,
    /// Do not round. Operations that must produce a whole number of frames
    /// treat this mode as a usage error.
    Off,
}

impl RoundingMode {
    /// Apply the mode, keeping the result rational. [`RoundingMode::Off`] is
    /// the identity.
    pub fn apply(self, value: Rational64) -> Rational64 {
        match self {
            RoundingMode::Closest => value.round(),
            RoundingMode::Floor => value.floor(),
            RoundingMode::Ceiling => value.ceil(),
            RoundingMode::Truncate => value.trunc(),
            RoundingMode::Off => value,
        }
    }
}

/// Collapse `value` to an integer per `mode`.
///
/// # Panics
///
/// Panics on [`RoundingMode::Off`]; callers that can carry an unrounded
/// value go through [`RoundingMode::apply`] instead.
pub fn round_to_int(value: Rational64, mode: RoundingMode) -> i64 {
    assert!(
        mode != RoundingMode::Off,
        "RoundingMode::Off cannot produce a whole number of frames"
    );
    mode.apply(value).to_integer()
}

/// Truncating division: quotient toward zero, remainder carrying the sign of
/// the dividend. Frame-count arithmetic uses this policy.
pub fn divrem_i64(dividend: i64, divisor: i64) -> (i64, i64) {
    (dividend / divisor, dividend % divisor)
}

/// Flooring division: quotient toward negative infinity, remainder carrying
/// the sign of the divisor. Text-field math (minutes-mod-ten checks, the
/// drop-frame ten-minute split) uses this policy; it is not interchangeable
/// with [`divrem_i64`] for negative dividends.
pub fn divmod_i64(dividend: i64, divisor: i64) -> (i64, i64) {
    let quotient = dividend.div_euclid(divisor);
    (quotient, dividend - quotient * divisor)
}

/// Truncating division of a rational by a rational: whole quotient toward
/// zero plus the exact rational remainder.
pub fn divrem_rational(dividend: Rational64, divisor: Rational64) -> (i64, Rational64) {
    let quotient = (dividend / divisor).trunc().to_integer();
    (quotient, dividend - Rational64::from_integer(quotient) * divisor)
}

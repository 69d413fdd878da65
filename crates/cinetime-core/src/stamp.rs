//! The canonical frame identifier: exact seconds plus a frame rate.
//!
//! A [`FrameStamp`] always sits on a whole frame boundary of its rate
//! (`seconds * playback` is an integer); every constructor and operation
//! re-establishes that invariant, so conversions out of a stamp are exact.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

use crate::dropframe;
use crate::error::TimecodeError;
use crate::footage::{self, FilmFormat};
use crate::rate::FrameRate;
use crate::record::FrameStampRecord;
use crate::rounding::{round_to_int, RoundingMode};
use crate::runtime;
use crate::smpte;
use crate::source::{FramesSource, SecondsSource, ToFrames, ToSeconds};
use crate::ticks::{self, PremiereTicks};

/// Which operand's rate wins when an operation mixes frame rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSide {
    /// Inherit from the left operand.
    Left,
    /// Inherit from the right operand.
    Right,
}

/// An immutable frame identifier: exact real-world seconds at a frame rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(into = "FrameStampRecord", try_from = "FrameStampRecord")]
pub struct FrameStamp {
    seconds: Rational64,
    rate: FrameRate,
}

// ── Construction ────────────────────────────────────────────────

impl FrameStamp {
    /// Build a stamp from a seconds-like source, snapping to the nearest
    /// frame boundary.
    pub fn with_seconds(
        source: impl Into<SecondsSource>,
        rate: FrameRate,
    ) -> Result<Self, TimecodeError> {
        Self::with_seconds_round(source, rate, RoundingMode::Closest)
    }

    /// Build a stamp from a seconds-like source with an explicit rounding
    /// mode. [`RoundingMode::Off`] demands the value already sit on a frame
    /// boundary and fails with `PartialFrame` otherwise.
    pub fn with_seconds_round(
        source: impl Into<SecondsSource>,
        rate: FrameRate,
        round: RoundingMode,
    ) -> Result<Self, TimecodeError> {
        let seconds = source.into().to_seconds(&rate)?;
        let frames = seconds * rate.playback();
        if round == RoundingMode::Off && !frames.is_integer() {
            return Err(TimecodeError::PartialFrame { seconds });
        }
        let frames = if round == RoundingMode::Off {
            frames.to_integer()
        } else {
            round_to_int(frames, round)
        };
        Ok(Self::from_frame_count(frames, rate))
    }

    /// Build a stamp from a frames-like source. The seconds value is exact
    /// by construction; failures are parse errors and drop-frame domain
    /// violations.
    pub fn with_frames(
        source: impl Into<FramesSource>,
        rate: FrameRate,
    ) -> Result<Self, TimecodeError> {
        let frames = source.into().to_frames(&rate)?;
        if rate.is_drop() {
            let max = dropframe::max_frames(&rate);
            if frames.abs() > max {
                return Err(TimecodeError::DropFrameMaximumExceeded { frames, max });
            }
        }
        Ok(Self::from_frame_count(frames, rate))
    }

    // Whole-frame internal constructor; the alignment invariant holds by
    // construction.
    fn from_frame_count(frames: i64, rate: FrameRate) -> Self {
        Self {
            seconds: Rational64::from_integer(frames) / rate.playback(),
            rate,
        }
    }

    // Internal constructor for seconds already known to be frame-aligned.
    pub(crate) fn from_parts(seconds: Rational64, rate: FrameRate) -> Self {
        debug_assert!(
            (seconds * rate.playback()).is_integer(),
            "seconds must sit on a frame boundary"
        );
        Self { seconds, rate }
    }
}

// ── Accessors & renderers ───────────────────────────────────────

impl FrameStamp {
    /// Exact real-world seconds.
    pub fn seconds(&self) -> Rational64 {
        self.seconds
    }

    /// The frame rate this stamp counts against.
    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    /// The linear frame count. Exact by the alignment invariant.
    pub fn frames(&self) -> i64 {
        (self.seconds * self.rate.playback()).to_integer()
    }

    /// Render as SMPTE timecode: `HH:MM:SS:FF`, with `;` before the frames
    /// field at drop rates.
    pub fn smpte_timecode(&self) -> Result<String, TimecodeError> {
        if self.rate.is_drop() {
            let max = dropframe::max_frames(&self.rate);
            let frames = self.frames();
            // Arithmetic can leave the 24-hour display domain even though
            // parsing never does.
            if frames.abs() > max {
                return Err(TimecodeError::DropFrameMaximumExceeded { frames, max });
            }
        }
        Ok(smpte::render(self.frames(), &self.rate))
    }

    /// Render as runtime text (`HH:MM:SS.fraction`) with nine fractional
    /// digits, trailing zeros trimmed.
    pub fn runtime(&self) -> String {
        runtime::render(self.seconds, 9)
    }

    /// Render as runtime text with an explicit fractional precision.
    pub fn runtime_with_precision(&self, precision: usize) -> String {
        runtime::render(self.seconds, precision)
    }

    /// The nearest whole Premiere tick count.
    pub fn premiere_ticks(&self) -> PremiereTicks {
        PremiereTicks(ticks::from_seconds(self.seconds))
    }

    /// Render as feet+frames footage text for the given film format.
    pub fn feet_and_frames(&self, format: FilmFormat) -> String {
        footage::render(self.frames(), format)
    }

    /// Reinterpret the same linear frame count at `new_rate`'s playback
    /// speed: the frame number is preserved, the wall-clock seconds change.
    pub fn rebase(&self, new_rate: FrameRate) -> Result<Self, TimecodeError> {
        Self::with_frames(self.frames(), new_rate)
    }
}

// ── Comparison ──────────────────────────────────────────────────

// Stamps order by real-world seconds alone; two stamps at different rates
// are equal when they name the same instant. Hash follows Eq.

impl PartialEq for FrameStamp {
    fn eq(&self, other: &Self) -> bool {
        self.seconds == other.seconds
    }
}

impl Eq for FrameStamp {}

impl PartialOrd for FrameStamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrameStamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seconds.cmp(&other.seconds)
    }
}

impl Hash for FrameStamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seconds.hash(state);
    }
}

impl FrameStamp {
    /// Compare against anything frame-like, parsed at this stamp's rate.
    /// Fails when the other operand does not parse.
    pub fn compare(&self, other: impl Into<FramesSource>) -> Result<Ordering, TimecodeError> {
        let other = Self::with_frames(other, self.rate)?;
        Ok(self.cmp(&other))
    }
}

// ── Arithmetic ──────────────────────────────────────────────────

impl FrameStamp {
    fn resolve_rate(
        &self,
        other: &Self,
        inherit: Option<RateSide>,
    ) -> Result<FrameRate, TimecodeError> {
        if self.rate == other.rate {
            return Ok(self.rate);
        }
        match inherit {
            Some(RateSide::Left) => Ok(self.rate),
            Some(RateSide::Right) => Ok(other.rate),
            None => Err(TimecodeError::MixedRate {
                left: self.rate,
                right: other.rate,
            }),
        }
    }

    /// Add two stamps. Fails with `MixedRate` when the rates differ.
    pub fn add(&self, other: &Self) -> Result<Self, TimecodeError> {
        self.add_with(other, None, RoundingMode::Closest)
    }

    /// Add with an explicit mixed-rate policy and rounding mode: the sum of
    /// exact seconds is re-snapped to the resolved rate's frame grid.
    pub fn add_with(
        &self,
        other: &Self,
        inherit: Option<RateSide>,
        round: RoundingMode,
    ) -> Result<Self, TimecodeError> {
        let rate = self.resolve_rate(other, inherit)?;
        Self::with_seconds_round(self.seconds + other.seconds, rate, round)
    }

    /// Subtract `other`. Fails with `MixedRate` when the rates differ.
    pub fn sub(&self, other: &Self) -> Result<Self, TimecodeError> {
        self.sub_with(other, None, RoundingMode::Closest)
    }

    /// Subtract with an explicit mixed-rate policy and rounding mode.
    pub fn sub_with(
        &self,
        other: &Self,
        inherit: Option<RateSide>,
        round: RoundingMode,
    ) -> Result<Self, TimecodeError> {
        let rate = self.resolve_rate(other, inherit)?;
        Self::with_seconds_round(self.seconds - other.seconds, rate, round)
    }

    /// Scale by a rational factor, snapping to the nearest frame.
    pub fn mul(&self, scalar: impl Into<Rational64>) -> Result<Self, TimecodeError> {
        self.mul_round(scalar, RoundingMode::Closest)
    }

    /// Scale with an explicit rounding mode.
    pub fn mul_round(
        &self,
        scalar: impl Into<Rational64>,
        round: RoundingMode,
    ) -> Result<Self, TimecodeError> {
        Self::with_seconds_round(self.seconds * scalar.into(), self.rate, round)
    }

    /// Divide the seconds value by a scalar, truncating to the frame grid.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div(&self, divisor: impl Into<Rational64>) -> Result<Self, TimecodeError> {
        self.div_round(divisor, RoundingMode::Truncate)
    }

    /// Divide with an explicit rounding mode.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn div_round(
        &self,
        divisor: impl Into<Rational64>,
        round: RoundingMode,
    ) -> Result<Self, TimecodeError> {
        Self::with_seconds_round(self.seconds / divisor.into(), self.rate, round)
    }

    /// Quotient and remainder over the *linear frame count* (not seconds):
    /// truncating quotient, remainder carrying the dividend's sign, each
    /// re-materialized as a stamp at this rate.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn divrem(&self, divisor: impl Into<Rational64>) -> Result<(Self, Self), TimecodeError> {
        self.divrem_round(divisor, RoundingMode::Closest, RoundingMode::Closest)
    }

    /// [`FrameStamp::divrem`] with explicit rounding for each part.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero, or on [`RoundingMode::Off`] (both parts
    /// must land on whole frames).
    pub fn divrem_round(
        &self,
        divisor: impl Into<Rational64>,
        round_frames: RoundingMode,
        round_remainder: RoundingMode,
    ) -> Result<(Self, Self), TimecodeError> {
        let divisor = divisor.into();
        let frames = Rational64::from_integer(self.frames());
        let quotient = (frames / divisor).trunc();
        let remainder = frames - quotient * divisor;
        let quotient = Self::with_frames(round_to_int(quotient, round_frames), self.rate)?;
        let remainder = Self::with_frames(round_to_int(remainder, round_remainder), self.rate)?;
        Ok((quotient, remainder))
    }

    /// The remainder part of [`FrameStamp::divrem`].
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    pub fn rem(&self, divisor: impl Into<Rational64>) -> Result<Self, TimecodeError> {
        let (_, remainder) = self.divrem(divisor)?;
        Ok(remainder)
    }

    /// The stamp at the negated seconds value.
    pub fn neg(&self) -> Self {
        Self {
            seconds: -self.seconds,
            rate: self.rate,
        }
    }

    /// The stamp at the absolute seconds value.
    pub fn abs(&self) -> Self {
        if self.seconds < Rational64::from_integer(0) {
            self.neg()
        } else {
            *self
        }
    }
}

// ── Operator sugar ──────────────────────────────────────────────

// The std::ops impls are the panicking convenience wrappers around the named
// methods; call sites that must handle mixed rates use those directly.

impl Add for FrameStamp {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        FrameStamp::add(&self, &rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Sub for FrameStamp {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        FrameStamp::sub(&self, &rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Mul<i64> for FrameStamp {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self {
        FrameStamp::mul(&self, rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Div<i64> for FrameStamp {
    type Output = Self;

    fn div(self, rhs: i64) -> Self {
        FrameStamp::div(&self, rhs).unwrap_or_else(|err| panic!("{err}"))
    }
}

impl Neg for FrameStamp {
    type Output = Self;

    fn neg(self) -> Self {
        FrameStamp::neg(&self)
    }
}

impl fmt::Display for FrameStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.smpte_timecode() {
            Ok(timecode) => write!(f, "[{timecode} @ {}]", self.rate),
            Err(_) => write!(f, "[{} @ {}]", self.runtime(), self.rate),
        }
    }
}

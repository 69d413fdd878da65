//! Intervals between two frame stamps.
//!
//! A [`Range`] is a pair of stamps at one rate plus an [`OutType`] flag
//! saying whether the out point is itself part of the range. All of the
//! algebra normalizes to exclusive out points internally; the flag only
//! changes how the out point is written and read.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

use crate::dropframe;
use crate::error::RangeError;
use crate::rate::FrameRate;
use crate::stamp::{FrameStamp, RateSide};

/// Whether a range's out point is part of the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutType {
    /// The out point is the first frame *past* the range.
    #[default]
    Exclusive,
    /// The out point is the last frame *of* the range.
    Inclusive,
}

/// Inheritance policy for binary range operations whose operands disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeOpOpts {
    /// Which operand's rate the result inherits when rates differ.
    pub inherit_rate: Option<RateSide>,
    /// Which operand's out type the result inherits when out types differ.
    pub inherit_out_type: Option<RateSide>,
}

/// An immutable interval of two frame stamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    in_point: FrameStamp,
    out_point: FrameStamp,
    out_type: OutType,
}

impl Range {
    /// Build a range from its two endpoints. The endpoints must share a
    /// rate, and the (exclusive-normalized) out point must not precede the
    /// in point.
    pub fn new(
        in_point: FrameStamp,
        out_point: FrameStamp,
        out_type: OutType,
    ) -> Result<Self, RangeError> {
        if in_point.rate() != out_point.rate() {
            return Err(RangeError::MixedRate {
                left: in_point.rate(),
                right: out_point.rate(),
            });
        }
        let range = Self {
            in_point,
            out_point,
            out_type,
        };
        if range.out_exclusive() < in_point {
            return Err(RangeError::OutBeforeIn);
        }
        Ok(range)
    }

    /// Build a range from an in point and a duration (the exclusive
    /// length). The duration must be non-negative and share the in point's
    /// rate.
    pub fn with_duration(
        in_point: FrameStamp,
        duration: FrameStamp,
        out_type: OutType,
    ) -> Result<Self, RangeError> {
        if in_point.rate() != duration.rate() {
            return Err(RangeError::MixedRate {
                left: in_point.rate(),
                right: duration.rate(),
            });
        }
        if duration.seconds() < Rational64::from_integer(0) {
            return Err(RangeError::NegativeDuration);
        }
        let out_point =
            FrameStamp::from_parts(in_point.seconds() + duration.seconds(), in_point.rate());
        let range = Self {
            in_point,
            out_point,
            out_type: OutType::Exclusive,
        };
        Ok(match out_type {
            OutType::Exclusive => range,
            OutType::Inclusive => range.with_inclusive_out(),
        })
    }

    /// The in point.
    pub fn in_point(&self) -> FrameStamp {
        self.in_point
    }

    /// The out point, as written (inclusive or exclusive per
    /// [`Range::out_type`]).
    pub fn out_point(&self) -> FrameStamp {
        self.out_point
    }

    /// How the out point is written.
    pub fn out_type(&self) -> OutType {
        self.out_type
    }

    /// The rate both endpoints share.
    pub fn rate(&self) -> FrameRate {
        self.in_point.rate()
    }

    // The out point normalized to exclusive, regardless of representation.
    fn out_exclusive(&self) -> FrameStamp {
        match self.out_type {
            OutType::Exclusive => self.out_point,
            OutType::Inclusive => shift_frames(&self.out_point, 1),
        }
    }

    /// The same range written with an inclusive out point.
    pub fn with_inclusive_out(&self) -> Self {
        match self.out_type {
            OutType::Inclusive => *self,
            OutType::Exclusive => Self {
                in_point: self.in_point,
                out_point: shift_frames(&self.out_point, -1),
                out_type: OutType::Inclusive,
            },
        }
    }

    /// The same range written with an exclusive out point.
    pub fn with_exclusive_out(&self) -> Self {
        match self.out_type {
            OutType::Exclusive => *self,
            OutType::Inclusive => Self {
                in_point: self.in_point,
                out_point: shift_frames(&self.out_point, 1),
                out_type: OutType::Exclusive,
            },
        }
    }

    /// The range's length: exclusive out minus in.
    pub fn duration(&self) -> FrameStamp {
        FrameStamp::from_parts(
            self.out_exclusive().seconds() - self.in_point.seconds(),
            self.rate(),
        )
    }

    /// Whether `point` falls inside the range (`in <= point < out`,
    /// exclusive-normalized). Points at any rate compare by real time.
    pub fn contains(&self, point: &FrameStamp) -> bool {
        *point >= self.in_point && *point < self.out_exclusive()
    }

    /// Whether two ranges share any frames.
    pub fn overlaps(&self, other: &Range) -> bool {
        let a_out = self.out_exclusive();
        let b_out = other.out_exclusive();
        !(self.in_point >= b_out || a_out <= other.in_point)
    }

    /// The overlapping region of two ranges, or `Ok(None)` when they do not
    /// overlap. Operands must agree on rate and out type.
    pub fn intersection(&self, other: &Range) -> Result<Option<Range>, RangeError> {
        self.intersection_with(other, RangeOpOpts::default())
    }

    /// [`Range::intersection`] with explicit inheritance policies for
    /// mismatched rates and out types.
    pub fn intersection_with(
        &self,
        other: &Range,
        opts: RangeOpOpts,
    ) -> Result<Option<Range>, RangeError> {
        let (rate, out_type) = self.resolve_policies(other, opts)?;
        if !self.overlaps(other) {
            return Ok(None);
        }
        let in_seconds = self.in_point.seconds().max(other.in_point.seconds());
        let out_seconds = self
            .out_exclusive()
            .seconds()
            .min(other.out_exclusive().seconds());
        Some(Self::from_seconds(in_seconds, out_seconds, rate, out_type)).transpose()
    }

    /// [`Range::intersection`], substituting the canonical zero-length range
    /// at the resolved rate and out type when there is no overlap.
    pub fn intersection_or_empty(
        &self,
        other: &Range,
        opts: RangeOpOpts,
    ) -> Result<Range, RangeError> {
        match self.intersection_with(other, opts)? {
            Some(range) => Ok(range),
            None => {
                let (rate, out_type) = self.resolve_policies(other, opts)?;
                Ok(Self::empty_at(rate, out_type))
            }
        }
    }

    /// The gap between two non-overlapping ranges, or `Ok(None)` when they
    /// overlap (an adjacent pair yields a zero-length gap). Operands must
    /// agree on rate and out type.
    pub fn separation(&self, other: &Range) -> Result<Option<Range>, RangeError> {
        self.separation_with(other, RangeOpOpts::default())
    }

    /// [`Range::separation`] with explicit inheritance policies.
    pub fn separation_with(
        &self,
        other: &Range,
        opts: RangeOpOpts,
    ) -> Result<Option<Range>, RangeError> {
        let (rate, out_type) = self.resolve_policies(other, opts)?;
        if self.overlaps(other) {
            return Ok(None);
        }
        let in_seconds = self
            .out_exclusive()
            .seconds()
            .min(other.out_exclusive().seconds());
        let out_seconds = self.in_point.seconds().max(other.in_point.seconds());
        Some(Self::from_seconds(in_seconds, out_seconds, rate, out_type)).transpose()
    }

    /// [`Range::separation`], substituting the canonical zero-length range
    /// when the operands overlap.
    pub fn separation_or_empty(
        &self,
        other: &Range,
        opts: RangeOpOpts,
    ) -> Result<Range, RangeError> {
        match self.separation_with(other, opts)? {
            Some(range) => Ok(range),
            None => {
                let (rate, out_type) = self.resolve_policies(other, opts)?;
                Ok(Self::empty_at(rate, out_type))
            }
        }
    }

    /// Translate both endpoints by `delta`.
    pub fn shift(&self, delta: &FrameStamp) -> Result<Self, RangeError> {
        let in_point = self.in_point.add(delta).map_err(RangeError::Stamp)?;
        let out_point = self.out_point.add(delta).map_err(RangeError::Stamp)?;
        Ok(Self {
            in_point,
            out_point,
            out_type: self.out_type,
        })
    }

    /// Wrap the in point into the first 24 hours of timecode by whole-day
    /// frame steps, preserving the duration.
    pub fn smpte_timecode_wrap_tod(&self) -> Self {
        let rate = self.rate();
        let per_day = dropframe::frames_per_day(&rate);
        let in_frames = self.in_point.frames();
        let delta_frames = in_frames.rem_euclid(per_day) - in_frames;
        let delta_seconds = Rational64::from_integer(delta_frames) / rate.playback();
        Self {
            in_point: FrameStamp::from_parts(self.in_point.seconds() + delta_seconds, rate),
            out_point: FrameStamp::from_parts(self.out_point.seconds() + delta_seconds, rate),
            out_type: self.out_type,
        }
    }

    fn resolve_policies(
        &self,
        other: &Range,
        opts: RangeOpOpts,
    ) -> Result<(FrameRate, OutType), RangeError> {
        let rate = if self.rate() == other.rate() {
            self.rate()
        } else {
            match opts.inherit_rate {
                Some(RateSide::Left) => self.rate(),
                Some(RateSide::Right) => other.rate(),
                None => {
                    return Err(RangeError::MixedRate {
                        left: self.rate(),
                        right: other.rate(),
                    })
                }
            }
        };
        let out_type = if self.out_type == other.out_type {
            self.out_type
        } else {
            match opts.inherit_out_type {
                Some(RateSide::Left) => self.out_type,
                Some(RateSide::Right) => other.out_type,
                None => {
                    return Err(RangeError::MixedOutType {
                        left: self.out_type,
                        right: other.out_type,
                    })
                }
            }
        };
        Ok((rate, out_type))
    }

    // Build a range from exclusive-normalized endpoint seconds, snapping
    // each onto the target rate's grid.
    fn from_seconds(
        in_seconds: Rational64,
        out_seconds: Rational64,
        rate: FrameRate,
        out_type: OutType,
    ) -> Result<Range, RangeError> {
        let in_point = FrameStamp::with_seconds(in_seconds, rate).map_err(RangeError::Stamp)?;
        let out_point = FrameStamp::with_seconds(out_seconds, rate).map_err(RangeError::Stamp)?;
        let range = Self::new(in_point, out_point, OutType::Exclusive)?;
        Ok(match out_type {
            OutType::Exclusive => range,
            OutType::Inclusive => range.with_inclusive_out(),
        })
    }

    // The canonical zero-length range at time zero.
    fn empty_at(rate: FrameRate, out_type: OutType) -> Range {
        let zero = FrameStamp::from_parts(Rational64::from_integer(0), rate);
        let range = Self {
            in_point: zero,
            out_point: zero,
            out_type: OutType::Exclusive,
        };
        match out_type {
            OutType::Exclusive => range,
            OutType::Inclusive => range.with_inclusive_out(),
        }
    }
}

// Move a stamp by a whole number of frames at its own rate.
fn shift_frames(stamp: &FrameStamp, frames: i64) -> FrameStamp {
    let delta = Rational64::from_integer(frames) / stamp.rate().playback();
    FrameStamp::from_parts(stamp.seconds() + delta, stamp.rate())
}

//! Error types for cinetime.

use num_rational::Rational64;
use thiserror::Error;

use crate::range::OutType;
use crate::rate::FrameRate;

/// Errors raised while constructing or parsing a [`FrameRate`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameRateError {
    /// An NTSC tag was not one of `none`, `non_drop`, or `drop`.
    #[error("invalid ntsc tag {0:?}: expected \"none\", \"non_drop\", or \"drop\"")]
    InvalidNtsc(String),

    /// Rate text could not be read as an integer, float, or `N/D` rational.
    #[error("unrecognized frame rate: {0:?}")]
    UnrecognizedFormat(String),

    /// A non-whole float was given without an NTSC tag, so no exact rational
    /// can be recovered from it.
    #[error("imprecise frame rate {0}: non-whole floats are only valid for NTSC rates")]
    Imprecise(f64),

    /// A drop-frame playback rate was not a multiple of 30000/1001.
    #[error("invalid drop-frame rate {0}: must be a multiple of 30000/1001")]
    BadDropRate(Rational64),

    /// Playback rates must be positive.
    #[error("non-positive playback rate: {0}")]
    NonPositive(Rational64),
}

/// Errors raised while constructing, parsing, or combining
/// [`FrameStamp`](crate::FrameStamp) values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimecodeError {
    /// Text did not match the expected grammar.
    #[error("unrecognized {kind}: {text:?}")]
    UnrecognizedFormat {
        /// Which grammar was being parsed.
        kind: &'static str,
        /// The offending input.
        text: String,
    },

    /// A drop-frame timecode carried a frames field that drop-frame
    /// numbering skips on non-tenth minutes.
    #[error(
        "bad drop-frame value: frames field {frames} is skipped outside tenth minutes \
         (the first {drop_rate} frame numbers of each minute are dropped)"
    )]
    BadDropFrames {
        /// The frames field as parsed.
        frames: i64,
        /// Frame numbers skipped per dropped minute at this rate.
        drop_rate: i64,
    },

    /// A frame count fell outside the 24-hour drop-frame display domain.
    #[error("frame {frames} is outside the 24-hour drop-frame domain (max {max})")]
    DropFrameMaximumExceeded {
        /// The offending linear frame count.
        frames: i64,
        /// Largest renderable linear frame count at this rate.
        max: i64,
    },

    /// A seconds value did not land on a frame boundary and rounding was
    /// disabled.
    #[error("{seconds} seconds is not on a whole frame boundary and rounding is off")]
    PartialFrame {
        /// The unaligned seconds value.
        seconds: Rational64,
    },

    /// Two operands carried different frame rates and no side was chosen to
    /// inherit from.
    #[error("cannot mix rates {left} and {right}: choose a side to inherit the rate from")]
    MixedRate {
        /// Rate of the left operand.
        left: FrameRate,
        /// Rate of the right operand.
        right: FrameRate,
    },

    /// A frame rate embedded in the input was itself invalid.
    #[error(transparent)]
    Rate(#[from] FrameRateError),
}

/// Errors raised by [`Range`](crate::Range) construction and algebra.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    /// The two endpoints (or operands) carried different frame rates.
    #[error("cannot mix rates {left} and {right}: choose a side to inherit the rate from")]
    MixedRate {
        /// Rate of the left operand.
        left: FrameRate,
        /// Rate of the right operand.
        right: FrameRate,
    },

    /// Two ranges carried different out-point types and no side was chosen
    /// to inherit from.
    #[error("cannot mix out types {left:?} and {right:?}: choose a side to inherit from")]
    MixedOutType {
        /// Out type of the left operand.
        left: OutType,
        /// Out type of the right operand.
        right: OutType,
    },

    /// The out point preceded the in point.
    #[error("range out point precedes its in point")]
    OutBeforeIn,

    /// A negative duration was supplied.
    #[error("range durations must not be negative")]
    NegativeDuration,

    /// An endpoint stamp failed to build or combine.
    #[error(transparent)]
    Stamp(#[from] TimecodeError),
}

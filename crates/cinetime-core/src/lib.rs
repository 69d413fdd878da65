//! Cinetime Core - Frame-accurate time identifiers for editorial tooling
//!
//! This crate provides the value types editorial software reasons about
//! time with:
//! - Frame rates (FrameRate, Ntsc), including fractional NTSC rates
//! - The canonical frame identifier (FrameStamp: exact seconds + rate)
//! - Textual and numeric notations: SMPTE timecode, runtime, feet+frames,
//!   Premiere ticks, linear frame counts
//! - Rate-aware arithmetic and an interval algebra (Range)
//!
//! Every value is immutable and every conversion runs on exact rationals,
//! so repeated arithmetic never drifts off the frame grid.

pub mod error;
pub mod footage;
pub mod range;
pub mod rate;
pub mod record;
pub mod rounding;
pub mod source;
pub mod stamp;
pub mod ticks;

mod dropframe;
mod runtime;
mod smpte;

pub use error::{FrameRateError, RangeError, TimecodeError};
pub use footage::FilmFormat;
pub use range::{OutType, Range, RangeOpOpts};
pub use rate::{FrameRate, Ntsc, RateSource};
pub use record::FrameStampRecord;
pub use rounding::RoundingMode;
pub use source::{FramesSource, SecondsSource, ToFrames, ToSeconds};
pub use stamp::{FrameStamp, RateSide};
pub use ticks::{PremiereTicks, PREMIERE_TICKS_PER_SECOND};

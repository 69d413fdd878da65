//! Conversion sources for frame and seconds values.
//!
//! The [`FrameStamp`](crate::FrameStamp) constructors accept "anything
//! frame-like" or "anything seconds-like" through these closed unions. Each
//! variant knows how to produce a linear frame count or an exact seconds
//! value at a given rate; there is no open dispatch to extend.

use num_rational::Rational64;

use crate::error::{FrameRateError, TimecodeError};
use crate::footage::{self, FilmFormat};
use crate::rate::FrameRate;
use crate::runtime;
use crate::smpte;
use crate::ticks::PremiereTicks;

/// Conversion to a linear frame count at a rate.
pub trait ToFrames {
    /// Produce a linear frame count at `rate`.
    fn to_frames(&self, rate: &FrameRate) -> Result<i64, TimecodeError>;
}

/// Conversion to exact real-world seconds at a rate.
pub trait ToSeconds {
    /// Produce exact seconds at `rate`.
    fn to_seconds(&self, rate: &FrameRate) -> Result<Rational64, TimecodeError>;
}

/// A frame-count-shaped source.
#[derive(Debug, Clone, PartialEq)]
pub enum FramesSource {
    /// A linear frame count.
    Frames(i64),
    /// SMPTE timecode text.
    Timecode(String),
    /// Feet+frames footage text with its film format.
    FeetAndFrames(String, FilmFormat),
    /// Text tried as timecode first, then as 35mm 4-perf feet+frames.
    Auto(String),
}

impl ToFrames for FramesSource {
    fn to_frames(&self, rate: &FrameRate) -> Result<i64, TimecodeError> {
        match self {
            FramesSource::Frames(frames) => Ok(*frames),
            FramesSource::Timecode(text) => smpte::parse(text, rate),
            FramesSource::FeetAndFrames(text, format) => footage::parse(text, *format),
            FramesSource::Auto(text) => match smpte::parse(text, rate) {
                Ok(frames) => Ok(frames),
                // Well-formed timecode with an illegal drop-frame value is a
                // real error, not a cue to try the next grammar.
                Err(err @ TimecodeError::BadDropFrames { .. }) => Err(err),
                Err(_) => footage::parse(text, FilmFormat::default()).map_err(|_| {
                    TimecodeError::UnrecognizedFormat {
                        kind: "timecode or feet+frames",
                        text: text.clone(),
                    }
                }),
            },
        }
    }
}

impl From<i64> for FramesSource {
    fn from(frames: i64) -> Self {
        FramesSource::Frames(frames)
    }
}

impl From<&str> for FramesSource {
    fn from(text: &str) -> Self {
        FramesSource::Auto(text.to_string())
    }
}

impl From<String> for FramesSource {
    fn from(text: String) -> Self {
        FramesSource::Auto(text)
    }
}

impl From<(&str, FilmFormat)> for FramesSource {
    fn from((text, format): (&str, FilmFormat)) -> Self {
        FramesSource::FeetAndFrames(text.to_string(), format)
    }
}

/// A seconds-shaped source.
#[derive(Debug, Clone, PartialEq)]
pub enum SecondsSource {
    /// Exact seconds.
    Seconds(Rational64),
    /// Seconds as a float, converted to the closest representable rational.
    Float(f64),
    /// A Premiere tick count.
    Ticks(PremiereTicks),
    /// Runtime text (`HH:MM:SS.fraction`).
    Runtime(String),
}

impl ToSeconds for SecondsSource {
    fn to_seconds(&self, _rate: &FrameRate) -> Result<Rational64, TimecodeError> {
        match self {
            SecondsSource::Seconds(seconds) => Ok(*seconds),
            SecondsSource::Float(value) => Rational64::approximate_float(*value)
                .ok_or(TimecodeError::Rate(FrameRateError::Imprecise(*value))),
            SecondsSource::Ticks(ticks) => Ok(ticks.seconds()),
            SecondsSource::Runtime(text) => runtime::parse(text),
        }
    }
}

impl From<Rational64> for SecondsSource {
    fn from(seconds: Rational64) -> Self {
        SecondsSource::Seconds(seconds)
    }
}

impl From<i64> for SecondsSource {
    fn from(seconds: i64) -> Self {
        SecondsSource::Seconds(Rational64::from_integer(seconds))
    }
}

impl From<f64> for SecondsSource {
    fn from(seconds: f64) -> Self {
        SecondsSource::Float(seconds)
    }
}

impl From<PremiereTicks> for SecondsSource {
    fn from(ticks: PremiereTicks) -> Self {
        SecondsSource::Ticks(ticks)
    }
}

impl From<&str> for SecondsSource {
    fn from(text: &str) -> Self {
        SecondsSource::Runtime(text.to_string())
    }
}

impl From<String> for SecondsSource {
    fn from(text: String) -> Self {
        SecondsSource::Runtime(text)
    }
}

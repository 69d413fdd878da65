//! Decomposed persistence record for frame stamps.
//!
//! External storage (a database column set, a JSON document) keeps a stamp
//! as five plain fields. Reconstruction re-runs the full validation path, so
//! a corrupt record cannot produce an invalid stamp. The library knows
//! nothing about how the record is stored.

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

use crate::error::TimecodeError;
use crate::rate::{FrameRate, Ntsc};
use crate::rounding::RoundingMode;
use crate::stamp::FrameStamp;

/// The flat, storage-ready form of a [`FrameStamp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameStampRecord {
    /// Numerator of the exact seconds value.
    pub seconds_num: i64,
    /// Denominator of the exact seconds value.
    pub seconds_den: i64,
    /// Numerator of the playback rate.
    pub rate_num: i64,
    /// Denominator of the playback rate.
    pub rate_den: i64,
    /// NTSC classification tag.
    pub ntsc: Ntsc,
}

impl From<FrameStamp> for FrameStampRecord {
    fn from(stamp: FrameStamp) -> Self {
        let seconds = stamp.seconds();
        let playback = stamp.rate().playback();
        Self {
            seconds_num: *seconds.numer(),
            seconds_den: *seconds.denom(),
            rate_num: *playback.numer(),
            rate_den: *playback.denom(),
            ntsc: stamp.rate().ntsc(),
        }
    }
}

impl TryFrom<FrameStampRecord> for FrameStamp {
    type Error = TimecodeError;

    fn try_from(record: FrameStampRecord) -> Result<Self, Self::Error> {
        if record.seconds_den == 0 || record.rate_den == 0 {
            return Err(TimecodeError::UnrecognizedFormat {
                kind: "stamp record",
                text: format!("{record:?}"),
            });
        }
        let rate = FrameRate::new(
            Rational64::new(record.rate_num, record.rate_den),
            record.ntsc,
        )?;
        let seconds = Rational64::new(record.seconds_num, record.seconds_den);
        // A stored stamp was frame-aligned when written; demand it on read.
        FrameStamp::with_seconds_round(seconds, rate, RoundingMode::Off)
    }
}

impl FrameStamp {
    /// Decompose into the flat persistence record.
    pub fn to_record(&self) -> FrameStampRecord {
        FrameStampRecord::from(*self)
    }

    /// Rebuild from a persistence record, re-validating every field.
    pub fn from_record(record: FrameStampRecord) -> Result<Self, TimecodeError> {
        Self::try_from(record)
    }
}

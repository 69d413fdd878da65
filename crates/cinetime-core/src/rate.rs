//! Frame rate values and NTSC classification.
//!
//! A [`FrameRate`] is an exact rational playback speed plus an [`Ntsc`] tag
//! describing how timecode at that rate is written. All construction paths
//! funnel through the same validation, so a value that exists is valid.

use std::fmt;
use std::str::FromStr;

use num_rational::Rational64;
use serde::{Deserialize, Serialize};

use crate::error::FrameRateError;

/// NTSC handling for a playback rate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ntsc {
    /// Not an NTSC rate; the playback speed is taken at face value.
    #[default]
    None,
    /// NTSC rate written as non-drop timecode.
    NonDrop,
    /// NTSC rate written as drop-frame timecode.
    Drop,
}

impl Ntsc {
    /// Whether this tag marks an NTSC rate at all.
    pub fn is_ntsc(self) -> bool {
        !matches!(self, Ntsc::None)
    }

    /// Canonical text for this tag, as used in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Ntsc::None => "none",
            Ntsc::NonDrop => "non_drop",
            Ntsc::Drop => "drop",
        }
    }
}

impl FromStr for Ntsc {
    type Err = FrameRateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Ntsc::None),
            "non_drop" => Ok(Ntsc::NonDrop),
            "drop" => Ok(Ntsc::Drop),
            other => Err(FrameRateError::InvalidNtsc(other.to_string())),
        }
    }
}

impl fmt::Display for Ntsc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value a [`FrameRate`] can be built from.
#[derive(Debug, Clone, PartialEq)]
pub enum RateSource {
    /// An exact rational rate.
    Rational(Rational64),
    /// A whole-number rate.
    Integer(i64),
    /// A float rate; only whole values (or NTSC-coercible ones) survive.
    Float(f64),
    /// Rate text: `"24"`, `"23.98"`, or `"24000/1001"`.
    Text(String),
}

impl RateSource {
    fn as_rational(&self, ntsc: Ntsc) -> Result<Rational64, FrameRateError> {
        match self {
            RateSource::Rational(value) => Ok(*value),
            RateSource::Integer(value) => Ok(Rational64::from_integer(*value)),
            RateSource::Float(value) => float_to_rational(*value, ntsc),
            RateSource::Text(text) => parse_rate_text(text, ntsc),
        }
    }
}

impl From<Rational64> for RateSource {
    fn from(value: Rational64) -> Self {
        RateSource::Rational(value)
    }
}

impl From<i64> for RateSource {
    fn from(value: i64) -> Self {
        RateSource::Integer(value)
    }
}

impl From<f64> for RateSource {
    fn from(value: f64) -> Self {
        RateSource::Float(value)
    }
}

impl From<&str> for RateSource {
    fn from(value: &str) -> Self {
        RateSource::Text(value.to_string())
    }
}

impl From<String> for RateSource {
    fn from(value: String) -> Self {
        RateSource::Text(value)
    }
}

fn float_to_rational(value: f64, ntsc: Ntsc) -> Result<Rational64, FrameRateError> {
    if !value.is_finite() {
        return Err(FrameRateError::Imprecise(value));
    }
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Ok(Rational64::from_integer(value as i64));
    }
    if ntsc.is_ntsc() {
        // Coercion to the nearest whole NTSC base recovers exactness.
        Ok(Rational64::from_integer(value.round() as i64))
    } else {
        Err(FrameRateError::Imprecise(value))
    }
}

fn parse_rate_text(text: &str, ntsc: Ntsc) -> Result<Rational64, FrameRateError> {
    let err = || FrameRateError::UnrecognizedFormat(text.to_string());
    let trimmed = text.trim();
    if let Some((numer, denom)) = trimmed.split_once('/') {
        let numer: i64 = numer.trim().parse().map_err(|_| err())?;
        let denom: i64 = denom.trim().parse().map_err(|_| err())?;
        if denom == 0 {
            return Err(err());
        }
        return Ok(Rational64::new(numer, denom));
    }
    if let Ok(whole) = trimmed.parse::<i64>() {
        return Ok(Rational64::from_integer(whole));
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        return float_to_rational(float, ntsc);
    }
    Err(err())
}

/// An immutable playback rate: exact rational speed plus NTSC classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameRate {
    playback: Rational64,
    ntsc: Ntsc,
}

impl FrameRate {
    /// 23.98 (24000/1001) NTSC non-drop.
    pub const F23_98: Self = Self::preset(24_000, 1001, Ntsc::NonDrop);
    /// True 24 fps.
    pub const F24: Self = Self::preset(24, 1, Ntsc::None);
    /// 25 fps (PAL).
    pub const F25: Self = Self::preset(25, 1, Ntsc::None);
    /// 29.97 (30000/1001) NTSC non-drop.
    pub const F29_97_NDF: Self = Self::preset(30_000, 1001, Ntsc::NonDrop);
    /// 29.97 (30000/1001) NTSC drop-frame.
    pub const F29_97_DF: Self = Self::preset(30_000, 1001, Ntsc::Drop);
    /// True 30 fps.
    pub const F30: Self = Self::preset(30, 1, Ntsc::None);
    /// 47.95 (48000/1001) NTSC non-drop.
    pub const F47_95: Self = Self::preset(48_000, 1001, Ntsc::NonDrop);
    /// True 48 fps.
    pub const F48: Self = Self::preset(48, 1, Ntsc::None);
    /// 50 fps.
    pub const F50: Self = Self::preset(50, 1, Ntsc::None);
    /// 59.94 (60000/1001) NTSC non-drop.
    pub const F59_94_NDF: Self = Self::preset(60_000, 1001, Ntsc::NonDrop);
    /// 59.94 (60000/1001) NTSC drop-frame.
    pub const F59_94_DF: Self = Self::preset(60_000, 1001, Ntsc::Drop);
    /// True 60 fps.
    pub const F60: Self = Self::preset(60, 1, Ntsc::None);

    // Preset numerator/denominator pairs are already reduced.
    const fn preset(numer: i64, denom: i64, ntsc: Ntsc) -> Self {
        Self {
            playback: Rational64::new_raw(numer, denom),
            ntsc,
        }
    }

    /// Build a rate from a rational, integer, float, or text source.
    pub fn new(source: impl Into<RateSource>, ntsc: Ntsc) -> Result<Self, FrameRateError> {
        Self::with_options(source, ntsc, false)
    }

    /// Like [`FrameRate::new`], but when `invert_per_frame` is set, inputs
    /// shaped like seconds-per-frame (|numerator| < |denominator|) are taken
    /// as their reciprocal, so `1/24` builds a 24 fps rate.
    pub fn with_options(
        source: impl Into<RateSource>,
        ntsc: Ntsc,
        invert_per_frame: bool,
    ) -> Result<Self, FrameRateError> {
        let mut playback = source.into().as_rational(ntsc)?;
        if invert_per_frame && *playback.numer() != 0 && playback.numer().abs() < *playback.denom()
        {
            playback = playback.recip();
        }
        if playback <= Rational64::from_integer(0) {
            return Err(FrameRateError::NonPositive(playback));
        }
        if ntsc.is_ntsc() {
            playback = coerce_ntsc(playback);
        }
        if ntsc == Ntsc::Drop {
            let base = Rational64::new(30_000, 1001);
            if !(playback / base).is_integer() {
                return Err(FrameRateError::BadDropRate(playback));
            }
        }
        Ok(Self { playback, ntsc })
    }

    /// The exact real-world playback speed in frames per second.
    pub fn playback(&self) -> Rational64 {
        self.playback
    }

    /// The nominal rate a timecode's fields count against: playback rounded
    /// to the nearest whole number for NTSC rates, unrounded otherwise (true
    /// non-integer rates keep their exact timebase).
    pub fn timebase(&self) -> Rational64 {
        if self.ntsc.is_ntsc() {
            self.playback.round()
        } else {
            self.playback
        }
    }

    /// The NTSC classification.
    pub fn ntsc(&self) -> Ntsc {
        self.ntsc
    }

    /// Whether this is any kind of NTSC rate.
    pub fn is_ntsc(&self) -> bool {
        self.ntsc.is_ntsc()
    }

    /// Whether timecode at this rate is written drop-frame.
    pub fn is_drop(&self) -> bool {
        self.ntsc == Ntsc::Drop
    }

    /// Duration of a single frame in seconds.
    pub fn frame_duration(&self) -> Rational64 {
        self.playback.recip()
    }
}

/// Normalize onto the NTSC grid: `/1001` rationals pass through, whole
/// numbers become `N * 1000/1001`, and anything else snaps to the nearest
/// whole base first.
fn coerce_ntsc(playback: Rational64) -> Rational64 {
    if *playback.denom() == 1001 {
        playback
    } else if playback.is_integer() {
        Rational64::new(playback.to_integer() * 1000, 1001)
    } else {
        Rational64::new(playback.round().to_integer() * 1000, 1001)
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.playback.is_integer() {
            write!(f, "{} fps", self.playback.to_integer())?;
        } else {
            let fps = *self.playback.numer() as f64 / *self.playback.denom() as f64;
            write!(f, "{fps:.2} fps")?;
        }
        match self.ntsc {
            Ntsc::None => Ok(()),
            Ntsc::NonDrop => write!(f, " NTSC NDF"),
            Ntsc::Drop => write!(f, " NTSC DF"),
        }
    }
}

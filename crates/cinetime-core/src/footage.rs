//! Physical film footage (feet+frames) parsing and rendering.
//!
//! Grammar: `[-]?FEET+FRAMES`. How many frames fit in a foot depends on the
//! gauge and perforation layout, so every conversion names its
//! [`FilmFormat`].

use serde::{Deserialize, Serialize};

use crate::error::TimecodeError;
use crate::rounding::divrem_i64;

// Field values are capped so feet-to-frame math stays inside i64.
const MAX_FIELD_VALUE: i64 = 999_999_999;

/// Film gauge and perforation layout for footage counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilmFormat {
    /// 35mm pulled down four perforations per frame.
    #[default]
    Ff35mm4perf,
    /// 35mm pulled down two perforations per frame.
    Ff35mm2perf,
    /// 16mm: one perforation per frame, edge code every six inches.
    Ff16mm,
}

impl FilmFormat {
    /// Frames per *logical* foot, the unit footage counts run in. 16mm edge
    /// code marks a "foot" every 20 frames (six physical inches), which is
    /// what keeps 16mm footage numbers comparable to 35mm ones.
    pub const fn frames_per_foot(self) -> i64 {
        match self {
            FilmFormat::Ff35mm4perf => 16,
            FilmFormat::Ff35mm2perf => 32,
            FilmFormat::Ff16mm => 20,
        }
    }

    /// Perforations per *physical* foot of stock.
    pub const fn perforations_per_foot(self) -> i64 {
        match self {
            FilmFormat::Ff35mm4perf | FilmFormat::Ff35mm2perf => 64,
            FilmFormat::Ff16mm => 40,
        }
    }

    /// Perforations pulled down per frame.
    pub const fn perforations_per_frame(self) -> i64 {
        match self {
            FilmFormat::Ff35mm4perf => 4,
            FilmFormat::Ff35mm2perf => 2,
            FilmFormat::Ff16mm => 1,
        }
    }
}

/// Parse feet+frames text into a linear frame count.
pub(crate) fn parse(text: &str, format: FilmFormat) -> Result<i64, TimecodeError> {
    let err = || TimecodeError::UnrecognizedFormat {
        kind: "feet+frames",
        text: text.to_string(),
    };
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    let (feet_text, frames_text) = body.split_once('+').ok_or_else(err)?;

    let feet = parse_field(feet_text).ok_or_else(err)?;
    let frames = parse_field(frames_text).ok_or_else(err)?;
    let total = feet * format.frames_per_foot() + frames;
    Ok(if negative { -total } else { total })
}

fn parse_field(text: &str) -> Option<i64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: i64 = text.parse().ok()?;
    (value <= MAX_FIELD_VALUE).then_some(value)
}

/// Render a linear frame count as feet+frames text.
pub(crate) fn render(frames: i64, format: FilmFormat) -> String {
    let negative = frames < 0;
    let (feet, frames) = divrem_i64(frames.abs(), format.frames_per_foot());
    let sign = if negative { "-" } else { "" };
    format!("{sign}{feet}+{frames:02}")
}

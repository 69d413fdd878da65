//! SMPTE timecode parsing and rendering.
//!
//! Grammar: `[-]?(HH:)?(MM:)?(SS:)?FF`, right-aligned, with missing leading
//! sections defaulting to zero. Drop-frame input accepts `:` or `;` before
//! the frames field; output always uses `;` for drop rates.

use num_rational::Rational64;
use smallvec::SmallVec;

use crate::dropframe;
use crate::error::TimecodeError;
use crate::rate::FrameRate;
use crate::rounding::divrem_rational;

// Field values are capped so section-to-frame math stays inside i64.
const MAX_FIELD_VALUE: i64 = 999_999_999;

/// Parsed timecode fields. Bridges text and a linear frame count; never
/// retained in a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Sections {
    pub negative: bool,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub frames: i64,
}

/// Parse timecode text into a linear frame count at `rate`.
pub(crate) fn parse(text: &str, rate: &FrameRate) -> Result<i64, TimecodeError> {
    let sections = parse_sections(text)?;
    let adjustment = dropframe::parse_adjustment(&sections, rate)?;
    let whole_seconds = sections.hours * 3600 + sections.minutes * 60 + sections.seconds;
    let count = Rational64::from_integer(whole_seconds) * rate.timebase()
        + Rational64::from_integer(sections.frames + adjustment);
    // Exact for whole timebases; true fractional rates snap to the nearest
    // whole frame.
    let frames = count.round().to_integer();
    Ok(if sections.negative { -frames } else { frames })
}

/// Render a linear frame count as timecode text at `rate`.
pub(crate) fn render(frames: i64, rate: &FrameRate) -> String {
    let display = dropframe::frame_num_adjustment(frames, rate);
    let sections = sections_from_display(display, rate);
    let separator = if rate.is_drop() { ';' } else { ':' };
    let sign = if sections.negative { "-" } else { "" };
    format!(
        "{sign}{:02}:{:02}:{:02}{separator}{:02}",
        sections.hours, sections.minutes, sections.seconds, sections.frames
    )
}

fn parse_sections(text: &str) -> Result<Sections, TimecodeError> {
    let err = || TimecodeError::UnrecognizedFormat {
        kind: "timecode",
        text: text.to_string(),
    };
    let trimmed = text.trim();
    let (negative, body) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };
    if body.is_empty() {
        return Err(err());
    }

    let mut fields: SmallVec<[i64; 4]> = SmallVec::new();
    for field in body.split(|c| c == ':' || c == ';') {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let value: i64 = field.parse().map_err(|_| err())?;
        if value > MAX_FIELD_VALUE {
            return Err(err());
        }
        fields.push(value);
    }
    if fields.len() > 4 {
        return Err(err());
    }

    fields.reverse();
    Ok(Sections {
        negative,
        hours: fields.get(3).copied().unwrap_or(0),
        minutes: fields.get(2).copied().unwrap_or(0),
        seconds: fields.get(1).copied().unwrap_or(0),
        frames: fields.first().copied().unwrap_or(0),
    })
}

fn sections_from_display(display: i64, rate: &FrameRate) -> Sections {
    let negative = display < 0;
    let display = Rational64::from_integer(display.abs());
    let timebase = rate.timebase();

    let (hours, remainder) = divrem_rational(display, timebase * Rational64::from_integer(3600));
    let (minutes, remainder) = divrem_rational(remainder, timebase * Rational64::from_integer(60));
    let (seconds, remainder) = divrem_rational(remainder, timebase);
    let frames = remainder.round().to_integer();

    Sections {
        negative,
        hours,
        minutes,
        seconds,
        frames,
    }
}

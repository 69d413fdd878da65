//! Drop-frame timecode adjustment.
//!
//! NTSC drop-frame timecode skips the first `drop_rate` frame *numbers* of
//! every minute that is not a multiple of ten, so the displayed clock tracks
//! real time. The two directions here convert between a linear frame count
//! and the displayed frame number; they are exact inverses over the 24-hour
//! display domain.

use num_rational::Rational64;

use crate::error::TimecodeError;
use crate::rate::{FrameRate, Ntsc};
use crate::rounding::divmod_i64;
use crate::smpte::Sections;

const MINUTES_PER_DAY: i64 = 24 * 60;
const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// Frame numbers skipped per dropped minute: 2 at 29.97, 4 at 59.94.
pub(crate) fn drop_rate(rate: &FrameRate) -> i64 {
    let factor = Rational64::new(66_666, 1_000_000);
    (rate.timebase() * factor).round().to_integer()
}

/// The adjustment to apply when converting parsed timecode fields to a
/// linear frame count. Zero for anything but drop rates.
///
/// Fails with `BadDropFrames` when the text names a frame number that
/// drop-frame timecode skips (frames field below the drop rate on a
/// non-tenth minute).
pub(crate) fn parse_adjustment(
    sections: &Sections,
    rate: &FrameRate,
) -> Result<i64, TimecodeError> {
    if rate.ntsc() != Ntsc::Drop {
        return Ok(0);
    }
    let drop_rate = drop_rate(rate);
    let tenth_minute = sections.minutes % 10 == 0;
    if sections.frames < drop_rate && !tenth_minute {
        return Err(TimecodeError::BadDropFrames {
            frames: sections.frames,
            drop_rate,
        });
    }
    let total_minutes = 60 * sections.hours + sections.minutes;
    let (tens_of_minutes, _) = divmod_i64(total_minutes, 10);
    Ok(-drop_rate * (total_minutes - tens_of_minutes))
}

/// Convert a linear frame count to the displayed drop-frame number (the
/// inverse of [`parse_adjustment`], used when rendering). Non-drop rates
/// pass through unchanged; negative counts adjust on their absolute value.
pub(crate) fn frame_num_adjustment(frame_number: i64, rate: &FrameRate) -> i64 {
    if rate.ntsc() != Ntsc::Drop {
        return frame_number;
    }
    let negative = frame_number < 0;
    let frame_number = frame_number.abs();

    let drop_rate = drop_rate(rate);
    let timebase = rate.timebase().to_integer();
    let fpm_whole = timebase * 60;
    let fpm_drop = fpm_whole - drop_rate;
    let fp10m_drop = 9 * fpm_drop + fpm_whole;

    let (tens_of_minutes, mut remainder) = divmod_i64(frame_number, fp10m_drop);
    let mut adjustment = 9 * drop_rate * tens_of_minutes;
    if remainder >= fpm_whole {
        // Into the dropped minutes: the first minute of the block is whole.
        remainder -= fpm_whole;
        adjustment += drop_rate;
        adjustment += drop_rate * remainder.div_euclid(fpm_drop);
    }

    let adjusted = frame_number + adjustment;
    if negative {
        -adjusted
    } else {
        adjusted
    }
}

/// Largest linear frame count renderable before the drop-frame 24-hour
/// display domain runs out.
pub(crate) fn max_frames(rate: &FrameRate) -> i64 {
    let timebase = rate.timebase().to_integer();
    let dropped_minutes = MINUTES_PER_DAY - MINUTES_PER_DAY / 10;
    timebase * SECONDS_PER_DAY - drop_rate(rate) * dropped_minutes - 1
}

/// Whole linear frames in 24 hours of timecode at `rate`; used for
/// time-of-day wrapping.
pub(crate) fn frames_per_day(rate: &FrameRate) -> i64 {
    if rate.is_drop() {
        max_frames(rate) + 1
    } else {
        (rate.timebase() * SECONDS_PER_DAY).round().to_integer()
    }
}

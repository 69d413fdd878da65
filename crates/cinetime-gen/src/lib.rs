//! Randomized value generators for property testing cinetime.
//!
//! Every strategy goes through the public constructors of `cinetime-core`,
//! so generated values carry the same invariants as hand-built ones. This
//! crate is a test-support dependency; nothing in the core depends on it.

use cinetime_core::{FilmFormat, FrameRate, FrameStamp, Ntsc, OutType, Range};
use proptest::prelude::*;

// Frame counts stay well inside every supported drop-frame 24-hour domain.
const MAX_ABS_FRAMES: i64 = 2_000_000;

/// One of the preset frame rates.
pub fn preset_framerate() -> impl Strategy<Value = FrameRate> {
    prop_oneof![
        Just(FrameRate::F23_98),
        Just(FrameRate::F24),
        Just(FrameRate::F25),
        Just(FrameRate::F29_97_NDF),
        Just(FrameRate::F29_97_DF),
        Just(FrameRate::F30),
        Just(FrameRate::F47_95),
        Just(FrameRate::F48),
        Just(FrameRate::F50),
        Just(FrameRate::F59_94_NDF),
        Just(FrameRate::F59_94_DF),
        Just(FrameRate::F60),
    ]
}

/// Whole-number non-NTSC rates in a practical band.
pub fn whole_framerate() -> impl Strategy<Value = FrameRate> {
    (1i64..=240).prop_map(|fps| {
        FrameRate::new(fps, Ntsc::None).expect("whole positive rates are valid")
    })
}

/// Non-drop NTSC rates built from any whole base.
pub fn ntsc_framerate() -> impl Strategy<Value = FrameRate> {
    (1i64..=240).prop_map(|base| {
        FrameRate::new(base, Ntsc::NonDrop).expect("whole NTSC bases are valid")
    })
}

/// Drop-frame rates (multiples of the 29.97 base).
pub fn drop_framerate() -> impl Strategy<Value = FrameRate> {
    (1i64..=4).prop_map(|multiple| {
        FrameRate::new(30 * multiple, Ntsc::Drop).expect("30x bases are valid drop rates")
    })
}

/// Any valid frame rate the other strategies produce.
pub fn any_framerate() -> impl Strategy<Value = FrameRate> {
    prop_oneof![
        4 => preset_framerate(),
        2 => whole_framerate(),
        2 => ntsc_framerate(),
        1 => drop_framerate(),
    ]
}

/// A stamp at `rate`, anywhere inside a generous +/- frame band that stays
/// renderable at every supported rate.
pub fn framestamp_at(rate: FrameRate) -> impl Strategy<Value = FrameStamp> {
    (-MAX_ABS_FRAMES..=MAX_ABS_FRAMES).prop_map(move |frames| {
        FrameStamp::with_frames(frames, rate).expect("in-domain frame counts are valid")
    })
}

/// A non-negative stamp at `rate`.
pub fn positive_framestamp_at(rate: FrameRate) -> impl Strategy<Value = FrameStamp> {
    (0..=MAX_ABS_FRAMES).prop_map(move |frames| {
        FrameStamp::with_frames(frames, rate).expect("in-domain frame counts are valid")
    })
}

/// A stamp at a random rate.
pub fn any_framestamp() -> impl Strategy<Value = FrameStamp> {
    any_framerate().prop_flat_map(framestamp_at)
}

/// Either out-point flavor.
pub fn out_type() -> impl Strategy<Value = OutType> {
    prop_oneof![Just(OutType::Exclusive), Just(OutType::Inclusive)]
}

/// Any film footage format.
pub fn film_format() -> impl Strategy<Value = FilmFormat> {
    prop_oneof![
        Just(FilmFormat::Ff35mm4perf),
        Just(FilmFormat::Ff35mm2perf),
        Just(FilmFormat::Ff16mm),
    ]
}

/// A well-formed range at `rate`: random in point, bounded non-negative
/// duration, either out type.
pub fn range_at(rate: FrameRate) -> impl Strategy<Value = Range> {
    (
        -MAX_ABS_FRAMES / 2..=MAX_ABS_FRAMES / 2,
        0i64..=100_000,
        out_type(),
    )
        .prop_map(move |(in_frames, duration_frames, out_type)| {
            let in_point =
                FrameStamp::with_frames(in_frames, rate).expect("in-domain frame counts are valid");
            let duration = FrameStamp::with_frames(duration_frames, rate)
                .expect("in-domain frame counts are valid");
            Range::with_duration(in_point, duration, out_type)
                .expect("non-negative durations build valid ranges")
        })
}

/// A range at a random rate.
pub fn any_range() -> impl Strategy<Value = Range> {
    any_framerate().prop_flat_map(range_at)
}

/// A pair of ranges sharing one rate and out type, as most binary range
/// operations require.
pub fn comparable_range_pair() -> impl Strategy<Value = (Range, Range)> {
    any_framerate().prop_flat_map(|rate| {
        (range_at(rate), range_at(rate), out_type()).prop_map(|(a, b, out_type)| {
            match out_type {
                OutType::Exclusive => (a.with_exclusive_out(), b.with_exclusive_out()),
                OutType::Inclusive => (a.with_inclusive_out(), b.with_inclusive_out()),
            }
        })
    })
}

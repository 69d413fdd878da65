//! Known-value conversion tables across every supported notation.

use cinetime_core::{
    FilmFormat, FrameRate, FrameStamp, Ntsc, PremiereTicks, RoundingMode, TimecodeError,
};
use num_rational::Rational64;

// ── Helpers ────────────────────────────────────────────────────

struct ConversionCase {
    rate: FrameRate,
    frames: i64,
    timecode: &'static str,
    seconds: Rational64,
    runtime: &'static str,
    feet_and_frames: &'static str,
    ticks: i64,
}

fn check(case: &ConversionCase) {
    let stamp = FrameStamp::with_frames(case.frames, case.rate).unwrap();
    assert_eq!(stamp.frames(), case.frames, "frames for {}", case.timecode);
    assert_eq!(stamp.seconds(), case.seconds, "seconds for {}", case.timecode);
    assert_eq!(
        stamp.smpte_timecode().unwrap(),
        case.timecode,
        "timecode render"
    );
    assert_eq!(stamp.runtime(), case.runtime, "runtime for {}", case.timecode);
    assert_eq!(
        stamp.feet_and_frames(FilmFormat::Ff35mm4perf),
        case.feet_and_frames,
        "footage for {}",
        case.timecode
    );
    assert_eq!(
        stamp.premiere_ticks(),
        PremiereTicks(case.ticks),
        "ticks for {}",
        case.timecode
    );

    // Every notation parses back to the same stamp.
    assert_eq!(
        FrameStamp::with_frames(case.timecode, case.rate).unwrap(),
        stamp
    );
    assert_eq!(
        FrameStamp::with_frames((case.feet_and_frames, FilmFormat::Ff35mm4perf), case.rate)
            .unwrap(),
        stamp
    );
    assert_eq!(
        FrameStamp::with_seconds(case.seconds, case.rate).unwrap(),
        stamp
    );
    assert_eq!(
        FrameStamp::with_seconds(case.runtime, case.rate).unwrap(),
        stamp
    );
    assert_eq!(
        FrameStamp::with_seconds(PremiereTicks(case.ticks), case.rate).unwrap(),
        stamp
    );
}

// ── Conversion tables ──────────────────────────────────────────

#[test]
fn one_timecode_hour_at_23_98() {
    check(&ConversionCase {
        rate: FrameRate::F23_98,
        frames: 86_400,
        timecode: "01:00:00:00",
        seconds: Rational64::new(18_018, 5),
        runtime: "01:00:03.6",
        feet_and_frames: "5400+00",
        ticks: 915_372_057_600_000,
    });
}

#[test]
fn one_second_at_true_24() {
    check(&ConversionCase {
        rate: FrameRate::F24,
        frames: 24,
        timecode: "00:00:01:00",
        seconds: Rational64::from_integer(1),
        runtime: "00:00:01.0",
        feet_and_frames: "1+08",
        ticks: 254_016_000_000,
    });
}

#[test]
fn negative_hour_at_23_98() {
    check(&ConversionCase {
        rate: FrameRate::F23_98,
        frames: -86_400,
        timecode: "-01:00:00:00",
        seconds: Rational64::new(-18_018, 5),
        runtime: "-01:00:03.6",
        feet_and_frames: "-5400+00",
        ticks: -915_372_057_600_000,
    });
}

#[test]
fn drop_frame_eight_minutes() {
    let rate = FrameRate::F29_97_DF;
    let stamp = FrameStamp::with_frames("00:08:20;18", rate).unwrap();
    assert_eq!(stamp.frames(), 15_002);
    assert_eq!(stamp.smpte_timecode().unwrap(), "00:08:20;18");

    // The two frame numbers dropped at each of the eight minute boundaries
    // separate the displayed fields from the linear count.
    let plain = FrameStamp::with_frames("00:08:20:18", FrameRate::F29_97_NDF).unwrap();
    assert_eq!(plain.frames(), 15_018);
}

#[test]
fn drop_frame_minute_and_ten_minute_boundaries() {
    let rate = FrameRate::F29_97_DF;
    for (timecode, frames) in [
        ("00:00:59;29", 1_799),
        ("00:01:00;02", 1_800),
        ("00:09:59;29", 17_981),
        ("00:10:00;00", 17_982),
        ("01:00:00;00", 107_892),
    ] {
        let stamp = FrameStamp::with_frames(timecode, rate).unwrap();
        assert_eq!(stamp.frames(), frames, "parse {timecode}");
        assert_eq!(stamp.smpte_timecode().unwrap(), timecode, "render {timecode}");
    }
}

#[test]
fn drop_frame_skipped_values_rejected() {
    let rate = FrameRate::F29_97_DF;
    for timecode in ["00:01:00;00", "00:01:00;01", "00:59:00;01", "01:01:00;00"] {
        assert!(
            matches!(
                FrameStamp::with_frames(timecode, rate),
                Err(TimecodeError::BadDropFrames { .. })
            ),
            "expected BadDropFrames for {timecode}"
        );
    }
    for timecode in ["00:00:00;00", "00:10:00;00", "00:01:00;02", "01:00:00;00"] {
        assert!(
            FrameStamp::with_frames(timecode, rate).is_ok(),
            "expected parse success for {timecode}"
        );
    }
}

#[test]
fn drop_frame_59_94_boundaries() {
    let rate = FrameRate::F59_94_DF;
    for (timecode, frames) in [("00:00:59;59", 3_599), ("00:01:00;04", 3_600)] {
        let stamp = FrameStamp::with_frames(timecode, rate).unwrap();
        assert_eq!(stamp.frames(), frames, "parse {timecode}");
        assert_eq!(stamp.smpte_timecode().unwrap(), timecode, "render {timecode}");
    }
}

#[test]
fn footage_formats_disagree_on_frames_per_foot() {
    let stamp = FrameStamp::with_frames(86_400, FrameRate::F23_98).unwrap();
    assert_eq!(stamp.feet_and_frames(FilmFormat::Ff35mm4perf), "5400+00");
    assert_eq!(stamp.feet_and_frames(FilmFormat::Ff35mm2perf), "2700+00");
    assert_eq!(stamp.feet_and_frames(FilmFormat::Ff16mm), "4320+00");
}

#[test]
fn runtime_text_snaps_to_frame_grid() {
    // 1.5 seconds at 24fps is exactly frame 36.
    let stamp = FrameStamp::with_seconds("1.5", FrameRate::F24).unwrap();
    assert_eq!(stamp.frames(), 36);

    // A value off the grid snaps to the closest frame.
    let stamp = FrameStamp::with_seconds("1.49", FrameRate::F24).unwrap();
    assert_eq!(stamp.frames(), 36);

    // Unless rounding is disabled.
    assert!(matches!(
        FrameStamp::with_seconds_round("1.49", FrameRate::F24, RoundingMode::Off),
        Err(TimecodeError::PartialFrame { .. })
    ));
}

#[test]
fn true_fractional_rates_roundtrip() {
    let rate = FrameRate::new(Rational64::new(24_000, 1001), Ntsc::None).unwrap();
    for frames in [0, 1, 24, 86_400] {
        let stamp = FrameStamp::with_frames(frames, rate).unwrap();
        let rendered = stamp.smpte_timecode().unwrap();
        assert_eq!(
            FrameStamp::with_frames(rendered.as_str(), rate).unwrap().frames(),
            frames
        );
    }
}

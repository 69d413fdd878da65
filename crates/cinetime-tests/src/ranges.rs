//! Range algebra: documented examples plus randomized interval laws.

use cinetime_core::{FrameRate, FrameStamp, OutType, Range, RangeError, RangeOpOpts, RateSide};
use cinetime_gen as gen;
use proptest::prelude::*;

// ── Helpers ────────────────────────────────────────────────────

fn stamp(text: &str, rate: FrameRate) -> FrameStamp {
    FrameStamp::with_frames(text, rate).unwrap()
}

fn inclusive(in_text: &str, out_text: &str, rate: FrameRate) -> Range {
    Range::new(stamp(in_text, rate), stamp(out_text, rate), OutType::Inclusive).unwrap()
}

// ── Documented examples ────────────────────────────────────────

#[test]
fn hour_overlap_at_23_98() {
    let rate = FrameRate::F23_98;
    let a = inclusive("01:00:00:00", "02:00:00:00", rate);
    let b = inclusive("01:50:00:00", "02:30:00:00", rate);

    let intersection = a.intersection(&b).unwrap().unwrap();
    assert_eq!(
        intersection.in_point().smpte_timecode().unwrap(),
        "01:50:00:00"
    );
    assert_eq!(
        intersection.out_point().smpte_timecode().unwrap(),
        "02:00:00:00"
    );
    assert_eq!(intersection.out_type(), OutType::Inclusive);

    let disjoint = inclusive("03:00:00:00", "04:00:00:00", rate);
    assert_eq!(a.intersection(&disjoint).unwrap(), None);
}

#[test]
fn exclusive_out_point_is_not_contained() {
    let rate = FrameRate::F24;
    let range = Range::new(
        stamp("00:01:00:00", rate),
        stamp("00:02:00:00", rate),
        OutType::Exclusive,
    )
    .unwrap();

    let out = range.out_point();
    let last = out.sub(&FrameStamp::with_frames(1, rate).unwrap()).unwrap();
    assert!(!range.contains(&out));
    assert!(range.contains(&last));
}

// ── Randomized interval laws ───────────────────────────────────

proptest! {
    #[test]
    fn duration_matches_frame_distance(range in gen::any_range()) {
        let normalized = range.with_exclusive_out();
        prop_assert_eq!(
            range.duration().frames(),
            normalized.out_point().frames() - range.in_point().frames()
        );
        prop_assert!(range.duration().frames() >= 0);
    }

    #[test]
    fn out_type_conversion_preserves_membership(
        range in gen::any_range(),
        probe in -2_000_000i64..=2_000_000,
    ) {
        let probe = FrameStamp::with_frames(probe, range.rate()).unwrap();
        let flipped = match range.out_type() {
            OutType::Exclusive => range.with_inclusive_out(),
            OutType::Inclusive => range.with_exclusive_out(),
        };
        prop_assert_eq!(range.contains(&probe), flipped.contains(&probe));
        prop_assert_eq!(range.duration(), flipped.duration());
    }

    #[test]
    fn intersection_agrees_with_overlap(
        (a, b) in gen::comparable_range_pair(),
    ) {
        let intersection = a.intersection(&b).unwrap();
        prop_assert_eq!(intersection.is_some(), a.overlaps(&b));
        if let Some(overlap) = intersection {
            // The overlap is inside both operands.
            let mid = overlap.in_point();
            if overlap.duration().frames() > 0 {
                prop_assert!(a.contains(&mid) && b.contains(&mid));
            }
            prop_assert!(overlap.duration().frames() <= a.duration().frames());
            prop_assert!(overlap.duration().frames() <= b.duration().frames());
        }
    }

    #[test]
    fn separation_agrees_with_overlap(
        (a, b) in gen::comparable_range_pair(),
    ) {
        let separation = a.separation(&b).unwrap();
        prop_assert_eq!(separation.is_none(), a.overlaps(&b));
        if let Some(gap) = separation {
            prop_assert!(gap.duration().frames() >= 0);
            // Growing either range by the gap makes them touch; the gap
            // itself shares no frames with either operand.
            if gap.duration().frames() > 0 {
                prop_assert!(!a.contains(&gap.in_point()) && !b.contains(&gap.in_point()));
            }
        }
    }

    #[test]
    fn shift_preserves_duration(
        rate in gen::any_framerate(),
        in_frames in -500_000i64..=500_000,
        duration_frames in 0i64..=100_000,
        delta_frames in -500_000i64..=500_000,
    ) {
        let range = Range::with_duration(
            FrameStamp::with_frames(in_frames, rate).unwrap(),
            FrameStamp::with_frames(duration_frames, rate).unwrap(),
            OutType::Exclusive,
        )
        .unwrap();
        let delta = FrameStamp::with_frames(delta_frames, rate).unwrap();

        let shifted = range.shift(&delta).unwrap();
        prop_assert_eq!(shifted.duration(), range.duration());
        prop_assert_eq!(
            shifted.in_point().frames(),
            range.in_point().frames() + delta_frames
        );

        let back = shifted.shift(&delta.neg()).unwrap();
        prop_assert_eq!(back, range);
    }

    #[test]
    fn wrap_tod_lands_inside_first_day(
        rate in gen::any_framerate(),
        in_frames in -3_000_000i64..=3_000_000,
        duration_frames in 0i64..=100_000,
    ) {
        // Build through seconds so out-of-domain drop-frame in points are
        // reachable too.
        let in_point = FrameStamp::with_seconds(
            num_rational::Rational64::from_integer(in_frames) / rate.playback(),
            rate,
        ).unwrap();
        let duration = FrameStamp::with_seconds(
            num_rational::Rational64::from_integer(duration_frames) / rate.playback(),
            rate,
        ).unwrap();
        let range = Range::with_duration(in_point, duration, OutType::Exclusive).unwrap();

        let wrapped = range.smpte_timecode_wrap_tod();
        prop_assert!(wrapped.in_point().frames() >= 0);
        prop_assert_eq!(wrapped.duration(), range.duration());
        // Wrapping is idempotent once inside the first day.
        prop_assert_eq!(wrapped.smpte_timecode_wrap_tod(), wrapped);
    }
}

// ── Policy errors ──────────────────────────────────────────────

#[test]
fn mixed_policies_error_then_resolve() {
    let a = Range::new(
        stamp("00:00:00:00", FrameRate::F24),
        stamp("00:00:10:00", FrameRate::F24),
        OutType::Exclusive,
    )
    .unwrap();
    let b = Range::new(
        stamp("00:00:05:00", FrameRate::F25),
        stamp("00:00:15:00", FrameRate::F25),
        OutType::Inclusive,
    )
    .unwrap();

    assert!(matches!(
        a.intersection(&b),
        Err(RangeError::MixedRate { .. })
    ));

    // Resolving the rate alone still trips over the out types.
    let opts = RangeOpOpts {
        inherit_rate: Some(RateSide::Left),
        inherit_out_type: None,
    };
    assert!(matches!(
        a.intersection_with(&b, opts),
        Err(RangeError::MixedOutType { .. })
    ));

    let opts = RangeOpOpts {
        inherit_rate: Some(RateSide::Left),
        inherit_out_type: Some(RateSide::Left),
    };
    let intersection = a.intersection_with(&b, opts).unwrap().unwrap();
    assert_eq!(intersection.rate(), FrameRate::F24);
    assert_eq!(intersection.out_type(), OutType::Exclusive);
    assert_eq!(intersection.in_point().frames(), 5 * 24);
    assert_eq!(intersection.duration().frames(), 5 * 24);
}

//! Randomized conversion laws, driven by the cinetime-gen strategies.

use cinetime_core::{FrameRate, FrameStamp, RoundingMode, TimecodeError};
use cinetime_gen as gen;
use proptest::prelude::*;

proptest! {
    // ── Frame count and notation roundtrips ─────────────────────

    #[test]
    fn frames_roundtrip(stamp in gen::any_framestamp()) {
        let rebuilt = FrameStamp::with_frames(stamp.frames(), stamp.rate()).unwrap();
        prop_assert_eq!(rebuilt, stamp);
    }

    #[test]
    fn smpte_roundtrip(stamp in gen::any_framestamp()) {
        let rendered = stamp.smpte_timecode().unwrap();
        let parsed = FrameStamp::with_frames(rendered.as_str(), stamp.rate()).unwrap();
        prop_assert_eq!(parsed, stamp);
    }

    #[test]
    fn footage_roundtrip(stamp in gen::any_framestamp(), format in gen::film_format()) {
        let rendered = stamp.feet_and_frames(format);
        let parsed =
            FrameStamp::with_frames((rendered.as_str(), format), stamp.rate()).unwrap();
        prop_assert_eq!(parsed, stamp);
    }

    #[test]
    fn runtime_roundtrip(stamp in gen::any_framestamp()) {
        // Nine digits are far below any frame duration, so the snap-back is
        // lossless.
        let rendered = stamp.runtime();
        let parsed = FrameStamp::with_seconds(rendered.as_str(), stamp.rate()).unwrap();
        prop_assert_eq!(parsed, stamp);
    }

    #[test]
    fn record_roundtrip(stamp in gen::any_framestamp()) {
        let rebuilt = FrameStamp::from_record(stamp.to_record()).unwrap();
        prop_assert_eq!(rebuilt, stamp);
        prop_assert_eq!(rebuilt.rate(), stamp.rate());
    }

    #[test]
    fn serde_json_roundtrip(stamp in gen::any_framestamp()) {
        let json = serde_json::to_string(&stamp).unwrap();
        let rebuilt: FrameStamp = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(rebuilt, stamp);
        prop_assert_eq!(rebuilt.rate(), stamp.rate());
    }

    // ── Rebase ──────────────────────────────────────────────────

    #[test]
    fn rebase_involution(
        stamp in gen::any_framestamp(),
        other_rate in gen::any_framerate(),
    ) {
        let there = stamp.rebase(other_rate).unwrap();
        prop_assert_eq!(there.frames(), stamp.frames());
        let back = there.rebase(stamp.rate()).unwrap();
        prop_assert_eq!(back, stamp);
        prop_assert_eq!(back.rate(), stamp.rate());
    }

    // ── Arithmetic laws ─────────────────────────────────────────

    #[test]
    fn add_sub_inverse(
        rate in gen::any_framerate(),
        a_frames in -1_000_000i64..=1_000_000,
        b_frames in -1_000_000i64..=1_000_000,
    ) {
        let a = FrameStamp::with_frames(a_frames, rate).unwrap();
        let b = FrameStamp::with_frames(b_frames, rate).unwrap();
        let sum = a.add(&b).unwrap();
        prop_assert_eq!(sum.sub(&b).unwrap(), a);
        prop_assert_eq!(sum.frames(), a_frames + b_frames);
    }

    #[test]
    fn div_symmetric_around_zero(
        stamp in gen::any_framestamp(),
        divisor in 1i64..=1000,
    ) {
        let forward = stamp.div(divisor).unwrap().abs();
        let mirrored = stamp.neg().div(divisor).unwrap().abs();
        prop_assert_eq!(forward, mirrored);
    }

    #[test]
    fn divrem_recomposes(
        rate in gen::any_framerate(),
        frames in -1_000_000i64..=1_000_000,
        divisor in 1i64..=1000,
    ) {
        let stamp = FrameStamp::with_frames(frames, rate).unwrap();
        let (quotient, remainder) = stamp.divrem(divisor).unwrap();
        prop_assert_eq!(
            quotient.frames() * divisor + remainder.frames(),
            frames
        );
        // Remainder carries the dividend's sign and stays under the divisor.
        prop_assert!(remainder.frames().abs() < divisor);
        prop_assert!(remainder.frames() == 0 || (remainder.frames() < 0) == (frames < 0));
    }

    #[test]
    fn neg_is_its_own_inverse(stamp in gen::any_framestamp()) {
        prop_assert_eq!(stamp.neg().neg(), stamp);
        prop_assert_eq!(stamp.abs(), stamp.neg().abs());
    }

    #[test]
    fn mixed_rate_arithmetic_fails_without_policy(
        a in gen::framestamp_at(FrameRate::F24),
        b in gen::framestamp_at(FrameRate::F25),
    ) {
        let add_is_mixed_rate = matches!(a.add(&b), Err(TimecodeError::MixedRate { .. }));
        let sub_is_mixed_rate = matches!(a.sub(&b), Err(TimecodeError::MixedRate { .. }));
        prop_assert!(add_is_mixed_rate);
        prop_assert!(sub_is_mixed_rate);
    }

    // ── Rounding contract ───────────────────────────────────────

    #[test]
    fn closest_rounds_halves_away_from_zero(frames in -1_000_000i64..=1_000_000) {
        // A half-frame offset at 48fps sits exactly between 24fps frames.
        let rate = FrameRate::F24;
        let seconds = num_rational::Rational64::new(2 * frames + 1, 48);
        let stamp = FrameStamp::with_seconds(seconds, rate).unwrap();
        let expected = if seconds < num_rational::Rational64::from_integer(0) {
            frames
        } else {
            frames + 1
        };
        prop_assert_eq!(stamp.frames(), expected);

        let floored =
            FrameStamp::with_seconds_round(seconds, rate, RoundingMode::Floor).unwrap();
        prop_assert_eq!(floored.frames(), frames);
    }
}

//! Property tests for the fixed-point type.

use proptest::prelude::*;

use qarray::prelude::*;

// Property 1: Roundtrip conversion (from_f32 -> to_f32 ~ identity within
// one quantization step)
proptest! {
    #[test]
    fn prop_roundtrip_conversion(
        frac in 0u8..=10,
        // Stays representable at every tested frac: |v| * 2^10 < i16::MAX.
        value in -30.0f32..30.0f32,
    ) {
        let quantum = 1.0 / (1i32 << frac) as f32;
        let fp = FixedPoint::from_f32(value, frac);
        let back = fp.to_f32();

        let diff = (value - back).abs();
        prop_assert!(
            diff <= quantum,
            "Roundtrip failed at frac {}: {} != {} (diff: {})",
            frac, value, back, diff
        );
    }
}

// Property 2: Addition is commutative (a + b == b + a, bit-exact)
proptest! {
    #[test]
    fn prop_addition_commutative(
        frac in 0u8..=8,
        a in -50.0f32..50.0f32,
        b in -50.0f32..50.0f32,
    ) {
        let fa = FixedPoint::from_f32(a, frac);
        let fb = FixedPoint::from_f32(b, frac);
        prop_assert_eq!((fa + fb).bits(), (fb + fa).bits());
    }
}

// Property 3: Subtraction is the inverse of addition ((a + b) - b == a,
// bit-exact away from saturation)
proptest! {
    #[test]
    fn prop_subtraction_inverse_of_addition(
        frac in 0u8..=8,
        a in -50.0f32..50.0f32,
        b in -50.0f32..50.0f32,
    ) {
        let fa = FixedPoint::from_f32(a, frac);
        let fb = FixedPoint::from_f32(b, frac);
        let roundtrip = (fa + fb) - fb;
        prop_assert_eq!(
            roundtrip.bits(),
            fa.bits(),
            "Inverse failed at frac {}: {} vs {}",
            frac, roundtrip.bits(), fa.bits()
        );
    }
}

// Property 4: Multiplication is commutative under a shared frac
proptest! {
    #[test]
    fn prop_multiplication_commutative(
        frac in 0u8..=6,
        a in -10.0f32..10.0f32,
        b in -10.0f32..10.0f32,
    ) {
        let fa = FixedPoint::from_f32(a, frac);
        let fb = FixedPoint::from_f32(b, frac);
        prop_assert_eq!((fa * fb).bits(), (fb * fa).bits());
    }
}

// Property 5: Determinism (same input always produces the same bits)
proptest! {
    #[test]
    fn prop_determinism(
        frac in 0u8..=12,
        value in -20.0f32..20.0f32,
    ) {
        let fp1 = FixedPoint::from_f32(value, frac);
        let fp2 = FixedPoint::from_f32(value, frac);
        prop_assert_eq!(fp1.bits(), fp2.bits(), "Non-deterministic conversion");
        prop_assert_eq!(fp1.to_f32(), fp2.to_f32());
    }
}

// Property 6: Construction always lands inside the representable range,
// saturating at the boundaries
proptest! {
    #[test]
    fn prop_saturation_bounds(
        frac in 0u8..=8,
        value in prop::num::f32::NORMAL,
    ) {
        let fp = FixedPoint::from_f32(value, frac);
        let lo = f32::from(i16::MIN) / (1i32 << frac) as f32;
        let hi = f32::from(i16::MAX) / (1i32 << frac) as f32;
        let v = fp.to_f32();
        prop_assert!(
            (lo..=hi).contains(&v),
            "Value {} outside representable range [{}, {}] at frac {}",
            v, lo, hi, frac
        );
    }
}

// Property 7: Scaling by 1.0 is the identity (mixed float promotion)
proptest! {
    #[test]
    fn prop_mul_by_one_identity(
        frac in 1u8..=8,
        value in -50.0f32..50.0f32,
    ) {
        let fp = FixedPoint::from_f32(value, frac);
        let scaled = fp * 1.0f32;
        prop_assert_eq!(scaled.bits(), fp.bits());
    }
}

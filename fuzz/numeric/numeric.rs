#![no_main]

use libfuzzer_sys::fuzz_target;
use primext::{ClampToBounds, EqualsWithin, Normalize, NormalizeInt};

fuzz_target!(|data: (u64, u64, u64, u64, u64)| {
    let (v, a, b, c, d) = data;

    let z_f64 = f64::from_bits(v);
    let z_f32 = f32::from_bits(v as u32);

    // Total functions, never panic expected
    _ = z_f64.approx_eq(f64::from_bits(a));
    _ = z_f64.equals_within(z_f32, f64::from_bits(b));
    _ = z_f32.equals_within(f32::from_bits(a as u32), f32::from_bits(b as u32));
    _ = Some(z_f32).approx_eq(None::<f64>);
    assert!(z_f64.approx_eq(z_f64) || !z_f64.is_finite());

    let clamped = (v as i64).clamp_to_bounds(a as i64, b as i64);
    if a as i64 <= b as i64 {
        assert!(clamped >= a as i64 && clamped <= b as i64);
    }
    _ = z_f64.clamp_to_range((f64::from_bits(a), f64::from_bits(b)));

    _ = z_f64.normalize(
        f64::from_bits(a),
        f64::from_bits(b),
        f64::from_bits(c),
        f64::from_bits(d),
    );
    _ = z_f32.normalize_range(
        (f32::from_bits(a as u32), f32::from_bits(b as u32)),
        (f32::from_bits(c as u32), f32::from_bits(d as u32)),
    );

    if a != b {
        _ = v.normalize_int(a, b, c, d);
    }
    if a as i32 != b as i32 {
        _ = (v as i32).normalize(a as i32, b as i32, c as i32, d as i32);
    }
    if a as u8 != b as u8 {
        _ = (v as u8).normalize_int_range((a as u8, b as u8), (c as u8, d as u8));
    }
    assert!(v.try_normalize(a, a, c, d).is_err());
});

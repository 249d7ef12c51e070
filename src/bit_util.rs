const TWO_POW_32: f64 = 4294967296.;

/// ECMAScript `ToInt32`: what `value | 0` evaluates to in JS.
pub fn to_int32(value: f64) -> i32 {
    if !value.is_finite() {
        return 0;
    }
    // fmod keeps the sign of the dividend, so the result fits in i64 with room to spare
    // and the final cast to u32 performs the modulo 2^32 wrap.
    let m = libm::fmod(libm::trunc(value), TWO_POW_32);
    m as i64 as u32 as i32
}

#[test]
fn test_to_int32() {
    assert_eq!(to_int32(0.), 0);
    assert_eq!(to_int32(-0.), 0);
    assert_eq!(to_int32(3.7), 3);
    assert_eq!(to_int32(-3.7), -3);
    assert_eq!(to_int32(-0.5), 0);
    assert_eq!(to_int32(4294967301.), 5);
    assert_eq!(to_int32(2147483648.), i32::MIN);
    assert_eq!(to_int32(-2147483649.), i32::MAX);
    assert_eq!(to_int32(4294967295.9), -1);
    assert_eq!(to_int32(1e21), -559939584);
}

#[test]
fn test_to_int32_non_finite() {
    assert_eq!(to_int32(f64::NAN), 0);
    assert_eq!(to_int32(f64::INFINITY), 0);
    assert_eq!(to_int32(f64::NEG_INFINITY), 0);
}

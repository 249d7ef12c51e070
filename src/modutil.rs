/// `Math.round` from JS: halves round toward positive infinity.
///
/// Unlike `f64::round`, `-2.5` becomes `-2`, and `0.49999999999999994` stays `0`
/// because the comparison is done on the fractional part instead of on `x + 0.5`.
/// Inputs in `[-0.5, 0)` give `-0`, as in JS.
pub fn js_round(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = libm::floor(x);
    if x - floor < 0.5 {
        floor
    } else if floor == -1. {
        -0.
    } else {
        floor + 1.
    }
}

/// Rounds `x` to the nearest multiple of `1 / steps`.
pub fn snap(x: f64, steps: f64) -> f64 {
    js_round(x * steps) / steps
}

#[test]
fn test_js_round() {
    assert_eq!(js_round(2.5), 3.);
    assert_eq!(js_round(-2.5), -2.);
    assert_eq!(js_round(2.4), 2.);
    assert_eq!(js_round(-2.6), -3.);
    assert_eq!(js_round(0.49999999999999994), 0.);
    assert_eq!(js_round(199.99), 200.);
    assert!(js_round(f64::NAN).is_nan());
}

#[test]
fn test_js_round_negative_zero() {
    for x in &[-0.5, -0.25, -1e-300, -0.] {
        let r = js_round(*x);
        assert_eq!(r, 0.);
        assert!(r.is_sign_negative(), "{} rounded to +0", x);
    }
    assert!(js_round(0.25).is_sign_positive());
    assert_eq!(js_round(-0.51), -1.);
}

#[test]
fn test_snap() {
    assert_eq!(snap(0.6011037519201636, 20.), 0.6);
    assert_eq!(snap(0.44829055899754167, 20.), 0.45);
    assert_eq!(snap(0.99, 20.), 1.);
    assert_eq!(snap(0.01, 20.), 0.);
}

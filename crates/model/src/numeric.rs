//! Numeric comparison for the value total order.
//!
//! Integers and doubles share one slot in the cross-kind precedence, so the
//! order must compare them against each other exactly. Casting an `i64` to
//! `f64` can round, which would make distinct values compare equal; the
//! helpers here avoid that.

use core::cmp::Ordering;

/// 2^63 as a double. This is the first double past `i64::MAX` (which itself
/// has no exact double representation), so any double at or above it is out
/// of integer range. Covers positive infinity.
const UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// -2^63 as a double, exactly representable. Only doubles strictly below it
/// are out of integer range. Covers negative infinity.
const LOWER_BOUND: f64 = -9_223_372_036_854_775_808.0;

/// Total order over doubles.
///
/// NaN sorts below every other double, including negative infinity, and two
/// NaNs tie. Zero and negative zero tie. Everything else follows IEEE order.
pub(crate) fn cmp_f64(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

/// Compares an integer against a double without precision loss.
///
/// Doubles outside the integer range (and NaN, which sorts below every
/// number) are settled by the range check alone. In-range doubles are
/// truncated and compared exactly; a truncation tie is re-compared in double
/// space, so `5` vs `5.5` is `Less` while `5` vs `5.0` is `Equal`.
pub(crate) fn cmp_i64_f64(a: i64, b: f64) -> Ordering {
    if b.is_nan() || b < LOWER_BOUND {
        return Ordering::Greater;
    }
    if b >= UPPER_BOUND {
        return Ordering::Less;
    }
    // b now fits in i64; the cast truncates toward zero.
    match a.cmp(&(b as i64)) {
        Ordering::Equal => cmp_f64(a as f64, b),
        ord => ord,
    }
}

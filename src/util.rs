//! Geometry helpers: magnitude-adaptive rounding and grid-line detection.

use crate::models::Line2D;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Largest number of significant digits a `Decimal` can carry.
const MAX_SIGNIFICANT_DIGITS: i64 = 28;

/// Round to `max(1, 8 - exponent)` significant digits, where `exponent` is the
/// position of the most significant digit (`123.4` -> 2, `0.05` -> -2).
///
/// The value goes through its shortest decimal representation first, so binary
/// artifacts such as `0.30000000000000004` collapse to `0.3`. Values a `Decimal`
/// cannot hold (NaN, infinities, beyond ~7.9e28, below its 28-digit scale) are
/// returned unchanged.
pub fn dynamic_round(number: f64) -> f64 {
    if !number.is_finite() {
        return number;
    }
    let Ok(decimal) = Decimal::from_str(&number.to_string()) else {
        return number;
    };
    if decimal.is_zero() {
        return number;
    }

    let precision = (8 - adjusted_exponent(&decimal)).clamp(1, MAX_SIGNIFICANT_DIGITS);
    decimal
        .round_sf_with_strategy(precision as u32, RoundingStrategy::MidpointNearestEven)
        .and_then(|d| d.to_string().parse::<f64>().ok())
        .unwrap_or(number)
}

/// Exponent of the most significant digit.
fn adjusted_exponent(decimal: &Decimal) -> i64 {
    let digits = decimal.mantissa().unsigned_abs().to_string().len() as i64;
    digits - 1 - i64::from(decimal.scale())
}

/// A two-point segment that is exactly horizontal or vertical.
///
/// Such segments are axis grid lines and never count as data.
pub fn is_grid_line(line: &Line2D) -> bool {
    match (line.xdata.as_slice(), line.ydata.as_slice()) {
        ([x0, x1], [y0, y1]) => x0 == x1 || y0 == y1,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(points: &[(f64, f64)]) -> Line2D {
        Line2D::new(
            "",
            points.iter().map(|p| p.0),
            points.iter().map(|p| p.1),
        )
    }

    #[test]
    fn grid_lines_are_axis_parallel_two_point_segments() {
        assert!(is_grid_line(&segment(&[(1.0, 2.0), (2.0, 2.0)])));
        assert!(is_grid_line(&segment(&[(1.0, 2.0), (1.0, 3.0)])));
        assert!(!is_grid_line(&segment(&[(1.0, 2.0), (2.0, 3.0)])));
        assert!(!is_grid_line(&segment(&[
            (1.0, 2.0),
            (2.0, 3.0),
            (3.0, 4.0),
            (4.0, 5.0)
        ])));
    }

    #[test]
    fn four_point_constant_line_is_not_grid() {
        assert!(!is_grid_line(&segment(&[
            (1.0, 2.0),
            (2.0, 2.0),
            (3.0, 2.0),
            (4.0, 2.0)
        ])));
    }

    #[test]
    fn single_point_is_not_grid() {
        assert!(!is_grid_line(&segment(&[(1.0, 2.0)])));
    }

    #[test]
    fn rounding_removes_binary_noise() {
        assert_eq!(dynamic_round(0.1 + 0.2), 0.3);
        assert_eq!(dynamic_round(414.0 - 90.00000000000001), 324.0);
    }

    #[test]
    fn precision_shrinks_with_magnitude() {
        // exponent 2 -> 6 significant digits
        assert_eq!(dynamic_round(123.456789), 123.457);
        // exponent 0 -> 8 significant digits
        assert_eq!(dynamic_round(1.123456789), 1.1234568);
        // exponent 9 -> a single significant digit
        assert_eq!(dynamic_round(1_234_567_890.0), 1_000_000_000.0);
    }

    #[test]
    fn rounding_is_half_even() {
        // 6 significant digits, tie goes to the even neighbour
        assert_eq!(dynamic_round(100.0025), 100.002);
        assert_eq!(dynamic_round(-100.0035), -100.004);
    }

    #[test]
    fn zero_and_non_finite_pass_through() {
        assert_eq!(dynamic_round(0.0), 0.0);
        assert!(dynamic_round(f64::NAN).is_nan());
        assert_eq!(dynamic_round(f64::INFINITY), f64::INFINITY);
    }
}

use tracing::trace;

use crate::error::{FractionalizeError, Result};
use crate::settings::Settings;
use crate::types::Convergent;

/// 2^63, the first float that no longer fits an `i64` partial quotient.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Expands a positive decimal into continued-fraction convergents until one of them
/// lies within the relative tolerance of the input.
///
/// # Arguments
/// * `decimal` - The magnitude to approximate; must be finite and strictly positive.
/// * `settings` - Supplies the relative tolerance and the iteration cap.
///
/// # Returns
/// * `Convergent` - The first convergent `h/k` with `|decimal - h/k| <= decimal * tolerance`.
///
/// Errors with `NonTerminating` once `max_iterations` steps were taken without meeting the
/// tolerance, and with `ConvergentOverflow` when a partial quotient or convergent leaves `i64`
/// (very large or vanishingly small inputs).
pub(super) fn continued_fraction(decimal: f64, settings: &Settings) -> Result<Convergent> {
    debug_assert!(decimal.is_finite() && decimal > 0.0);

    let bound = decimal * settings.tolerance;

    // h(-1)/k(-1) = 1/0 and h(-2)/k(-2) = 0/1
    let (mut h1, mut h2): (i64, i64) = (1, 0);
    let (mut k1, mut k2): (i64, i64) = (0, 1);
    let mut b = 1.0 / decimal;

    for iteration in 1..=settings.max_iterations {
        b = 1.0 / b;
        let floor_b = b.floor();
        if !floor_b.is_finite() || floor_b >= I64_LIMIT {
            return Err(FractionalizeError::ConvergentOverflow {
                iterations: iteration,
            });
        }
        let a = floor_b as i64;

        let overflow = || FractionalizeError::ConvergentOverflow {
            iterations: iteration,
        };
        let h_next = a
            .checked_mul(h1)
            .and_then(|v| v.checked_add(h2))
            .ok_or_else(overflow)?;
        let k_next = a
            .checked_mul(k1)
            .and_then(|v| v.checked_add(k2))
            .ok_or_else(overflow)?;

        h2 = h1;
        h1 = h_next;
        k2 = k1;
        k1 = k_next;
        b -= floor_b;

        // k1 >= 1 from the first step on
        let error = (decimal - h1 as f64 / k1 as f64).abs();
        trace!(
            iteration,
            partial_quotient = a,
            numerator = h1,
            denominator = k1,
            error,
            "continued fraction step"
        );

        if error <= bound {
            return Ok(Convergent {
                numerator: h1,
                denominator: k1,
                iterations: iteration,
            });
        }
    }

    Err(FractionalizeError::NonTerminating {
        iterations: settings.max_iterations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(decimal: f64) -> (i64, i64) {
        let c = continued_fraction(decimal, &Settings::default()).unwrap();
        (c.numerator, c.denominator)
    }

    #[test]
    fn test_simple_fractions() {
        assert_eq!(approx(0.5), (1, 2));
        assert_eq!(approx(0.25), (1, 4));
        assert_eq!(approx(0.75), (3, 4));
        assert_eq!(approx(0.2), (1, 5));
        assert_eq!(approx(0.1), (1, 10));
        assert_eq!(approx(1.0 / 3.0), (1, 3));
    }

    #[test]
    fn test_whole_and_mixed_values() {
        assert_eq!(approx(4.0), (4, 1));
        assert_eq!(approx(1.5), (3, 2));
        assert_eq!(approx(2.25), (9, 4));
    }

    #[test]
    fn test_stops_at_first_convergent_within_tolerance() {
        // 3/1 misses by 0.14, 22/7 is within 0.1% of pi
        let c = continued_fraction(std::f64::consts::PI, &Settings::default()).unwrap();
        assert_eq!((c.numerator, c.denominator), (22, 7));
        assert_eq!(c.iterations, 2);

        // A tighter tolerance walks on to 355/113
        let tight = Settings::default().with_tolerance(1.0e-6);
        let c = continued_fraction(std::f64::consts::PI, &tight).unwrap();
        assert_eq!((c.numerator, c.denominator), (355, 113));
    }

    #[test]
    fn test_iteration_cap() {
        let capped = Settings::default().with_max_iterations(1);
        assert_eq!(
            continued_fraction(std::f64::consts::PI, &capped),
            Err(FractionalizeError::NonTerminating { iterations: 1 })
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            continued_fraction(1.0e19, &Settings::default()),
            Err(FractionalizeError::ConvergentOverflow { iterations: 1 })
        ));
        assert!(matches!(
            continued_fraction(1.0e-300, &Settings::default()),
            Err(FractionalizeError::ConvergentOverflow { .. })
        ));
    }
}

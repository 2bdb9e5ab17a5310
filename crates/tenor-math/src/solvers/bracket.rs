//! Bracket search for bracketing solvers.

use crate::error::{MathError, MathResult};

/// Default number of widening steps attempted by [`expand_bracket`].
pub const DEFAULT_MAX_EXPANSIONS: u32 = 12;

/// Growth factor applied to the bracket width on each expansion.
const GROWTH: f64 = 1.6;

/// Widens `[a, b]` until `f` changes sign across it.
///
/// Each step moves the endpoint with the smaller `|f|` outward, since that
/// is the side the root is more likely to lie beyond. When `floor` is
/// given the lower endpoint never reaches it: a step that would cross it
/// goes halfway to the floor instead. `f` must be finite at every point
/// visited.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::expand_bracket;
///
/// let f = |x: f64| 50.0 - x;
/// let (a, b) = expand_bracket(f, 0.0, 1.0, None, 12).unwrap();
/// assert!(f(a) * f(b) <= 0.0);
/// ```
pub fn expand_bracket<F>(
    f: F,
    a: f64,
    b: f64,
    floor: Option<f64>,
    max_expansions: u32,
) -> MathResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = (a.min(b), a.max(b));
    if lo == hi {
        return Err(MathError::invalid_input("bracket has zero width"));
    }
    if floor.is_some_and(|floor| lo <= floor) {
        return Err(MathError::invalid_input(format!(
            "bracket lower end {lo} is not above the floor"
        )));
    }

    let eval = |x: f64| -> MathResult<f64> {
        let fx = f(x);
        if fx.is_finite() {
            Ok(fx)
        } else {
            Err(MathError::invalid_input(format!("f({x}) = {fx}")))
        }
    };

    let mut f_lo = eval(lo)?;
    let mut f_hi = eval(hi)?;

    for _ in 0..max_expansions {
        if f_lo * f_hi <= 0.0 {
            return Ok((lo, hi));
        }

        let width = hi - lo;
        if f_lo.abs() < f_hi.abs() {
            let mut next = lo - GROWTH * width;
            if let Some(floor) = floor {
                if next <= floor {
                    next = 0.5 * (lo + floor);
                }
            }
            lo = next;
            f_lo = eval(lo)?;
        } else {
            hi += GROWTH * width;
            f_hi = eval(hi)?;
        }
    }

    if f_lo * f_hi <= 0.0 {
        Ok((lo, hi))
    } else {
        log::debug!("no sign change on [{lo}, {hi}]: f = ({f_lo:e}, {f_hi:e})");
        Err(MathError::BracketNotFound {
            a: lo,
            b: hi,
            expansions: max_expansions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_bracketed() {
        let f = |x: f64| x - 0.5;
        assert_eq!(expand_bracket(f, 0.0, 1.0, None, 0).unwrap(), (0.0, 1.0));
    }

    #[test]
    fn test_expands_upward() {
        let f = |x: f64| 20.0 - x;
        let (a, b) = expand_bracket(f, 0.0, 1.0, None, DEFAULT_MAX_EXPANSIONS).unwrap();
        assert!(a <= 20.0 && b >= 20.0);
    }

    #[test]
    fn test_respects_floor() {
        // Defined only above -1, root at -0.99
        let f = |x: f64| (1.0 + x).ln() - (0.01_f64).ln();
        let (a, b) = expand_bracket(f, 0.0, 1.0, Some(-1.0), 20).unwrap();
        assert!(a > -1.0);
        assert!(f(a) * f(b) <= 0.0);
    }

    #[test]
    fn test_gives_up() {
        let f = |x: f64| x * x + 1.0;
        let err = expand_bracket(f, -1.0, 1.0, None, 5).unwrap_err();
        assert!(matches!(err, MathError::BracketNotFound { expansions: 5, .. }));
    }

    #[test]
    fn test_floor_above_lower_end() {
        let f = |x: f64| x;
        assert!(expand_bracket(f, -2.0, 1.0, Some(-1.0), 5).is_err());
    }
}

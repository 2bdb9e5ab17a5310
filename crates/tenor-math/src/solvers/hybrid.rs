//! Newton-Raphson with a Brent fallback.

use super::newton::MIN_DERIVATIVE;
use crate::error::{MathError, MathResult};
use crate::solvers::{brent, SolverConfig, SolverResult};

/// Newton iterations allowed before handing over to Brent.
const NEWTON_BUDGET: u32 = 20;

/// Consecutive residual blow-ups tolerated before Newton is abandoned.
const MAX_DIVERGENCE: u32 = 3;

/// Solves `f(x) = 0` starting with Newton from `initial_guess`, falling back
/// to Brent on `bounds` if Newton stalls, diverges, or leaves the bracket.
///
/// Newton gets at most twenty iterations. Brent then runs under the full
/// `config`, so the bracket must contain a sign change for the fallback to
/// succeed.
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{hybrid, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = hybrid(f, df, 1.5, (1.0, 2.0), &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let (lo, hi) = (bounds.0.min(bounds.1), bounds.0.max(bounds.1));

    match monitored_newton(&f, &df, initial_guess, (lo, hi), config) {
        Ok(result) => Ok(result),
        Err(err) => {
            log::debug!("newton gave up ({err}), falling back to brent on [{lo}, {hi}]");
            brent(&f, lo, hi, config).map(|mut result| {
                result.iterations += NEWTON_BUDGET.min(config.max_iterations);
                result
            })
        }
    }
}

fn monitored_newton<F, DF>(
    f: &F,
    df: &DF,
    initial_guess: f64,
    (lo, hi): (f64, f64),
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let budget = NEWTON_BUDGET.min(config.max_iterations);
    let mut x = initial_guess;
    let mut prev_residual = f64::INFINITY;
    let mut divergence = 0;

    for iteration in 0..budget {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::invalid_input(format!("f({x}) = {fx}")));
        }
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        if fx.abs() > 2.0 * prev_residual {
            divergence += 1;
            if divergence >= MAX_DIVERGENCE {
                return Err(MathError::invalid_input("newton diverging"));
            }
        } else {
            divergence = 0;
        }
        prev_residual = fx.abs();

        let dfx = df(x);
        if !dfx.is_finite() || dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if !(lo..=hi).contains(&x) {
            return Err(MathError::invalid_input(format!(
                "newton left the bracket [{lo}, {hi}] at {x}"
            )));
        }

        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: f(x),
            });
        }
    }

    Err(MathError::convergence_failed(budget, f(x).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_newton_path() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;
        let result = hybrid(f, df, 1.5, (0.0, 3.0), &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < NEWTON_BUDGET);
    }

    #[test]
    fn test_fallback_on_zero_derivative() {
        // Newton starts on a flat point, Brent rescues it
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;
        let result = hybrid(f, df, 0.0, (-2.0, 2.0), &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_fallback_on_cycle() {
        let f = |x: f64| x * x * x - 2.0 * x + 2.0;
        let df = |x: f64| 3.0 * x * x - 2.0;
        let result = hybrid(f, df, 0.0, (-3.0, 1.0), &SolverConfig::default()).unwrap();
        assert!(f(result.root).abs() < 1e-9);
        assert!(result.root < -1.0);
    }

    #[test]
    fn test_fallback_needs_bracket() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;
        let err = hybrid(f, df, 0.5, (-1.0, 1.0), &SolverConfig::default()).unwrap_err();
        assert!(matches!(err, MathError::InvalidBracket { .. }));
    }
}

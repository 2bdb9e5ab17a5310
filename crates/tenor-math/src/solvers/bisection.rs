//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Finds a root of `f` in `[a, b]` by repeated halving.
///
/// Requires `f(a)` and `f(b)` to have opposite signs (or one to be zero).
///
/// # Example
///
/// ```rust
/// use tenor_math::solvers::{bisection, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let mut lo = a.min(b);
    let mut hi = a.max(b);
    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if !f_lo.is_finite() || !f_hi.is_finite() {
        return Err(MathError::invalid_input(format!(
            "non-finite value at bracket endpoint: f({lo}) = {f_lo}, f({hi}) = {f_hi}"
        )));
    }
    if f_lo * f_hi > 0.0 {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    for (root, residual) in [(lo, f_lo), (hi, f_hi)] {
        if residual.abs() < config.tolerance {
            return Ok(SolverResult {
                root,
                iterations: 0,
                residual,
            });
        }
    }

    let mut mid = 0.5 * (lo + hi);
    let mut f_mid = f64::NAN;

    for iteration in 0..config.max_iterations {
        mid = 0.5 * (lo + hi);
        f_mid = f(mid);

        if f_mid.abs() < config.tolerance || 0.5 * (hi - lo) < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: iteration + 1,
                residual: f_mid,
            });
        }

        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    log::debug!("bisection exhausted at x = {mid}, f = {f_mid:e}");
    Err(MathError::convergence_failed(config.max_iterations, f_mid.abs()))
}

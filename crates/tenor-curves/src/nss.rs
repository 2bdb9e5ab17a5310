//! Nelson-Siegel-Svensson term structure.

use serde::{Deserialize, Serialize};

use crate::error::{CurveError, CurveResult};

/// Basis points in one unit of rate.
pub const BPS_PER_UNIT: f64 = 10_000.0;

/// Below this the loading factors switch to their Taylor expansion.
const SMALL_X: f64 = 1e-8;

/// The six parameters of a Nelson-Siegel-Svensson curve.
///
/// ```text
/// r(t) = β0 + β1·L1(t/τ1) + β2·L2(t/τ1) + β3·L2(t/τ2)
/// L1(x) = (1 - e^-x) / x
/// L2(x) = L1(x) - e^-x
/// ```
///
/// Rates are decimals (0.03 is 3%). Both decay constants must be strictly
/// positive and every parameter finite; construction and deserialization
/// enforce this, so a `TermStructure` value is always usable.
///
/// The JSON form carries exactly the six parameter names:
///
/// ```json
/// { "beta0": 0.03, "beta1": 0.0, "beta2": 0.0, "beta3": 0.0, "tau1": 1.0, "tau2": 1.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct TermStructure {
    beta0: f64,
    beta1: f64,
    beta2: f64,
    beta3: f64,
    tau1: f64,
    tau2: f64,
}

/// Unvalidated mirror of [`TermStructure`] used during deserialization.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameters {
    beta0: f64,
    beta1: f64,
    beta2: f64,
    beta3: f64,
    tau1: f64,
    tau2: f64,
}

impl TryFrom<RawParameters> for TermStructure {
    type Error = CurveError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        TermStructure::new(raw.beta0, raw.beta1, raw.beta2, raw.beta3, raw.tau1, raw.tau2)
    }
}

impl TermStructure {
    /// Creates a validated curve.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidCurve` if a parameter is NaN or infinite, or if
    /// either tau is not strictly positive.
    pub fn new(
        beta0: f64,
        beta1: f64,
        beta2: f64,
        beta3: f64,
        tau1: f64,
        tau2: f64,
    ) -> CurveResult<Self> {
        let named = [
            ("beta0", beta0),
            ("beta1", beta1),
            ("beta2", beta2),
            ("beta3", beta3),
            ("tau1", tau1),
            ("tau2", tau2),
        ];
        if let Some((name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(CurveError::invalid_curve(format!(
                "{name} must be finite, got {value}"
            )));
        }
        if tau1 <= 0.0 {
            return Err(CurveError::invalid_curve(format!(
                "tau1 must be positive, got {tau1}"
            )));
        }
        if tau2 <= 0.0 {
            return Err(CurveError::invalid_curve(format!(
                "tau2 must be positive, got {tau2}"
            )));
        }

        Ok(Self {
            beta0,
            beta1,
            beta2,
            beta3,
            tau1,
            tau2,
        })
    }

    /// A curve with the same zero rate at every maturity.
    pub fn flat(rate: f64) -> CurveResult<Self> {
        Self::new(rate, 0.0, 0.0, 0.0, 1.0, 1.0)
    }

    /// Level parameter β0, the long-end rate.
    pub fn beta0(&self) -> f64 {
        self.beta0
    }

    /// Slope parameter β1; `β0 + β1` is the short rate.
    pub fn beta1(&self) -> f64 {
        self.beta1
    }

    /// First curvature parameter β2.
    pub fn beta2(&self) -> f64 {
        self.beta2
    }

    /// Second curvature parameter β3.
    pub fn beta3(&self) -> f64 {
        self.beta3
    }

    /// First decay constant τ1.
    pub fn tau1(&self) -> f64 {
        self.tau1
    }

    /// Second decay constant τ2.
    pub fn tau2(&self) -> f64 {
        self.tau2
    }

    /// Zero rate at `t` years with `spread_bps` added.
    ///
    /// At `t = 0` this is the limit `β0 + β1` (plus the spread).
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidCurve` for a negative or non-finite `t` or a
    /// non-finite spread.
    pub fn zero_rate(&self, t: f64, spread_bps: f64) -> CurveResult<f64> {
        check_time(t)?;
        if !spread_bps.is_finite() {
            return Err(CurveError::invalid_curve(format!(
                "spread must be finite, got {spread_bps} bps"
            )));
        }
        Ok(self.model_rate(t) + spread_bps / BPS_PER_UNIT)
    }

    /// Annually compounded discount factor `(1 + r(t) + s)^(-t)`.
    ///
    /// Negative rates give factors above one, which are accepted. A rate at
    /// or below -100% has no discount factor and is rejected.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidCurve` if the rate makes `1 + r` non-positive or
    /// the resulting factor is not a finite positive number.
    pub fn discount_factor(&self, t: f64, spread_bps: f64) -> CurveResult<f64> {
        let rate = self.zero_rate(t, spread_bps)?;
        if t == 0.0 {
            return Ok(1.0);
        }

        let growth = 1.0 + rate;
        if growth <= 0.0 {
            return Err(CurveError::invalid_curve(format!(
                "zero rate {rate} at t = {t} is at or below -100%"
            )));
        }

        let df = growth.powf(-t);
        if !df.is_finite() || df <= 0.0 {
            return Err(CurveError::invalid_curve(format!(
                "discount factor {df} at t = {t} is not a positive number"
            )));
        }
        Ok(df)
    }

    /// Instantaneous forward rate of the model at `t` years.
    ///
    /// `f(t) = β0 + β1·e^(-x1) + β2·x1·e^(-x1) + β3·x2·e^(-x2)` with
    /// `x1 = t/τ1` and `x2 = t/τ2`; equal to `β0 + β1` at `t = 0`.
    pub fn forward_rate(&self, t: f64) -> CurveResult<f64> {
        check_time(t)?;
        let x1 = t / self.tau1;
        let x2 = t / self.tau2;
        let e1 = (-x1).exp();
        let e2 = (-x2).exp();
        Ok(self.beta0 + self.beta1 * e1 + self.beta2 * x1 * e1 + self.beta3 * x2 * e2)
    }

    fn model_rate(&self, t: f64) -> f64 {
        let x1 = t / self.tau1;
        let x2 = t / self.tau2;
        self.beta0
            + self.beta1 * slope_loading(x1)
            + self.beta2 * curvature_loading(x1)
            + self.beta3 * curvature_loading(x2)
    }
}

fn check_time(t: f64) -> CurveResult<()> {
    if t.is_finite() && t >= 0.0 {
        Ok(())
    } else {
        Err(CurveError::invalid_curve(format!(
            "time must be a finite non-negative number of years, got {t}"
        )))
    }
}

/// `(1 - e^-x) / x`, tending to 1 at zero.
fn slope_loading(x: f64) -> f64 {
    if x.abs() < SMALL_X {
        1.0 - x / 2.0 + x * x / 6.0
    } else {
        -(-x).exp_m1() / x
    }
}

/// `(1 - e^-x) / x - e^-x`, tending to 0 at zero.
fn curvature_loading(x: f64) -> f64 {
    if x.abs() < SMALL_X {
        x / 2.0 - x * x / 3.0
    } else {
        slope_loading(x) - (-x).exp()
    }
}

/// Template curve written by the CLI when no term file is available.
impl Default for TermStructure {
    fn default() -> Self {
        Self {
            beta0: 0.03,
            beta1: 0.0,
            beta2: 0.0,
            beta3: 0.0,
            tau1: 1.0,
            tau2: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn humped() -> TermStructure {
        TermStructure::new(0.045, -0.02, 0.01, -0.005, 2.0, 8.0).unwrap()
    }

    #[test]
    fn test_rejects_non_positive_tau() {
        assert!(TermStructure::new(0.03, 0.0, 0.0, 0.0, 0.0, 1.0).is_err());
        assert!(TermStructure::new(0.03, 0.0, 0.0, 0.0, 1.0, -2.0).is_err());
        assert!(TermStructure::new(f64::NAN, 0.0, 0.0, 0.0, 1.0, 1.0).is_err());
        assert!(TermStructure::new(0.03, 0.0, 0.0, f64::INFINITY, 1.0, 1.0).is_err());
    }

    #[test]
    fn test_short_rate_limit() {
        let curve = humped();
        assert_eq!(curve.zero_rate(0.0, 0.0).unwrap(), 0.045 - 0.02);
        assert_relative_eq!(curve.zero_rate(1e-12, 0.0).unwrap(), 0.025, epsilon = 1e-12);
        assert_relative_eq!(curve.forward_rate(0.0).unwrap(), 0.025, epsilon = 1e-15);
    }

    #[test]
    fn test_long_rate_limit() {
        let curve = humped();
        assert_relative_eq!(curve.zero_rate(500.0, 0.0).unwrap(), 0.045, epsilon = 1e-3);
    }

    #[test]
    fn test_loadings_continuous_at_switch() {
        for x in [SMALL_X * 0.999, SMALL_X * 1.001] {
            assert_relative_eq!(slope_loading(x), 1.0, epsilon = 1e-8);
            assert_relative_eq!(curvature_loading(x), 0.0, epsilon = 1e-8);
        }
        assert_relative_eq!(slope_loading(1.0), 1.0 - (-1.0_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_flat_curve() {
        let curve = TermStructure::flat(0.03).unwrap();
        for t in [0.0, 0.5, 1.0, 10.0] {
            assert_relative_eq!(curve.zero_rate(t, 0.0).unwrap(), 0.03, epsilon = 1e-15);
        }
        assert_relative_eq!(curve.discount_factor(1.0, 0.0).unwrap(), 1.0 / 1.03, epsilon = 1e-12);
        assert_relative_eq!(
            curve.discount_factor(2.0, 100.0).unwrap(),
            1.04_f64.powi(-2),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_discount_factor_at_zero() {
        assert_eq!(humped().discount_factor(0.0, 250.0).unwrap(), 1.0);
    }

    #[test]
    fn test_spread_shifts_zero_rate() {
        let curve = humped();
        let base = curve.zero_rate(3.0, 0.0).unwrap();
        assert_relative_eq!(curve.zero_rate(3.0, 150.0).unwrap(), base + 0.015, epsilon = 1e-15);
    }

    #[test]
    fn test_negative_rates_accepted() {
        let curve = TermStructure::flat(-0.005).unwrap();
        let df = curve.discount_factor(2.0, 0.0).unwrap();
        assert!(df > 1.0);
    }

    #[test]
    fn test_rate_below_minus_100_percent_rejected() {
        let curve = TermStructure::flat(0.03).unwrap();
        let err = curve.discount_factor(1.0, -20_000.0).unwrap_err();
        assert!(matches!(err, CurveError::InvalidCurve { .. }));
    }

    #[test]
    fn test_bad_time_rejected() {
        let curve = humped();
        assert!(curve.zero_rate(-1.0, 0.0).is_err());
        assert!(curve.discount_factor(f64::NAN, 0.0).is_err());
        assert!(curve.zero_rate(1.0, f64::INFINITY).is_err());
        assert!(curve.forward_rate(f64::INFINITY).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let curve = humped();
        let json = serde_json::to_string(&curve).unwrap();
        assert!(json.contains("\"tau2\":8.0"));
        let back: TermStructure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, curve);
    }

    #[test]
    fn test_json_validation() {
        let bad = r#"{"beta0":0.03,"beta1":0,"beta2":0,"beta3":0,"tau1":0,"tau2":1}"#;
        let err = serde_json::from_str::<TermStructure>(bad).unwrap_err();
        assert!(err.to_string().contains("tau1"));

        let missing = r#"{"beta0":0.03,"beta1":0}"#;
        assert!(serde_json::from_str::<TermStructure>(missing).is_err());
    }

    #[test]
    fn test_default_is_valid() {
        let template = TermStructure::default();
        let rebuilt = TermStructure::new(
            template.beta0(),
            template.beta1(),
            template.beta2(),
            template.beta3(),
            template.tau1(),
            template.tau2(),
        );
        assert_eq!(rebuilt.unwrap(), template);
    }
}

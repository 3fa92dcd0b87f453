//! Cubic transform and its threshold event.
//!
//! The experiment asks how often `f(x) = x³ + 2x + 1` lands strictly
//! above 1 when `x ~ N(mean, std²)`. Since `f(x) - 1 = x(x² + 2)` and
//! `x² + 2 > 0`, the event is exactly `x > 0`, which gives a closed-form
//! reference `Φ(mean / std)` to check the Monte Carlo estimate against.

use std::f64::consts::SQRT_2;

/// Level the transform has to exceed.
pub const THRESHOLD: f64 = 1.0;

/// `f(x) = x³ + 2x + 1`.
#[inline]
pub fn cubic(x: f64) -> f64 {
    x.powi(3) + 2.0 * x + 1.0
}

/// Whether `f(x)` is strictly above [`THRESHOLD`].
#[inline]
pub fn exceeds_threshold(x: f64) -> bool {
    cubic(x) > THRESHOLD
}

/// Fraction of `samples` whose transform exceeds the threshold.
///
/// Returns 0.0 for an empty slice; callers reject empty draws before
/// they get here.
#[allow(clippy::cast_precision_loss)]
pub fn fraction_exceeding(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let hits = samples.iter().filter(|&&x| exceeds_threshold(x)).count();
    hits as f64 / samples.len() as f64
}

/// Standard normal CDF.
pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * libm::erfc(-z / SQRT_2)
}

/// Closed-form `P(f(X) > 1)` for `X ~ N(mean, std²)`.
///
/// A degenerate distribution (`std == 0`) puts all mass on `mean`.
pub fn analytic_probability(mean: f64, std: f64) -> f64 {
    if std <= 0.0 {
        return if exceeds_threshold(mean) { 1.0 } else { 0.0 };
    }
    standard_normal_cdf(mean / std)
}

//! Continuous distributions: same contract shape as the discrete family
//! (pdf instead of pmf), but no enumerated conversion and no algebra.
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Uniform`] | lower a, upper b | [a, b] |
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`Exponential`] | rate λ | [0, ∞) |
//!
//! # Example
//!
//! ```
//! use probdist::{Normal, ContinuousDistribution};
//!
//! let n = Normal::new(0.0_f64, 1.0).unwrap();
//! assert!((n.cdf(0.0) - 0.5).abs() < 1e-14);
//! ```

mod exponential;
mod normal;
mod uniform;

#[cfg(test)]
mod tests;

pub use exponential::Exponential;
pub use normal::Normal;
pub use uniform::Uniform;

use crate::traits::FloatScalar;

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T: FloatScalar> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;

    /// Expected value E\[X\].
    fn mean(&self) -> T;

    /// Variance Var(X).
    fn variance(&self) -> T;

    /// Standard deviation √Var(X).
    fn standard_deviation(&self) -> T {
        self.variance().sqrt()
    }

    /// Domain predicate: `x` lies in the distribution's support.
    fn is_supported(&self, x: T) -> bool;
}

use super::DiscreteDistribution;
use crate::error::ProbError;
use crate::traits::FloatScalar;

/// Bernoulli distribution with success probability p.
///
/// P(X = 1) = p, P(X = 0) = 1 − p.
///
/// # Example
///
/// ```
/// use probdist::{Bernoulli, DiscreteDistribution};
///
/// let b = Bernoulli::new(0.7_f64).unwrap();
/// assert!((b.pmf(0) - 0.3).abs() < 1e-14);
/// assert!((b.pmf(1) - 0.7).abs() < 1e-14);
/// assert!((b.variance() - 0.21).abs() < 1e-14);
/// assert!(b.eval(0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Bernoulli<T> {
    p: T,
}

impl<T: FloatScalar> Bernoulli<T> {
    /// Create a Bernoulli distribution with success probability `p`.
    /// Requires `0 ≤ p ≤ 1`.
    pub fn new(p: T) -> Result<Self, ProbError> {
        if p < T::zero() || p > T::one() {
            return Err(ProbError::InvalidParameter);
        }
        Ok(Self { p })
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Bernoulli<T> {
    fn pmf(&self, k: u64) -> T {
        match k {
            0 => T::one() - self.p,
            1 => self.p,
            _ => T::zero(),
        }
    }

    fn mean(&self) -> T {
        self.p
    }

    fn variance(&self) -> T {
        self.p * (T::one() - self.p)
    }

    fn support_end(&self) -> Option<u64> {
        Some(1)
    }
}

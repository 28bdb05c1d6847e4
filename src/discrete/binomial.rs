use super::DiscreteDistribution;
use crate::error::ProbError;
use crate::special::{choose, powu};
use crate::traits::FloatScalar;

/// Binomial distribution B(n, p).
///
/// P(X = k) = C(n,k) p^k (1−p)^{n−k} for k = 0, …, n.
///
/// # Example
///
/// ```
/// use probdist::{Binomial, DiscreteDistribution};
///
/// let b = Binomial::new(10, 0.5_f64).unwrap();
/// assert!((b.pmf(5) - 0.24609375).abs() < 1e-15);
/// assert!((b.mean() - 5.0).abs() < 1e-14);
/// assert!((b.variance() - 2.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binomial<T> {
    n: u64,
    p: T,
}

impl<T: FloatScalar> Binomial<T> {
    /// Create a binomial distribution with `n` trials and success probability
    /// `p`. Requires `0 ≤ p ≤ 1`.
    pub fn new(n: u64, p: T) -> Result<Self, ProbError> {
        if p < T::zero() || p > T::one() {
            return Err(ProbError::InvalidParameter);
        }
        Ok(Self { n, p })
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Binomial<T> {
    fn pmf(&self, k: u64) -> T {
        if k > self.n {
            return T::zero();
        }
        choose::<T>(self.n, k) * powu(self.p, k) * powu(T::one() - self.p, self.n - k)
    }

    fn mean(&self) -> T {
        T::from(self.n).unwrap() * self.p
    }

    fn variance(&self) -> T {
        T::from(self.n).unwrap() * self.p * (T::one() - self.p)
    }

    fn support_end(&self) -> Option<u64> {
        Some(self.n)
    }
}

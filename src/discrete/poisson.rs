use super::DiscreteDistribution;
use crate::error::ProbError;
use crate::traits::FloatScalar;

/// Poisson distribution with rate λ.
///
/// P(X = k) = λ^k e^{−λ} / k! for k = 0, 1, 2, …
///
/// The support is unbounded, so conversion to an enumerated form requires an
/// explicit `stop`.
///
/// # Example
///
/// ```
/// use probdist::{Poisson, DiscreteDistribution};
///
/// let p = Poisson::new(0.75_f64).unwrap();
/// assert!((p.pmf(0) - 0.47236655274101474).abs() < 1e-15);
/// assert!((p.cdf(2.0) - 0.9594945602551862).abs() < 1e-15);
/// assert!((p.mean() - p.variance()).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Poisson<T> {
    lambda: T,
}

impl<T: FloatScalar> Poisson<T> {
    /// Create a Poisson distribution with rate `lambda`. Requires
    /// `lambda > 0`.
    pub fn new(lambda: T) -> Result<Self, ProbError> {
        if lambda <= T::zero() {
            return Err(ProbError::InvalidParameter);
        }
        Ok(Self { lambda })
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Poisson<T> {
    fn pmf(&self, k: u64) -> T {
        // Accumulate λ^k/k! multiplicatively; neither λ^k nor k! alone,
        // keeping intermediate magnitudes bounded for large k.
        let mut p = (-self.lambda).exp();
        for i in 1..=k {
            p = p * self.lambda / T::from(i).unwrap();
        }
        p
    }

    fn mean(&self) -> T {
        self.lambda
    }

    fn variance(&self) -> T {
        self.lambda
    }

    fn support_end(&self) -> Option<u64> {
        None
    }
}

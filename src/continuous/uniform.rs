use super::ContinuousDistribution;
use crate::error::ProbError;
use crate::traits::FloatScalar;

/// Continuous uniform distribution on [a, b].
///
/// # Example
///
/// ```
/// use probdist::{Uniform, ContinuousDistribution};
///
/// let u = Uniform::new(0.0_f64, 1.0).unwrap();
/// assert!((u.pdf(0.5) - 1.0).abs() < 1e-14);
/// assert!((u.cdf(0.5) - 0.5).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Uniform<T> {
    a: T,
    b: T,
}

impl<T: FloatScalar> Uniform<T> {
    /// Create a uniform distribution on [a, b]. Requires `a < b`.
    pub fn new(a: T, b: T) -> Result<Self, ProbError> {
        if a >= b {
            return Err(ProbError::InvalidParameter);
        }
        Ok(Self { a, b })
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for Uniform<T> {
    fn pdf(&self, x: T) -> T {
        if x >= self.a && x <= self.b {
            T::one() / (self.b - self.a)
        } else {
            T::zero()
        }
    }

    fn cdf(&self, x: T) -> T {
        if x <= self.a {
            T::zero()
        } else if x >= self.b {
            T::one()
        } else {
            (x - self.a) / (self.b - self.a)
        }
    }

    fn mean(&self) -> T {
        let two = T::one() + T::one();
        (self.a + self.b) / two
    }

    fn variance(&self) -> T {
        let twelve = T::from(12.0).unwrap();
        let d = self.b - self.a;
        d * d / twelve
    }

    fn is_supported(&self, x: T) -> bool {
        x >= self.a && x <= self.b
    }
}

use super::DiscreteDistribution;
use crate::error::ProbError;
use crate::special::powu;
use crate::traits::FloatScalar;

/// Geometric distribution with success probability p, under either support
/// convention.
///
/// With `include_success_trial` the variable counts the trials up to and
/// including the first success: P(X = k) = (1−p)^{k−1} p on {1, 2, …}.
/// Without it the variable counts only the failures before the first
/// success: P(X = k) = (1−p)^k p on {0, 1, …}.
///
/// The support is unbounded, so conversion to an enumerated form requires an
/// explicit `stop`.
///
/// # Example
///
/// ```
/// use probdist::{Geometric, DiscreteDistribution};
///
/// let g = Geometric::new(0.75_f64, true).unwrap();
/// assert!((g.pmf(1) - 0.75).abs() < 1e-14);
/// assert!((g.mean() - 4.0 / 3.0).abs() < 1e-14);
/// assert!(g.eval(0.0).is_err());
///
/// let g = Geometric::new(0.75_f64, false).unwrap();
/// assert!((g.pmf(0) - 0.75).abs() < 1e-14);
/// assert!((g.mean() - 1.0 / 3.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Geometric<T> {
    p: T,
    include_success_trial: bool,
}

impl<T: FloatScalar> Geometric<T> {
    /// Create a geometric distribution with success probability `p`.
    /// Requires `0 < p ≤ 1`. `include_success_trial` selects the
    /// trials-counting convention on {1, 2, …} over the failures-counting
    /// convention on {0, 1, …}.
    pub fn new(p: T, include_success_trial: bool) -> Result<Self, ProbError> {
        if p <= T::zero() || p > T::one() {
            return Err(ProbError::InvalidParameter);
        }
        Ok(Self {
            p,
            include_success_trial,
        })
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Geometric<T> {
    fn pmf(&self, k: u64) -> T {
        let q = T::one() - self.p;
        if self.include_success_trial {
            if k == 0 {
                return T::zero();
            }
            powu(q, k - 1) * self.p
        } else {
            powu(q, k) * self.p
        }
    }

    fn mean(&self) -> T {
        if self.include_success_trial {
            T::one() / self.p
        } else {
            (T::one() - self.p) / self.p
        }
    }

    fn variance(&self) -> T {
        (T::one() - self.p) / (self.p * self.p)
    }

    fn support_end(&self) -> Option<u64> {
        None
    }

    fn support_start(&self) -> u64 {
        if self.include_success_trial {
            1
        } else {
            0
        }
    }
}

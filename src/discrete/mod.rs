//! Discrete distributions and the enumerated random-variable algebra.
//!
//! Each parameterized distribution implements [`DiscreteDistribution`] for a
//! consistent API, computing pmf/cdf analytically without materializing an
//! outcome sequence. Conversion into a [`DiscreteRandomVariable`] enumerates
//! the pmf over a finite window; once materialized, all further composition
//! (convolution, joint tables, covariance) happens inside the
//! [`DiscreteRandomVariable`] algebra.
//!
//! # Discrete distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Bernoulli`] | probability p | {0, 1} |
//! | [`Binomial`] | trials n, probability p | {0, …, n} |
//! | [`Geometric`] | probability p, success-trial flag | {1, 2, …} or {0, 1, …} |
//! | [`Poisson`] | rate λ | {0, 1, 2, …} |
//! | [`Hypergeometric`] | population N, successes K, draws n | {max(0, n−(N−K)), …, min(n, K)} |
//!
//! # Example
//!
//! ```
//! use probdist::{Poisson, DiscreteDistribution};
//!
//! let p = Poisson::new(0.75_f64).unwrap();
//! assert!((p.pmf(0) - 0.47236655274101474).abs() < 1e-15);
//!
//! // Unbounded support: truncating to a window renormalizes the weights.
//! let rv = p.to_discrete_random_variable(None, Some(4)).unwrap();
//! let total: f64 = rv.probabilities().iter().sum();
//! assert!((total - 1.0).abs() < 1e-12);
//! ```

mod bernoulli;
mod binomial;
pub mod event;
mod geometric;
mod hypergeometric;
mod poisson;
mod random_variable;


pub use bernoulli::Bernoulli;
pub use binomial::Binomial;
pub use geometric::Geometric;
pub use hypergeometric::Hypergeometric;
pub use poisson::Poisson;
pub use random_variable::DiscreteRandomVariable;

use alloc::vec::Vec;

use crate::error::ProbError;
use crate::traits::FloatScalar;

/// Trait for parameterized discrete probability distributions.
///
/// Implementors supply the closed forms (`pmf`, `mean`, `variance`) and the
/// support bounds; cumulative probability, the support predicate, checked
/// evaluation, and enumeration into a [`DiscreteRandomVariable`] are derived
/// once here.
pub trait DiscreteDistribution<T: FloatScalar> {
    /// Probability mass function P(X = k). Zero outside the support.
    fn pmf(&self, k: u64) -> T;

    /// Expected value E\[X\].
    fn mean(&self) -> T;

    /// Variance Var(X).
    fn variance(&self) -> T;

    /// Upper end of the support, inclusive; `None` when unbounded above.
    fn support_end(&self) -> Option<u64>;

    /// Lower end of the support, inclusive.
    fn support_start(&self) -> u64 {
        0
    }

    /// Alias for [`mean`](Self::mean).
    fn expected_value(&self) -> T {
        self.mean()
    }

    /// Standard deviation √Var(X).
    fn standard_deviation(&self) -> T {
        self.variance().sqrt()
    }

    /// Cumulative distribution function P(X ≤ x).
    ///
    /// Sums `pmf(k)` for every supported integer `k ≤ x`; the threshold need
    /// not be an integer (the sum floors it naturally), and thresholds below
    /// the support yield 0.
    fn cdf(&self, x: T) -> T {
        let start = self.support_start();
        if x < T::from(start).unwrap() {
            return T::zero();
        }
        let k = match x.floor().to_u64() {
            Some(k) => k,
            // Beyond u64: the whole support lies below the threshold.
            None => return T::one(),
        };
        let stop = match self.support_end() {
            Some(end) => k.min(end),
            None => k,
        };
        let mut total = T::zero();
        for i in start..=stop {
            total = total + self.pmf(i);
        }
        total
    }

    /// Domain predicate: `x` is integer-valued and within the support range.
    fn is_supported(&self, x: T) -> bool {
        if !x.is_finite() || x.fract() != T::zero() {
            return false;
        }
        if x < T::from(self.support_start()).unwrap() {
            return false;
        }
        match self.support_end() {
            Some(end) => x <= T::from(end).unwrap(),
            None => true,
        }
    }

    /// Checked point evaluation: validates [`is_supported`](Self::is_supported)
    /// before delegating to [`pmf`](Self::pmf).
    ///
    /// Fails with [`ProbError::OutsideSupport`] for non-integer, negative, or
    /// out-of-range queries.
    fn eval(&self, x: T) -> Result<T, ProbError> {
        if !self.is_supported(x) {
            return Err(ProbError::OutsideSupport);
        }
        let k = x.to_u64().ok_or(ProbError::OutsideSupport)?;
        Ok(self.pmf(k))
    }

    /// Enumerate `pmf(k)` for `k` in `[start, stop]` and return the result as
    /// a [`DiscreteRandomVariable`].
    ///
    /// Both bounds default to the natural support. Fails with
    /// [`ProbError::UnboundedSupport`] if the support is unbounded above and
    /// no `stop` is supplied, [`ProbError::InvalidParameter`] if
    /// `start > stop`, and [`ProbError::OutsideSupport`] if the window does
    /// not intersect the support. When the window truncates the distribution
    /// the enumerated weights are renormalized so the materialized variable
    /// still obeys the law of total probability; a window covering the full
    /// finite support carries the raw pmf values.
    fn to_discrete_random_variable(
        &self,
        start: Option<u64>,
        stop: Option<u64>,
    ) -> Result<DiscreteRandomVariable<T>, ProbError> {
        let lo = start.unwrap_or_else(|| self.support_start());
        let hi = match stop.or_else(|| self.support_end()) {
            Some(hi) => hi,
            None => return Err(ProbError::UnboundedSupport),
        };
        if lo > hi {
            return Err(ProbError::InvalidParameter);
        }
        let disjoint = hi < self.support_start()
            || match self.support_end() {
                Some(end) => lo > end,
                None => false,
            };
        if disjoint {
            return Err(ProbError::OutsideSupport);
        }
        let truncated = lo > self.support_start()
            || match self.support_end() {
                Some(end) => hi < end,
                None => true,
            };

        let mut x = Vec::new();
        let mut px = Vec::new();
        for k in lo..=hi {
            x.push(T::from(k).unwrap());
            px.push(self.pmf(k));
        }
        if truncated {
            let total = px.iter().fold(T::zero(), |acc, &p| acc + p);
            for p in px.iter_mut() {
                *p = *p / total;
            }
        }
        DiscreteRandomVariable::new(x, px)
    }
}

use core::marker::PhantomData;

use super::DiscreteDistribution;
use crate::error::ProbError;
use crate::special::choose;
use crate::traits::FloatScalar;

/// Hypergeometric distribution: `draws` draws without replacement from a
/// population of size `population` containing `successes` successes.
///
/// P(X = k) = C(K,k) C(N−K, n−k) / C(N,n) on
/// {max(0, n−(N−K)), …, min(n, K)}.
///
/// The parameters are integer counts; the scalar type only selects the
/// arithmetic used for queries.
///
/// # Example
///
/// ```
/// use probdist::{Hypergeometric, DiscreteDistribution};
///
/// let h = Hypergeometric::<f64>::new(10, 5, 3).unwrap();
/// assert!((h.pmf(1) - 0.4166666666666667_f64).abs() < 1e-15);
/// assert!((h.mean() - 1.5_f64).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Hypergeometric<T> {
    population: u64,
    successes: u64,
    draws: u64,
    _scalar: PhantomData<T>,
}

impl<T: FloatScalar> Hypergeometric<T> {
    /// Create a hypergeometric distribution. Requires a non-empty population
    /// with `successes ≤ population` and `draws ≤ population`.
    pub fn new(population: u64, successes: u64, draws: u64) -> Result<Self, ProbError> {
        if population == 0 || successes > population || draws > population {
            return Err(ProbError::InvalidParameter);
        }
        Ok(Self {
            population,
            successes,
            draws,
            _scalar: PhantomData,
        })
    }
}

impl<T: FloatScalar> DiscreteDistribution<T> for Hypergeometric<T> {
    fn pmf(&self, k: u64) -> T {
        let lo = (self.draws + self.successes).saturating_sub(self.population);
        let hi = self.draws.min(self.successes);
        if k < lo || k > hi {
            return T::zero();
        }
        choose::<T>(self.successes, k)
            * choose::<T>(self.population - self.successes, self.draws - k)
            / choose::<T>(self.population, self.draws)
    }

    fn mean(&self) -> T {
        T::from(self.draws).unwrap() * T::from(self.successes).unwrap()
            / T::from(self.population).unwrap()
    }

    fn variance(&self) -> T {
        if self.population <= 1 {
            return T::zero();
        }
        let n = T::from(self.draws).unwrap();
        let big_n = T::from(self.population).unwrap();
        let ratio = T::from(self.successes).unwrap() / big_n;
        n * ratio * (T::one() - ratio) * (big_n - n) / (big_n - T::one())
    }

    fn support_end(&self) -> Option<u64> {
        Some(self.draws.min(self.successes))
    }

    fn support_start(&self) -> u64 {
        (self.draws + self.successes).saturating_sub(self.population)
    }
}

//! Generic enumerated random variable: paired outcome/probability sequences
//! with moment arithmetic and exponentiation.

use alloc::vec::Vec;

use crate::error::ProbError;
use crate::traits::FloatScalar;

/// Random variable over an ordered sequence of numeric outcomes `x`, paired
/// index-wise with probabilities `px`.
///
/// Immutable after construction; every transform returns a new instance.
/// Outcomes are not required to be unique. The probability-sum check is an
/// exact equality; for floating accumulations prefer
/// [`DiscreteRandomVariable`](crate::DiscreteRandomVariable), which rounds
/// before comparing.
///
/// # Example
///
/// ```
/// use probdist::RandomVariable;
///
/// let rv = RandomVariable::new(vec![1.0_f64, 2.0, 3.0], vec![0.5, 0.25, 0.25]).unwrap();
/// assert!((rv.expected_value() - 1.75).abs() < 1e-14);
/// assert_eq!(rv.mean(), rv.expected_value());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RandomVariable<T> {
    x: Vec<T>,
    px: Vec<T>,
}

impl<T: FloatScalar> RandomVariable<T> {
    /// Create a random variable from outcomes `x` and probabilities `px`.
    ///
    /// Fails with [`ProbError::ShapeMismatch`] if the lengths differ, or
    /// [`ProbError::TotalProbability`] if the probabilities do not sum to 1
    /// exactly.
    pub fn new(x: Vec<T>, px: Vec<T>) -> Result<Self, ProbError> {
        if x.len() != px.len() {
            return Err(ProbError::ShapeMismatch {
                outcomes: x.len(),
                probabilities: px.len(),
            });
        }
        let total = px.iter().fold(T::zero(), |acc, &p| acc + p);
        if total != T::one() {
            return Err(ProbError::TotalProbability);
        }
        Ok(Self { x, px })
    }

    /// Create a random variable from `(outcome, probability)` pairs.
    ///
    /// Convenience constructor for key-unique, order-irrelevant mappings.
    ///
    /// # Example
    ///
    /// ```
    /// use probdist::RandomVariable;
    ///
    /// let rv = RandomVariable::from_pairs([(0.0_f64, 0.5), (1.0, 0.5)]).unwrap();
    /// assert!((rv.mean() - 0.5).abs() < 1e-14);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let (x, px) = pairs.into_iter().unzip();
        Self::new(x, px)
    }

    /// Declared outcomes, in construction order.
    pub fn outcomes(&self) -> &[T] {
        &self.x
    }

    /// Probabilities paired index-wise with [`outcomes`](Self::outcomes).
    pub fn probabilities(&self) -> &[T] {
        &self.px
    }

    /// Raise each outcome to `power`, leaving probabilities unchanged
    /// positionally.
    ///
    /// Outcomes that become equal after exponentiation (e.g. `-2` and `2`
    /// squared) are **not** merged; they remain separate entries with their
    /// original probabilities. This is an elementwise map over the outcome
    /// sequence, not a pushed-forward distribution, and it feeds `E[X²]` in
    /// [`variance`](Self::variance) as-is.
    pub fn pow(&self, power: i32) -> Self {
        Self {
            x: self.x.iter().map(|&v| v.powi(power)).collect(),
            px: self.px.clone(),
        }
    }

    /// Expected value E\[X\] = Σ xᵢ·pxᵢ.
    pub fn expected_value(&self) -> T {
        self.x
            .iter()
            .zip(self.px.iter())
            .fold(T::zero(), |acc, (&v, &p)| acc + v * p)
    }

    /// Alias for [`expected_value`](Self::expected_value).
    pub fn mean(&self) -> T {
        self.expected_value()
    }

    /// Variance Var(X) = E\[X²\] − E\[X\]².
    pub fn variance(&self) -> T {
        let mean = self.expected_value();
        self.pow(2).expected_value() - mean * mean
    }

    /// Standard deviation √Var(X).
    pub fn standard_deviation(&self) -> T {
        self.variance().sqrt()
    }
}

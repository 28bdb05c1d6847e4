//! Enumerated discrete random variable with support enforcement and the
//! composition algebra: convolution, joint tables, covariance, correlation.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::ops::Mul;

use super::event;
use crate::error::ProbError;
use crate::traits::FloatScalar;

/// Discrete random variable over declared outcomes.
///
/// Same outcome/probability pairing as
/// [`RandomVariable`](crate::RandomVariable), but the probability-sum check
/// allows a small accumulation tolerance instead of exact equality with 1,
/// and point queries are gated on declared-outcome membership.
///
/// Multiplication convolves two independent variables:
///
/// # Example
///
/// ```
/// use probdist::DiscreteRandomVariable;
///
/// let a = DiscreteRandomVariable::new(vec![1.0_f64, 2.0], vec![0.5, 0.5]).unwrap();
/// let b = DiscreteRandomVariable::new(vec![2.0_f64, 4.0], vec![0.5, 0.5]).unwrap();
///
/// // Outcome 4 arises twice (1·4 and 2·2) and is merged.
/// let ab = &a * &b;
/// assert_eq!(ab.outcomes(), &[2.0, 4.0, 8.0]);
/// assert_eq!(ab.probabilities(), &[0.25, 0.5, 0.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteRandomVariable<T> {
    x: Vec<T>,
    px: Vec<T>,
}

impl<T: FloatScalar> DiscreteRandomVariable<T> {
    /// Create a discrete random variable from outcomes `x` and probabilities
    /// `px`.
    ///
    /// Fails with [`ProbError::ShapeMismatch`] if the lengths differ, or
    /// [`ProbError::TotalProbability`] if the probabilities do not sum to 1
    /// within a small tolerance (10 decimal places for `f64`; scaled up by
    /// machine epsilon for narrower scalars).
    pub fn new(x: Vec<T>, px: Vec<T>) -> Result<Self, ProbError> {
        if x.len() != px.len() {
            return Err(ProbError::ShapeMismatch {
                outcomes: x.len(),
                probabilities: px.len(),
            });
        }
        let total = px.iter().fold(T::zero(), |acc, &p| acc + p);
        // 5e-11 matches rounding to 10 decimals in f64; the epsilon term
        // keeps the slack meaningful where 5e-11 is below one ulp of 1.
        let tol = T::from(5e-11)
            .unwrap()
            .max(T::epsilon() * T::from(32.0).unwrap());
        if (total - T::one()).abs() > tol {
            return Err(ProbError::TotalProbability);
        }
        Ok(Self { x, px })
    }

    /// Create a discrete random variable from `(outcome, probability)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ProbError>
    where
        I: IntoIterator<Item = (T, T)>,
    {
        let (x, px) = pairs.into_iter().unzip();
        Self::new(x, px)
    }

    /// Internal constructor for results whose probability law holds by
    /// construction (e.g. convolution of two unit-sum variables).
    fn from_parts(x: Vec<T>, px: Vec<T>) -> Self {
        debug_assert!({
            let total = px.iter().fold(T::zero(), |acc, &p| acc + p);
            let tol = T::from(1e-9)
                .unwrap()
                .max(T::epsilon() * T::from(512.0).unwrap());
            (total - T::one()).abs() < tol
        });
        Self { x, px }
    }

    /// Declared outcomes, in construction order.
    pub fn outcomes(&self) -> &[T] {
        &self.x
    }

    /// Probabilities paired index-wise with [`outcomes`](Self::outcomes).
    pub fn probabilities(&self) -> &[T] {
        &self.px
    }

    /// Probability at the exact matching outcome.
    ///
    /// Fails with [`ProbError::OutsideSupport`] if `v` is not among the
    /// declared outcomes.
    pub fn pmf(&self, v: T) -> Result<T, ProbError> {
        self.x
            .iter()
            .position(|&o| o == v)
            .map(|i| self.px[i])
            .ok_or(ProbError::OutsideSupport)
    }

    /// Cumulative probability P(X ≤ v).
    ///
    /// Sums the probabilities of every declared outcome `≤ v`; unlike
    /// [`pmf`](Self::pmf), `v` itself need not be declared, and an empty
    /// subset yields 0.
    pub fn cdf(&self, v: T) -> T {
        self.x
            .iter()
            .zip(self.px.iter())
            .filter(|(&o, _)| o <= v)
            .fold(T::zero(), |acc, (_, &p)| acc + p)
    }

    /// Declared-outcome membership.
    pub fn is_supported(&self, v: T) -> bool {
        self.x.contains(&v)
    }

    /// Checked point evaluation: validates membership before lookup.
    pub fn eval(&self, v: T) -> Result<T, ProbError> {
        if !self.is_supported(v) {
            return Err(ProbError::OutsideSupport);
        }
        self.pmf(v)
    }

    /// Raise each outcome to `power`, leaving probabilities unchanged
    /// positionally. Collided outcomes are not merged (see
    /// [`RandomVariable::pow`](crate::RandomVariable::pow)).
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

    /// Joint probability table for two independent variables.
    ///
    /// Rows are indexed by `other`'s probabilities and columns by `self`'s:
    /// cell `[row][col] = and(self.px[col], other.px[row])`.
    pub fn joint_table(&self, other: &Self) -> Vec<Vec<T>> {
        other
            .px
            .iter()
            .map(|&py| self.px.iter().map(|&px| event::and(px, py)).collect())
            .collect()
    }

    /// Covariance Cov(X, Y) = E\[XY\] − E\[X\]E\[Y\], with E\[XY\] summed as
    /// x·y·and(px, py) over the joint table.
    ///
    /// Independently constructed variables yield ≈ 0 within floating
    /// tolerance.
    pub fn covariance(&self, other: &Self) -> T {
        let mut exy = T::zero();
        for (row, &y) in other.x.iter().enumerate() {
            for (col, &x) in self.x.iter().enumerate() {
                exy = exy + x * y * event::and(self.px[col], other.px[row]);
            }
        }
        exy - self.expected_value() * other.expected_value()
    }

    /// Correlation Cov(X, Y) / (σ_X · σ_Y).
    pub fn correlation(&self, other: &Self) -> T {
        self.covariance(other) / (self.standard_deviation() * other.standard_deviation())
    }

    /// Convolution core: distribution of X·Y for independent X, Y.
    ///
    /// Every outcome pair contributes its product weighted by the joint
    /// probability; products that coincide in value are merged with their
    /// weights summed, and the result is sorted ascending by outcome.
    fn convolve(&self, rhs: &Self) -> Self {
        let mut merged: Vec<(T, T)> = Vec::with_capacity(self.x.len() * rhs.x.len());
        for (i, &xi) in self.x.iter().enumerate() {
            for (j, &yj) in rhs.x.iter().enumerate() {
                let outcome = xi * yj;
                let weight = event::and(self.px[i], rhs.px[j]);
                match merged.iter_mut().find(|(v, _)| *v == outcome) {
                    Some((_, w)) => *w = *w + weight,
                    None => merged.push((outcome, weight)),
                }
            }
        }
        merged.sort_unstable_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let (x, px) = merged.into_iter().unzip();
        Self::from_parts(x, px)
    }
}

impl<T: FloatScalar> Mul for &DiscreteRandomVariable<T> {
    type Output = DiscreteRandomVariable<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.convolve(rhs)
    }
}

impl<T: FloatScalar> Mul for DiscreteRandomVariable<T> {
    type Output = DiscreteRandomVariable<T>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.convolve(&rhs)
    }
}

impl<T: FloatScalar> Mul<&DiscreteRandomVariable<T>> for DiscreteRandomVariable<T> {
    type Output = DiscreteRandomVariable<T>;

    fn mul(self, rhs: &DiscreteRandomVariable<T>) -> Self::Output {
        self.convolve(rhs)
    }
}

impl<T: FloatScalar> Mul<DiscreteRandomVariable<T>> for &DiscreteRandomVariable<T> {
    type Output = DiscreteRandomVariable<T>;

    fn mul(self, rhs: DiscreteRandomVariable<T>) -> Self::Output {
        self.convolve(&rhs)
    }
}

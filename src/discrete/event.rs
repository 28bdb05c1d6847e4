//! Event algebra: pure functions over two probability *values*.
//!
//! These operate on probabilities already extracted from random variables
//! (e.g. via [`DiscreteRandomVariable::eval`](super::DiscreteRandomVariable::eval)),
//! not on the variables themselves.

use crate::traits::FloatScalar;

/// P(A ∩ B) = p·q for independent events.
///
/// # Example
///
/// ```
/// use probdist::discrete::event;
///
/// assert!((event::and(0.05_f64, 0.6) - 0.03).abs() < 1e-15);
/// ```
pub fn and<T: FloatScalar>(p: T, q: T) -> T {
    p * q
}

/// P(A ∪ B) = p + q − p·q for independent events.
pub fn or<T: FloatScalar>(p: T, q: T) -> T {
    (p + q) - p * q
}

/// P(A ∪ B) = p + q for mutually exclusive events.
pub fn disjoint_or<T: FloatScalar>(p: T, q: T) -> T {
    p + q
}

/// Conditional probability, reference convention: (p·q)/p.
///
/// Divides by the **first** argument regardless of which operand represents
/// the conditioning event. Preserved as-is from the reference behavior; for
/// independent events this reduces to `q`.
pub fn given<T: FloatScalar>(p: T, q: T) -> T {
    (p * q) / p
}

use core::fmt::Debug;
use num_traits::Float;

/// Trait for floating-point scalars used as outcomes and probabilities.
///
/// Blanket-implemented for all types satisfying the bounds, which covers
/// `f32` and `f64`. Every distribution and random variable in this crate is
/// generic over `FloatScalar`.
pub trait FloatScalar: Float + Debug {}

impl<T: Float + Debug> FloatScalar for T {}

//! # probdist
//!
//! Probability distributions as immutable value objects, no-std compatible.
//! Closed-form statistics (pmf/pdf, cdf, mean, variance, standard deviation)
//! plus an algebra for combining independent enumerated random variables:
//! convolution, joint-probability tables, covariance, and correlation.
//!
//! ## Quick start
//!
//! ```
//! use probdist::{Binomial, DiscreteDistribution};
//!
//! let b = Binomial::new(10, 0.5_f64).unwrap();
//! assert!((b.pmf(5) - 0.24609375).abs() < 1e-15);
//! assert!((b.cdf(5.0) - 0.623046875).abs() < 1e-15);
//! assert!((b.mean() - 5.0).abs() < 1e-14);
//!
//! // Materialize the full support as an enumerated random variable and
//! // compose it further with the discrete algebra.
//! let rv = b.to_discrete_random_variable(None, None).unwrap();
//! assert_eq!(rv.outcomes().len(), 11);
//! assert!((rv.mean() - 5.0).abs() < 1e-12);
//! ```
//!
//! ## Discrete distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Bernoulli`] | probability p | {0, 1} |
//! | [`Binomial`] | trials n, probability p | {0, …, n} |
//! | [`Geometric`] | probability p, success-trial flag | {1, 2, …} or {0, 1, …} |
//! | [`Poisson`] | rate λ | {0, 1, 2, …} |
//! | [`Hypergeometric`] | population N, successes K, draws n | {max(0, n−(N−K)), …, min(n, K)} |
//!
//! Each implements [`DiscreteDistribution`] and converts into a
//! [`DiscreteRandomVariable`] by enumerating its pmf over a finite window.
//! Unbounded supports (Geometric, Poisson) require an explicit `stop` and
//! renormalize the truncated weights.
//!
//! ## Continuous distributions
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`Uniform`] | lower a, upper b | [a, b] |
//! | [`Normal`] | mean μ, std dev σ | (−∞, ∞) |
//! | [`Exponential`] | rate λ | [0, ∞) |
//!
//! These expose the analogous [`ContinuousDistribution`] contract (pdf
//! instead of pmf) but no enumerated conversion and no algebra.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for no-std |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod continuous;
pub mod discrete;
mod error;
pub mod random_variable;
pub mod special;
pub mod traits;

pub use continuous::{ContinuousDistribution, Exponential, Normal, Uniform};
pub use discrete::{
    Bernoulli, Binomial, DiscreteDistribution, DiscreteRandomVariable, Geometric, Hypergeometric,
    Poisson,
};
pub use error::ProbError;
pub use random_variable::RandomVariable;
pub use traits::FloatScalar;

/// Short alias for [`Bernoulli`].
pub type Ber<T> = Bernoulli<T>;
/// Short alias for [`Binomial`].
pub type Bin<T> = Binomial<T>;
/// Short alias for [`Geometric`].
pub type Geo<T> = Geometric<T>;
/// Short alias for [`Poisson`].
pub type Pois<T> = Poisson<T>;
/// Short alias for [`Hypergeometric`].
pub type Hyp<T> = Hypergeometric<T>;
/// Short alias for [`Uniform`].
pub type Uni<T> = Uniform<T>;
/// Short alias for [`Normal`].
pub type Norm<T> = Normal<T>;
/// Alternate name for [`Normal`].
pub type Gaussian<T> = Normal<T>;
/// Alternate name for [`Normal`].
pub type Gauss<T> = Normal<T>;
/// Short alias for [`Exponential`].
pub type Exp<T> = Exponential<T>;

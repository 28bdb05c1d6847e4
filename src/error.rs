use core::fmt;

/// Errors from construction, queries, and conversions.
///
/// Every check is performed eagerly at the call that needs it; an operation
/// either fully succeeds or fails as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbError {
    /// Outcome and probability sequences differ in length.
    ShapeMismatch {
        /// Number of outcomes supplied.
        outcomes: usize,
        /// Number of probabilities supplied.
        probabilities: usize,
    },
    /// Probabilities do not sum to 1 by the law of total probability.
    TotalProbability,
    /// A queried point is outside the declared or analytic support.
    OutsideSupport,
    /// Enumerating an unbounded distribution without an explicit stop.
    UnboundedSupport,
    /// A distribution parameter is out of its valid range.
    InvalidParameter,
}

impl fmt::Display for ProbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbError::ShapeMismatch {
                outcomes,
                probabilities,
            } => write!(
                f,
                "there are {} outcomes, but {} probabilities; these counts must match",
                outcomes, probabilities
            ),
            ProbError::TotalProbability => {
                write!(f, "sum of all probabilities must equal 1")
            }
            ProbError::OutsideSupport => {
                write!(f, "queried point is outside the distribution support")
            }
            ProbError::UnboundedSupport => {
                write!(
                    f,
                    "unbounded support requires an explicit stop to enumerate"
                )
            }
            ProbError::InvalidParameter => {
                write!(f, "distribution parameter out of valid range")
            }
        }
    }
}

/// Errors reported while building enclosing balls.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EnclosingError {
    /// The tolerance epsilon must be finite and non-negative.
    #[error("Invalid tolerance: {0} (epsilon must be finite and non-negative)")]
    InvalidTolerance(f64),

    /// The support points are collinear, coplanar or coincident,
    /// so no unique ball passes through all of them.
    #[error("Ambiguous support: {size} points do not determine a unique ball")]
    AmbiguousSupport { size: usize },

    /// A pivoting step produced a smaller ball than the previous one.
    #[error("Unable to generate enclosing ball: radius shrank from {previous} to {current}")]
    ShrinkingBall { previous: f64, current: f64 },
}

pub type Result<T> = std::result::Result<T, EnclosingError>;

use thiserror::Error;

use crate::types::Depth;

/// Errors raised while validating island parameters.
///
/// Geometry generation itself never fails; these only guard its inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IslandError {
    /// A depth below zero was requested.
    #[error("recursion depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    /// The depth exceeds the configured ceiling.
    #[error("recursion depth {depth} exceeds the maximum of {max}")]
    DepthTooLarge { depth: i64, max: Depth },
}

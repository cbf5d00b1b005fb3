//! Error types for the jaw lever model.

use thiserror::Error;

use crate::kinematics::JointId;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building or driving the jaw model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Three measured lengths violate the triangle inequality.
    #[error("{context}: sides {sides:?} cannot form a valid triangle")]
    InvalidTriangle {
        /// Which triangle of the construction failed.
        context: &'static str,
        /// The offending side lengths, in cm.
        sides: [f64; 3],
    },

    /// Attempt to move a fixed joint to a different location.
    #[error("joint {joint:?} is fixed and cannot change location")]
    ImmobileJoint {
        /// The joint that was asked to move.
        joint: JointId,
    },

    /// A muscle shares no joint with the mandible.
    #[error("muscle shares no joint with the mandible")]
    NotAttached,

    /// A muscle shares more than one joint with the mandible.
    #[error("muscle shares more than one joint with the mandible")]
    AmbiguousAttachment,

    /// A specimen record line could not be parsed.
    #[error("malformed specimen record: {reason}")]
    MalformedRecord {
        /// What was wrong with the line.
        reason: String,
    },
}

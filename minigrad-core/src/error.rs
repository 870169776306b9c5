use crate::autograd::VariableId;
use thiserror::Error;

/// Custom error type for the MiniGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MinigradError {
    #[error("Cannot accumulate a derivative into non-leaf variable {id}")]
    NotALeaf { id: VariableId },

    #[error("Context holds {actual} saved values, but the backward pass expected {expected}")]
    SavedValuesMismatch { expected: usize, actual: usize },

    #[error("Central difference requires a nonzero epsilon")]
    ZeroEpsilon,

    #[error("Argument index {arg} is out of range for {len} values")]
    ArgumentOutOfRange { arg: usize, len: usize },

    #[error("Second sequence exhausted at index {index} during zip_with")]
    SequenceExhausted { index: usize },
}

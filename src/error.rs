//! Error types for the FibraCrypt library.

use std::fmt;

/// Errors produced by the FibraCrypt library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FibraCryptError {
    /// Worker count is zero; at least one worker is required.
    InvalidWorkerCount,
    /// One or more workers failed while transforming their chunks.
    /// Carries the indices of the affected chunks in ascending order.
    WorkerFailure { chunks: Vec<usize> },
}

impl fmt::Display for FibraCryptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FibraCryptError::InvalidWorkerCount => {
                write!(f, "Worker count must be at least 1")
            }
            FibraCryptError::WorkerFailure { chunks } => {
                write!(f, "Worker failure while transforming chunk(s) {:?}", chunks)
            }
        }
    }
}

impl std::error::Error for FibraCryptError {}

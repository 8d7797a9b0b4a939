//! Error types for dataset generation and run control
//!
//! Every error is reported synchronously, before any step is recorded. A
//! rejected request leaves the current dataset and any active run untouched.

use crate::dataset::{MAX_ARRAY_SIZE, MIN_ARRAY_SIZE};
use crate::registry::{AlgorithmId, Family};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Requested array size outside the supported range
    InvalidArraySize { size: usize },
    /// Requested speed outside [1, 100]
    InvalidSpeed { speed: u8 },
    /// Identifier not present in the registry
    UnknownAlgorithm { name: String },
    /// Registry entry that carries metadata but no step procedure
    NotRunnable { algorithm: AlgorithmId },
    /// Algorithm family does not match the current dataset
    DatasetMismatch {
        algorithm: AlgorithmId,
        dataset: Family,
    },
    /// A run is active; generation and new runs are rejected until it ends
    RunInProgress,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EngineError::InvalidArraySize { size } => {
                write!(
                    f,
                    "array size {} is outside the supported range [{}, {}]",
                    size, MIN_ARRAY_SIZE, MAX_ARRAY_SIZE
                )
            }
            EngineError::InvalidSpeed { speed } => {
                write!(f, "speed {} is outside the supported range [1, 100]", speed)
            }
            EngineError::UnknownAlgorithm { name } => {
                write!(f, "unknown algorithm '{}'", name)
            }
            EngineError::NotRunnable { algorithm } => {
                write!(f, "'{}' is descriptive only and cannot be run", algorithm)
            }
            EngineError::DatasetMismatch { algorithm, dataset } => {
                write!(
                    f,
                    "algorithm '{}' expects a {} dataset, but the current dataset is {}",
                    algorithm,
                    algorithm.family(),
                    dataset
                )
            }
            EngineError::RunInProgress => {
                write!(f, "a run is already in progress")
            }
        }
    }
}

impl std::error::Error for EngineError {}

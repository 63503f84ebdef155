//! Problems found while validating recipe steps.

use thiserror::Error;

/// A single step that cannot take part in a well-formed recipe.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StepViolation {
    #[error("step {index} ('{label}') declares a negative duration ({minutes} minutes)")]
    NegativeDuration {
        index: usize,
        label: String,
        minutes: f64,
    },

    #[error("step {index} ('{label}') declares a non-finite duration")]
    NonFiniteDuration { index: usize, label: String },

    #[error("step {index} has an empty label")]
    EmptyLabel { index: usize },
}

impl StepViolation {
    /// Position of the offending step in the recipe.
    pub fn index(&self) -> usize {
        match self {
            Self::NegativeDuration { index, .. }
            | Self::NonFiniteDuration { index, .. }
            | Self::EmptyLabel { index } => *index,
        }
    }
}

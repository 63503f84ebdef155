//! Build errors for the recipe builder.

use super::violations::StepViolation;
use thiserror::Error;

/// Errors that can occur when building a recipe.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Recipe name not specified. Call .named(name) before .build()")]
    MissingName,

    #[error("Recipe has {} invalid step(s): {}", .violations.len(), summarize(.violations))]
    InvalidSteps { violations: Vec<StepViolation> },
}

fn summarize(violations: &[StepViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

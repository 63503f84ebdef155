//! Builder for constructing validated recipes.

use super::error::BuildError;
use super::violations::StepViolation;
use super::Recipe;
use crate::core::Step;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Builder for constructing recipes with a fluent API.
///
/// `build` checks every step and reports all problems at once rather than
/// stopping at the first.
///
/// # Example
///
/// ```rust
/// use mise::recipe::RecipeBuilder;
/// use mise::steps::{add, drain, water_for};
///
/// let recipe = RecipeBuilder::new()
///     .named("soaked beans")
///     .step(add("beans", 150.0))
///     .step(water_for("beans"))
///     .step(drain())
///     .build()
///     .unwrap();
///
/// assert_eq!(recipe.len(), 3);
/// assert_eq!(recipe.declared_minutes(), 7.0);
/// ```
#[derive(Default)]
pub struct RecipeBuilder {
    name: Option<String>,
    steps: Vec<Step>,
}

impl RecipeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recipe name (required).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append one step.
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// Append several steps in order.
    pub fn steps(mut self, steps: impl IntoIterator<Item = Step>) -> Self {
        self.steps.extend(steps);
        self
    }

    /// Build the recipe.
    /// Returns an error if the name is missing or any step is malformed.
    pub fn build(self) -> Result<Recipe, BuildError> {
        let name = self.name.ok_or(BuildError::MissingName)?;

        match validate_steps(&self.steps) {
            Validation::Success(_) => {
                debug!(recipe = %name, steps = self.steps.len(), "built recipe");
                Ok(Recipe::new(name, self.steps))
            }
            Validation::Failure(errors) => {
                debug!(recipe = %name, violations = errors.len(), "rejected recipe");
                Err(BuildError::InvalidSteps {
                    violations: errors.iter().cloned().collect(),
                })
            }
        }
    }
}

/// Check every step, accumulating ALL violations.
pub fn validate_steps(steps: &[Step]) -> Validation<(), NonEmptyVec<StepViolation>> {
    let checks: Vec<Validation<(), NonEmptyVec<StepViolation>>> = steps
        .iter()
        .enumerate()
        .map(|(index, step)| validate_step(index, step))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

fn validate_step(index: usize, step: &Step) -> Validation<(), NonEmptyVec<StepViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<StepViolation>>> = Vec::new();

    let label = step.label();
    checks.push(if label.trim().is_empty() {
        Validation::fail(StepViolation::EmptyLabel { index })
    } else {
        Validation::success(())
    });

    let minutes = step.minutes();
    checks.push(if !minutes.is_finite() {
        Validation::fail(StepViolation::NonFiniteDuration {
            index,
            label: label.to_string(),
        })
    } else if minutes < 0.0 {
        Validation::fail(StepViolation::NegativeDuration {
            index,
            label: label.to_string(),
            minutes,
        })
    } else {
        Validation::success(())
    });

    Validation::all_vec(checks).map(|_| ())
}

//! Recipes: ordered sequences of steps.
//!
//! Order is the only control flow: steps run strictly in sequence, each
//! consuming the output of the one before.

pub mod builder;
pub mod error;
pub mod macros;
pub mod violations;

pub use builder::{validate_steps, RecipeBuilder};
pub use error::BuildError;
pub use violations::StepViolation;

use crate::core::{Dish, Step};

/// Name given to recipes built without one.
pub const UNTITLED: &str = "untitled";

/// A named, ordered, finite sequence of steps.
///
/// # Example
///
/// ```rust
/// use mise::recipe::Recipe;
/// use mise::steps::{add, sit};
///
/// let recipe = Recipe::new("rested garlic", vec![add("garlic", 5.0), sit(10.0)]);
///
/// assert_eq!(recipe.len(), 2);
/// assert_eq!(recipe.declared_minutes(), 11.0);
/// ```
#[derive(Clone, Debug)]
pub struct Recipe {
    name: String,
    steps: Vec<Step>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, steps: Vec<Step>) -> Self {
        Self {
            name: name.into(),
            steps,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.steps.iter().map(Step::label).collect()
    }

    /// Sum of the minutes each step declares.
    pub fn declared_minutes(&self) -> f64 {
        self.steps.iter().map(Step::minutes).sum()
    }

    /// This recipe followed by `step`.
    pub fn then(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    /// This recipe followed by every step of `other`.
    pub fn followed_by(mut self, other: &Recipe) -> Self {
        self.steps.extend(other.steps.iter().cloned());
        self
    }

    /// Collapse the recipe into a single step that runs every step in order.
    ///
    /// Lets a whole recipe be used as one step of a larger one.
    pub fn into_step(self) -> Step {
        let name = self.name;
        let start = Step::infallible(name.clone(), 0.0, |dish: &Dish| dish.clone());
        self.steps
            .into_iter()
            .fold(start, Step::then)
            .with_label(name)
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Self::new(UNTITLED, Vec::new())
    }
}

impl From<Vec<Step>> for Recipe {
    fn from(steps: Vec<Step>) -> Self {
        Self::new(UNTITLED, steps)
    }
}

impl FromIterator<Step> for Recipe {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Recipe {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

//! Steps: pure functions from one dish to the next.

use super::dish::Dish;
use super::error::DishError;
use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe step body.
pub type StepFn = Arc<dyn Fn(&Dish) -> Result<Dish, DishError> + Send + Sync>;

/// One recipe action.
///
/// A step is a pure function of its closed-over parameters and its input
/// dish. It carries a label for diagnostics and the number of minutes it
/// declares it will take. Cloning a step shares its body.
///
/// # Example
///
/// ```rust
/// use mise::core::{Dish, Step};
///
/// let salt = Step::new("salt", 0.0, |dish: &Dish| Ok(dish.safe_accumulate("salt", 1.0)));
/// let dish = salt.apply(&Dish::new()).unwrap();
///
/// assert_eq!(dish.number("salt").unwrap(), 1.0);
/// ```
#[derive(Clone)]
pub struct Step {
    label: String,
    minutes: f64,
    action: StepFn,
}

impl Step {
    /// Create a step from a pure function.
    ///
    /// The function must be deterministic and free of side effects; the
    /// engine relies on it to rebuild any dish from the recipe alone.
    pub fn new<F>(label: impl Into<String>, minutes: f64, action: F) -> Self
    where
        F: Fn(&Dish) -> Result<Dish, DishError> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            minutes,
            action: Arc::new(action),
        }
    }

    /// Create a step from a function that cannot fail.
    pub fn infallible<F>(label: impl Into<String>, minutes: f64, action: F) -> Self
    where
        F: Fn(&Dish) -> Dish + Send + Sync + 'static,
    {
        Self::new(label, minutes, move |dish| Ok(action(dish)))
    }

    pub fn apply(&self, dish: &Dish) -> Result<Dish, DishError> {
        (self.action)(dish)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Minutes this step declares it advances `time` by.
    pub fn minutes(&self) -> f64 {
        self.minutes
    }

    /// Same behavior under a different label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Run `self`, then `next` on its result.
    pub fn then(self, next: Step) -> Step {
        compose(next, self)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("label", &self.label)
            .field("minutes", &self.minutes)
            .finish_non_exhaustive()
    }
}

/// Compose two steps in function-composition order: `g` runs first, then
/// `f` on its output.
///
/// A failure in `g` short-circuits `f`. Labels read in execution order and
/// declared durations add up.
///
/// # Example
///
/// ```rust
/// use mise::core::{compose, Dish, Step};
///
/// let double = Step::new("double", 0.0, |d: &Dish| Ok(d.mix_in("x", d.number("x")? * 2.0)));
/// let plus_one = Step::infallible("plus one", 0.0, |d: &Dish| d.safe_accumulate("x", 1.0));
///
/// // plus_one first, then double: (0 + 1) * 2
/// let step = compose(double, plus_one);
/// assert_eq!(step.apply(&Dish::new()).unwrap().number("x").unwrap(), 2.0);
/// assert_eq!(step.label(), "plus one >> double");
/// ```
pub fn compose(f: Step, g: Step) -> Step {
    let label = format!("{} >> {}", g.label, f.label);
    let minutes = g.minutes + f.minutes;
    Step {
        label,
        minutes,
        action: Arc::new(move |dish: &Dish| f.apply(&g.apply(dish)?)),
    }
}

//! Timeline of dishes produced by folding a recipe.
//!
//! A timeline keeps every intermediate dish, not just the latest one, so
//! any field can be traced back through the whole preparation.

use super::dish::Dish;
use super::error::DishError;
use super::quantity::Quantity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when deserializing a timeline with no dishes in it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("a timeline must contain at least its initial dish")]
pub struct EmptyTimeline;

/// Ordered, non-empty sequence of dishes.
///
/// The first element is the seed; every following element is the output
/// of one step.
///
/// # Example
///
/// ```rust
/// use mise::core::{Dish, Timeline};
///
/// let start = Dish::new();
/// let timeline = Timeline::start(start.clone())
///     .record(start.safe_accumulate("beans", 150.0).safe_accumulate("time", 1.0));
///
/// assert_eq!(timeline.len(), 2);
/// assert_eq!(timeline.initial(), &start);
/// assert_eq!(timeline.final_dish().number("beans").unwrap(), 150.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Dish>", into = "Vec<Dish>")]
pub struct Timeline {
    dishes: Vec<Dish>,
}

impl Timeline {
    /// A timeline holding only its seed.
    pub fn start(initial: Dish) -> Self {
        Self {
            dishes: vec![initial],
        }
    }

    /// Append the next dish, returning the extended timeline.
    pub fn record(mut self, dish: Dish) -> Self {
        self.dishes.push(dish);
        self
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn initial(&self) -> &Dish {
        &self.dishes[0]
    }

    pub fn final_dish(&self) -> &Dish {
        &self.dishes[self.dishes.len() - 1]
    }

    /// Consume the timeline, keeping only the final dish.
    pub fn into_final(mut self) -> Dish {
        let last = self.dishes.len() - 1;
        self.dishes.swap_remove(last)
    }

    pub fn get(&self, index: usize) -> Option<&Dish> {
        self.dishes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dish> {
        self.dishes.iter()
    }

    /// Number of dishes, seed included.
    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    /// Always false: a timeline holds at least its seed.
    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Number of steps that produced this timeline.
    pub fn steps_taken(&self) -> usize {
        self.dishes.len() - 1
    }

    /// Consecutive `(before, after)` pairs, one per step.
    pub fn transitions(&self) -> impl Iterator<Item = (&Dish, &Dish)> {
        self.dishes.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// Minutes between the seed and the final dish.
    pub fn elapsed(&self) -> Result<f64, DishError> {
        Ok(self.final_dish().time()? - self.initial().time()?)
    }

    /// The value of `key` at every point of the timeline.
    pub fn field_history(&self, key: &str) -> Vec<Option<&Quantity>> {
        self.dishes.iter().map(|dish| dish.get(key)).collect()
    }
}

impl TryFrom<Vec<Dish>> for Timeline {
    type Error = EmptyTimeline;

    fn try_from(dishes: Vec<Dish>) -> Result<Self, Self::Error> {
        if dishes.is_empty() {
            return Err(EmptyTimeline);
        }
        Ok(Self { dishes })
    }
}

impl From<Timeline> for Vec<Dish> {
    fn from(timeline: Timeline) -> Self {
        timeline.dishes
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Dish;
    type IntoIter = std::slice::Iter<'a, Dish>;

    fn into_iter(self) -> Self::IntoIter {
        self.dishes.iter()
    }
}

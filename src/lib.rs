//! Mise: recipes as pure state transitions
//!
//! A recipe is an ordered list of steps, and a step is a pure function from
//! one dish to the next. Folding the recipe over a starting dish yields the
//! whole timeline of the preparation, every intermediate dish included,
//! not just the finished one.
//!
//! # Core Concepts
//!
//! - **Dish**: Immutable snapshot of the cooking process
//! - **Step**: Pure function `Dish -> Dish`, composable with `compose`
//! - **Recipe**: Ordered sequence of steps
//! - **Timeline**: Every dish produced while folding a recipe
//!
//! # Example
//!
//! ```rust
//! use mise::steps::{add, sit, water_for};
//! use mise::{prepare, preparations, recipe};
//!
//! let beans = recipe![
//!     add("beans", 150.0),
//!     water_for("beans"),
//!     add("garlic", 5.0),
//!     sit(10.0),
//!     add("olive_oil", 5.0),
//! ];
//!
//! let timeline = preparations(&beans).unwrap();
//! assert_eq!(timeline.len(), 6);
//!
//! let dish = prepare(&beans).unwrap();
//! assert_eq!(dish.number("water").unwrap(), 300.0);
//! assert_eq!(dish.time().unwrap(), 16.0);
//! ```

pub mod core;
pub mod engine;
pub mod recipe;
pub mod steps;

// Re-export commonly used types
pub use crate::core::{compose, Dish, DishError, ErrorKind, Quantity, Step, Timeline};
pub use crate::engine::{prepare, prepare_from, preparations, run_timeline, PrepareError};
pub use crate::recipe::{BuildError, Recipe, RecipeBuilder};

//! Core dish types and logic.
//!
//! This module contains the pure functional core:
//! - `Dish`, the immutable state, and its mutator primitives
//! - `Quantity`, the tagged value stored in each field
//! - `Step` and `compose`, the unit of change
//! - `Timeline`, the full history of a preparation
//!
//! Nothing in this module performs I/O or mutates shared state.

mod dish;
mod error;
mod quantity;
mod step;
mod timeline;

pub use dish::{Dish, TEMPERATURE, TIME, WATER};
pub use error::{DishError, ErrorKind};
pub use quantity::{Quantity, WEIGHT};
pub use step::{compose, Step, StepFn};
pub use timeline::{EmptyTimeline, Timeline};

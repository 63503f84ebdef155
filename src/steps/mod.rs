//! Step combinators: the recipe vocabulary.
//!
//! Each function here builds a [`Step`] from plain parameters. Building a
//! step has no effect; two calls with the same arguments produce two
//! independent steps that behave identically.
//!
//! Combinators that depend on kitchen constants (`sit`, `fry`, `saute`,
//! `water_for`, `soak`, `drain`) use [`Kitchen::default()`]. Build them
//! from a custom [`Kitchen`] to change those constants.
//!
//! # Example
//!
//! ```rust
//! use mise::core::Dish;
//! use mise::steps::{add, water_for};
//!
//! let beans = add("beans", 150.0).apply(&Dish::new()).unwrap();
//! let soaked = water_for("beans").apply(&beans).unwrap();
//!
//! assert_eq!(soaked.number("water").unwrap(), 300.0);
//! assert_eq!(soaked.time().unwrap(), 4.0);
//! ```

mod kitchen;

pub use kitchen::Kitchen;

use crate::core::{Dish, Quantity, Step, TIME};
use std::sync::LazyLock;

/// Minutes `add` takes when no duration is given.
pub const DEFAULT_ADD_MINUTES: f64 = 1.0;

static DRAIN: LazyLock<Step> = LazyLock::new(|| Kitchen::default().drain());

/// Add `quantity` of `ingredient`, taking one minute.
pub fn add(ingredient: &str, quantity: f64) -> Step {
    add_for(ingredient, quantity, DEFAULT_ADD_MINUTES)
}

/// Add `quantity` of `ingredient` over `minutes`.
///
/// The ingredient need not be in the dish yet; it starts from zero.
pub fn add_for(ingredient: &str, quantity: f64, minutes: f64) -> Step {
    let key = ingredient.to_string();
    Step::infallible(
        format!("add {quantity} {ingredient}"),
        minutes,
        move |dish: &Dish| dish.safe_accumulate(&key, quantity).safe_accumulate(TIME, minutes),
    )
}

/// Let `minutes` pass without touching anything else.
pub fn advance(minutes: f64) -> Step {
    Step::infallible(format!("wait {minutes}"), minutes, move |dish: &Dish| {
        dish.safe_accumulate(TIME, minutes)
    })
}

/// Set `key` to `value` instantly.
pub fn mix(key: &str, value: impl Into<Quantity>) -> Step {
    let key = key.to_string();
    let value = value.into();
    Step::infallible(format!("mix {key}"), 0.0, move |dish: &Dish| {
        dish.mix_in(&key, value.clone())
    })
}

/// Take `key` out of the dish over `minutes`.
pub fn remove(key: &str, minutes: f64) -> Step {
    let key = key.to_string();
    Step::infallible(format!("remove {key}"), minutes, move |dish: &Dish| {
        dish.without(&key).safe_accumulate(TIME, minutes)
    })
}

pub fn sit(minutes: f64) -> Step {
    Kitchen::default().sit(minutes)
}

pub fn fry(minutes: f64) -> Step {
    Kitchen::default().fry(minutes)
}

pub fn saute(minutes: f64) -> Step {
    Kitchen::default().saute(minutes)
}

pub fn water_for(ingredient: &str) -> Step {
    Kitchen::default().water_for(ingredient)
}

pub fn soak(ingredient: &str, minutes: f64) -> Step {
    Kitchen::default().soak(ingredient, minutes)
}

/// The shared drain step: removes all water, takes three minutes.
pub fn drain() -> Step {
    DRAIN.clone()
}

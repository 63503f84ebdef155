//! Physical constants used by the step combinators.

use super::{add_for, mix};
use crate::core::{compose, Dish, Step, TEMPERATURE, TIME, WATER};
use serde::{Deserialize, Serialize};

/// The kitchen a recipe is cooked in.
///
/// Every constant a combinator needs is an explicit field here instead of a
/// process-wide setting. Missing fields deserialize to their defaults.
///
/// # Example
///
/// ```rust
/// use mise::steps::Kitchen;
/// use mise::core::Dish;
///
/// let cold_kitchen = Kitchen {
///     room_temperature: 5.0,
///     ..Kitchen::default()
/// };
///
/// let hot = Dish::new().mix_in("temperature", 50.0);
/// let rested = cold_kitchen.sit(30.0).apply(&hot).unwrap();
///
/// assert_eq!(rested.temperature().unwrap(), Some(5.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kitchen {
    /// Floor that sitting dishes cool down to
    pub room_temperature: f64,

    /// Degrees lost per minute while sitting
    pub cooling_rate: f64,

    /// Temperature set by frying and sautéing
    pub cooking_temperature: f64,

    /// Water added per unit of ingredient by `water_for`
    pub water_ratio: f64,

    /// Minutes `water_for` takes
    pub water_for_minutes: f64,

    /// Minutes `drain` takes
    pub drain_minutes: f64,

    /// Share of the free water an ingredient absorbs while soaking
    pub soak_absorption: f64,
}

impl Default for Kitchen {
    fn default() -> Self {
        Self {
            room_temperature: 20.0,
            cooling_rate: 2.0,
            cooking_temperature: 50.0,
            water_ratio: 2.0,
            water_for_minutes: 3.0,
            drain_minutes: 3.0,
            soak_absorption: 0.5,
        }
    }
}

impl Kitchen {
    /// Let the dish rest.
    ///
    /// Advances time by `minutes`. A dish with a temperature cools by
    /// `cooling_rate` per minute, but never below `room_temperature`; a dish
    /// without one stays without one.
    pub fn sit(&self, minutes: f64) -> Step {
        let room = self.room_temperature;
        let rate = self.cooling_rate;
        Step::new(format!("sit {minutes}"), minutes, move |dish: &Dish| {
            let rested = dish.safe_accumulate(TIME, minutes);
            Ok(match dish.temperature()? {
                Some(temperature) => {
                    rested.mix_in(TEMPERATURE, (temperature - rate * minutes).max(room))
                }
                None => rested,
            })
        })
    }

    /// Heat to `cooking_temperature`, then lose `minutes` of water over
    /// `minutes`.
    ///
    /// Water is not floored at zero: frying a dish with too little water
    /// leaves a negative amount.
    pub fn fry(&self, minutes: f64) -> Step {
        self.heat_and_evaporate("fry", minutes)
    }

    /// Same model as [`Kitchen::fry`].
    pub fn saute(&self, minutes: f64) -> Step {
        self.heat_and_evaporate("saute", minutes)
    }

    fn heat_and_evaporate(&self, verb: &str, minutes: f64) -> Step {
        let heat = mix(TEMPERATURE, self.cooking_temperature);
        let evaporate = add_for(WATER, -minutes, minutes);
        compose(evaporate, heat).with_label(format!("{verb} {minutes}"))
    }

    /// Add `water_ratio` times the ingredient's amount in water, then wait
    /// `water_for_minutes`.
    ///
    /// The amount is read from the dish this step is applied to. A missing
    /// ingredient, or an attribute set without a weight, is an error.
    pub fn water_for(&self, ingredient: &str) -> Step {
        let ingredient = ingredient.to_string();
        let ratio = self.water_ratio;
        let minutes = self.water_for_minutes;
        Step::new(
            format!("water for {ingredient}"),
            minutes,
            move |dish: &Dish| {
                let quantity = ratio * dish.amount(&ingredient)?;
                Ok(dish
                    .safe_accumulate(WATER, quantity)
                    .safe_accumulate(TIME, minutes))
            },
        )
    }

    /// Let `ingredient` absorb part of the free water over `minutes`.
    ///
    /// Water must be present as a bare number. The water is reduced first,
    /// then the ingredient grows by the same amount.
    pub fn soak(&self, ingredient: &str, minutes: f64) -> Step {
        let ingredient = ingredient.to_string();
        let share = self.soak_absorption;
        Step::new(
            format!("soak {ingredient} {minutes}"),
            minutes,
            move |dish: &Dish| {
                let absorption = dish.number(WATER)? * share;
                Ok(dish
                    .safe_accumulate(WATER, -absorption)
                    .safe_accumulate(&ingredient, absorption)
                    .safe_accumulate(TIME, minutes))
            },
        )
    }

    /// Pour off all free water.
    pub fn drain(&self) -> Step {
        let minutes = self.drain_minutes;
        Step::infallible("drain", minutes, move |dish: &Dish| {
            dish.without(WATER).safe_accumulate(TIME, minutes)
        })
    }
}

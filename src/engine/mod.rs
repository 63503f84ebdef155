//! The engine: folds a recipe over a dish.
//!
//! The engine has no state of its own beyond its position in the recipe.
//! It applies one step per transition, strictly in order, with no
//! branching, retries or skipping. Any failure aborts the whole fold.

mod error;

pub use error::PrepareError;

use crate::core::{Dish, Timeline};
use crate::recipe::Recipe;
use tracing::{debug, trace};

/// Fold `recipe` over `initial`, keeping every intermediate dish.
///
/// The returned timeline starts with `initial` and holds one more dish per
/// step. The seed's `time` must be finite and non-negative, and each
/// produced dish must carry a finite `time` no earlier than its input's.
///
/// # Example
///
/// ```rust
/// use mise::core::Dish;
/// use mise::engine::run_timeline;
/// use mise::recipe;
/// use mise::steps::{add, sit};
///
/// let recipe = recipe![add("garlic", 5.0), sit(10.0)];
/// let timeline = run_timeline(Dish::new(), &recipe).unwrap();
///
/// assert_eq!(timeline.len(), 3);
/// assert_eq!(timeline.final_dish().time().unwrap(), 11.0);
/// ```
pub fn run_timeline(initial: Dish, recipe: &Recipe) -> Result<Timeline, PrepareError> {
    let seed_time = initial.time().map_err(|source| {
        debug!(recipe = recipe.name(), error = %source, "rejected initial dish");
        PrepareError::InvalidSeed(source)
    })?;
    if !seed_time.is_finite() || seed_time < 0.0 {
        debug!(recipe = recipe.name(), time = seed_time, "rejected initial dish");
        return Err(PrepareError::InvalidSeedTime { time: seed_time });
    }

    debug!(recipe = recipe.name(), steps = recipe.len(), "preparing");

    let (timeline, _) = recipe.steps().iter().enumerate().try_fold(
        (Timeline::start(initial), seed_time),
        |(timeline, before), (index, step)| {
            let next = step
                .apply(timeline.final_dish())
                .map_err(|source| PrepareError::StepFailed {
                    index,
                    label: step.label().to_string(),
                    source,
                })
                .and_then(|dish| {
                    let after = dish.time().map_err(|source| PrepareError::StepFailed {
                        index,
                        label: step.label().to_string(),
                        source,
                    })?;
                    if !after.is_finite() {
                        return Err(PrepareError::NonFiniteTime {
                            index,
                            label: step.label().to_string(),
                            time: after,
                        });
                    }
                    if after < before {
                        return Err(PrepareError::TimeReversed {
                            index,
                            label: step.label().to_string(),
                            before,
                            after,
                        });
                    }
                    Ok((dish, after))
                });

            match next {
                Ok((dish, after)) => {
                    trace!(index, step = step.label(), time = after, dish = %dish, "applied step");
                    Ok((timeline.record(dish), after))
                }
                Err(error) => {
                    debug!(recipe = recipe.name(), %error, "preparation aborted");
                    Err(error)
                }
            }
        },
    )?;

    debug!(
        recipe = recipe.name(),
        dishes = timeline.len(),
        "preparation finished"
    );
    Ok(timeline)
}

/// Fold `recipe` over `initial`, keeping only the final dish.
///
/// Defined as the last element of [`run_timeline`].
pub fn prepare_from(initial: Dish, recipe: &Recipe) -> Result<Dish, PrepareError> {
    run_timeline(initial, recipe).map(Timeline::into_final)
}

/// Every dish of `recipe`, starting from `{time: 0}`.
///
/// # Example
///
/// ```rust
/// use mise::{preparations, recipe};
/// use mise::steps::{add, drain, water_for};
///
/// let timeline = preparations(&recipe![add("beans", 150.0), water_for("beans"), drain()]).unwrap();
///
/// let water: Vec<_> = timeline
///     .iter()
///     .map(|dish| dish.number("water").ok())
///     .collect();
/// assert_eq!(water, vec![None, None, Some(300.0), None]);
/// ```
pub fn preparations(recipe: &Recipe) -> Result<Timeline, PrepareError> {
    run_timeline(Dish::new(), recipe)
}

/// The final dish of `recipe`, starting from `{time: 0}`.
pub fn prepare(recipe: &Recipe) -> Result<Dish, PrepareError> {
    prepare_from(Dish::new(), recipe)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ErrorKind, Quantity, Step, TIME, WATER};
    use crate::steps::{add, add_for, advance, drain, fry, sit, soak, water_for};

    #[test]
    fn empty_recipe_yields_only_the_seed() {
        let timeline = preparations(&Recipe::default()).unwrap();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.final_dish(), &Dish::new());
    }

    #[test]
    fn timeline_has_one_dish_per_step_plus_seed() {
        let recipe = crate::recipe![add("beans", 1.0), sit(2.0), add("salt", 1.0)];
        let timeline = preparations(&recipe).unwrap();
        assert_eq!(timeline.len(), recipe.len() + 1);
    }

    #[test]
    fn prepare_matches_last_dish_of_timeline() {
        let recipe = crate::recipe![add("beans", 150.0), water_for("beans"), drain()];
        let timeline = preparations(&recipe).unwrap();
        assert_eq!(&prepare(&recipe).unwrap(), timeline.final_dish());
    }

    #[test]
    fn earlier_dishes_stay_inspectable() {
        let recipe = crate::recipe![add("beans", 150.0), water_for("beans"), drain()];
        let timeline = preparations(&recipe).unwrap();

        assert_eq!(timeline.dishes()[2].number(WATER).unwrap(), 300.0);
        assert!(!timeline.final_dish().contains(WATER));
    }

    #[test]
    fn run_timeline_starts_from_given_dish() {
        let seed = Dish::new().mix_in(TIME, 100.0).mix_in(WATER, 40.0);
        let timeline = run_timeline(seed.clone(), &crate::recipe![soak("rice", 20.0)]).unwrap();

        assert_eq!(timeline.initial(), &seed);
        assert_eq!(timeline.final_dish().number("rice").unwrap(), 20.0);
        assert_eq!(timeline.final_dish().time().unwrap(), 120.0);
    }

    #[test]
    fn step_failure_aborts_with_index() {
        let recipe = crate::recipe![add("beans", 150.0), soak("beans", 60.0), sit(1.0)];
        let err = preparations(&recipe).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.step_index(), Some(1));
        assert!(matches!(
            err,
            PrepareError::StepFailed { ref label, .. } if label == "soak beans 60"
        ));
    }

    #[test]
    fn malformed_field_is_a_type_mismatch() {
        let seed = Dish::new().mix_in(WATER, Quantity::attributes([("weight", 10.0)]));
        let err = prepare_from(seed, &crate::recipe![soak("beans", 1.0)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn seed_without_time_is_rejected() {
        let err = run_timeline(Dish::empty(), &Recipe::default()).unwrap_err();
        assert!(matches!(err, PrepareError::InvalidSeed(_)));
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn step_that_rewinds_time_is_rejected() {
        let rewind = Step::infallible("rewind", 0.0, |d: &Dish| d.safe_accumulate(TIME, -1.0));
        let recipe = crate::recipe![add("beans", 1.0), rewind];

        let err = preparations(&recipe).unwrap_err();
        assert_eq!(
            err,
            PrepareError::TimeReversed {
                index: 1,
                label: "rewind".to_string(),
                before: 1.0,
                after: 0.0,
            }
        );
    }

    #[test]
    fn step_that_drops_time_is_rejected() {
        let forget = Step::infallible("forget", 0.0, |d: &Dish| d.without(TIME));
        let err = preparations(&crate::recipe![forget]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.step_index(), Some(0));
    }

    #[test]
    fn negative_seed_time_is_rejected() {
        let seed = Dish::new().mix_in(TIME, -10.0);
        let err = run_timeline(seed, &Recipe::default()).unwrap_err();
        assert_eq!(err, PrepareError::InvalidSeedTime { time: -10.0 });
        assert_eq!(err.kind(), ErrorKind::InvalidTime);
    }

    #[test]
    fn non_finite_seed_time_is_rejected() {
        for time in [f64::NAN, f64::INFINITY] {
            let seed = Dish::new().mix_in(TIME, time);
            let err = run_timeline(seed, &crate::recipe![add("beans", 1.0)]).unwrap_err();
            assert!(matches!(err, PrepareError::InvalidSeedTime { .. }));
            assert_eq!(err.step_index(), None);
        }
    }

    #[test]
    fn nan_duration_is_rejected() {
        let recipe = crate::recipe![add("beans", 1.0), sit(f64::NAN), add("salt", 1.0)];
        let err = preparations(&recipe).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidTime);
        assert_eq!(err.step_index(), Some(1));
        assert!(matches!(
            err,
            PrepareError::NonFiniteTime { time, .. } if time.is_nan()
        ));
    }

    #[test]
    fn nan_wait_and_add_are_rejected() {
        let wait = crate::recipe![advance(f64::NAN)];
        let add_nan = crate::recipe![add("beans", 1.0), add_for("salt", 1.0, f64::NAN)];

        assert_eq!(prepare(&wait).unwrap_err().step_index(), Some(0));
        assert_eq!(prepare(&add_nan).unwrap_err().kind(), ErrorKind::InvalidTime);
    }

    #[test]
    fn infinite_duration_is_rejected() {
        let err = prepare(&crate::recipe![sit(f64::INFINITY)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTime);
    }

    #[test]
    fn frying_dry_pan_goes_negative_without_error() {
        let dish = prepare(&crate::recipe![add_for("onion", 1.0, 0.0), fry(4.0)]).unwrap();
        assert_eq!(dish.number(WATER).unwrap(), -4.0);
    }
}

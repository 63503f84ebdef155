//! Macros for writing recipes and dishes as literals.

/// Build a [`Recipe`](crate::recipe::Recipe) from a list of steps.
///
/// Steps are not validated; use [`RecipeBuilder`](crate::recipe::RecipeBuilder)
/// for that.
///
/// # Example
///
/// ```
/// use mise::recipe;
/// use mise::steps::{add, sit, water_for};
///
/// let unnamed = recipe![add("beans", 150.0), water_for("beans")];
/// assert_eq!(unnamed.len(), 2);
///
/// let named = recipe!("resting beans" => [add("beans", 150.0), sit(10.0)]);
/// assert_eq!(named.name(), "resting beans");
/// ```
#[macro_export]
macro_rules! recipe {
    ($name:literal => [$($step:expr),* $(,)?]) => {
        $crate::recipe::Recipe::new($name, vec![$($step),*])
    };
    ($($step:expr),* $(,)?) => {
        $crate::recipe::Recipe::from(vec![$($step),*])
    };
}

/// Build a [`Dish`](crate::core::Dish) from `key => value` pairs.
///
/// Unlike `Dish::new()`, no `time` field is implied.
///
/// # Example
///
/// ```
/// use mise::dish;
/// use mise::core::Quantity;
///
/// let dish = dish! {
///     "time" => 0.0,
///     "beans" => Quantity::attributes([("weight", 150.0)]),
/// };
///
/// assert_eq!(dish.amount("beans").unwrap(), 150.0);
/// ```
#[macro_export]
macro_rules! dish {
    ($($key:expr => $value:expr),* $(,)?) => {
        $crate::core::Dish::empty()$(.mix_in($key, $value))*
    };
}

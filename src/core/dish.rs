//! The dish: an immutable snapshot of the cooking process.
//!
//! Every mutator returns a fresh `Dish` and leaves its receiver untouched,
//! so earlier snapshots stay valid for as long as anyone holds them.

use super::error::DishError;
use super::quantity::Quantity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Elapsed minutes since the recipe started.
pub const TIME: &str = "time";
/// Current temperature, when something has heated the dish.
pub const TEMPERATURE: &str = "temperature";
/// Free water in the pot.
pub const WATER: &str = "water";

/// Immutable mapping from field name to [`Quantity`].
///
/// Keys are an open set: besides the reserved `time`, `temperature` and
/// `water` fields, any ingredient name may appear.
///
/// # Example
///
/// ```rust
/// use mise::core::Dish;
///
/// let start = Dish::new();
/// let seasoned = start.safe_accumulate("salt", 5.0);
///
/// assert_eq!(seasoned.number("salt").unwrap(), 5.0);
/// assert!(!start.contains("salt")); // Original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dish {
    fields: BTreeMap<String, Quantity>,
}

impl Default for Dish {
    fn default() -> Self {
        Self::new()
    }
}

impl Dish {
    /// The conventional starting dish, `{time: 0}`.
    pub fn new() -> Self {
        Self::empty().mix_in(TIME, 0.0)
    }

    /// A dish with no fields at all, not even `time`.
    pub fn empty() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Quantity> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in key order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Quantity)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Read `key` as a bare number.
    ///
    /// Fails with `MissingField` when absent and `TypeMismatch` when the
    /// field holds an attribute set.
    pub fn number(&self, key: &str) -> Result<f64, DishError> {
        let quantity = self.get(key).ok_or_else(|| DishError::missing(key))?;
        quantity
            .as_number()
            .ok_or_else(|| DishError::mismatch(key, "number", quantity.kind()))
    }

    /// Read `key` as an amount: a bare number, or the `weight` of an
    /// attribute set.
    pub fn amount(&self, key: &str) -> Result<f64, DishError> {
        let quantity = self.get(key).ok_or_else(|| DishError::missing(key))?;
        quantity
            .weight()
            .ok_or_else(|| DishError::mismatch(key, "number or weighted attributes", quantity.kind()))
    }

    pub fn time(&self) -> Result<f64, DishError> {
        self.number(TIME)
    }

    /// Temperature if the dish has one. Present but malformed is an error.
    pub fn temperature(&self) -> Result<Option<f64>, DishError> {
        match self.get(TEMPERATURE) {
            None => Ok(None),
            Some(_) => self.number(TEMPERATURE).map(Some),
        }
    }

    /// Bind `key` to `value`, replacing whatever was there.
    pub fn mix_in(&self, key: &str, value: impl Into<Quantity>) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(key.to_string(), value.into());
        Self { fields }
    }

    /// Increase `key` by `delta`, treating an absent key as zero.
    ///
    /// This is the only place a numeric default is injected. It never fails:
    /// attribute sets accumulate into their `weight` attribute.
    pub fn safe_accumulate(&self, key: &str, delta: f64) -> Self {
        let next = match self.get(key) {
            Some(quantity) => quantity.accumulate(delta),
            None => Quantity::Number(delta),
        };
        self.mix_in(key, next)
    }

    /// The dish without `key`. Removing an absent key is a no-op.
    pub fn without(&self, key: &str) -> Self {
        if !self.contains(key) {
            return self.clone();
        }
        let mut fields = self.fields.clone();
        fields.remove(key);
        Self { fields }
    }
}

impl<K: Into<String>, V: Into<Quantity>> FromIterator<(K, V)> for Dish {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.fields().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ErrorKind;

    #[test]
    fn new_dish_starts_at_time_zero() {
        let dish = Dish::new();
        assert_eq!(dish.time().unwrap(), 0.0);
        assert_eq!(dish.len(), 1);
        assert!(Dish::empty().is_empty());
    }

    #[test]
    fn mix_in_overwrites() {
        let dish = Dish::new()
            .mix_in("beans", Quantity::attributes([("weight", 150.0)]))
            .mix_in("beans", 10.0);

        assert_eq!(dish.get("beans"), Some(&Quantity::Number(10.0)));
    }

    #[test]
    fn mix_in_is_immutable() {
        let dish = Dish::new();
        let hot = dish.mix_in(TEMPERATURE, 50.0);

        assert_eq!(dish.temperature().unwrap(), None);
        assert_eq!(hot.temperature().unwrap(), Some(50.0));
    }

    #[test]
    fn safe_accumulate_defaults_absent_to_zero() {
        let dish = Dish::new().safe_accumulate("garlic", 5.0);
        assert_eq!(dish.number("garlic").unwrap(), 5.0);

        let dish = dish.safe_accumulate("garlic", 2.5);
        assert_eq!(dish.number("garlic").unwrap(), 7.5);
    }

    #[test]
    fn safe_accumulate_handles_attribute_sets() {
        let dish = Dish::new()
            .mix_in("beans", Quantity::attributes([("weight", 150.0)]))
            .safe_accumulate("beans", 50.0);

        assert_eq!(dish.amount("beans").unwrap(), 200.0);
        assert_eq!(dish.number("beans").unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn without_removes_field() {
        let dish = Dish::new().mix_in(WATER, 300.0);
        let drained = dish.without(WATER);

        assert!(!drained.contains(WATER));
        assert!(dish.contains(WATER));
    }

    #[test]
    fn without_absent_key_is_noop() {
        let dish = Dish::new();
        assert_eq!(dish.without(WATER), dish);
    }

    #[test]
    fn number_reports_missing_and_mismatch() {
        let dish = Dish::new().mix_in("beans", Quantity::attributes([("weight", 1.0)]));

        assert_eq!(
            dish.number(WATER),
            Err(DishError::MissingField {
                field: "water".to_string()
            })
        );
        assert_eq!(
            dish.number("beans"),
            Err(DishError::TypeMismatch {
                field: "beans".to_string(),
                expected: "number",
                found: "attributes",
            })
        );
    }

    #[test]
    fn amount_requires_weight_on_attribute_sets() {
        let dish = Dish::new().mix_in("herbs", Quantity::attributes([("fresh", 1.0)]));
        assert_eq!(dish.amount("herbs").unwrap_err().kind(), ErrorKind::TypeMismatch);
    }

    #[test]
    fn malformed_temperature_is_an_error() {
        let dish = Dish::new().mix_in(TEMPERATURE, Quantity::attributes([("celsius", 40.0)]));
        assert!(dish.temperature().is_err());
    }

    #[test]
    fn display_lists_fields_in_key_order() {
        let dish = Dish::new().mix_in("beans", 150.0).mix_in(WATER, 300.0);
        assert_eq!(dish.to_string(), "{beans: 150, time: 0, water: 300}");
    }

    #[test]
    fn dish_serializes_as_plain_map() {
        let dish: Dish = [("time", 1.0), ("salt", 2.0)].into_iter().collect();
        let json = serde_json::to_string(&dish).unwrap();
        assert_eq!(json, r#"{"salt":2.0,"time":1.0}"#);

        let back: Dish = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dish);
    }
}

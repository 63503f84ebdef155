//! Values stored in a dish.
//!
//! An ingredient is either a bare amount or a small set of named
//! attributes (`{weight: 150}`). The two shapes are kept apart as a tagged
//! variant so that every reader has to say which one it accepts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Attribute consulted when an attribute set is used as an amount.
pub const WEIGHT: &str = "weight";

/// A single field value of a [`Dish`](super::Dish).
///
/// # Example
///
/// ```rust
/// use mise::core::Quantity;
///
/// let beans = Quantity::attributes([("weight", 150.0)]);
/// assert_eq!(beans.weight(), Some(150.0));
/// assert_eq!(beans.as_number(), None);
///
/// let salt = Quantity::from(5.0);
/// assert_eq!(salt.weight(), Some(5.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    /// A bare numeric amount
    Number(f64),
    /// Named numeric attributes of an ingredient
    Attributes(BTreeMap<String, f64>),
}

impl Quantity {
    /// Build an attribute set from `(name, value)` pairs.
    pub fn attributes<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        Self::Attributes(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// The value if this is a bare number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Attributes(_) => None,
        }
    }

    /// The amount this quantity stands for: the number itself, or the
    /// `weight` attribute of an attribute set.
    pub fn weight(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Attributes(attrs) => attrs.get(WEIGHT).copied(),
        }
    }

    /// Look up a named attribute. Bare numbers have none.
    pub fn attribute(&self, name: &str) -> Option<f64> {
        match self {
            Self::Number(_) => None,
            Self::Attributes(attrs) => attrs.get(name).copied(),
        }
    }

    /// Add `delta` to the amount. Attribute sets accumulate into `weight`,
    /// which counts as zero when absent.
    pub fn accumulate(&self, delta: f64) -> Self {
        match self {
            Self::Number(n) => Self::Number(n + delta),
            Self::Attributes(attrs) => {
                let mut attrs = attrs.clone();
                *attrs.entry(WEIGHT.to_string()).or_insert(0.0) += delta;
                Self::Attributes(attrs)
            }
        }
    }

    /// Shape name used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Attributes(_) => "attributes",
        }
    }
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<BTreeMap<String, f64>> for Quantity {
    fn from(attrs: BTreeMap<String, f64>) -> Self {
        Self::Attributes(attrs)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Attributes(attrs) => {
                write!(f, "{{")?;
                for (i, (name, value)) in attrs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            }
        }
    }
}

//! Errors that abort a preparation.

use crate::core::{DishError, ErrorKind};
use thiserror::Error;

/// Why folding a recipe stopped.
///
/// No partial timeline accompanies an error: a preparation either yields
/// every dish or none.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PrepareError {
    #[error("initial dish is unusable: {0}")]
    InvalidSeed(#[source] DishError),

    #[error("initial dish starts at time {time}, which is not a valid clock reading")]
    InvalidSeedTime { time: f64 },

    #[error("step {index} ('{label}') failed: {source}")]
    StepFailed {
        index: usize,
        label: String,
        #[source]
        source: DishError,
    },

    #[error("step {index} ('{label}') moved time backwards from {before} to {after}")]
    TimeReversed {
        index: usize,
        label: String,
        before: f64,
        after: f64,
    },

    #[error("step {index} ('{label}') produced non-finite time {time}")]
    NonFiniteTime {
        index: usize,
        label: String,
        time: f64,
    },
}

impl PrepareError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidSeed(source) | Self::StepFailed { source, .. } => source.kind(),
            Self::TimeReversed { .. } => ErrorKind::TimeReversed,
            Self::InvalidSeedTime { .. } | Self::NonFiniteTime { .. } => ErrorKind::InvalidTime,
        }
    }

    /// Index of the failing step, if a step failed.
    pub fn step_index(&self) -> Option<usize> {
        match self {
            Self::InvalidSeed(_) | Self::InvalidSeedTime { .. } => None,
            Self::StepFailed { index, .. }
            | Self::TimeReversed { index, .. }
            | Self::NonFiniteTime { index, .. } => Some(*index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_passes_through_dish_errors() {
        let err = PrepareError::StepFailed {
            index: 2,
            label: "soak beans 60".to_string(),
            source: DishError::missing("water"),
        };

        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.step_index(), Some(2));
        assert_eq!(
            err.to_string(),
            "step 2 ('soak beans 60') failed: missing field 'water'"
        );
    }

    #[test]
    fn seed_errors_have_no_step() {
        let err = PrepareError::InvalidSeed(DishError::mismatch("time", "number", "attributes"));
        assert_eq!(err.kind(), ErrorKind::TypeMismatch);
        assert_eq!(err.step_index(), None);
    }

    #[test]
    fn time_reversal_has_its_own_kind() {
        let err = PrepareError::TimeReversed {
            index: 0,
            label: "rewind".to_string(),
            before: 5.0,
            after: 1.0,
        };
        assert_eq!(err.kind(), ErrorKind::TimeReversed);
    }

    #[test]
    fn bad_clock_readings_share_a_kind() {
        let seed = PrepareError::InvalidSeedTime { time: -10.0 };
        assert_eq!(seed.kind(), ErrorKind::InvalidTime);
        assert_eq!(seed.step_index(), None);
        assert_eq!(
            seed.to_string(),
            "initial dish starts at time -10, which is not a valid clock reading"
        );

        let step = PrepareError::NonFiniteTime {
            index: 1,
            label: "sit NaN".to_string(),
            time: f64::NAN,
        };
        assert_eq!(step.kind(), ErrorKind::InvalidTime);
        assert_eq!(step.step_index(), Some(1));
        assert_eq!(step.to_string(), "step 1 ('sit NaN') produced non-finite time NaN");
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrainingError {
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("{workout_type} package expects {expected} readings, got {actual}")]
    ReadingCount {
        workout_type: &'static str,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, TrainingError>;

/// Rejects NaN/infinite values and anything not strictly positive.
pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TrainingError::InvalidInput(format!(
            "{field} must be a positive finite number, got {value}"
        )))
    }
}

/// Rejects derived values that overflowed to infinity or became NaN.
pub(crate) fn ensure_finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TrainingError::InvalidInput(format!(
            "{field} is not a finite number ({value}), inputs are out of range"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_positive() {
        assert_eq!(ensure_positive("weight_kg", 70.0), Ok(70.0));
        assert!(ensure_positive("weight_kg", 0.0).is_err());
        assert!(ensure_positive("weight_kg", -1.0).is_err());
        assert!(ensure_positive("weight_kg", f64::NAN).is_err());
        assert!(ensure_positive("weight_kg", f64::INFINITY).is_err());
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("mean_speed_kmh", 0.0), Ok(0.0));
        assert!(ensure_finite("mean_speed_kmh", f64::INFINITY).is_err());
        assert!(ensure_finite("calories_kcal", f64::NAN).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = TrainingError::ReadingCount {
            workout_type: "SWM",
            expected: 5,
            actual: 3,
        };
        assert_eq!(err.to_string(), "SWM package expects 5 readings, got 3");

        let err = ensure_positive("duration_hours", 0.0).unwrap_err();
        assert!(err.to_string().starts_with("Invalid input: duration_hours"));
    }
}

//! Decoding of raw sensor packages.
//!
//! A tracker reports a workout code followed by a flat list of readings:
//!
//! | code  | readings                                                        |
//! |-------|-----------------------------------------------------------------|
//! | `RUN` | actions, duration (h), weight (kg)                              |
//! | `WLK` | actions, duration (h), weight (kg), height (cm)                 |
//! | `SWM` | actions, duration (h), weight (kg), pool length (m), pool count |

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::errors::{Result, TrainingError};
use crate::session::{RaceWalking, Running, Swimming, Workout};

/// Workout codes understood by [`read_package`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Running,
    RaceWalking,
    Swimming,
}

impl WorkoutType {
    pub fn code(self) -> &'static str {
        match self {
            WorkoutType::Running => "RUN",
            WorkoutType::RaceWalking => "WLK",
            WorkoutType::Swimming => "SWM",
        }
    }

    /// Number of readings a package of this type carries.
    pub fn reading_count(self) -> usize {
        match self {
            WorkoutType::Running => 3,
            WorkoutType::RaceWalking => 4,
            WorkoutType::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = TrainingError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RUN" => Ok(WorkoutType::Running),
            "WLK" => Ok(WorkoutType::RaceWalking),
            "SWM" => Ok(WorkoutType::Swimming),
            other => Err(TrainingError::UnknownWorkoutType(other.to_string())),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Builds a validated session from a workout code and its readings.
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout> {
    let workout_type = code.parse::<WorkoutType>().inspect_err(|e| {
        warn!("Rejected package: {e}");
    })?;

    decode(workout_type, data).inspect_err(|e| {
        warn!(workout_type = %workout_type, "Rejected package: {e}");
    })
}

fn decode(workout_type: WorkoutType, data: &[f64]) -> Result<Workout> {
    let expected = workout_type.reading_count();
    if data.len() != expected {
        return Err(TrainingError::ReadingCount {
            workout_type: workout_type.code(),
            expected,
            actual: data.len(),
        });
    }

    let action_count = whole_count("action_count", data[0])?;
    let (duration_hours, weight_kg) = (data[1], data[2]);

    let workout: Workout = match workout_type {
        WorkoutType::Running => Running::new(action_count, duration_hours, weight_kg)?.into(),
        WorkoutType::RaceWalking => {
            RaceWalking::new(action_count, duration_hours, weight_kg, data[3])?.into()
        }
        WorkoutType::Swimming => {
            let pool_lengths_count = whole_count("pool_lengths_count", data[4])?;
            Swimming::new(
                action_count,
                duration_hours,
                weight_kg,
                data[3],
                pool_lengths_count,
            )?
            .into()
        }
    };

    Ok(workout)
}

/// Converts a reading that must hold a non-negative whole number.
fn whole_count(field: &str, value: f64) -> Result<u32> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(TrainingError::InvalidInput(format!(
            "{field} must be a non-negative whole number, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Training;

    #[test]
    fn test_workout_type_codes() {
        for workout_type in [
            WorkoutType::Running,
            WorkoutType::RaceWalking,
            WorkoutType::Swimming,
        ] {
            assert_eq!(workout_type.code().parse::<WorkoutType>(), Ok(workout_type));
        }
        assert_eq!(
            "BIKE".parse::<WorkoutType>(),
            Err(TrainingError::UnknownWorkoutType("BIKE".into()))
        );
    }

    #[test]
    fn test_read_each_type() {
        let run = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(matches!(run, Workout::Running(_)));

        let walk = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(walk, Workout::RaceWalking(_)));

        let swim = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        match swim {
            Workout::Swimming(ref s) => {
                assert_eq!(s.pool_lengths_count(), 40);
                assert!((s.pool_length_m() - 25.0).abs() < 1e-12);
            }
            _ => panic!("expected swimming, got {swim:?}"),
        }
        assert!((swim.mean_speed_kmh() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_reading_count() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0]).unwrap_err();
        assert_eq!(
            err,
            TrainingError::ReadingCount {
                workout_type: "SWM",
                expected: 5,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_rejects_fractional_counts() {
        assert!(matches!(
            read_package("RUN", &[100.5, 1.0, 75.0]),
            Err(TrainingError::InvalidInput(_))
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -4.0]),
            Err(TrainingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_rejects_zero_duration() {
        assert!(matches!(
            read_package("RUN", &[15000.0, 0.0, 75.0]),
            Err(TrainingError::InvalidInput(_))
        ));
    }
}

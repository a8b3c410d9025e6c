//! Training sessions.
//!
//! Every activity shares the same raw inputs ([`BaseTraining`]) and the same
//! derived computations (distance, mean speed, summary), exposed through the
//! [`Training`] trait. Each activity supplies its own calorie formula;
//! swimming also measures speed from pool lengths instead of strokes.

mod race_walking;
mod running;
mod swimming;

pub use race_walking::RaceWalking;
pub use running::Running;
pub use swimming::Swimming;

use tracing::debug;

use crate::config::{DEFAULT_STEP_LENGTH_M, METERS_PER_KM, MINUTES_PER_HOUR};
use crate::errors::{Result, TrainingError, ensure_finite, ensure_positive};
use crate::report::TrainingReport;

/// Shared capability of every training session.
pub trait Training {
    /// Activity name written into the report.
    fn name(&self) -> &'static str;

    /// Raw inputs common to every activity.
    fn base(&self) -> &BaseTraining;

    /// Meters covered by one action (step or stroke).
    fn step_length_m(&self) -> f64 {
        DEFAULT_STEP_LENGTH_M
    }

    fn duration_hours(&self) -> f64 {
        self.base().duration_hours
    }

    /// Distance covered, in kilometers.
    fn distance_km(&self) -> f64 {
        f64::from(self.base().action_count) * self.step_length_m() / METERS_PER_KM
    }

    /// Mean speed over the whole session, in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_hours()
    }

    /// Calories burned, in kcal.
    ///
    /// There is no activity-independent formula, so the default fails with
    /// [`TrainingError::NotImplemented`].
    fn spent_calories_kcal(&self) -> Result<f64> {
        Err(TrainingError::NotImplemented(
            "spent calories are only defined for a concrete activity",
        ))
    }

    /// Computes every derived value and packs them into a report.
    ///
    /// Fails with [`TrainingError::InvalidInput`] when a derived value
    /// overflows, e.g. a huge action count over a near-zero duration.
    fn summarize(&self) -> Result<TrainingReport> {
        let duration_hours = self.duration_hours();
        let distance_km = ensure_finite("distance_km", self.distance_km())?;
        let mean_speed_kmh = ensure_finite("mean_speed_kmh", self.mean_speed_kmh())?;
        let calories_kcal = ensure_finite("calories_kcal", self.spent_calories_kcal()?)?;

        debug!(
            activity = self.name(),
            duration_hours, distance_km, mean_speed_kmh, calories_kcal, "Summarized training"
        );

        Ok(TrainingReport::new(
            self.name(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        ))
    }
}

/// Raw inputs shared by all activities.
///
/// Used on its own it has no calorie formula, so summarizing it fails.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseTraining {
    /// Steps or strokes counted by the tracker.
    pub action_count: u32,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl BaseTraining {
    /// Validates the shared inputs: duration and weight must be positive and finite.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            action_count,
            duration_hours: ensure_positive("duration_hours", duration_hours)?,
            weight_kg: ensure_positive("weight_kg", weight_kg)?,
        })
    }

    /// Session length in minutes.
    pub fn duration_minutes(&self) -> f64 {
        self.duration_hours * MINUTES_PER_HOUR
    }
}

impl Training for BaseTraining {
    fn name(&self) -> &'static str {
        "Training"
    }

    fn base(&self) -> &BaseTraining {
        self
    }
}

/// Closed set of supported activities.
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    RaceWalking(RaceWalking),
    Swimming(Swimming),
}

impl Training for Workout {
    fn name(&self) -> &'static str {
        match self {
            Workout::Running(t) => t.name(),
            Workout::RaceWalking(t) => t.name(),
            Workout::Swimming(t) => t.name(),
        }
    }

    fn base(&self) -> &BaseTraining {
        match self {
            Workout::Running(t) => t.base(),
            Workout::RaceWalking(t) => t.base(),
            Workout::Swimming(t) => t.base(),
        }
    }

    fn step_length_m(&self) -> f64 {
        match self {
            Workout::Running(t) => t.step_length_m(),
            Workout::RaceWalking(t) => t.step_length_m(),
            Workout::Swimming(t) => t.step_length_m(),
        }
    }

    fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(t) => t.mean_speed_kmh(),
            Workout::RaceWalking(t) => t.mean_speed_kmh(),
            Workout::Swimming(t) => t.mean_speed_kmh(),
        }
    }

    fn spent_calories_kcal(&self) -> Result<f64> {
        match self {
            Workout::Running(t) => t.spent_calories_kcal(),
            Workout::RaceWalking(t) => t.spent_calories_kcal(),
            Workout::Swimming(t) => t.spent_calories_kcal(),
        }
    }
}

impl From<Running> for Workout {
    fn from(training: Running) -> Self {
        Workout::Running(training)
    }
}

impl From<RaceWalking> for Workout {
    fn from(training: RaceWalking) -> Self {
        Workout::RaceWalking(training)
    }
}

impl From<Swimming> for Workout {
    fn from(training: Swimming) -> Self {
        Workout::Swimming(training)
    }
}

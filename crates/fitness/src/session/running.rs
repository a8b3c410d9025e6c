//! Running sessions.

use super::{BaseTraining, Training};
use crate::config::{METERS_PER_KM, RunningConfig};
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    base: BaseTraining,
    config: RunningConfig,
}

impl Running {
    /// Creates a running session with the default coefficients.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self> {
        Ok(Self {
            base: BaseTraining::new(action_count, duration_hours, weight_kg)?,
            config: RunningConfig::DEFAULT,
        })
    }

    /// Replaces the default coefficients.
    pub fn with_config(mut self, config: RunningConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RunningConfig {
        &self.config
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        "Running"
    }

    fn base(&self) -> &BaseTraining {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        self.config.step_length_m
    }

    fn spent_calories_kcal(&self) -> Result<f64> {
        let weighted_speed =
            self.config.speed_multiplier * self.mean_speed_kmh() + self.config.speed_shift;
        Ok(weighted_speed * self.base.weight_kg / METERS_PER_KM * self.base.duration_minutes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_session() {
        let run = Running::new(720, 1.0, 80.0).unwrap();
        assert!((run.distance_km() - 0.468).abs() < 1e-9);
        assert!((run.mean_speed_kmh() - 0.468).abs() < 1e-9);
        // (18 * 0.468 + 1.79) * 80 / 1000 * 60
        assert!((run.spent_calories_kcal().unwrap() - 49.0272).abs() < 1e-9);
    }

    #[test]
    fn test_calories_grow_with_speed_and_weight() {
        let slow = Running::new(5000, 1.0, 70.0).unwrap();
        let fast = Running::new(10000, 1.0, 70.0).unwrap();
        let heavy = Running::new(5000, 1.0, 90.0).unwrap();

        let slow_kcal = slow.spent_calories_kcal().unwrap();
        assert!(fast.spent_calories_kcal().unwrap() > slow_kcal);
        assert!(heavy.spent_calories_kcal().unwrap() > slow_kcal);
    }

    #[test]
    fn test_custom_step_length() {
        let run = Running::new(1000, 1.0, 70.0).unwrap().with_config(RunningConfig {
            step_length_m: 1.0,
            ..RunningConfig::DEFAULT
        });
        assert!((run.distance_km() - 1.0).abs() < 1e-9);
        assert_eq!(run.config().speed_multiplier, 18.0);
        assert_eq!(run.config().step_length_m, 1.0);
    }
}

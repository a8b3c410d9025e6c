//! Race-walking sessions.

use super::{BaseTraining, Training};
use crate::config::{CM_PER_M, RaceWalkingConfig};
use crate::errors::{Result, ensure_positive};

/// Race-walking session; calories depend on the athlete's height as well.
#[derive(Debug, Clone, PartialEq)]
pub struct RaceWalking {
    base: BaseTraining,
    height_cm: f64,
    config: RaceWalkingConfig,
}

impl RaceWalking {
    /// Creates a race-walking session; `height_cm` must be positive.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self> {
        Ok(Self {
            base: BaseTraining::new(action_count, duration_hours, weight_kg)?,
            height_cm: ensure_positive("height_cm", height_cm)?,
            config: RaceWalkingConfig::DEFAULT,
        })
    }

    /// Replaces the default coefficients.
    pub fn with_config(mut self, config: RaceWalkingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn config(&self) -> &RaceWalkingConfig {
        &self.config
    }
}

impl Training for RaceWalking {
    fn name(&self) -> &'static str {
        "RaceWalking"
    }

    fn base(&self) -> &BaseTraining {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        self.config.step_length_m
    }

    fn spent_calories_kcal(&self) -> Result<f64> {
        let weight = self.base.weight_kg;
        let speed_ms = self.mean_speed_kmh() * self.config.kmh_to_ms;
        let height_m = self.height_cm / CM_PER_M;

        let per_minute = self.config.weight_multiplier * weight
            + (speed_ms.powi(2) / height_m) * self.config.speed_height_multiplier * weight;
        Ok(per_minute * self.base.duration_minutes())
    }
}

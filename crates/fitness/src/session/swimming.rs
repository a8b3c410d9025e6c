//! Swimming sessions.

use super::{BaseTraining, Training};
use crate::config::{METERS_PER_KM, SwimmingConfig};
use crate::errors::{Result, ensure_positive};

/// Swimming session.
///
/// Speed comes from the pool lengths swum, not from the stroke count, so
/// [`Training::mean_speed_kmh`] is overridden here. [`Training::distance_km`]
/// still uses strokes times stroke length.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    base: BaseTraining,
    pool_length_m: f64,
    pool_lengths_count: u32,
    config: SwimmingConfig,
}

impl Swimming {
    /// Creates a swimming session; `pool_length_m` must be positive.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_lengths_count: u32,
    ) -> Result<Self> {
        Ok(Self {
            base: BaseTraining::new(action_count, duration_hours, weight_kg)?,
            pool_length_m: ensure_positive("pool_length_m", pool_length_m)?,
            pool_lengths_count,
            config: SwimmingConfig::DEFAULT,
        })
    }

    /// Replaces the default coefficients.
    pub fn with_config(mut self, config: SwimmingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Full pool traversals completed.
    pub fn pool_lengths_count(&self) -> u32 {
        self.pool_lengths_count
    }

    pub fn config(&self) -> &SwimmingConfig {
        &self.config
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        "Swimming"
    }

    fn base(&self) -> &BaseTraining {
        &self.base
    }

    fn step_length_m(&self) -> f64 {
        self.config.step_length_m
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_lengths_count)
            / METERS_PER_KM
            / self.base.duration_hours
    }

    fn spent_calories_kcal(&self) -> Result<f64> {
        Ok(
            (self.config.speed_multiplier * self.mean_speed_kmh() + self.config.weight_multiplier)
                * self.base.weight_kg,
        )
    }
}

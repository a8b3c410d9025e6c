//! Per-activity constant tables.
//!
//! Every activity computes calories with its own tuned coefficients. They live
//! here as plain `Copy` structs so a session can carry its own table instead of
//! reaching for shared globals.

use serde::{Deserialize, Serialize};

/// Meters in one kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Centimeters in one meter.
pub const CM_PER_M: f64 = 100.0;

/// Distance covered by one step, in meters.
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// Coefficients for running sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunningConfig {
    /// Meters covered per step.
    pub step_length_m: f64,
    /// Weight of mean speed in the calorie formula.
    pub speed_multiplier: f64,
    /// Speed-independent shift added to the weighted speed.
    pub speed_shift: f64,
}

impl RunningConfig {
    pub const DEFAULT: Self = Self {
        step_length_m: DEFAULT_STEP_LENGTH_M,
        speed_multiplier: 18.0,
        speed_shift: 1.79,
    };
}

impl Default for RunningConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Coefficients for race-walking sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaceWalkingConfig {
    /// Meters covered per step.
    pub step_length_m: f64,
    /// km/h to m/s conversion factor (rounded, as the calorie model was fitted with it).
    pub kmh_to_ms: f64,
    /// Calories per minute per kilogram, independent of speed.
    pub weight_multiplier: f64,
    /// Weight of the speed²/height term.
    pub speed_height_multiplier: f64,
}

impl RaceWalkingConfig {
    pub const DEFAULT: Self = Self {
        step_length_m: DEFAULT_STEP_LENGTH_M,
        kmh_to_ms: 0.278,
        weight_multiplier: 0.035,
        speed_height_multiplier: 0.029,
    };
}

impl Default for RaceWalkingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Coefficients for swimming sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwimmingConfig {
    /// Meters covered per stroke.
    pub step_length_m: f64,
    /// Weight of mean speed in the calorie formula.
    pub speed_multiplier: f64,
    /// Shift added to the weighted speed before scaling by athlete weight.
    pub weight_multiplier: f64,
}

impl SwimmingConfig {
    pub const DEFAULT: Self = Self {
        step_length_m: 1.38,
        speed_multiplier: 1.1,
        weight_multiplier: 2.0,
    };
}

impl Default for SwimmingConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

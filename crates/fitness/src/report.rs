//! Workout summary and its text rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived summary of one session, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    activity_name: String,
    duration_hours: f64,
    distance_km: f64,
    mean_speed_kmh: f64,
    calories_kcal: f64,
}

impl TrainingReport {
    pub fn new(
        activity_name: impl Into<String>,
        duration_hours: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            activity_name: activity_name.into(),
            duration_hours,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }

    pub fn activity_name(&self) -> &str {
        &self.activity_name
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        self.mean_speed_kmh
    }

    pub fn calories_kcal(&self) -> f64 {
        self.calories_kcal
    }

    /// Renders the report as a single line, every number with three decimals.
    pub fn render(&self) -> String {
        format!(
            "Activity type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg. speed: {:.3} km/h; Calories burned: {:.3}.",
            self.activity_name,
            self.duration_hours,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal,
        )
    }
}

impl fmt::Display for TrainingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let report = TrainingReport::new("Swimming", 1.0, 1.38, 1.0, 217.0);
        assert_eq!(
            report.render(),
            "Activity type: Swimming; Duration: 1.000 h; Distance: 1.380 km; \
             Avg. speed: 1.000 km/h; Calories burned: 217.000."
        );
    }

    #[test]
    fn test_render_three_decimals_any_magnitude() {
        let report = TrainingReport::new("Running", 0.0004, 12345.67891, 1e-9, 98765432.1);
        let text = report.render();
        assert!(text.contains("Duration: 0.000 h"));
        assert!(text.contains("Distance: 12345.679 km"));
        assert!(text.contains("Avg. speed: 0.000 km/h"));
        assert!(text.contains("Calories burned: 98765432.100."));
    }

    #[test]
    fn test_display_matches_render() {
        let report = TrainingReport::new("RaceWalking", 0.5, 1.3, 2.6, 157.5);
        assert_eq!(report.to_string(), report.render());
    }

    #[test]
    fn test_serializes_all_fields() {
        let report = TrainingReport::new("Running", 1.0, 0.468, 0.468, 49.0272);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["activity_name"], "Running");
        assert_eq!(json["calories_kcal"], 49.0272);
    }
}

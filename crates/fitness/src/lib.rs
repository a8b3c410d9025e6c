//! Workout summaries from raw sensor readings.
//!
//! A session is built from the raw counters a tracker reports (steps or
//! strokes, duration, athlete weight plus a few activity-specific values),
//! summarized into a [`TrainingReport`] and rendered as a one-line message.
//!
//! # Quick Start
//!
//! ```rust
//! use fitness::prelude::*;
//!
//! let run = Running::new(720, 1.0, 80.0)?;
//! let report = run.summarize()?;
//! assert!(report.render().starts_with("Activity type: Running;"));
//! # Ok::<(), fitness::TrainingError>(())
//! ```

pub mod config;
pub mod errors;
pub mod package;
pub mod report;
pub mod session;

pub use errors::{Result, TrainingError};
pub use report::TrainingReport;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{RaceWalkingConfig, RunningConfig, SwimmingConfig};
    pub use crate::errors::{Result, TrainingError};
    pub use crate::package::{WorkoutType, read_package};
    pub use crate::report::TrainingReport;
    pub use crate::session::{BaseTraining, RaceWalking, Running, Swimming, Training, Workout};
}

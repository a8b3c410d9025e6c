//! Prints summaries for the built-in sample packages.
//!
//! Run with:
//! ```
//! cargo run -p fitness --bin fitness-report
//! REPORT_FORMAT=json cargo run -p fitness --bin fitness-report
//! ```

use std::env;

use anyhow::bail;
use fitness::prelude::*;
use tracing_subscriber::EnvFilter;

const SAMPLE_PACKAGES: &[(&str, &[f64])] = &[
    ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
    ("RUN", &[15000.0, 1.0, 75.0]),
    ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
];

#[derive(Debug, Clone, Copy)]
enum OutputFormat {
    Text,
    Json,
}

fn output_format() -> anyhow::Result<OutputFormat> {
    match env::var("REPORT_FORMAT").as_deref() {
        Err(_) | Ok("text") => Ok(OutputFormat::Text),
        Ok("json") => Ok(OutputFormat::Json),
        Ok(other) => bail!("unsupported REPORT_FORMAT {other:?}, expected \"text\" or \"json\""),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let format = output_format()?;
    tracing::info!("Summarizing {} sample packages", SAMPLE_PACKAGES.len());

    let mut failures = 0;
    for (code, data) in SAMPLE_PACKAGES {
        let report = match read_package(code, data).and_then(|workout| workout.summarize()) {
            Ok(report) => report,
            Err(e) => {
                tracing::error!("Failed to summarize {code} package: {e}");
                failures += 1;
                continue;
            }
        };

        match format {
            OutputFormat::Text => println!("{}", report.render()),
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        }
    }

    if failures > 0 {
        bail!("{failures} package(s) could not be summarized");
    }
    Ok(())
}

//! Compare two sets of request latencies and print the report
//!
//! Run with: cargo run -p sample-stats --example compare_samples
//!
//! Set `RUST_LOG=sample_stats=trace` to see the test internals.

use sample_stats::stats::{outlier_stats, percentile, to_sample};
use sample_stats::{compare_samples, AnalysisConfig, Reporter};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CONFIG: &str = r#"
[comparison]
alpha = 0.05
label_a = "v1.4 latency (ms)"
label_b = "v1.5 latency (ms)"

[outliers]
enabled = true
multiplier = 1.5

[report]
format = "console"
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Millisecond timings as collected, one GC pause in each run
    let before = to_sample([
        48u32, 51, 47, 50, 49, 52, 48, 50, 47, 51, 49, 50, 212, 48, 49, 51,
    ]);
    let after = to_sample([
        44u32, 46, 43, 45, 47, 44, 45, 43, 46, 44, 45, 198, 44, 46, 45, 43,
    ]);

    let config = AnalysisConfig::from_str(CONFIG)?;

    for (label, sample) in [("before", &before), ("after", &after)] {
        let stats = outlier_stats(sample, config.outliers.multiplier);
        info!(
            "{}: p95 {:.1} ms, {} of {} values outside the fences",
            label,
            percentile(sample, 95.0)?.unwrap_or(f64::NAN),
            stats.outliers_removed,
            stats.original_count
        );
    }

    let report = compare_samples(&before, &after, &config)?;
    Reporter::new(config.report.format).report(&report)?;

    if report.is_significant() {
        info!("Latency changed: {}", report.verdict);
    } else {
        info!("No significant change at alpha = {}", config.comparison.alpha);
    }

    Ok(())
}

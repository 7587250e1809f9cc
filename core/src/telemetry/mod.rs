pub mod metrics;
pub mod progress;

pub use metrics::RunMetrics;
pub use progress::ProgressLogger;

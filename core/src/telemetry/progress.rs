use log::info;

/// Throttled progress reporting for long solver runs.
///
/// Emits roughly one line per tenth of the run plus the final step, so a
/// multi-thousand-step run does not flood the log at info level.
#[derive(Debug)]
pub struct ProgressLogger {
    total: usize,
    stride: usize,
}

impl ProgressLogger {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            stride: (total / 10).max(1),
        }
    }

    /// `step` counts completed steps, so it runs from 1 to `total`.
    pub fn on_step(&self, step: usize) {
        if self.should_report(step) {
            info!(
                "step {}/{} ({:.0}%)",
                step,
                self.total,
                100.0 * step as f64 / self.total as f64
            );
        }
    }

    fn should_report(&self, step: usize) -> bool {
        step == self.total || (step > 0 && step % self.stride == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_on_stride_multiples_and_the_final_step() {
        let progress = ProgressLogger::new(100);
        assert!(progress.should_report(10));
        assert!(progress.should_report(100));
        assert!(!progress.should_report(11));
    }

    #[test]
    fn short_runs_report_every_step() {
        let progress = ProgressLogger::new(7);
        for step in 1..=7 {
            assert!(progress.should_report(step));
        }
    }
}

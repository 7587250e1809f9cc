use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use fdtdcore::frames::CsvRecorder;
use fdtdcore::prelude::NullSink;
use fdtdcore::solver::{FieldSolver, ScenarioSpec};

/// Outcome summary of one simulation run.
pub struct RunReport {
    pub steps: usize,
    pub frames: usize,
    pub samples_per_frame: usize,
    pub dt: f32,
    pub peak_field: f32,
    pub elapsed: Duration,
}

pub struct Runner {
    spec: ScenarioSpec,
}

impl Runner {
    pub fn new(spec: ScenarioSpec) -> Self {
        Self { spec }
    }

    /// Run the scenario to completion, streaming frames to `output` when a
    /// path is given and discarding them otherwise.
    pub fn execute(&self, output: Option<&Path>) -> anyhow::Result<RunReport> {
        let mut solver = FieldSolver::new(&self.spec).context("building solver")?;
        solver.log_parameters();
        let started = Instant::now();
        let metrics = match output {
            Some(path) => {
                let mut sink = CsvRecorder::create(path)
                    .with_context(|| format!("creating {}", path.display()))?;
                solver.run(&mut sink).context("recording frames")?
            }
            None => {
                let mut sink = NullSink::default();
                solver.run(&mut sink).context("running solver")?
            }
        };
        Ok(RunReport {
            steps: metrics.steps(),
            frames: metrics.frames(),
            samples_per_frame: solver.num_nodes(),
            dt: solver.dt(),
            peak_field: metrics.peak_field(),
            elapsed: started.elapsed(),
        })
    }
}

use log::info;

use crate::math::FieldStats;
use crate::prelude::{FrameError, FrameSink, SpecError};
use crate::solver::constants::PhysicalConstants;
use crate::solver::grid::Grid;
use crate::solver::scenario::ScenarioSpec;
use crate::solver::source::GaussianSource;
use crate::telemetry::{ProgressLogger, RunMetrics};

/// One-dimensional Maxwell solver on a staggered Yee grid.
///
/// `E` lives on the `num_x` grid nodes and `H` on the midpoints between
/// them. Each step advances `E` from the curl of `H` plus any source
/// currents, then `H` from the curl of the fresh `E`. The two outermost
/// `E` nodes are held at zero, so the domain behaves as a cavity with
/// perfectly conducting walls and pulses reflect back instead of leaving.
pub struct FieldSolver {
    grid: Grid,
    dt: f32,
    num_steps: usize,
    step_index: usize,
    e: Vec<f32>,
    h: Vec<f32>,
    sources: Vec<GaussianSource>,
}

impl FieldSolver {
    pub fn new(spec: &ScenarioSpec) -> Result<Self, SpecError> {
        spec.validate()?;
        let grid = Grid::from_spacing(spec.grid.x0, spec.grid.x1, spec.grid.dx)?;
        let dt = spec.stability_factor * grid.dx() / PhysicalConstants::C;
        let num_steps = (spec.t_final / dt) as usize;
        let sources = spec
            .sources
            .iter()
            .map(|source| GaussianSource::place(source, &grid))
            .collect::<Result<Vec<_>, _>>()?;
        let num_x = grid.num_x();
        Ok(Self {
            grid,
            dt,
            num_steps,
            step_index: 0,
            e: vec![0.0; num_x],
            h: vec![0.0; num_x - 1],
            sources,
        })
    }

    /// Step size chosen from the stability factor and grid spacing.
    pub fn dt(&self) -> f32 {
        self.dt
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn num_nodes(&self) -> usize {
        self.grid.num_x()
    }

    /// Simulation time of the current state.
    pub fn time(&self) -> f32 {
        self.step_index as f32 * self.dt
    }

    pub fn e_field(&self) -> &[f32] {
        &self.e
    }

    /// Log the resolved grid and time-stepping parameters.
    pub fn log_parameters(&self) {
        info!(
            "grid: [{}, {}] dx={:.6} -> {} nodes",
            self.grid.x0(),
            self.grid.x1(),
            self.grid.dx(),
            self.grid.num_x()
        );
        info!(
            "time: dt={:.6} -> {} steps to t={:.3}",
            self.dt,
            self.num_steps,
            self.num_steps as f32 * self.dt
        );
        info!("sources: {}", self.sources.len());
    }

    fn update_electric(&mut self) {
        let k = self.dt / (self.grid.dx() * PhysicalConstants::EPSILON_0);
        for i in 1..self.e.len() - 1 {
            self.e[i] -= (self.h[i] - self.h[i - 1]) * k;
        }
        let t = self.time();
        for source in &self.sources {
            self.e[source.index()] -= source.current_at(t) * k;
        }
    }

    fn update_magnetic(&mut self) {
        let k = self.dt / (self.grid.dx() * PhysicalConstants::MU_0);
        for i in 0..self.h.len() {
            self.h[i] -= (self.e[i + 1] - self.e[i]) * k;
        }
    }

    /// Advance the fields by one time step.
    pub fn advance(&mut self) {
        self.update_electric();
        self.update_magnetic();
        self.step_index += 1;
    }

    /// Run every remaining step, handing the electric-field row to `sink`
    /// after each one.
    pub fn run<S: FrameSink>(&mut self, sink: &mut S) -> Result<RunMetrics, FrameError> {
        let mut metrics = RunMetrics::new();
        let progress = ProgressLogger::new(self.num_steps);
        while self.step_index < self.num_steps {
            self.advance();
            sink.record(&self.e)?;
            metrics.observe_step();
            metrics.observe_frame(&self.e);
            progress.on_step(self.step_index);
        }
        sink.finish()?;
        info!(
            "run complete: peak |E| {:.4}, final rms {:.4}",
            metrics.peak_field(),
            FieldStats::rms(&self.e)
        );
        Ok(metrics)
    }
}

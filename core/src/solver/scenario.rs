use serde::{Deserialize, Serialize};

use crate::prelude::SpecError;
use crate::solver::grid::Grid;
use crate::solver::source::GaussianSource;

/// Spatial extent and target spacing of the computation domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub x0: f32,
    pub x1: f32,
    pub dx: f32,
}

/// One Gaussian point source of electric current.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub position: f32,
    pub amplitude: f32,
    pub t_center: f32,
    pub t_decay: f32,
}

/// Complete description of a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioSpec {
    pub grid: GridSpec,
    pub t_final: f32,
    #[serde(default = "default_stability_factor")]
    pub stability_factor: f32,
    #[serde(default)]
    pub sources: Vec<SourceSpec>,
}

fn default_stability_factor() -> f32 {
    0.99
}

impl ScenarioSpec {
    /// The stock demonstration run: a Gaussian pulse launched from the
    /// middle of a `[-10, 10]` domain, recorded until both wavefronts have
    /// reflected off the walls.
    pub fn demo() -> Self {
        Self {
            grid: GridSpec {
                x0: -10.0,
                x1: 10.0,
                dx: 0.01,
            },
            t_final: 22.0,
            stability_factor: 0.99,
            sources: vec![SourceSpec {
                position: 0.0,
                amplitude: 1.0,
                t_center: 1.0,
                t_decay: 0.2,
            }],
        }
    }

    /// Check everything the solver will rely on: a well-formed grid,
    /// positive run length, a stability factor in `(0, 1]`, and sources
    /// that land strictly inside the domain.
    pub fn validate(&self) -> Result<(), SpecError> {
        let grid = Grid::from_spacing(self.grid.x0, self.grid.x1, self.grid.dx)?;
        if !self.t_final.is_finite() || self.t_final <= 0.0 {
            return Err(SpecError::Time(format!(
                "t_final ({}) must be positive",
                self.t_final
            )));
        }
        if !self.stability_factor.is_finite()
            || self.stability_factor <= 0.0
            || self.stability_factor > 1.0
        {
            return Err(SpecError::Time(format!(
                "stability_factor ({}) must lie in (0, 1]",
                self.stability_factor
            )));
        }
        for spec in &self.sources {
            GaussianSource::place(spec, &grid)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenario_validates() {
        ScenarioSpec::demo().validate().unwrap();
    }

    #[test]
    fn bad_time_parameters_are_rejected() {
        let mut spec = ScenarioSpec::demo();
        spec.t_final = 0.0;
        assert!(matches!(spec.validate(), Err(SpecError::Time(_))));

        let mut spec = ScenarioSpec::demo();
        spec.stability_factor = 1.5;
        assert!(matches!(spec.validate(), Err(SpecError::Time(_))));
    }

    #[test]
    fn out_of_domain_source_is_rejected() {
        let mut spec = ScenarioSpec::demo();
        spec.sources[0].position = 42.0;
        assert!(matches!(spec.validate(), Err(SpecError::Source(_))));
    }

    #[test]
    fn bad_grid_is_rejected_before_time_checks() {
        let mut spec = ScenarioSpec::demo();
        spec.grid.dx = -1.0;
        spec.t_final = -1.0;
        assert!(matches!(spec.validate(), Err(SpecError::Grid(_))));
    }
}

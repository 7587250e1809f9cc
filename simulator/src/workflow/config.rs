use std::fs;
use std::path::Path;

use anyhow::Context;
use fdtdcore::solver::{GridSpec, ScenarioSpec, SourceSpec};

/// Read and validate a scenario spec from a YAML file.
pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<ScenarioSpec> {
    let path_ref = path.as_ref();
    let contents = fs::read_to_string(path_ref)
        .with_context(|| format!("reading scenario {}", path_ref.display()))?;
    let spec: ScenarioSpec = serde_yaml::from_str(&contents)
        .with_context(|| format!("parsing scenario {}", path_ref.display()))?;
    spec.validate()
        .with_context(|| format!("validating scenario {}", path_ref.display()))?;
    Ok(spec)
}

/// Build a scenario from command-line values with a single source pulsing
/// at the domain midpoint.
pub fn from_args(
    x0: f32,
    x1: f32,
    dx: f32,
    t_final: f32,
    stability_factor: f32,
) -> ScenarioSpec {
    ScenarioSpec {
        grid: GridSpec { x0, x1, dx },
        t_final,
        stability_factor,
        sources: vec![SourceSpec {
            position: (x0 + x1) / 2.0,
            amplitude: 1.0,
            t_center: 1.0,
            t_decay: 0.2,
        }],
    }
}

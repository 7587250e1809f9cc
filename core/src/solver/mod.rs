//! One-dimensional FDTD solver: scenario specs, the Yee grid, Gaussian
//! sources, and the leapfrog stepper.

pub mod constants;
pub mod grid;
pub mod scenario;
pub mod source;
pub mod stepper;

pub use grid::Grid;
pub use scenario::{GridSpec, ScenarioSpec, SourceSpec};
pub use source::GaussianSource;
pub use stepper::FieldSolver;

use crate::prelude::SpecError;
use crate::solver::grid::Grid;
use crate::solver::scenario::SourceSpec;

/// Point current source with a Gaussian temporal profile, resolved onto a
/// grid node.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianSource {
    amplitude: f32,
    t_center: f32,
    t_decay: f32,
    index: usize,
}

impl GaussianSource {
    /// Validate a source spec and pin its position to a node.
    ///
    /// Sources must land strictly inside the domain; the two boundary
    /// nodes are held at zero by the solver and cannot be driven.
    pub fn place(spec: &SourceSpec, grid: &Grid) -> Result<Self, SpecError> {
        if !(spec.amplitude.is_finite() && spec.t_center.is_finite() && spec.t_decay.is_finite())
        {
            return Err(SpecError::Source(
                "source parameters must be finite".into(),
            ));
        }
        if spec.t_decay <= 0.0 {
            return Err(SpecError::Source(format!(
                "t_decay ({}) must be positive",
                spec.t_decay
            )));
        }
        let index = grid.index_of(spec.position)?;
        if index == 0 || index + 1 == grid.num_x() {
            return Err(SpecError::Source(format!(
                "position {} falls on a boundary node",
                spec.position
            )));
        }
        Ok(Self {
            amplitude: spec.amplitude,
            t_center: spec.t_center,
            t_decay: spec.t_decay,
            index,
        })
    }

    /// Current injected at simulation time `t`:
    /// `amplitude * exp(-((t - t_center) / t_decay)^2)`.
    pub fn current_at(&self, t: f32) -> f32 {
        let u = (t - self.t_center) / self.t_decay;
        self.amplitude * (-u * u).exp()
    }

    /// Node the source drives.
    pub fn index(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_spacing(-10.0, 10.0, 0.01).unwrap()
    }

    fn spec() -> SourceSpec {
        SourceSpec {
            position: 0.0,
            amplitude: 2.0,
            t_center: 1.0,
            t_decay: 0.2,
        }
    }

    #[test]
    fn peak_current_flows_at_center_time() {
        let source = GaussianSource::place(&spec(), &grid()).unwrap();
        assert!((source.current_at(1.0) - 2.0).abs() < 1e-6);
    }

    #[test]
    fn profile_is_symmetric_and_decays() {
        let source = GaussianSource::place(&spec(), &grid()).unwrap();
        let before = source.current_at(0.8);
        let after = source.current_at(1.2);
        assert!((before - after).abs() < 1e-6);
        assert!(before < source.current_at(1.0));
        // Three decay times out the pulse is practically gone.
        assert!(source.current_at(1.0 + 0.6) < 1e-3 * 2.0);
    }

    #[test]
    fn position_resolves_to_the_midpoint_node() {
        let source = GaussianSource::place(&spec(), &grid()).unwrap();
        assert_eq!(source.index(), 1000);
    }

    #[test]
    fn non_positive_decay_is_rejected() {
        let mut bad = spec();
        bad.t_decay = 0.0;
        assert!(GaussianSource::place(&bad, &grid()).is_err());
    }

    #[test]
    fn boundary_positions_are_rejected() {
        let mut edge = spec();
        edge.position = -10.0;
        assert!(GaussianSource::place(&edge, &grid()).is_err());
        edge.position = 10.0;
        assert!(GaussianSource::place(&edge, &grid()).is_err());
    }
}

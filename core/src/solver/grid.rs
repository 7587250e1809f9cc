use crate::prelude::SpecError;

/// Uniform spatial axis the field arrays live on.
///
/// The node count comes from truncating `(x1 - x0) / dx`; the spacing is
/// then recomputed from that count so the axis ends exactly at `x1` even
/// when the requested spacing does not divide the span evenly.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    x0: f32,
    x1: f32,
    dx: f32,
    num_x: usize,
}

impl Grid {
    pub fn from_spacing(x0: f32, x1: f32, dx: f32) -> Result<Self, SpecError> {
        if !(x0.is_finite() && x1.is_finite() && dx.is_finite()) {
            return Err(SpecError::Grid(
                "bounds and spacing must be finite".into(),
            ));
        }
        if x1 <= x0 {
            return Err(SpecError::Grid(format!(
                "x1 ({x1}) must exceed x0 ({x0})"
            )));
        }
        if dx <= 0.0 {
            return Err(SpecError::Grid(format!("dx ({dx}) must be positive")));
        }
        let num_x = ((x1 - x0) / dx) as usize;
        if num_x < 2 {
            return Err(SpecError::Grid(format!(
                "spacing {dx} leaves fewer than two nodes on [{x0}, {x1}]"
            )));
        }
        let dx = (x1 - x0) / num_x as f32;
        Ok(Self { x0, x1, dx, num_x })
    }

    pub fn x0(&self) -> f32 {
        self.x0
    }

    pub fn x1(&self) -> f32 {
        self.x1
    }

    /// Effective spacing after the node count was fixed.
    pub fn dx(&self) -> f32 {
        self.dx
    }

    /// Number of electric-field nodes.
    pub fn num_x(&self) -> usize {
        self.num_x
    }

    /// Node index holding the physical position `x`.
    pub fn index_of(&self, x: f32) -> Result<usize, SpecError> {
        if !x.is_finite() || x < self.x0 || x > self.x1 {
            return Err(SpecError::Source(format!(
                "position {x} lies outside [{}, {}]",
                self.x0, self.x1
            )));
        }
        let index = ((x - self.x0) / self.dx) as usize;
        Ok(index.min(self.num_x - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_count_truncates_and_spacing_is_recomputed() {
        let grid = Grid::from_spacing(0.0, 1.0, 0.3).unwrap();
        // 1.0 / 0.3 truncates to 3 nodes, so dx widens to a third.
        assert_eq!(grid.num_x(), 3);
        assert!((grid.dx() - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn exact_division_keeps_requested_spacing() {
        let grid = Grid::from_spacing(-10.0, 10.0, 0.01).unwrap();
        assert_eq!(grid.num_x(), 2000);
        assert!((grid.dx() - 0.01).abs() < 1e-6);
    }

    #[test]
    fn degenerate_bounds_are_rejected() {
        assert!(Grid::from_spacing(1.0, 1.0, 0.1).is_err());
        assert!(Grid::from_spacing(2.0, 1.0, 0.1).is_err());
        assert!(Grid::from_spacing(0.0, 1.0, 0.0).is_err());
        assert!(Grid::from_spacing(0.0, 1.0, -0.5).is_err());
        assert!(Grid::from_spacing(0.0, f32::NAN, 0.1).is_err());
    }

    #[test]
    fn coarse_spacing_needs_two_nodes() {
        assert!(Grid::from_spacing(0.0, 1.0, 0.9).is_err());
    }

    #[test]
    fn index_of_maps_positions_to_nodes() {
        let grid = Grid::from_spacing(-10.0, 10.0, 0.01).unwrap();
        assert_eq!(grid.index_of(-10.0).unwrap(), 0);
        assert_eq!(grid.index_of(0.0).unwrap(), 1000);
        assert_eq!(grid.index_of(10.0).unwrap(), 1999);
        assert!(grid.index_of(10.5).is_err());
        assert!(grid.index_of(f32::NAN).is_err());
    }
}

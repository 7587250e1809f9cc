use ndarray::{Array2, ArrayView1};

use crate::prelude::{FrameError, FrameResult, FrameSink};

/// Rectangular stack of recorded field frames.
///
/// Rows are time steps, columns are grid nodes, matching the on-disk CSV
/// layout. A matrix is immutable once built; playback and animation only
/// ever read rows out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMatrix {
    data: Array2<f32>,
}

impl FrameMatrix {
    /// Build a matrix from parsed rows, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<f32>]) -> FrameResult<Self> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(FrameError::Shape {
                    row,
                    expected,
                    found: values.len(),
                });
            }
        }
        let mut data = Array2::zeros((rows.len(), expected));
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                data[[row, col]] = value;
            }
        }
        Ok(Self { data })
    }

    /// Matrix with zero frames and zero samples per frame.
    pub fn empty() -> Self {
        Self {
            data: Array2::zeros((0, 0)),
        }
    }

    pub fn num_frames(&self) -> usize {
        self.data.nrows()
    }

    pub fn samples_per_frame(&self) -> usize {
        self.data.ncols()
    }

    /// `(frames, samples per frame)`, the shape the console line reports.
    pub fn shape(&self) -> (usize, usize) {
        (self.data.nrows(), self.data.ncols())
    }

    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// View of one frame. Panics when `index` is out of range, like any
    /// slice index.
    pub fn frame(&self, index: usize) -> ArrayView1<'_, f32> {
        self.data.row(index)
    }
}

/// Sink that keeps every frame in memory and hands back a matrix.
///
/// Used for in-process runs that skip the CSV round trip, and by tests
/// that want to inspect solver output directly.
#[derive(Debug, Default)]
pub struct MatrixRecorder {
    rows: Vec<Vec<f32>>,
}

impl MatrixRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_matrix(self) -> FrameResult<FrameMatrix> {
        FrameMatrix::from_rows(&self.rows)
    }
}

impl FrameSink for MatrixRecorder {
    fn record(&mut self, frame: &[f32]) -> FrameResult<()> {
        if let Some(first) = self.rows.first() {
            if first.len() != frame.len() {
                return Err(FrameError::Shape {
                    row: self.rows.len(),
                    expected: first.len(),
                    found: frame.len(),
                });
            }
        }
        self.rows.push(frame.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_builds_row_major_matrix() {
        let matrix =
            FrameMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.frame(0), ndarray::array![1.0, 2.0, 3.0]);
        assert_eq!(matrix.frame(1), ndarray::array![4.0, 5.0, 6.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = FrameMatrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0]]).unwrap_err();
        match err {
            FrameError::Shape {
                row,
                expected,
                found,
            } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_matrix_has_zero_shape() {
        let matrix = FrameMatrix::empty();
        assert!(matrix.is_empty());
        assert_eq!(matrix.shape(), (0, 0));
    }

    #[test]
    fn recorder_replays_recorded_frames() {
        let mut recorder = MatrixRecorder::new();
        recorder.record(&[0.0, 1.0]).unwrap();
        recorder.record(&[2.0, 3.0]).unwrap();
        let matrix = recorder.into_matrix().unwrap();
        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix.frame(1), ndarray::array![2.0, 3.0]);
    }

    #[test]
    fn recorder_rejects_width_changes() {
        let mut recorder = MatrixRecorder::new();
        recorder.record(&[0.0, 1.0]).unwrap();
        assert!(matches!(
            recorder.record(&[0.0]),
            Err(FrameError::Shape { row: 1, .. })
        ));
    }
}

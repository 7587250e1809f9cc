//! Frame storage, the CSV round trip, and playback sequencing.

pub mod csv;
pub mod matrix;
pub mod playback;

pub use csv::{read_matrix, CsvRecorder};
pub use matrix::{FrameMatrix, MatrixRecorder};
pub use playback::Playback;

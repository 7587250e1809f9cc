use std::fs::File;
use std::path::Path;

use crate::frames::matrix::FrameMatrix;
use crate::prelude::{FrameError, FrameResult, FrameSink};

/// Load a frame matrix from a comma-delimited text file.
///
/// Every row must hold the same number of numeric fields; a ragged row or a
/// non-numeric token fails the whole load. Reading the same file twice
/// yields equal matrices, and an empty file yields an empty matrix.
pub fn read_matrix<P: AsRef<Path>>(path: P) -> FrameResult<FrameMatrix> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(file);

    let mut rows = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|err| csv_error(row, err))?;
        let mut values = Vec::with_capacity(record.len());
        for (col, field) in record.iter().enumerate() {
            let value: f32 = field.parse().map_err(|_| FrameError::DataFormat {
                row,
                message: format!("field {col}: '{field}' is not a number"),
            })?;
            values.push(value);
        }
        rows.push(values);
    }
    FrameMatrix::from_rows(&rows)
}

/// Sink that streams frames to a CSV file, one row per step.
///
/// The file is truncated on creation so stale frames from an earlier run
/// never mix into the new recording.
pub struct CsvRecorder {
    writer: csv::Writer<File>,
    frames: usize,
    samples: Option<usize>,
}

impl CsvRecorder {
    pub fn create<P: AsRef<Path>>(path: P) -> FrameResult<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: csv::WriterBuilder::new().from_writer(file),
            frames: 0,
            samples: None,
        })
    }

    pub fn frames_written(&self) -> usize {
        self.frames
    }
}

impl FrameSink for CsvRecorder {
    fn record(&mut self, frame: &[f32]) -> FrameResult<()> {
        match self.samples {
            None => self.samples = Some(frame.len()),
            Some(expected) if expected != frame.len() => {
                return Err(FrameError::Shape {
                    row: self.frames,
                    expected,
                    found: frame.len(),
                });
            }
            Some(_) => {}
        }
        self.writer
            .write_record(frame.iter().map(|value| value.to_string()))
            .map_err(|err| csv_error(self.frames, err))?;
        self.frames += 1;
        Ok(())
    }

    fn finish(&mut self) -> FrameResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn csv_error(row: usize, err: csv::Error) -> FrameError {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => FrameError::Io(source),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => FrameError::Shape {
            row,
            expected: expected_len as usize,
            found: len as usize,
        },
        _ => FrameError::DataFormat { row, message },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn loads_rows_and_columns() {
        let file = write_csv("0.0, 1.0, 2.0\n3.5, -4.0, 5.25\n");
        let matrix = read_matrix(file.path()).unwrap();
        assert_eq!(matrix.shape(), (2, 3));
        assert_eq!(matrix.frame(0), ndarray::array![0.0, 1.0, 2.0]);
        assert_eq!(matrix.frame(1), ndarray::array![3.5, -4.0, 5.25]);
    }

    #[test]
    fn ragged_rows_fail_the_load() {
        let file = write_csv("1,2,3\n4,5\n");
        assert!(matches!(
            read_matrix(file.path()),
            Err(FrameError::Shape { .. })
        ));
    }

    #[test]
    fn non_numeric_fields_fail_the_load() {
        let file = write_csv("1,2\n3,oops\n");
        match read_matrix(file.path()) {
            Err(FrameError::DataFormat { row, message }) => {
                assert_eq!(row, 1);
                assert!(message.contains("oops"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn empty_file_yields_empty_matrix() {
        let file = write_csv("");
        let matrix = read_matrix(file.path()).unwrap();
        assert!(matrix.is_empty());
    }

    #[test]
    fn loading_twice_yields_equal_matrices() {
        let file = write_csv("1,2\n3,4\n");
        let first = read_matrix(file.path()).unwrap();
        let second = read_matrix(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_matrix("/nonexistent/frames.csv");
        assert!(matches!(result, Err(FrameError::Io(_))));
    }

    #[test]
    fn recorder_output_loads_back() {
        let file = NamedTempFile::new().expect("temp file");
        let mut recorder = CsvRecorder::create(file.path()).unwrap();
        recorder.record(&[0.0, 0.5]).unwrap();
        recorder.record(&[1.0, -1.5]).unwrap();
        recorder.finish().unwrap();
        assert_eq!(recorder.frames_written(), 2);

        let matrix = read_matrix(file.path()).unwrap();
        assert_eq!(matrix.shape(), (2, 2));
        assert_eq!(matrix.frame(1), ndarray::array![1.0, -1.5]);
    }

    #[test]
    fn recorder_truncates_stale_output() {
        let file = write_csv("9,9,9\n9,9,9\n");
        let mut recorder = CsvRecorder::create(file.path()).unwrap();
        recorder.record(&[1.0]).unwrap();
        recorder.finish().unwrap();

        let matrix = read_matrix(file.path()).unwrap();
        assert_eq!(matrix.shape(), (1, 1));
    }

    #[test]
    fn recorder_rejects_width_changes() {
        let file = NamedTempFile::new().expect("temp file");
        let mut recorder = CsvRecorder::create(file.path()).unwrap();
        recorder.record(&[1.0, 2.0]).unwrap();
        assert!(matches!(
            recorder.record(&[1.0]),
            Err(FrameError::Shape { row: 1, .. })
        ));
    }
}

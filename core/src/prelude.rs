/// Errors raised while loading, parsing, or recording frame data.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("row {row}: {message}")]
    DataFormat { row: usize, message: String },
    #[error("row {row}: expected {expected} samples, found {found}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while validating a simulation scenario.
#[derive(thiserror::Error, Debug)]
pub enum SpecError {
    #[error("invalid grid: {0}")]
    Grid(String),
    #[error("invalid time parameters: {0}")]
    Time(String),
    #[error("invalid source: {0}")]
    Source(String),
}

pub type FrameResult<T> = Result<T, FrameError>;

/// Consumer of recorded field frames, one row per simulation step.
///
/// The solver hands every electric-field row to its sink in step order;
/// sinks must keep the output rectangular.
pub trait FrameSink {
    fn record(&mut self, frame: &[f32]) -> FrameResult<()>;

    /// Flush buffered output once the run is complete.
    fn finish(&mut self) -> FrameResult<()> {
        Ok(())
    }
}

/// Sink that counts frames and discards them (the no-recording mode).
#[derive(Debug, Default)]
pub struct NullSink {
    frames: usize,
}

impl NullSink {
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl FrameSink for NullSink {
    fn record(&mut self, _frame: &[f32]) -> FrameResult<()> {
        self.frames += 1;
        Ok(())
    }
}

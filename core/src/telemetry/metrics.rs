use crate::math::FieldStats;

/// Counters accumulated over one solver run.
#[derive(Debug, Clone, Default)]
pub struct RunMetrics {
    steps: usize,
    frames: usize,
    peak_field: f32,
}

impl RunMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe_step(&mut self) {
        self.steps += 1;
    }

    /// Count a recorded frame and fold its peak into the running maximum.
    pub fn observe_frame(&mut self, frame: &[f32]) {
        self.frames += 1;
        self.peak_field = self.peak_field.max(FieldStats::peak_abs(frame));
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Largest `|E|` seen in any recorded frame.
    pub fn peak_field(&self) -> f32 {
        self.peak_field
    }
}

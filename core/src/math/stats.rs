pub struct FieldStats;

impl FieldStats {
    /// Root-mean-square of a field row.
    pub fn rms(samples: &[f32]) -> f32 {
        if samples.is_empty() {
            return 0.0;
        }
        let sum_sq: f32 = samples.iter().map(|&v| v * v).sum();
        (sum_sq / samples.len() as f32).sqrt()
    }

    /// Largest absolute value in a row, 0 for an empty row.
    pub fn peak_abs(samples: &[f32]) -> f32 {
        samples.iter().fold(0.0_f32, |acc, &v| acc.max(v.abs()))
    }

    /// Minimum and maximum of a row.
    pub fn span(samples: &[f32]) -> (f32, f32) {
        let min = samples.iter().copied().fold(f32::INFINITY, f32::min);
        let max = samples.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        (min, max)
    }
}

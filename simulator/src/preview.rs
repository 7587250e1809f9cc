use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use fdtdcore::math::FieldStats;
use fdtdcore::render::{DisplaySurface, SurfaceError};

const GLYPHS: [char; 8] = [
    '\u{2581}', '\u{2582}', '\u{2583}', '\u{2584}', '\u{2585}', '\u{2586}', '\u{2587}',
    '\u{2588}',
];

/// Terminal sparkline renderer for quick looks at a recorded run.
///
/// Each frame becomes one line of block glyphs scaled to the frame's own
/// min and max; the line is erased with ANSI escapes before the next frame
/// so the animation plays in place. A terminal has no close event, so the
/// final frame simply stays on screen and `wait_until_closed` returns at
/// once.
pub struct AsciiSurface<W: Write> {
    out: W,
    width: usize,
    line_drawn: bool,
}

impl AsciiSurface<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), 72)
    }
}

impl<W: Write> AsciiSurface<W> {
    pub fn new(out: W, width: usize) -> Self {
        Self {
            out,
            width: width.max(1),
            line_drawn: false,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DisplaySurface for AsciiSurface<W> {
    fn draw_line(&mut self, series: &[f32]) -> Result<(), SurfaceError> {
        writeln!(self.out, "{}", sparkline(series, self.width))?;
        self.line_drawn = true;
        Ok(())
    }

    fn pause(&mut self, delay: Duration) -> Result<(), SurfaceError> {
        self.out.flush()?;
        thread::sleep(delay);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SurfaceError> {
        if self.line_drawn {
            // Cursor up one line, then erase it.
            write!(self.out, "\x1b[1A\x1b[2K")?;
            self.line_drawn = false;
        }
        Ok(())
    }

    fn wait_until_closed(&mut self) -> Result<(), SurfaceError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Downsample a frame into at most `width` buckets of block glyphs.
fn sparkline(series: &[f32], width: usize) -> String {
    if series.is_empty() {
        return String::new();
    }
    let buckets = bucket_means(series, width);
    let (min, max) = FieldStats::span(&buckets);
    let range = max - min;
    buckets
        .iter()
        .map(|&value| {
            let level = if range > f32::EPSILON {
                (((value - min) / range) * (GLYPHS.len() - 1) as f32).round() as usize
            } else {
                0
            };
            GLYPHS[level.min(GLYPHS.len() - 1)]
        })
        .collect()
}

fn bucket_means(series: &[f32], width: usize) -> Vec<f32> {
    let width = width.min(series.len()).max(1);
    let chunk = (series.len() + width - 1) / width;
    series
        .chunks(chunk)
        .map(|part| part.iter().sum::<f32>() / part.len() as f32)
        .collect()
}

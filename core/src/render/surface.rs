use std::time::Duration;

use log::debug;

use crate::frames::FrameMatrix;

/// Errors raised by a display surface during playback.
#[derive(thiserror::Error, Debug)]
pub enum SurfaceError {
    /// The user dismissed the surface. Playback treats this as a clean
    /// stop, not a failure.
    #[error("display surface closed")]
    Closed,
    #[error("surface I/O: {0}")]
    Io(#[from] std::io::Error),
    #[error("surface backend: {0}")]
    Backend(String),
}

/// Minimal drawing capability needed to play back a frame matrix.
///
/// Implementations range from an ANSI terminal sparkline to a GPU canvas;
/// `animate` only ever asks for these four operations.
pub trait DisplaySurface {
    /// Draw one frame as a connected line, sample index along x.
    fn draw_line(&mut self, series: &[f32]) -> Result<(), SurfaceError>;

    /// Hold the current frame for `delay` while keeping the surface
    /// responsive to user input.
    fn pause(&mut self, delay: Duration) -> Result<(), SurfaceError>;

    /// Erase whatever the last `draw_line` put on the surface.
    fn clear(&mut self) -> Result<(), SurfaceError>;

    /// Block until the user dismisses the surface.
    fn wait_until_closed(&mut self) -> Result<(), SurfaceError>;
}

/// Play every row of `frames` on `surface`, oldest first, holding each for
/// `delay`.
///
/// Every frame except the last is cleared before its successor is drawn;
/// the final frame stays visible until the user closes the surface. A
/// surface reporting [`SurfaceError::Closed`] at any point ends playback
/// cleanly. An empty matrix returns at once without touching the surface.
pub fn animate<S: DisplaySurface>(
    frames: &FrameMatrix,
    delay: Duration,
    surface: &mut S,
) -> Result<(), SurfaceError> {
    let total = frames.num_frames();
    if total == 0 {
        return Ok(());
    }
    for index in 0..total {
        let series = frames.frame(index).to_vec();
        match present_frame(surface, &series, delay, index + 1 == total) {
            Ok(()) => {}
            Err(SurfaceError::Closed) => {
                debug!("surface closed at frame {}/{}", index + 1, total);
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }
    match surface.wait_until_closed() {
        Ok(()) | Err(SurfaceError::Closed) => Ok(()),
        Err(err) => Err(err),
    }
}

fn present_frame<S: DisplaySurface>(
    surface: &mut S,
    series: &[f32],
    delay: Duration,
    is_last: bool,
) -> Result<(), SurfaceError> {
    surface.draw_line(series)?;
    surface.pause(delay)?;
    if !is_last {
        surface.clear()?;
    }
    Ok(())
}

use ndarray::ArrayView1;

use crate::frames::matrix::FrameMatrix;

/// Cursor over the rows of a frame matrix for event-driven frontends.
///
/// `render::animate` drives a surface through the full sequence in a
/// blocking loop; toolkits with their own timer advance this cursor from a
/// tick handler instead. Frames come out in row order, each exactly once,
/// and the cursor stays on the final frame once the end is reached so the
/// last field snapshot remains on screen.
#[derive(Debug)]
pub struct Playback {
    frames: FrameMatrix,
    cursor: usize,
}

impl Playback {
    pub fn new(frames: FrameMatrix) -> Self {
        Self { frames, cursor: 0 }
    }

    /// Row currently on display. `None` only for an empty matrix.
    pub fn current(&self) -> Option<ArrayView1<'_, f32>> {
        if self.frames.is_empty() {
            None
        } else {
            Some(self.frames.frame(self.cursor))
        }
    }

    /// Step to the next frame. Returns `false` once the last frame is
    /// showing; the cursor does not move past it.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.frames.num_frames() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn is_finished(&self) -> bool {
        self.cursor + 1 >= self.frames.num_frames()
    }

    /// Zero-based index of the current frame.
    pub fn frame_index(&self) -> usize {
        self.cursor
    }

    pub fn total_frames(&self) -> usize {
        self.frames.num_frames()
    }

    pub fn matrix(&self) -> &FrameMatrix {
        &self.frames
    }
}

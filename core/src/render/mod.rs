//! Toolkit-neutral playback over an abstract display surface.

pub mod surface;

pub use surface::{animate, DisplaySurface, SurfaceError};

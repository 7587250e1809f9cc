//! Core field solver and frame playback for the Rust FDTD-1D platform.
//!
//! The modules mirror the legacy record-then-replay workflow while providing
//! safe abstractions: a Yee-grid Maxwell stepper that streams field rows into
//! sinks, a CSV frame store, and toolkit-neutral animation.

pub mod frames;
pub mod math;
pub mod prelude;
pub mod render;
pub mod solver;
pub mod telemetry;

pub use prelude::{FrameError, FrameSink, NullSink, SpecError};

//! Errors for the camera-backed pose path.
//!
//! Startup failures (no device, stream refused) are fatal and surfaced to
//! the operator; per-frame failures are not errors at all from the game's
//! point of view — they degrade to "no hand detected" upstream.

use std::fmt::{self, Display};

#[derive(Debug)]
pub enum PoseError {
    /// Opening or starting the camera failed.
    CameraInit(String),
    /// Grabbing or decoding a single frame failed.
    CameraFrame(String),
}

impl Display for PoseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoseError::CameraInit(s) => write!(f, "camera init error: {s}"),
            PoseError::CameraFrame(s) => write!(f, "camera frame error: {s}"),
        }
    }
}

impl std::error::Error for PoseError {}

//! # hand_pose
//!
//! Hand-pose plumbing for gesture-controlled apps: the 21-point normalized
//! landmark model, finger-up counting, and pose *sources* that stream
//! frames into a single-slot "latest frame" handoff.
//!
//! The actual landmark estimation is someone else's job — a source either
//! synthesizes frames from window input (simulation, the default) or, with
//! the `camera` feature, captures webcam frames and defers to a pluggable
//! [`LandmarkDetector`](source::LandmarkDetector).
//!
//! ## Delivery model
//!
//! Sources run on their own thread and *overwrite* a [`FrameSlot`]
//! (`source::FrameSlot`); consumers take whatever is freshest.  There is no
//! queue: a slow consumer sees current data, never a backlog of stale
//! frames.
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: frames are synthesized from mouse
//!   position and key state; no hardware needed.
//! * `camera` — **Live mode**: captures mirrored webcam frames via
//!   `nokhwa` and runs them through a [`LandmarkDetector`](source::LandmarkDetector).

pub mod error;
pub mod landmarks;
pub mod source;

pub use error::PoseError;
pub use landmarks::{synthesize_hand, Landmark, LandmarkFrame};
pub use source::{
    mirror_horizontal, spawn_pose_source, FrameSlot, PoseSource, PoseUpdate, PreviewFrame,
    SimInput, SimPoseSource,
};

#[cfg(feature = "camera")]
pub use source::{CameraCapture, CameraPoseSource, LandmarkDetector, NullDetector};

//! Pose sources and the single-slot "latest frame" handoff.
//!
//! A [`PoseSource`] runs on its own thread and *publishes* updates into a
//! [`FrameSlot`]; publishing overwrites whatever was buffered, so at most
//! one update is ever held and stale frames are simply dropped.  Consumers
//! call [`FrameSlot::take`] on their own cadence and always see the
//! freshest data.
//!
//! Two sources exist: [`SimPoseSource`] translates window input into
//! synthesized landmark frames (the default, no hardware), and
//! `CameraPoseSource` (feature `camera`) captures mirrored webcam frames
//! and defers landmark estimation to a pluggable [`LandmarkDetector`].

use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::landmarks::{synthesize_hand, LandmarkFrame};

// ════════════════════════════════════════════════════════════════════════════
// PoseUpdate / PreviewFrame
// ════════════════════════════════════════════════════════════════════════════

/// One update from a pose source.  `frame` is `None` when no hand was
/// detected (or the camera read failed); `preview` carries the mirrored
/// camera image when one exists, for on-screen display.
#[derive(Clone, Debug, Default)]
pub struct PoseUpdate {
    pub frame: Option<LandmarkFrame>,
    pub preview: Option<PreviewFrame>,
}

/// A camera frame ready for the screen, one `0x00RRGGBB` word per pixel.
#[derive(Clone, Debug)]
pub struct PreviewFrame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u32>,
}

/// Flip a frame left-right so on-screen motion matches hand motion
/// (selfie view).
pub fn mirror_horizontal(frame: &mut PreviewFrame) {
    for row in frame.pixels.chunks_exact_mut(frame.width) {
        row.reverse();
    }
}

// ════════════════════════════════════════════════════════════════════════════
// FrameSlot
// ════════════════════════════════════════════════════════════════════════════

/// Single-slot handoff between a pose source and its consumer.
///
/// Not a queue: `publish` overwrites, `take` drains.  A slow consumer sees
/// fresh data; a fast consumer sees `None` until something new arrives.
#[derive(Clone, Default)]
pub struct FrameSlot {
    inner: Arc<Mutex<Option<PoseUpdate>>>,
}

impl FrameSlot {
    pub fn new() -> Self {
        FrameSlot { inner: Arc::new(Mutex::new(None)) }
    }

    /// Replace the buffered update with a newer one.
    pub fn publish(&self, update: PoseUpdate) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Some(update);
        }
    }

    /// Take the freshest update, leaving the slot empty.
    pub fn take(&self) -> Option<PoseUpdate> {
        self.inner.lock().ok().and_then(|mut slot| slot.take())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PoseSource trait + spawn helper
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can stream [`PoseUpdate`]s into a [`FrameSlot`].
pub trait PoseSource: Send + 'static {
    fn run(self: Box<Self>, slot: FrameSlot);
}

/// Spawn a pose source on its own thread and return the consuming end.
pub fn spawn_pose_source<P: PoseSource>(source: P) -> FrameSlot {
    let slot = FrameSlot::new();
    let worker = slot.clone();
    thread::spawn(move || Box::new(source).run(worker));
    slot
}

// ════════════════════════════════════════════════════════════════════════════
// SimPoseSource — window-driven simulation (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Raw input from the simulation window: the mouse stands in for the hand,
/// key state for the raised-finger count.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SimInput {
    /// Hand present at normalized `(x, y)` with `fingers` digits raised.
    Hand { x: f32, y: f32, fingers: u8 },
    /// No hand in view this frame.
    NoHand,
}

/// Pose source driven by [`SimInput`] events from the window loop.  Each
/// event is synthesized into a full landmark frame, so downstream decoding
/// sees exactly what the camera path would deliver.
pub struct SimPoseSource {
    pub rx: Receiver<SimInput>,
}

impl PoseSource for SimPoseSource {
    fn run(self: Box<Self>, slot: FrameSlot) {
        for input in self.rx {
            let update = match input {
                SimInput::Hand { x, y, fingers } => PoseUpdate {
                    frame: Some(synthesize_hand(x, y, fingers)),
                    preview: None,
                },
                SimInput::NoHand => PoseUpdate::default(),
            };
            slot.publish(update);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Camera source (feature = "camera")
// ════════════════════════════════════════════════════════════════════════════

/// Black-box hand-landmark estimator.  The pose pipeline only consumes the
/// landmark positions it returns; detection itself is an external concern.
///
/// Wire a real model in by implementing this for your estimator binding
/// and handing it to `CameraPoseSource::open`.
#[cfg(feature = "camera")]
pub trait LandmarkDetector: Send + 'static {
    /// Landmarks of the most prominent hand in `image`, if any.
    fn detect(&mut self, image: &PreviewFrame) -> Option<LandmarkFrame>;
}

/// Placeholder estimator: never sees a hand.  Keeps the camera preview
/// useful while no real detector is wired in.
#[cfg(feature = "camera")]
pub struct NullDetector;

#[cfg(feature = "camera")]
impl LandmarkDetector for NullDetector {
    fn detect(&mut self, _image: &PreviewFrame) -> Option<LandmarkFrame> {
        None
    }
}

/// A small wrapper around `nokhwa::Camera` so the capture loop stays clean.
#[cfg(feature = "camera")]
pub struct CameraCapture {
    cam: nokhwa::Camera,
    width: u32,
    height: u32,
}

#[cfg(feature = "camera")]
impl CameraCapture {
    /// Open camera `index` near the requested resolution and start the
    /// stream.  Fails fast when no device exists.
    pub fn new(index: u32, width: u32, height: u32) -> Result<Self, crate::PoseError> {
        use crate::PoseError;
        use nokhwa::pixel_format::RgbFormat;
        use nokhwa::utils::{
            CameraFormat, CameraIndex, FrameFormat, RequestedFormat, RequestedFormatType,
            Resolution,
        };

        let idx = CameraIndex::Index(index);
        let fmt = CameraFormat::new(Resolution::new(width, height), FrameFormat::YUYV, 30);
        let req = RequestedFormat::new::<RgbFormat>(RequestedFormatType::Closest(fmt));

        let mut cam = nokhwa::Camera::new(idx, req)
            .map_err(|e| PoseError::CameraInit(format!("create camera: {e}")))?;
        cam.open_stream()
            .map_err(|e| PoseError::CameraInit(format!("open stream: {e}")))?;

        // The stream may settle on a slightly different resolution.
        let actual = cam.resolution();
        Ok(CameraCapture {
            cam,
            width: actual.width(),
            height: actual.height(),
        })
    }

    /// Grab one frame and convert it to `0x00RRGGBB` pixels.  Blocks until
    /// the camera delivers.
    pub fn next_frame(&mut self) -> Result<PreviewFrame, crate::PoseError> {
        use crate::PoseError;
        use nokhwa::pixel_format::RgbFormat;

        let frame = self
            .cam
            .frame()
            .map_err(|e| PoseError::CameraFrame(format!("fetch frame: {e}")))?;
        let rgb = frame
            .decode_image::<RgbFormat>()
            .map_err(|e| PoseError::CameraFrame(format!("decode rgb: {e}")))?;

        let (w, h) = rgb.dimensions();
        let mut pixels = Vec::with_capacity((w as usize) * (h as usize));
        for pixel in rgb.pixels() {
            let [r, g, b] = pixel.0;
            pixels.push(((r as u32) << 16) | ((g as u32) << 8) | b as u32);
        }

        Ok(PreviewFrame {
            width: w as usize,
            height: h as usize,
            pixels,
        })
    }

    /// The resolution the camera actually delivers.
    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Pose source backed by a live camera and a [`LandmarkDetector`].
///
/// Each loop turn: capture → mirror → detect → publish.  A failed frame
/// read publishes an empty update — "no hand this tick", never a crash.
#[cfg(feature = "camera")]
pub struct CameraPoseSource {
    camera: CameraCapture,
    detector: Box<dyn LandmarkDetector>,
}

#[cfg(feature = "camera")]
impl CameraPoseSource {
    /// Open the device up front so a missing camera fails at startup, not
    /// mid-session.
    pub fn open(index: u32, detector: Box<dyn LandmarkDetector>) -> Result<Self, crate::PoseError> {
        let camera = CameraCapture::new(index, 640, 480)?;
        let (w, h) = camera.resolution();
        eprintln!("[camera] streaming at {w}×{h}");
        Ok(CameraPoseSource { camera, detector })
    }
}

#[cfg(feature = "camera")]
impl PoseSource for CameraPoseSource {
    fn run(mut self: Box<Self>, slot: FrameSlot) {
        loop {
            match self.camera.next_frame() {
                Ok(mut frame) => {
                    mirror_horizontal(&mut frame);
                    let landmarks = self.detector.detect(&frame);
                    slot.publish(PoseUpdate {
                        frame: landmarks,
                        preview: Some(frame),
                    });
                }
                Err(e) => {
                    eprintln!("[camera] frame read failed: {e}");
                    slot.publish(PoseUpdate::default());
                }
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

//! Top-level application: one window, one mutable owner, two cadences.
//!
//! [`PilotState`] owns the `GameSession` and the `GestureDecoder`; every
//! update flows through it one call at a time, so there is never a second
//! mutator.  [`run`] drives it with two independent cadences: input
//! decoding rides the window's ~15 ms frame pacing, physics is gated to
//! ~50 ms by an `Instant` deadline.  A decoded command is applied during
//! the input call, before any later physics tick can observe the phase it
//! produced.

use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use brick_table::{GamePhase, GameSession};
use hand_pose::{FrameSlot, PoseUpdate, SimInput};

use crate::decoder::GestureDecoder;
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Loop configuration.  The defaults are the game's fixed control surface;
/// tests shorten the debounce run.
pub struct AppConfig {
    /// Interval between physics steps.
    pub physics_tick: Duration,
    /// Window frame pacing; also the gesture-decoding cadence.
    pub input_tick: Duration,
    /// Consecutive qualifying frames before a command fires.
    pub required_gesture_frames: u32,
    /// Which camera to open in live mode.
    pub camera_index: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            physics_tick: Duration::from_millis(50),
            input_tick: Duration::from_millis(15),
            required_gesture_frames: 10,
            camera_index: 0,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// PilotState
// ════════════════════════════════════════════════════════════════════════════

/// The single owner of mutable game state.
pub struct PilotState {
    session: GameSession,
    decoder: GestureDecoder,
    latest: PoseUpdate,
}

impl PilotState {
    pub fn new(cfg: &AppConfig) -> Self {
        PilotState {
            session: GameSession::new(),
            decoder: GestureDecoder::new(cfg.required_gesture_frames),
            latest: PoseUpdate::default(),
        }
    }

    /// One input tick: remember the newest pose (if any arrived) and decode
    /// against it.  The paddle target applies in every phase; a decoded
    /// command is applied here, so it precedes the next physics tick.
    pub fn tick_input(&mut self, update: Option<PoseUpdate>) {
        if let Some(update) = update {
            self.latest = update;
        }
        let phase = self.session.phase();
        let decoded = self.decoder.decode(self.latest.frame.as_ref(), phase);
        if let Some(target) = decoded.paddle_target {
            self.session.set_paddle_target(target);
        }
        if let Some(cmd) = decoded.command {
            self.session.apply(cmd);
        }
    }

    /// One physics tick; a no-op once the session has ended.
    pub fn tick_physics(&mut self) {
        self.session.step_physics();
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn latest(&self) -> &PoseUpdate {
        &self.latest
    }

    /// True once a Quit command has landed.
    pub fn finished(&self) -> bool {
        self.session.phase() == GamePhase::Terminated
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application: window, pose source (simulation by default,
/// webcam with the `camera` feature), and the two-cadence loop.
pub fn run(cfg: AppConfig) -> Result<(), String> {
    let (sim_tx, sim_rx) = mpsc::channel::<SimInput>();
    let slot = open_source(&cfg, sim_rx)?;

    let mut vis = Visualizer::new(sim_tx, cfg.input_tick)?;
    let mut state = PilotState::new(&cfg);
    let mut next_physics = Instant::now() + cfg.physics_tick;

    while vis.is_open() {
        // 1. Window input → SimInput for the simulation source.
        if !vis.poll_input() {
            break;
        }

        // 2. Input tick: newest pose → paddle target + command.
        state.tick_input(slot.take());
        if state.finished() {
            break;
        }

        // 3. Physics tick when its deadline passes.
        let now = Instant::now();
        if now >= next_physics {
            state.tick_physics();
            next_physics = now + cfg.physics_tick;
        }

        // 4. Render (this is also what paces the loop to input_tick).
        vis.render(state.session(), state.latest());
    }

    Ok(())
}

#[cfg(not(feature = "camera"))]
fn open_source(_cfg: &AppConfig, sim_rx: Receiver<SimInput>) -> Result<FrameSlot, String> {
    Ok(hand_pose::spawn_pose_source(hand_pose::SimPoseSource {
        rx: sim_rx,
    }))
}

#[cfg(feature = "camera")]
fn open_source(cfg: &AppConfig, _sim_rx: Receiver<SimInput>) -> Result<FrameSlot, String> {
    let source =
        hand_pose::CameraPoseSource::open(cfg.camera_index, Box::new(hand_pose::NullDetector))
            .map_err(|e| e.to_string())?;
    Ok(hand_pose::spawn_pose_source(source))
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

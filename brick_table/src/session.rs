//! The game-session state machine.
//!
//! [`GameSession`] is the single owner of all mutable game state — paddle,
//! ball, brick grid, and the phase.  Every update funnels through it, one
//! call at a time: paddle targets in any phase, physics steps only while
//! playing, commands only once the session has ended.

use crate::objects::{Ball, BrickGrid, Paddle};
use crate::physics::{self, Outcome, StepReport};

// ════════════════════════════════════════════════════════════════════════════
// GamePhase
// ════════════════════════════════════════════════════════════════════════════

/// Where the session is in its life cycle.
///
/// `Playing → {Lost, Won}` via physics; a terminal phase goes back to
/// `Playing` on restart (full reset) or to `Terminated` on quit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Lost,
    Won,
    Terminated,
}

impl GamePhase {
    /// True for the two game-over phases that accept commands.
    pub fn is_terminal(self) -> bool {
        matches!(self, GamePhase::Lost | GamePhase::Won)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Command
// ════════════════════════════════════════════════════════════════════════════

/// A debounced player command, decoded upstream from gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start a fresh session.
    Restart,
    /// End the program.
    Quit,
}

// ════════════════════════════════════════════════════════════════════════════
// GameSession
// ════════════════════════════════════════════════════════════════════════════

pub struct GameSession {
    paddle: Paddle,
    ball: Ball,
    bricks: BrickGrid,
    phase: GamePhase,
}

impl GameSession {
    /// A fresh session, already in `Playing`.
    pub fn new() -> Self {
        GameSession {
            paddle: Paddle::centered(),
            ball: Ball::launch(rand::random()),
            bricks: BrickGrid::full(),
            phase: GamePhase::Playing,
        }
    }

    /// Full session reset: centered paddle, regenerated grid, fresh ball
    /// with a newly chosen horizontal direction.  Enters `Playing`.
    pub fn reset(&mut self) {
        self.paddle = Paddle::centered();
        self.ball = Ball::launch(rand::random());
        self.bricks = BrickGrid::full();
        self.phase = GamePhase::Playing;
    }

    /// Aim the paddle.  Applies in every phase, so the player keeps control
    /// of the paddle on the game-over screen.
    pub fn set_paddle_target(&mut self, center_x: f32) {
        self.paddle.set_center(center_x);
    }

    /// Advance physics one step.  Outside `Playing` this is a no-op, which
    /// keeps the frozen ball on screen after a terminal outcome.
    pub fn step_physics(&mut self) -> StepReport {
        if self.phase != GamePhase::Playing {
            return StepReport::default();
        }
        let report = physics::step(&mut self.ball, &self.paddle, &mut self.bricks);
        match report.outcome {
            Some(Outcome::Lost) => self.phase = GamePhase::Lost,
            Some(Outcome::Won) => self.phase = GamePhase::Won,
            None => {}
        }
        report
    }

    /// Apply a debounced command.  Commands only mean anything once the
    /// session has ended; anything else is dropped.
    pub fn apply(&mut self, cmd: Command) {
        if !self.phase.is_terminal() {
            return;
        }
        match cmd {
            Command::Restart => self.reset(),
            Command::Quit => self.phase = GamePhase::Terminated,
        }
    }

    /// Banner text for the renderer while the session is over.
    pub fn banner(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::Lost => Some("Game Over"),
            GamePhase::Won => Some("You Won!"),
            _ => None,
        }
    }

    // ── accessors for the render loop ────────────────────────────────────

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn bricks(&self) -> &BrickGrid {
        &self.bricks
    }

    // ── scripted scenarios (demos and tests) ─────────────────────────────

    /// Replace the ball, e.g. to drive a specific rally.
    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = ball;
    }

    /// Replace the brick grid, e.g. to start from a near-finished board.
    pub fn set_bricks(&mut self, bricks: BrickGrid) {
        self.bricks = bricks;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::{
        Rect, BALL_START_X, BALL_START_Y, LAUNCH_VX, LAUNCH_VY, TABLE_W,
    };

    /// Drive the session into `Lost` by dropping the ball at the floor.
    fn lose(session: &mut GameSession) {
        session.set_ball(Ball { x: 300.0, y: 395.0, vx: 0.0, vy: 5.0 });
        session.step_physics();
        assert_eq!(session.phase(), GamePhase::Lost);
    }

    /// Drive the session into `Won` by clearing a one-brick board.
    fn win(session: &mut GameSession) {
        session.set_bricks(BrickGrid::from_rects(&[Rect::new(0.0, 0.0, 50.0, 20.0)]));
        session.set_ball(Ball { x: 10.0, y: 5.0, vx: 0.0, vy: -5.0 });
        session.step_physics();
        assert_eq!(session.phase(), GamePhase::Won);
    }

    #[test]
    fn new_session_is_playing_with_full_grid() {
        let session = GameSession::new();
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.bricks().alive_count(), 60);
        assert_eq!(session.ball().vx.abs(), LAUNCH_VX);
        assert_eq!(session.ball().vy, LAUNCH_VY);
    }

    #[test]
    fn brick_set_only_shrinks() {
        let mut session = GameSession::new();
        // Park the ball inside the top-left brick row.
        session.set_ball(Ball { x: 10.0, y: 35.0, vx: 0.0, vy: -1.0 });
        let before = session.bricks().alive_count();
        session.step_physics();
        let after = session.bricks().alive_count();
        assert!(after < before);
        // Nothing ever comes back while playing.
        for _ in 0..100 {
            let count = session.bricks().alive_count();
            session.step_physics();
            assert!(session.bricks().alive_count() <= count);
        }
    }

    #[test]
    fn physics_suppressed_once_lost() {
        let mut session = GameSession::new();
        lose(&mut session);
        let ball = *session.ball();
        session.step_physics();
        assert_eq!(*session.ball(), ball);
        assert_eq!(session.phase(), GamePhase::Lost);
    }

    #[test]
    fn paddle_still_moves_when_lost() {
        let mut session = GameSession::new();
        lose(&mut session);
        session.set_paddle_target(123.0);
        assert_eq!(session.paddle().center_x, 123.0);
    }

    #[test]
    fn restart_resets_everything() {
        let mut session = GameSession::new();
        session.set_paddle_target(100.0);
        lose(&mut session);
        session.apply(Command::Restart);

        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.bricks().alive_count(), 60);
        assert_eq!(session.paddle().center_x, TABLE_W / 2.0);
        assert_eq!(session.ball().x, BALL_START_X);
        assert_eq!(session.ball().y, BALL_START_Y);
        assert_eq!(session.ball().vx.abs(), LAUNCH_VX);
        assert_eq!(session.ball().vy, LAUNCH_VY);
    }

    #[test]
    fn restart_also_works_after_winning() {
        let mut session = GameSession::new();
        win(&mut session);
        session.apply(Command::Restart);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.bricks().alive_count(), 60);
    }

    #[test]
    fn quit_terminates_from_either_outcome() {
        let mut session = GameSession::new();
        lose(&mut session);
        session.apply(Command::Quit);
        assert_eq!(session.phase(), GamePhase::Terminated);

        let mut session = GameSession::new();
        win(&mut session);
        session.apply(Command::Quit);
        assert_eq!(session.phase(), GamePhase::Terminated);
    }

    #[test]
    fn commands_ignored_while_playing() {
        let mut session = GameSession::new();
        session.apply(Command::Restart);
        session.apply(Command::Quit);
        assert_eq!(session.phase(), GamePhase::Playing);
        assert_eq!(session.bricks().alive_count(), 60);
    }

    #[test]
    fn banner_matches_phase() {
        let mut session = GameSession::new();
        assert_eq!(session.banner(), None);
        lose(&mut session);
        assert_eq!(session.banner(), Some("Game Over"));

        let mut session = GameSession::new();
        win(&mut session);
        assert_eq!(session.banner(), Some("You Won!"));
    }
}

//! Gesture decoding: continuous paddle steering plus debounced commands.
//!
//! Steering is live in every phase — the fingertip's x maps straight onto
//! the paddle.  Command gestures only count while the session is over, and
//! each must hold for `required_frames` consecutive decoded frames before
//! it fires; any other observation (wrong count, no hand, game still
//! running) resets both counters to zero.  This is a plain debounce
//! filter: per-frame noise cannot reach the state machine.

use brick_table::objects::TABLE_W;
use brick_table::{Command, GamePhase};
use hand_pose::LandmarkFrame;

/// Finger counts that map to commands on the game-over screen.
const RESTART_FINGERS: u8 = 2;
const QUIT_FINGERS: u8 = 5;

/// Output of one decode call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decoded {
    /// Paddle center target in table coordinates; `None` means no hand was
    /// seen, so the paddle holds its last position.
    pub paddle_target: Option<f32>,
    pub command: Option<Command>,
}

/// Turns landmark frames into paddle targets and debounced commands.
pub struct GestureDecoder {
    required_frames: u32,
    restart_run: u32,
    quit_run: u32,
}

impl GestureDecoder {
    pub fn new(required_frames: u32) -> Self {
        GestureDecoder {
            required_frames: required_frames.max(1),
            restart_run: 0,
            quit_run: 0,
        }
    }

    /// Decode one frame against the current phase.
    pub fn decode(&mut self, frame: Option<&LandmarkFrame>, phase: GamePhase) -> Decoded {
        let paddle_target = frame.map(|f| f.index_tip().x.clamp(0.0, 1.0) * TABLE_W);

        let count = match frame {
            Some(f) if phase.is_terminal() => Some(f.fingers_up()),
            _ => None,
        };

        let command = match count {
            Some(RESTART_FINGERS) => {
                self.quit_run = 0;
                self.restart_run += 1;
                self.fire(Command::Restart)
            }
            Some(QUIT_FINGERS) => {
                self.restart_run = 0;
                self.quit_run += 1;
                self.fire(Command::Quit)
            }
            _ => {
                self.restart_run = 0;
                self.quit_run = 0;
                None
            }
        };

        Decoded { paddle_target, command }
    }

    /// Emit `cmd` once its counter completes a full run, resetting the
    /// counter so the gesture must be held all over again to re-fire.
    fn fire(&mut self, cmd: Command) -> Option<Command> {
        let run = match cmd {
            Command::Restart => &mut self.restart_run,
            Command::Quit => &mut self.quit_run,
        };
        if *run >= self.required_frames {
            *run = 0;
            Some(cmd)
        } else {
            None
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_pose::synthesize_hand;

    const RUN: u32 = 10;

    fn hand(fingers: u8) -> LandmarkFrame {
        synthesize_hand(0.5, 0.4, fingers)
    }

    fn hand_at(x: f32) -> LandmarkFrame {
        synthesize_hand(x, 0.4, 1)
    }

    #[test]
    fn steering_scales_to_the_table() {
        let mut dec = GestureDecoder::new(RUN);
        let out = dec.decode(Some(&hand_at(0.25)), GamePhase::Playing);
        assert_eq!(out.paddle_target, Some(0.25 * TABLE_W));
        assert_eq!(out.command, None);
    }

    #[test]
    fn steering_is_live_on_the_game_over_screen() {
        let mut dec = GestureDecoder::new(RUN);
        let out = dec.decode(Some(&hand_at(0.75)), GamePhase::Lost);
        assert_eq!(out.paddle_target, Some(0.75 * TABLE_W));
    }

    #[test]
    fn no_hand_holds_the_last_target() {
        let mut dec = GestureDecoder::new(RUN);
        let out = dec.decode(None, GamePhase::Playing);
        assert_eq!(out.paddle_target, None);
        assert_eq!(out.command, None);
    }

    #[test]
    fn restart_needs_the_full_run() {
        let mut dec = GestureDecoder::new(RUN);
        for _ in 0..RUN - 1 {
            assert_eq!(dec.decode(Some(&hand(2)), GamePhase::Won).command, None);
        }
        let out = dec.decode(Some(&hand(2)), GamePhase::Won);
        assert_eq!(out.command, Some(Command::Restart));
    }

    #[test]
    fn quit_needs_the_full_run() {
        let mut dec = GestureDecoder::new(RUN);
        for _ in 0..RUN - 1 {
            assert_eq!(dec.decode(Some(&hand(5)), GamePhase::Lost).command, None);
        }
        let out = dec.decode(Some(&hand(5)), GamePhase::Lost);
        assert_eq!(out.command, Some(Command::Quit));
    }

    #[test]
    fn one_off_frame_resets_the_run() {
        // 9 qualifying + 1 disqualifying + 9 qualifying: never fires.
        let mut dec = GestureDecoder::new(RUN);
        for _ in 0..9 {
            assert_eq!(dec.decode(Some(&hand(5)), GamePhase::Lost).command, None);
        }
        assert_eq!(dec.decode(Some(&hand(3)), GamePhase::Lost).command, None);
        for _ in 0..9 {
            assert_eq!(dec.decode(Some(&hand(5)), GamePhase::Lost).command, None);
        }
    }

    #[test]
    fn losing_the_hand_resets_the_run() {
        let mut dec = GestureDecoder::new(RUN);
        for _ in 0..9 {
            dec.decode(Some(&hand(2)), GamePhase::Won);
        }
        dec.decode(None, GamePhase::Won);
        for _ in 0..9 {
            assert_eq!(dec.decode(Some(&hand(2)), GamePhase::Won).command, None);
        }
    }

    #[test]
    fn fires_once_then_requires_a_fresh_run() {
        let mut dec = GestureDecoder::new(RUN);
        let mut fired = 0;
        for _ in 0..2 * RUN {
            if dec.decode(Some(&hand(2)), GamePhase::Won).command.is_some() {
                fired += 1;
            }
        }
        // 20 consecutive frames: exactly at 10 and at 20.
        assert_eq!(fired, 2);
    }

    #[test]
    fn disabled_while_playing() {
        let mut dec = GestureDecoder::new(RUN);
        for _ in 0..3 * RUN {
            assert_eq!(dec.decode(Some(&hand(2)), GamePhase::Playing).command, None);
        }
        // Counters stayed at zero, so a terminal phase still needs a
        // complete run.
        for _ in 0..RUN - 1 {
            assert_eq!(dec.decode(Some(&hand(2)), GamePhase::Won).command, None);
        }
        assert_eq!(
            dec.decode(Some(&hand(2)), GamePhase::Won).command,
            Some(Command::Restart)
        );
    }

    #[test]
    fn alternating_gestures_clear_each_other() {
        let mut dec = GestureDecoder::new(4);
        for _ in 0..20 {
            assert_eq!(dec.decode(Some(&hand(2)), GamePhase::Lost).command, None);
            assert_eq!(dec.decode(Some(&hand(5)), GamePhase::Lost).command, None);
        }
    }

    #[test]
    fn out_of_range_fingertip_is_clamped() {
        let mut dec = GestureDecoder::new(RUN);
        let out = dec.decode(Some(&hand_at(7.0)), GamePhase::Playing);
        assert_eq!(out.paddle_target, Some(TABLE_W));
    }
}

//! Software-rendered window using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  brick grid                                 │
//! │                                             │   game area
//! │          ● ball                             │   800×400
//! │               ▬▬▬▬ paddle                   │
//! ├─────────────────────────────────────────────┤
//! │  camera preview (or synthesized skeleton)   │   preview area
//! │                                             │   800×400
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The visualizer never mutates game state: it polls window input into
//! [`SimInput`] events for the simulation pose source and draws whatever
//! the session currently holds.

use std::sync::mpsc::Sender;
use std::time::Duration;

use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

use brick_table::objects::{BALL_SIZE, PADDLE_H, PADDLE_W, PADDLE_Y};
use brick_table::GameSession;
use hand_pose::landmarks::HAND_SKELETON;
use hand_pose::{LandmarkFrame, PoseUpdate, PreviewFrame, SimInput};

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 800;
pub const GAME_H: usize = 400;
pub const PREVIEW_H: usize = 400;
pub const WIN_H: usize = GAME_H + PREVIEW_H;

const GAME_BG: u32 = 0x1A1A2E;
const PREVIEW_BG: u32 = 0x0F1622;
const DIVIDER: u32 = 0x3A3A55;
const PADDLE_COLOR: u32 = 0x4FC3F7;
const BALL_COLOR: u32 = 0xF5F5F5;
const BANNER_COLOR: u32 = 0xFFD700;
const HINT_COLOR: u32 = 0xAAAAAA;
const HUD_COLOR: u32 = 0xDDDDDD;
const BONE_COLOR: u32 = 0x66E0A3;
const JOINT_COLOR: u32 = 0xFFFFFF;

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf: Vec<u32>,
    sim_tx: Sender<SimInput>,
    hand_hidden: bool,
}

impl Visualizer {
    pub fn new(sim_tx: Sender<SimInput>, input_tick: Duration) -> Result<Self, String> {
        let mut window = Window::new(
            "Brick Pilot — wave to play",
            WIN_W,
            WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(input_tick));

        Ok(Visualizer {
            window,
            buf: vec![GAME_BG; WIN_W * WIN_H],
            sim_tx,
            hand_hidden: false,
        })
    }

    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Poll keyboard and mouse, feeding the simulation pose source.
    /// Returns false when the window should close.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() {
            return false;
        }
        if self.window.is_key_pressed(Key::Q, KeyRepeat::No) {
            return false;
        }
        if self.window.is_key_pressed(Key::H, KeyRepeat::No) {
            self.hand_hidden = !self.hand_hidden;
        }

        if let Some((mx, my)) = self.window.get_mouse_pos(MouseMode::Clamp) {
            let input = if self.hand_hidden {
                SimInput::NoHand
            } else {
                SimInput::Hand {
                    x: mx / WIN_W as f32,
                    y: my / WIN_H as f32,
                    fingers: self.held_finger_count(),
                }
            };
            let _ = self.sim_tx.send(input);
        }

        true
    }

    /// The finger count simulated by the digit keys; with nothing held the
    /// hand just points (one finger), which maps to no command.
    fn held_finger_count(&self) -> u8 {
        const DIGITS: [(Key, u8); 6] = [
            (Key::Key5, 5),
            (Key::Key4, 4),
            (Key::Key3, 3),
            (Key::Key2, 2),
            (Key::Key1, 1),
            (Key::Key0, 0),
        ];
        for (key, count) in DIGITS {
            if self.window.is_key_down(key) {
                return count;
            }
        }
        1
    }

    /// Render one frame: the game area from the session, the preview area
    /// from the newest pose update.
    pub fn render(&mut self, session: &GameSession, update: &PoseUpdate) {
        // ── game area ─────────────────────────────────────────────────────
        self.fill_rect(0, 0, WIN_W, GAME_H, GAME_BG);

        for brick in session.bricks().alive() {
            let r = brick.rect;
            self.fill_rect(
                r.x0 as usize,
                r.y0 as usize,
                (r.x1 - r.x0) as usize,
                (r.y1 - r.y0) as usize,
                brick.color,
            );
        }

        let paddle = session.paddle();
        self.fill_rect(
            (paddle.center_x - PADDLE_W / 2.0) as usize,
            PADDLE_Y as usize,
            PADDLE_W as usize,
            PADDLE_H as usize,
            PADDLE_COLOR,
        );

        let ball = session.ball();
        self.fill_rect(
            ball.x.max(0.0) as usize,
            ball.y.max(0.0) as usize,
            BALL_SIZE as usize,
            BALL_SIZE as usize,
            BALL_COLOR,
        );

        if let Some(text) = session.banner() {
            self.draw_label_scaled(text, 4, BANNER_COLOR, 160);
            self.draw_label_scaled("HOLD 2 FINGERS TO RESTART - 5 TO QUIT", 1, HINT_COLOR, 220);
        }

        let hud = format!("BRICKS {:>2}", session.bricks().alive_count());
        self.draw_label(&hud, 8, 8, HUD_COLOR);

        // ── divider ───────────────────────────────────────────────────────
        self.fill_rect(0, GAME_H, WIN_W, 2, DIVIDER);

        // ── preview area ──────────────────────────────────────────────────
        self.fill_rect(0, GAME_H + 2, WIN_W, PREVIEW_H - 2, PREVIEW_BG);
        match (&update.preview, &update.frame) {
            (Some(preview), _) => self.blit_preview(preview),
            (None, Some(frame)) => self.draw_skeleton(frame),
            (None, None) => {
                self.draw_label("NO HAND IN VIEW", 8, GAME_H + 10, HINT_COLOR);
            }
        }
        if let Some(frame) = &update.frame {
            let counted = format!("FINGERS {}", frame.fingers_up());
            self.draw_label(&counted, WIN_W - 60, GAME_H + 10, HUD_COLOR);
        }

        // ── key legend ────────────────────────────────────────────────────
        self.draw_label(
            "MOUSE STEERS  0-5 FINGERS  H HIDE HAND  Q QUIT",
            8,
            WIN_H - 12,
            HINT_COLOR,
        );

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    // ── preview drawing ───────────────────────────────────────────────────

    /// Nearest-neighbor blit of the camera frame into the preview area.
    fn blit_preview(&mut self, preview: &PreviewFrame) {
        if preview.width == 0 || preview.height == 0 {
            return;
        }
        let h = PREVIEW_H - 2;
        for row in 0..h {
            let sy = row * preview.height / h;
            for col in 0..WIN_W {
                let sx = col * preview.width / WIN_W;
                self.buf[(GAME_H + 2 + row) * WIN_W + col] = preview.pixels[sy * preview.width + sx];
            }
        }
    }

    /// Draw the synthesized hand as a stick skeleton (simulation mode has
    /// no camera image to show).
    fn draw_skeleton(&mut self, frame: &LandmarkFrame) {
        let project = |i: usize| {
            let p = frame.points[i];
            (
                (p.x.clamp(0.0, 1.0) * (WIN_W - 1) as f32) as i32,
                GAME_H as i32 + 2 + (p.y.clamp(0.0, 1.0) * (PREVIEW_H - 3) as f32) as i32,
            )
        };

        for &(a, b) in &HAND_SKELETON {
            let (x0, y0) = project(a);
            let (x1, y1) = project(b);
            self.draw_line(x0, y0, x1, y1, BONE_COLOR);
        }
        for i in 0..frame.points.len() {
            let (x, y) = project(i);
            self.fill_rect_i(x - 1, y - 1, 3, 3, JOINT_COLOR);
        }
    }

    // ── primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(WIN_H) {
            for col in x..(x + w).min(WIN_W) {
                self.buf[row * WIN_W + col] = color;
            }
        }
    }

    fn fill_rect_i(&mut self, x: i32, y: i32, w: i32, h: i32, color: u32) {
        for row in y.max(0)..(y + h).min(WIN_H as i32) {
            for col in x.max(0)..(x + w).min(WIN_W as i32) {
                self.buf[row as usize * WIN_W + col as usize] = color;
            }
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && y >= 0 && (x as usize) < WIN_W && (y as usize) < WIN_H {
            self.buf[y as usize * WIN_W + x as usize] = color;
        }
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
        for s in 0..=steps {
            let x = x0 + (x1 - x0) * s / steps;
            let y = y0 + (y1 - y0) * s / steps;
            self.set_pixel(x, y, color);
        }
    }

    /// Render `text` with the 3×5 bitmap font at pixel scale 1.
    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        self.draw_text(text, x as i32, y as i32, 1, color);
    }

    /// Render `text` centered horizontally in the game area at `y`.
    fn draw_label_scaled(&mut self, text: &str, scale: i32, color: u32, y: i32) {
        let width = text.chars().count() as i32 * 4 * scale - scale;
        let x = (WIN_W as i32 - width) / 2;
        self.draw_text(text, x, y, scale, color);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32, scale: i32, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let glyph = char_glyph(ch.to_ascii_uppercase());
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0..3i32 {
                    if bits & (1 << (2 - col)) != 0 {
                        self.fill_rect_i(
                            cx + col * scale,
                            y + row as i32 * scale,
                            scale,
                            scale,
                            color,
                        );
                    }
                }
            }
            cx += 4 * scale;
            if cx >= WIN_W as i32 {
                break;
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font (uppercase + digits + a little punctuation)
// ────────────────────────────────────────────────────────────────────────────

fn char_glyph(c: char) -> [u8; 5] {
    match c {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b011, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b110],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b010, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b011, 0b100, 0b100, 0b100, 0b011],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b110, 0b100, 0b100],
        'G' => [0b011, 0b100, 0b101, 0b101, 0b011],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b010],
        'K' => [0b101, 0b110, 0b100, 0b110, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'N' => [0b101, 0b111, 0b111, 0b111, 0b101],
        'O' => [0b010, 0b101, 0b101, 0b101, 0b010],
        'P' => [0b110, 0b101, 0b110, 0b100, 0b100],
        'Q' => [0b010, 0b101, 0b101, 0b110, 0b011],
        'R' => [0b110, 0b101, 0b110, 0b110, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b111, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b010, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b000, 0b000, 0b010, 0b000, 0b000],
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

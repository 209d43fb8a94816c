//! palm_cursor — the raw cursor-control demo.
//!
//! A crosshair tracks the index fingertip, scaled to the window and
//! clamped to its bounds.  When no hand is in view the crosshair simply
//! holds its last position.
//!
//! * (default) — **Simulation mode**: the mouse stands in for the hand.
//! * `camera`  — **Live mode**: mirrored webcam frames fill the window;
//!   landmark estimation goes through `hand_pose`'s pluggable detector.
//!
//! Keys: `H` toggles "hand out of view", `Q` / `Escape` quits.

use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use minifb::{Key, KeyRepeat, MouseMode, Window, WindowOptions};

use hand_pose::{FrameSlot, PoseUpdate, PreviewFrame, SimInput};

const WIN_W: usize = 800;
const WIN_H: usize = 600;
const BG_COLOR: u32 = 0x101418;
const CROSS_COLOR: u32 = 0xFFCC33;
const CROSS_ARM: i32 = 12;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║        Palm Cursor — point to move the cursor        ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "camera")]
    println!("  Mode: live camera");
    #[cfg(not(feature = "camera"))]
    println!("  Mode: mouse simulation  (use --features camera for the webcam)");
    println!();
    println!("  H = hide the hand   Q / Esc = quit");
    println!();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let (sim_tx, sim_rx) = mpsc::channel::<SimInput>();
    let slot = open_source(sim_rx)?;

    let mut window = Window::new(
        "Palm Cursor — index fingertip",
        WIN_W,
        WIN_H,
        WindowOptions::default(),
    )
    .map_err(|e| e.to_string())?;
    window.limit_update_rate(Some(Duration::from_millis(15)));

    let mut buf = vec![BG_COLOR; WIN_W * WIN_H];
    let mut cursor = (WIN_W as f32 / 2.0, WIN_H as f32 / 2.0);
    let mut latest = PoseUpdate::default();
    let mut hand_hidden = false;

    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Q, KeyRepeat::No) {
            break;
        }
        if window.is_key_pressed(Key::H, KeyRepeat::No) {
            hand_hidden = !hand_hidden;
        }

        // Feed the simulation source from this window's mouse.
        if let Some((mx, my)) = window.get_mouse_pos(MouseMode::Clamp) {
            let input = if hand_hidden {
                SimInput::NoHand
            } else {
                SimInput::Hand {
                    x: mx / WIN_W as f32,
                    y: my / WIN_H as f32,
                    fingers: 1,
                }
            };
            let _ = sim_tx.send(input);
        }

        if let Some(update) = slot.take() {
            latest = update;
        }

        // Hold the last position whenever no hand is in view.
        if let Some(frame) = &latest.frame {
            let tip = frame.index_tip();
            cursor = (
                tip.x.clamp(0.0, 1.0) * (WIN_W - 1) as f32,
                tip.y.clamp(0.0, 1.0) * (WIN_H - 1) as f32,
            );
        }

        draw_background(&mut buf, latest.preview.as_ref());
        draw_crosshair(&mut buf, cursor.0 as i32, cursor.1 as i32);

        window
            .update_with_buffer(&buf, WIN_W, WIN_H)
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}

#[cfg(not(feature = "camera"))]
fn open_source(sim_rx: Receiver<SimInput>) -> Result<FrameSlot, String> {
    Ok(hand_pose::spawn_pose_source(hand_pose::SimPoseSource {
        rx: sim_rx,
    }))
}

#[cfg(feature = "camera")]
fn open_source(_sim_rx: Receiver<SimInput>) -> Result<FrameSlot, String> {
    let source = hand_pose::CameraPoseSource::open(0, Box::new(hand_pose::NullDetector))
        .map_err(|e| e.to_string())?;
    Ok(hand_pose::spawn_pose_source(source))
}

/// Fill the window with the camera preview when there is one, scaled
/// nearest-neighbor; otherwise a flat backdrop.
fn draw_background(buf: &mut [u32], preview: Option<&PreviewFrame>) {
    match preview {
        Some(frame) if frame.width > 0 && frame.height > 0 => {
            for row in 0..WIN_H {
                let sy = row * frame.height / WIN_H;
                for col in 0..WIN_W {
                    let sx = col * frame.width / WIN_W;
                    buf[row * WIN_W + col] = frame.pixels[sy * frame.width + sx];
                }
            }
        }
        _ => buf.fill(BG_COLOR),
    }
}

fn draw_crosshair(buf: &mut [u32], cx: i32, cy: i32) {
    for d in -CROSS_ARM..=CROSS_ARM {
        set_pixel(buf, cx + d, cy, CROSS_COLOR);
        set_pixel(buf, cx, cy + d, CROSS_COLOR);
    }
}

fn set_pixel(buf: &mut [u32], x: i32, y: i32, color: u32) {
    if x >= 0 && y >= 0 && (x as usize) < WIN_W && (y as usize) < WIN_H {
        buf[y as usize * WIN_W + x as usize] = color;
    }
}

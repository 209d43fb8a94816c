//! Terminal probe for the landmark model: synthesize hands, count fingers,
//! and show how the index fingertip maps onto a game surface.

use hand_pose::synthesize_hand;

const SURFACE_W: f32 = 800.0;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║              Hand Pose — landmark probe              ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    // ── 1. Finger counting across all gestures ───────────────────────────
    println!("1. Finger counting (synthesized hands at (0.5, 0.4))");
    for raised in 0..=5u8 {
        let frame = synthesize_hand(0.5, 0.4, raised);
        let marks: String = (0..5)
            .map(|i| if (i as u8) < raised { '│' } else { '·' })
            .collect();
        println!(
            "   raised {}  [{}]  fingers_up = {}",
            raised,
            marks,
            frame.fingers_up()
        );
    }
    println!();

    // ── 2. Fingertip → surface mapping ───────────────────────────────────
    println!("2. Index fingertip sweep → {} px surface", SURFACE_W as u32);
    for step in 0..=10 {
        let x = step as f32 / 10.0;
        let frame = synthesize_hand(x, 0.4, 1);
        let px = frame.index_tip().x.clamp(0.0, 1.0) * SURFACE_W;
        let col = (x * 40.0) as usize;
        println!("   x = {:>4.2}  →  {:>5.0} px  |{:>width$}|", x, px, "●", width = col + 1);
    }
    println!();

    // ── 3. Out-of-range input is clamped, never trusted ──────────────────
    println!("3. Out-of-range landmarks clamp into [0, 1]");
    for &(x, y) in &[(-0.5_f32, 0.4_f32), (1.5, 0.4), (0.5, 2.0)] {
        let frame = synthesize_hand(x, y, 5);
        let tip = frame.index_tip();
        println!(
            "   requested ({:>4.1}, {:>4.1})  →  tip ({:.2}, {:.2}), fingers {}",
            x, y, tip.x, tip.y,
            frame.fingers_up()
        );
    }
    println!();
}

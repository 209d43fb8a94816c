//! brick_pilot — interactive entry point.

use brick_pilot::app::{run, AppConfig};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║          Brick Pilot — hand-steered brick breaker            ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    #[cfg(feature = "camera")]
    println!("  Mode: live camera");
    #[cfg(not(feature = "camera"))]
    println!("  Mode: mouse simulation  (use --features camera for the webcam)");
    println!();
    println!("  Steer the paddle with the index fingertip (mouse in sim mode).");
    println!("  On the game-over screen, hold a gesture for ten frames:");
    println!("    two fingers  → restart");
    println!("    five fingers → quit");
    println!();
    println!("  Opening window…");
    println!();

    if let Err(e) = run(AppConfig::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

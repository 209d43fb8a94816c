//! Interactive workbench for the table physics — no window, no hands,
//! just scripted rallies traced to the terminal.

use std::io::{self, Write};

use brick_table::objects::{Rect, BALL_SIZE};
use brick_table::{Ball, BrickGrid, Command, GamePhase, GameSession};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║           Brick Table — physics workbench            ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    loop {
        print_menu();
        let choice = read_line("Select a rally (1–3, or q to quit): ");

        match choice.trim() {
            "1" => auto_rally(),
            "2" => drop_rally(),
            "3" => final_brick_rally(),
            c if c.eq_ignore_ascii_case("q") => {
                println!("\nGoodbye!\n");
                break;
            }
            _ => println!("  ⚠  Please enter 1–3 or q.\n"),
        }
    }
}

fn print_menu() {
    println!("  ┌──────────────────────────────────────────────────────┐");
    println!("  │  1. Auto rally  — paddle tracks the ball             │");
    println!("  │  2. Drop        — let the ball fall, then restart    │");
    println!("  │  3. Final brick — one brick left, win it             │");
    println!("  └──────────────────────────────────────────────────────┘");
    println!();
}

/// Run a session with the paddle glued under the ball.  With a perfect
/// paddle the rally ends in a win (or runs out of steps).
fn auto_rally() {
    let steps: usize = read_line("  Max steps (default 5000): ")
        .trim()
        .parse()
        .unwrap_or(5000);
    let steps = steps.clamp(1, 200_000);

    let mut session = GameSession::new();
    println!();
    for i in 0..steps {
        let center = session.ball().x + BALL_SIZE / 2.0;
        session.set_paddle_target(center);
        let report = session.step_physics();

        for id in &report.hit {
            println!("  [{:>6}] smashed brick #{:<2}  ({} left)", i, id.0, session.bricks().alive_count());
        }
        if session.phase() != GamePhase::Playing {
            break;
        }
        if i % 500 == 0 {
            let ball = session.ball();
            println!(
                "  [{:>6}] ball ({:>5.1}, {:>5.1})  v ({:+.0}, {:+.0})  bricks {}",
                i, ball.x, ball.y, ball.vx, ball.vy,
                session.bricks().alive_count()
            );
        }
    }
    summarize(&session);
}

/// Center the paddle, park the ball over the floor, and watch it die.
/// Then restart through the same command path the gesture decoder uses.
fn drop_rally() {
    let mut session = GameSession::new();
    session.set_ball(Ball { x: 390.0, y: 300.0, vx: 0.0, vy: 5.0 });
    session.set_paddle_target(0.0); // out of the way (clamps to the left edge)

    let mut steps = 0usize;
    while session.phase() == GamePhase::Playing {
        session.step_physics();
        steps += 1;
    }
    println!();
    println!("  Lost after {} steps — banner: {:?}", steps, session.banner());

    session.apply(Command::Restart);
    println!(
        "  Restarted: phase {:?}, bricks {}, paddle center {:.0}",
        session.phase(),
        session.bricks().alive_count(),
        session.paddle().center_x
    );
    println!();
}

/// One brick left directly in the ball's path: the next step wins.
fn final_brick_rally() {
    let mut session = GameSession::new();
    session.set_bricks(BrickGrid::from_rects(&[Rect::new(375.0, 30.0, 425.0, 50.0)]));
    session.set_ball(Ball { x: 390.0, y: 100.0, vx: 0.0, vy: -5.0 });

    let mut steps = 0usize;
    while session.phase() == GamePhase::Playing && steps < 100 {
        session.step_physics();
        steps += 1;
    }
    println!();
    println!(
        "  {:?} after {} steps — banner: {:?}, ball frozen: {}",
        session.phase(),
        steps,
        session.banner(),
        session.ball().frozen()
    );
    println!();
}

fn summarize(session: &GameSession) {
    println!();
    match session.phase() {
        GamePhase::Won => println!("  ✓  Cleared the board — {:?}", session.banner()),
        GamePhase::Lost => println!("  ✗  Ball hit the floor — {:?}", session.banner()),
        _ => println!(
            "  …  Still playing, {} bricks left",
            session.bricks().alive_count()
        ),
    }
    println!();
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}

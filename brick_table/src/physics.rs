//! Fixed-step ball physics: wall bounces, brick smashing, paddle rebound,
//! and the two terminal outcomes.
//!
//! One call to [`step`] advances the rally by exactly one control-loop
//! step.  Collision checks run against the current position, then the
//! (possibly reflected) velocity is applied.  The ball reflects vertically
//! at most once per step no matter how many bricks it overlaps.

use crate::objects::{Ball, BrickGrid, BrickId, Paddle, BALL_SIZE, TABLE_H, TABLE_W};

/// Terminal result of a rally.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// What one physics step did.
#[derive(Clone, Debug, Default)]
pub struct StepReport {
    /// Bricks smashed on this step, in grid order.
    pub hit: Vec<BrickId>,
    /// Set on the step that ends the rally.
    pub outcome: Option<Outcome>,
}

/// Advance the ball one step against the paddle and the brick grid.
pub fn step(ball: &mut Ball, paddle: &Paddle, bricks: &mut BrickGrid) -> StepReport {
    let mut report = StepReport::default();

    // Side and ceiling bounces: flip the sign, keep the magnitude.
    if ball.x + BALL_SIZE >= TABLE_W || ball.x <= 0.0 {
        ball.vx = -ball.vx;
    }
    if ball.y <= 0.0 {
        ball.vy = -ball.vy;
    }

    // Floor: the rally is lost and the ball freezes where it died.
    if ball.y + BALL_SIZE >= TABLE_H {
        ball.vx = 0.0;
        ball.vy = 0.0;
        report.outcome = Some(Outcome::Lost);
        return report;
    }

    // Brick sweep.  Every overlapped brick is smashed, but the ball
    // reflects at most once per step.
    let bounds = ball.bounds();
    let hit: Vec<BrickId> = bricks
        .alive()
        .filter(|b| b.rect.overlaps(&bounds))
        .map(|b| b.id)
        .collect();
    if !hit.is_empty() {
        ball.vy = -ball.vy;
        for &id in &hit {
            bricks.smash(id);
        }
    }
    report.hit = hit;

    // Clearing the last brick wins; the ball freezes.
    if bricks.is_cleared() {
        ball.vx = 0.0;
        ball.vy = 0.0;
        report.outcome = Some(Outcome::Won);
        return report;
    }

    // Paddle contact always sends the ball back up, so it can neither
    // stick to the paddle nor pass through it.
    if bounds.overlaps(&paddle.bounds()) {
        ball.vy = -ball.vy.abs();
    }

    ball.x += ball.vx;
    ball.y += ball.vy;

    report
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::Rect;

    /// A grid whose bricks are far from the ball's path.
    fn distant_grid(count: usize) -> BrickGrid {
        let rects: Vec<Rect> = (0..count)
            .map(|i| {
                let x0 = -1000.0 - i as f32 * 60.0;
                Rect::new(x0, -1000.0, x0 + 50.0, -980.0)
            })
            .collect();
        BrickGrid::from_rects(&rects)
    }

    fn paddle_far_away() -> Paddle {
        Paddle { center_x: 50.0 }
    }

    #[test]
    fn right_wall_bounce_flips_vx_then_moves() {
        // Ball at (790, 100) with vx = 3 on an 800-wide table: the right
        // edge is already past the wall, so vx becomes −3 and the ball
        // lands at x = 787.
        let mut ball = Ball { x: 790.0, y: 100.0, vx: 3.0, vy: -5.0 };
        let mut grid = distant_grid(1);
        step(&mut ball, &paddle_far_away(), &mut grid);
        assert_eq!(ball.vx, -3.0);
        assert_eq!(ball.x, 787.0);
        assert_eq!(ball.vy, -5.0);
    }

    #[test]
    fn left_wall_bounce_preserves_magnitude() {
        let mut ball = Ball { x: 0.0, y: 100.0, vx: -4.0, vy: 2.0 };
        let mut grid = distant_grid(1);
        step(&mut ball, &paddle_far_away(), &mut grid);
        assert_eq!(ball.vx, 4.0);
    }

    #[test]
    fn ceiling_bounce_flips_vy() {
        let mut ball = Ball { x: 300.0, y: 0.0, vx: 3.0, vy: -5.0 };
        let mut grid = distant_grid(1);
        step(&mut ball, &paddle_far_away(), &mut grid);
        assert_eq!(ball.vy, 5.0);
        assert_eq!(ball.vx, 3.0);
    }

    #[test]
    fn floor_loses_and_freezes_the_ball() {
        let mut ball = Ball { x: 300.0, y: 380.0, vx: 3.0, vy: 5.0 };
        let mut grid = distant_grid(1);
        let report = step(&mut ball, &paddle_far_away(), &mut grid);
        assert_eq!(report.outcome, Some(Outcome::Lost));
        assert!(ball.frozen());
        // Frozen in place, not advanced.
        assert_eq!((ball.x, ball.y), (300.0, 380.0));
    }

    #[test]
    fn brick_hit_smashes_flips_vy_once() {
        // One brick at (0,0)-(50,20); ball box (10,5)-(30,25) overlaps it.
        let mut rects = vec![Rect::new(0.0, 0.0, 50.0, 20.0)];
        rects.extend((0..59).map(|i| {
            let x0 = -1000.0 - i as f32 * 60.0;
            Rect::new(x0, -1000.0, x0 + 50.0, -980.0)
        }));
        let mut grid = BrickGrid::from_rects(&rects);
        let mut ball = Ball { x: 10.0, y: 5.0, vx: 3.0, vy: -5.0 };
        let report = step(&mut ball, &paddle_far_away(), &mut grid);
        assert_eq!(report.hit, vec![BrickId(0)]);
        assert_eq!(report.outcome, None);
        assert_eq!(grid.alive_count(), 59);
        assert_eq!(ball.vy, 5.0);
    }

    #[test]
    fn two_overlapping_bricks_reflect_once() {
        // Two bricks stacked over the ball: both die, vy flips exactly once.
        let rects = vec![
            Rect::new(0.0, 0.0, 50.0, 20.0),
            Rect::new(0.0, 20.0, 50.0, 40.0),
            Rect::new(-1000.0, -1000.0, -950.0, -980.0),
        ];
        let mut grid = BrickGrid::from_rects(&rects);
        let mut ball = Ball { x: 10.0, y: 10.0, vx: 0.0, vy: -5.0 };
        let report = step(&mut ball, &paddle_far_away(), &mut grid);
        assert_eq!(report.hit.len(), 2);
        assert_eq!(ball.vy, 5.0);
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn clearing_the_grid_wins_and_freezes() {
        let rects = vec![Rect::new(0.0, 0.0, 50.0, 20.0)];
        let mut grid = BrickGrid::from_rects(&rects);
        let mut ball = Ball { x: 10.0, y: 5.0, vx: 3.0, vy: -5.0 };
        let report = step(&mut ball, &paddle_far_away(), &mut grid);
        assert_eq!(report.outcome, Some(Outcome::Won));
        assert!(grid.is_cleared());
        assert!(ball.frozen());
    }

    #[test]
    fn loss_wins_never_coincide() {
        // Ball at the floor above the last brick: the floor check runs
        // first, so the outcome is Lost and the brick survives.
        let rects = vec![Rect::new(280.0, 370.0, 330.0, 390.0)];
        let mut grid = BrickGrid::from_rects(&rects);
        let mut ball = Ball { x: 290.0, y: 380.0, vx: 0.0, vy: 5.0 };
        let report = step(&mut ball, &paddle_far_away(), &mut grid);
        assert_eq!(report.outcome, Some(Outcome::Lost));
        assert_eq!(grid.alive_count(), 1);
    }

    #[test]
    fn paddle_contact_always_bounces_upward() {
        let paddle = Paddle::centered(); // center 400, band y 360..380
        let mut grid = distant_grid(1);

        // Falling onto the paddle: vy flips up.
        let mut ball = Ball { x: 390.0, y: 350.0, vx: 0.0, vy: 5.0 };
        step(&mut ball, &paddle, &mut grid);
        assert_eq!(ball.vy, -5.0);

        // Already moving up while overlapping: stays up.
        let mut ball = Ball { x: 390.0, y: 350.0, vx: 0.0, vy: -5.0 };
        step(&mut ball, &paddle, &mut grid);
        assert_eq!(ball.vy, -5.0);
    }

    #[test]
    fn plain_flight_is_deterministic() {
        let mut a = Ball { x: 100.0, y: 100.0, vx: 3.0, vy: -5.0 };
        let mut b = a;
        let mut grid_a = distant_grid(2);
        let mut grid_b = distant_grid(2);
        let paddle = paddle_far_away();
        for _ in 0..50 {
            step(&mut a, &paddle, &mut grid_a);
            step(&mut b, &paddle, &mut grid_b);
        }
        assert_eq!(a, b);
    }
}

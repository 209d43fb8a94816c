//! Game objects on the table: ball, paddle, and the brick grid.
//!
//! All geometry is plain `f32` axis-aligned boxes in table coordinates.
//! Bricks live in an arena with stable integer ids so that callers (the
//! renderer, the step report) can refer to a brick without holding a
//! reference into the grid.

// ════════════════════════════════════════════════════════════════════════════
// Table constants
// ════════════════════════════════════════════════════════════════════════════

/// Playfield size in pixels.
pub const TABLE_W: f32 = 800.0;
pub const TABLE_H: f32 = 400.0;

/// Paddle geometry.  The paddle slides along a fixed row near the floor.
pub const PADDLE_W: f32 = 100.0;
pub const PADDLE_H: f32 = 20.0;
pub const PADDLE_Y: f32 = 360.0;

/// Ball bounding box (square, 20 px diameter).
pub const BALL_SIZE: f32 = 20.0;

/// Where a fresh ball appears: centered, between the grid and the paddle.
pub const BALL_START_X: f32 = (TABLE_W - BALL_SIZE) / 2.0;
pub const BALL_START_Y: f32 = 250.0;

/// Launch velocity in pixels per physics step.  Only the horizontal sign
/// varies, chosen once per session; see [`crate::session::GameSession`].
pub const LAUNCH_VX: f32 = 3.0;
pub const LAUNCH_VY: f32 = -5.0;

/// Brick grid: 4 rows × 15 columns of 50×20 bricks with 3 px gaps.
pub const BRICK_ROWS: usize = 4;
pub const BRICK_COLS: usize = 15;
pub const BRICK_W: f32 = 50.0;
pub const BRICK_H: f32 = 20.0;
pub const BRICK_GAP: f32 = 3.0;
pub const BRICK_TOP: f32 = 30.0;
/// Side margin that centers the grid: (800 − (15·53 − 3)) / 2 = 4 px.
pub const BRICK_LEFT: f32 =
    (TABLE_W - (BRICK_COLS as f32 * (BRICK_W + BRICK_GAP) - BRICK_GAP)) / 2.0;

/// Row colors, top to bottom (0xRRGGBB).
pub const ROW_COLORS: [u32; BRICK_ROWS] = [0xE53935, 0xFB8C00, 0xFDD835, 0x43A047];

// ════════════════════════════════════════════════════════════════════════════
// Rect
// ════════════════════════════════════════════════════════════════════════════

/// Axis-aligned box spanning `x0..x1` × `y0..y1`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Rect { x0, y0, x1, y1 }
    }

    /// True when the two boxes share any interior area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && self.x1 > other.x0 && self.y0 < other.y1 && self.y1 > other.y0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Ball
// ════════════════════════════════════════════════════════════════════════════

/// The ball.  `x`/`y` is the top-left corner of its bounding box; the
/// velocity is in pixels per physics step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Ball {
    /// Fresh ball above the paddle, moving toward the bricks.  `rightward`
    /// picks the horizontal direction.
    pub fn launch(rightward: bool) -> Self {
        Ball {
            x: BALL_START_X,
            y: BALL_START_Y,
            vx: if rightward { LAUNCH_VX } else { -LAUNCH_VX },
            vy: LAUNCH_VY,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + BALL_SIZE, self.y + BALL_SIZE)
    }

    /// A frozen ball marks a finished rally; it stays visible where it died.
    pub fn frozen(&self) -> bool {
        self.vx == 0.0 && self.vy == 0.0
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Paddle
// ════════════════════════════════════════════════════════════════════════════

/// The paddle: a 100×20 box on the `PADDLE_Y` row, addressed by its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Paddle {
    pub center_x: f32,
}

impl Paddle {
    pub fn centered() -> Self {
        Paddle { center_x: TABLE_W / 2.0 }
    }

    /// Aim the paddle's center, clamped so the whole paddle stays on the
    /// table even for out-of-range targets.
    pub fn set_center(&mut self, target: f32) {
        let half = PADDLE_W / 2.0;
        self.center_x = target.clamp(half, TABLE_W - half);
    }

    pub fn bounds(&self) -> Rect {
        let half = PADDLE_W / 2.0;
        Rect::new(
            self.center_x - half,
            PADDLE_Y,
            self.center_x + half,
            PADDLE_Y + PADDLE_H,
        )
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Bricks
// ════════════════════════════════════════════════════════════════════════════

/// Stable identity of a brick within one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BrickId(pub usize);

#[derive(Clone, Copy, Debug)]
pub struct Brick {
    pub id: BrickId,
    pub rect: Rect,
    pub color: u32,
    pub alive: bool,
}

/// The brick arena.  Ids are stable for the whole session; `alive` flips to
/// false exactly once per brick and the set only ever shrinks.
#[derive(Clone, Debug)]
pub struct BrickGrid {
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// The full 4×15 session grid, row colors top to bottom.
    pub fn full() -> Self {
        let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
        for row in 0..BRICK_ROWS {
            for col in 0..BRICK_COLS {
                let x0 = BRICK_LEFT + col as f32 * (BRICK_W + BRICK_GAP);
                let y0 = BRICK_TOP + row as f32 * (BRICK_H + BRICK_GAP);
                bricks.push(Brick {
                    id: BrickId(row * BRICK_COLS + col),
                    rect: Rect::new(x0, y0, x0 + BRICK_W, y0 + BRICK_H),
                    color: ROW_COLORS[row],
                    alive: true,
                });
            }
        }
        BrickGrid { bricks }
    }

    /// Grid with explicit brick rectangles, for demos and tests.
    pub fn from_rects(rects: &[Rect]) -> Self {
        let bricks = rects
            .iter()
            .enumerate()
            .map(|(i, &rect)| Brick {
                id: BrickId(i),
                rect,
                color: 0xFFFFFF,
                alive: true,
            })
            .collect();
        BrickGrid { bricks }
    }

    /// The bricks still standing.
    pub fn alive(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.iter().all(|b| !b.alive)
    }

    /// Knock a brick out.  Idempotent; a dead brick stays dead.
    pub fn smash(&mut self, id: BrickId) {
        if let Some(brick) = self.bricks.get_mut(id.0) {
            brick.alive = false;
        }
    }

    pub fn get(&self, id: BrickId) -> Option<&Brick> {
        self.bricks.get(id.0)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_overlap_symmetric() {
        let a = Rect::new(0.0, 0.0, 50.0, 20.0);
        let b = Rect::new(10.0, 5.0, 30.0, 25.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn rect_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 50.0, 20.0);
        let b = Rect::new(50.0, 0.0, 100.0, 20.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn full_grid_has_sixty_bricks() {
        let grid = BrickGrid::full();
        assert_eq!(grid.alive_count(), 60);
        assert!(!grid.is_cleared());
    }

    #[test]
    fn grid_fits_the_table() {
        let grid = BrickGrid::full();
        for brick in grid.alive() {
            assert!(brick.rect.x0 >= 0.0 && brick.rect.x1 <= TABLE_W);
        }
    }

    #[test]
    fn smash_is_permanent_and_idempotent() {
        let mut grid = BrickGrid::full();
        grid.smash(BrickId(7));
        grid.smash(BrickId(7));
        assert_eq!(grid.alive_count(), 59);
        assert!(!grid.get(BrickId(7)).unwrap().alive);
    }

    #[test]
    fn paddle_clamps_to_table() {
        let mut paddle = Paddle::centered();
        paddle.set_center(-500.0);
        assert_eq!(paddle.center_x, PADDLE_W / 2.0);
        paddle.set_center(5000.0);
        assert_eq!(paddle.center_x, TABLE_W - PADDLE_W / 2.0);
    }

    #[test]
    fn launch_direction_sign() {
        assert_eq!(Ball::launch(true).vx, LAUNCH_VX);
        assert_eq!(Ball::launch(false).vx, -LAUNCH_VX);
    }
}

//! # brick_table
//!
//! The brick-breaker playfield: ball, paddle, and brick objects, the
//! fixed-step physics engine, and the session state machine that ties them
//! together.  This crate knows nothing about windows, cameras, or hands —
//! it is driven entirely through [`GameSession`] and is fully testable
//! headless.
//!
//! ## Quick start
//!
//! ```rust
//! use brick_table::{GameSession, GamePhase};
//!
//! let mut session = GameSession::new();
//! session.set_paddle_target(240.0);     // aim the paddle's center
//! session.step_physics();               // one fixed physics step
//! assert_eq!(session.phase(), GamePhase::Playing);
//! ```
//!
//! ## Coordinate system
//!
//! Table coordinates: origin top-left, x rightward, y downward, 800×400
//! playfield.  The paddle slides along a fixed row near the floor; the
//! brick grid hangs near the ceiling; losing means the ball's bottom edge
//! reaches the floor.

pub mod objects;
pub mod physics;
pub mod session;

pub use objects::{Ball, Brick, BrickGrid, BrickId, Paddle, Rect};
pub use physics::{step, Outcome, StepReport};
pub use session::{Command, GamePhase, GameSession};

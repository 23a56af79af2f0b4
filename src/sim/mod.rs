//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per external tick, no timing of its own
//! - No I/O and no randomness
//! - Stable iteration order (construction order)

pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{
    PaddleContact, WallContact, ball_brick_collision, ball_paddle_collision, ball_wall_collision,
    within_side_walls,
};
pub use snapshot::{PIXELS_TAG, Snapshot};
pub use state::{
    Ball, Brick, BrickGrid, Direction, Game, GameEvent, GamePhase, Paddle, PaddleSegment,
    ParseDirectionError, Session,
};
pub use tick::tick;

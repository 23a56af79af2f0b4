//! Grid Breakout - A tick-driven ball/paddle/brick game on an integer grid
//!
//! Core modules:
//! - `sim`: Simulation (entities, collisions, game state machine, snapshot)
//! - `settings`: Validated board and layout parameters
//! - `host`: Line-oriented command adapter for an external driver

pub mod host;
pub mod settings;
pub mod sim;

pub use host::{Host, HostCommand, HostError};
pub use settings::{Settings, SettingsError};
pub use sim::{Direction, Game, GameEvent, GamePhase, Snapshot};

/// Game configuration constants (the canonical layout)
pub mod consts {
    /// Board dimensions (cells)
    pub const BOARD_WIDTH: i32 = 25;
    pub const BOARD_HEIGHT: i32 = 25;

    /// Paddle defaults - sits on the bottom row
    pub const PADDLE_LENGTH: i32 = 10;
    pub const PADDLE_START_X: i32 = 8;
    pub const PADDLE_START_Y: i32 = 24;

    /// Ball defaults
    pub const BALL_START_X: i32 = 12;
    pub const BALL_START_Y: i32 = 12;
    pub const BALL_START_DX: i32 = 1;
    pub const BALL_START_DY: i32 = -2;
    /// Right wall reflects once the ball would pass `width - BALL_RADIUS`
    pub const BALL_RADIUS: i32 = 1;

    /// Brick grid defaults
    pub const BRICK_COLS: i32 = 4;
    pub const BRICK_ROWS: i32 = 3;
    pub const BRICK_WIDTH: i32 = 5;
    pub const BRICK_HEIGHT: i32 = 1;
    pub const BRICK_PADDING: i32 = 1;
    pub const BRICK_OFFSET_LEFT: i32 = 1;
    pub const BRICK_OFFSET_TOP: i32 = 2;

    /// Blink cycle length in ticks while the game is over
    pub const BLINK_PERIOD: u32 = 8;
    /// Ball is hidden once the blink timer reaches this value
    pub const BLINK_HIDE_AT: u32 = 4;
}

/// Wrap a coordinate into `[0, extent)`
#[inline]
pub fn wrap(value: i32, extent: i32) -> i32 {
    value.rem_euclid(extent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_range() {
        assert_eq!(wrap(0, 25), 0);
        assert_eq!(wrap(24, 25), 24);
        assert_eq!(wrap(13, 25), 13);
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap(-1, 25), 24);
        assert_eq!(wrap(25, 25), 0);
        assert_eq!(wrap(-26, 25), 24);
        assert_eq!(wrap(51, 25), 1);
    }
}

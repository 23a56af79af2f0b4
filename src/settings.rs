//! Game settings and layout parameters
//!
//! Loaded from JSON (every field optional) and validated once, before any
//! game is built. A validated `Settings` can always produce a session.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("board must be at least 1x1, got {width}x{height}")]
    EmptyBoard { width: i32, height: i32 },
    #[error("paddle length {length} must be within 1..={width}")]
    PaddleLength { length: i32, width: i32 },
    #[error("{what} start {pos} lies outside the {width}x{height} board")]
    OutOfBoard {
        what: &'static str,
        pos: IVec2,
        width: i32,
        height: i32,
    },
    #[error("ball velocity {0} must have non-zero components")]
    StillBall(IVec2),
    #[error("ball radius {radius} must be within 1..{width}")]
    BallRadius { radius: i32, width: i32 },
    #[error("brick grid must have at least one row and column, got {rows}x{cols}")]
    EmptyBrickGrid { rows: i32, cols: i32 },
    #[error("brick width must be positive, got {0}")]
    BrickWidth(i32),
    #[error("brick spacing must not be negative")]
    BrickSpacing,
    #[error("brick at column {col}, row {row} does not fit on the board")]
    BrickOutOfBoard { col: i32, row: i32 },
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Board extents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }
}

impl BoardSettings {
    /// Whether a cell lies on the board
    pub fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }
}

/// Paddle layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    /// Number of segments
    pub length: i32,
    /// Leftmost segment at start
    pub start: IVec2,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            length: PADDLE_LENGTH,
            start: IVec2::new(PADDLE_START_X, PADDLE_START_Y),
        }
    }
}

/// Ball start state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub start: IVec2,
    pub velocity: IVec2,
    pub radius: i32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            start: IVec2::new(BALL_START_X, BALL_START_Y),
            velocity: IVec2::new(BALL_START_DX, BALL_START_DY),
            radius: BALL_RADIUS,
        }
    }
}

/// Brick grid layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickSettings {
    pub rows: i32,
    pub cols: i32,
    pub width: i32,
    pub height: i32,
    pub padding: i32,
    pub offset_left: i32,
    pub offset_top: i32,
}

impl Default for BrickSettings {
    fn default() -> Self {
        Self {
            rows: BRICK_ROWS,
            cols: BRICK_COLS,
            width: BRICK_WIDTH,
            height: BRICK_HEIGHT,
            padding: BRICK_PADDING,
            offset_left: BRICK_OFFSET_LEFT,
            offset_top: BRICK_OFFSET_TOP,
        }
    }
}

impl BrickSettings {
    /// Anchor (leftmost cell) of the brick at `col`, `row`
    pub fn anchor(&self, col: i32, row: i32) -> IVec2 {
        IVec2::new(
            col * (self.width + self.padding) + self.offset_left,
            row * (self.height + self.padding) + self.offset_top,
        )
    }
}

/// Complete game settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardSettings,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub bricks: BrickSettings,
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check every construction invariant the simulation relies on
    pub fn validate(&self) -> Result<(), SettingsError> {
        let BoardSettings { width, height } = self.board;
        if width < 1 || height < 1 {
            return Err(SettingsError::EmptyBoard { width, height });
        }

        let paddle = &self.paddle;
        if paddle.length < 1 || paddle.length > width {
            return Err(SettingsError::PaddleLength {
                length: paddle.length,
                width,
            });
        }
        if !self.board.contains(paddle.start) {
            return Err(SettingsError::OutOfBoard {
                what: "paddle",
                pos: paddle.start,
                width,
                height,
            });
        }

        let ball = &self.ball;
        if !self.board.contains(ball.start) {
            return Err(SettingsError::OutOfBoard {
                what: "ball",
                pos: ball.start,
                width,
                height,
            });
        }
        if ball.velocity.x == 0 || ball.velocity.y == 0 {
            return Err(SettingsError::StillBall(ball.velocity));
        }
        if ball.radius < 1 || ball.radius >= width {
            return Err(SettingsError::BallRadius {
                radius: ball.radius,
                width,
            });
        }

        let bricks = &self.bricks;
        if bricks.rows < 1 || bricks.cols < 1 {
            return Err(SettingsError::EmptyBrickGrid {
                rows: bricks.rows,
                cols: bricks.cols,
            });
        }
        if bricks.width < 1 {
            return Err(SettingsError::BrickWidth(bricks.width));
        }
        if bricks.height < 0 || bricks.padding < 0 {
            return Err(SettingsError::BrickSpacing);
        }
        // Anchors grow monotonically, so the far corner bounds the grid
        let (col, row) = (bricks.cols - 1, bricks.rows - 1);
        let first = bricks.anchor(0, 0);
        let last = bricks.anchor(col, row) + IVec2::new(bricks.width - 1, 0);
        if !self.board.contains(first) {
            return Err(SettingsError::BrickOutOfBoard { col: 0, row: 0 });
        }
        if !self.board.contains(last) {
            return Err(SettingsError::BrickOutOfBoard { col, row });
        }

        Ok(())
    }
}

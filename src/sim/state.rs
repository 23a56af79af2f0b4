//! Game state and core simulation types
//!
//! A `Session` holds every entity of one game and is rebuilt wholesale on
//! (re)initialization. `Game` pairs the validated settings with the current
//! session.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use thiserror::Error;

use crate::settings::{BoardSettings, BrickSettings, Settings, SettingsError};
use crate::wrap;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (lost or won); the ball blinks until the next input
    GameOver,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    WallHit,
    PaddleHit,
    BrickHit,
    /// Ball went past the paddle
    GameOver,
    /// Every brick cleared
    GameWon,
}

impl GameEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameEvent::WallHit => "wall_hit",
            GameEvent::PaddleHit => "paddle_hit",
            GameEvent::BrickHit => "brick_hit",
            GameEvent::GameOver => "game_over",
            GameEvent::GameWon => "game_won",
        }
    }
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paddle steering input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    None,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::None => "NONE",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }

    /// Horizontal step applied per tick
    pub fn dx(&self) -> i32 {
        match self {
            Direction::None => 0,
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }
}

/// Direction token outside NONE/LEFT/RIGHT
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction `{0}`")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NONE" => Ok(Direction::None),
            "LEFT" => Ok(Direction::Left),
            "RIGHT" => Ok(Direction::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }
}

/// One paddle cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddleSegment {
    pub pos: IVec2,
}

/// The player's paddle: segments moving as one rigid body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paddle {
    /// Segment 0 is the leftmost cell and the collision reference
    pub segments: Vec<PaddleSegment>,
    /// Shared by every segment
    pub direction: Direction,
}

impl Paddle {
    pub fn new(start: IVec2, length: i32, board: &BoardSettings) -> Self {
        let segments = (0..length)
            .map(|i| PaddleSegment {
                pos: IVec2::new(wrap(start.x + i, board.width), wrap(start.y, board.height)),
            })
            .collect();
        Self {
            segments,
            direction: Direction::None,
        }
    }

    /// Translate every segment by the shared direction, wrapping at the edges
    pub fn step(&mut self, board: &BoardSettings) {
        let dx = self.direction.dx();
        for segment in &mut self.segments {
            segment.pos.x = wrap(segment.pos.x + dx, board.width);
            segment.pos.y = wrap(segment.pos.y, board.height);
        }
    }

    /// Leftmost cell (segment 0)
    pub fn origin(&self) -> IVec2 {
        self.segments.first().map(|s| s.pos).unwrap_or_default()
    }

    pub fn len(&self) -> i32 {
        self.segments.len() as i32
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Offset of `x` from segment 0, measured rightward around the board
    pub fn offset_of(&self, x: i32, board: &BoardSettings) -> i32 {
        wrap(x - self.origin().x, board.width)
    }

    /// Whether column `x` is covered by the paddle (half-open span)
    pub fn covers(&self, x: i32, board: &BoardSettings) -> bool {
        self.offset_of(x, board) < self.len()
    }
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    /// Only set by the game-over blink
    pub hidden: bool,
}

impl Ball {
    pub fn new(pos: IVec2, vel: IVec2) -> Self {
        Self {
            pos,
            vel,
            hidden: false,
        }
    }

    /// Where the ball lands after this tick's movement
    #[inline]
    pub fn projected(&self) -> IVec2 {
        self.pos + self.vel
    }
}

/// A destructible brick: a horizontal run of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Brick {
    pub cells: Vec<IVec2>,
    /// One-way: never cleared until the next session
    pub hit: bool,
}

impl Brick {
    pub fn new(anchor: IVec2, width: i32) -> Self {
        Self {
            cells: (0..width).map(|i| anchor + IVec2::new(i, 0)).collect(),
            hit: false,
        }
    }

    pub fn anchor(&self) -> IVec2 {
        self.cells.first().copied().unwrap_or_default()
    }

    pub fn width(&self) -> i32 {
        self.cells.len() as i32
    }

    /// Whether a cell lies on this brick's row within `[x, x + width)`
    pub fn contains(&self, pos: IVec2) -> bool {
        let anchor = self.anchor();
        pos.y == anchor.y && pos.x >= anchor.x && pos.x < anchor.x + self.width()
    }
}

/// Fixed grid of bricks in construction order (column-major)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrickGrid {
    pub rows: i32,
    pub cols: i32,
    pub bricks: Vec<Brick>,
}

impl BrickGrid {
    pub fn new(layout: &BrickSettings) -> Self {
        let mut bricks = Vec::with_capacity((layout.rows * layout.cols).max(0) as usize);
        for col in 0..layout.cols {
            for row in 0..layout.rows {
                bricks.push(Brick::new(layout.anchor(col, row), layout.width));
            }
        }
        Self {
            rows: layout.rows,
            cols: layout.cols,
            bricks,
        }
    }

    /// Brick at a grid coordinate
    pub fn get(&self, col: i32, row: i32) -> Option<&Brick> {
        if col < 0 || row < 0 || col >= self.cols || row >= self.rows {
            return None;
        }
        self.bricks.get((col * self.rows + row) as usize)
    }

    /// Bricks not yet hit
    pub fn remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.hit).count()
    }

    pub fn all_cleared(&self) -> bool {
        self.bricks.iter().all(|b| b.hit)
    }
}

/// Every entity of one game, built together and replaced together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub phase: GamePhase,
    /// Counts 0..BLINK_PERIOD while game over
    pub blink_timer: u32,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
}

impl Session {
    /// Canonical starting layout for the given settings
    pub fn new(settings: &Settings) -> Self {
        Self {
            phase: GamePhase::Playing,
            blink_timer: 0,
            paddle: Paddle::new(settings.paddle.start, settings.paddle.length, &settings.board),
            ball: Ball::new(settings.ball.start, settings.ball.velocity),
            bricks: BrickGrid::new(&settings.bricks),
        }
    }
}

/// A game instance: fixed settings plus the current session
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    pub session: Session,
}

impl Default for Game {
    fn default() -> Self {
        let settings = Settings::default();
        let session = Session::new(&settings);
        Self { settings, session }
    }
}

impl Game {
    /// Build a game after validating its settings
    pub fn new(settings: Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let session = Session::new(&settings);
        log::info!(
            "Game initialized on {}x{} board with {} bricks",
            settings.board.width,
            settings.board.height,
            session.bricks.bricks.len()
        );
        Ok(Self { settings, session })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Discard the current session and start over from the canonical layout
    pub fn initialize(&mut self) {
        self.session = Session::new(&self.settings);
        log::info!("New session started");
    }

    /// Advance the simulation by one tick
    pub fn update(&mut self) -> Vec<GameEvent> {
        super::tick::tick(&mut self.session, &self.settings)
    }

    /// Apply a steering input
    ///
    /// While playing this sets the paddle direction for the next tick. After
    /// the game is over, any input starts a fresh session instead.
    pub fn input(&mut self, direction: Direction) {
        match self.session.phase {
            GamePhase::Playing => self.session.paddle.direction = direction,
            GamePhase::GameOver => self.initialize(),
        }
    }
}

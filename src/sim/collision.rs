//! Collision detection for the grid ball
//!
//! Detection only: each check looks at the ball's current cell and the cell it
//! would reach this tick, and reports what it touched. The tick applies the
//! response (reflection, brick clearing, phase change).

use glam::IVec2;

use super::state::{Ball, BrickGrid, Paddle};
use crate::settings::BoardSettings;

/// Which walls the ball would cross this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub side: bool,
    pub top: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// Result of the bottom-row check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleContact {
    /// Ball is not in the bottom band yet
    Clear,
    /// Ball met the paddle; `english` when it struck the right half
    Hit { english: bool },
    /// Ball reached the bottom band away from the paddle
    Miss,
}

/// Check the ball's projected position against the side and top walls
///
/// The right wall sits at `width - radius`; there is no bottom wall.
pub fn ball_wall_collision(ball: &Ball, board: &BoardSettings, radius: i32) -> WallContact {
    let next = ball.projected();
    WallContact {
        side: !within_side_walls(next.x, board, radius),
        top: next.y < 0,
    }
}

/// Whether column `x` lies in the ball's playable span `[0, width - radius]`
#[inline]
pub fn within_side_walls(x: i32, board: &BoardSettings, radius: i32) -> bool {
    x >= 0 && x <= board.width - radius
}

/// Indices of every unhit brick touched by the ball's current or next cell
///
/// Scans the whole grid; bricks never overlap so each cell maps to at most
/// one brick.
pub fn ball_brick_collision(ball: &Ball, grid: &BrickGrid) -> Vec<usize> {
    let current = ball.pos;
    let next = ball.projected();
    grid.bricks
        .iter()
        .enumerate()
        .filter(|(_, brick)| !brick.hit && (brick.contains(current) || brick.contains(next)))
        .map(|(i, _)| i)
        .collect()
}

/// Check the ball against the paddle once it is in the bottom band
///
/// Both the current and the projected column count, so a ball moving fast
/// sideways still catches the paddle's edge.
pub fn ball_paddle_collision(ball: &Ball, paddle: &Paddle, board: &BoardSettings) -> PaddleContact {
    if !in_bottom_band(ball.pos, board) {
        return PaddleContact::Clear;
    }

    let struck = [ball.pos.x, ball.projected().x]
        .into_iter()
        .find(|&x| paddle.covers(x, board));

    match struck {
        Some(x) => PaddleContact::Hit {
            english: paddle.offset_of(x, board) >= paddle.len() / 2,
        },
        None => PaddleContact::Miss,
    }
}

/// Bottom band: the last row, where the paddle lives
#[inline]
pub fn in_bottom_band(pos: IVec2, board: &BoardSettings) -> bool {
    pos.y > board.height - 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::BrickSettings;

    fn board() -> BoardSettings {
        BoardSettings::default()
    }

    #[test]
    fn test_wall_left_edge() {
        let ball = Ball::new(IVec2::new(0, 10), IVec2::new(-1, 2));
        let contact = ball_wall_collision(&ball, &board(), 1);
        assert!(contact.side);
        assert!(!contact.top);
    }

    #[test]
    fn test_wall_right_edge_uses_radius() {
        let ball = Ball::new(IVec2::new(24, 10), IVec2::new(1, 2));
        assert!(ball_wall_collision(&ball, &board(), 1).side);

        let ball = Ball::new(IVec2::new(23, 10), IVec2::new(1, 2));
        assert!(!ball_wall_collision(&ball, &board(), 1).side);
        assert!(ball_wall_collision(&ball, &board(), 2).side);
    }

    #[test]
    fn test_wall_top_and_corner() {
        let ball = Ball::new(IVec2::new(0, 1), IVec2::new(-1, -2));
        let contact = ball_wall_collision(&ball, &board(), 1);
        assert!(contact.side && contact.top);
    }

    #[test]
    fn test_within_side_walls() {
        assert!(within_side_walls(0, &board(), 1));
        assert!(within_side_walls(24, &board(), 1));
        assert!(!within_side_walls(25, &board(), 1));
        assert!(!within_side_walls(-1, &board(), 1));
        assert!(!within_side_walls(24, &board(), 2));
    }

    #[test]
    fn test_wall_open_interior() {
        let ball = Ball::new(IVec2::new(12, 12), IVec2::new(1, -2));
        assert!(!ball_wall_collision(&ball, &board(), 1).any());
    }

    #[test]
    fn test_brick_hit_on_projected_row() {
        let grid = BrickGrid::new(&BrickSettings::default());
        // Bottom row of bricks is y = 6; column 1 spans x = 7..12
        let ball = Ball::new(IVec2::new(8, 8), IVec2::new(1, -2));
        assert_eq!(ball_brick_collision(&ball, &grid), vec![5]);
    }

    #[test]
    fn test_brick_gap_between_bricks() {
        let grid = BrickGrid::new(&BrickSettings::default());
        // x = 6 is the padding column between brick columns 0 and 1
        let ball = Ball::new(IVec2::new(6, 8), IVec2::new(0, -2));
        assert!(ball_brick_collision(&ball, &grid).is_empty());
    }

    #[test]
    fn test_hit_brick_is_ignored() {
        let mut grid = BrickGrid::new(&BrickSettings::default());
        grid.bricks[5].hit = true;
        let ball = Ball::new(IVec2::new(8, 8), IVec2::new(1, -2));
        assert!(ball_brick_collision(&ball, &grid).is_empty());
    }

    #[test]
    fn test_paddle_clear_above_band() {
        let paddle = Paddle::new(IVec2::new(8, 24), 10, &board());
        let ball = Ball::new(IVec2::new(12, 23), IVec2::new(1, 2));
        assert_eq!(ball_paddle_collision(&ball, &paddle, &board()), PaddleContact::Clear);
    }

    #[test]
    fn test_paddle_hit_left_half() {
        let paddle = Paddle::new(IVec2::new(8, 24), 10, &board());
        let ball = Ball::new(IVec2::new(10, 24), IVec2::new(1, 2));
        assert_eq!(
            ball_paddle_collision(&ball, &paddle, &board()),
            PaddleContact::Hit { english: false }
        );
    }

    #[test]
    fn test_paddle_hit_midpoint_applies_english() {
        let paddle = Paddle::new(IVec2::new(8, 24), 10, &board());
        let ball = Ball::new(IVec2::new(13, 24), IVec2::new(1, 2));
        assert_eq!(
            ball_paddle_collision(&ball, &paddle, &board()),
            PaddleContact::Hit { english: true }
        );
    }

    #[test]
    fn test_paddle_hit_by_projected_column() {
        let paddle = Paddle::new(IVec2::new(8, 24), 10, &board());
        // Current column 6 misses, projected column 8 is the paddle's left end
        let ball = Ball::new(IVec2::new(6, 24), IVec2::new(2, 2));
        assert_eq!(
            ball_paddle_collision(&ball, &paddle, &board()),
            PaddleContact::Hit { english: false }
        );
    }

    #[test]
    fn test_paddle_miss() {
        let paddle = Paddle::new(IVec2::new(8, 24), 10, &board());
        let ball = Ball::new(IVec2::new(2, 24), IVec2::new(1, 2));
        assert_eq!(ball_paddle_collision(&ball, &paddle, &board()), PaddleContact::Miss);
    }
}

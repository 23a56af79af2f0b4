//! Pixel snapshot for the host renderer
//!
//! Order is fixed: paddle segments, then the ball (unless blinking off), then
//! the cells of every unhit brick in construction order.

use std::fmt;

use glam::IVec2;

use super::state::{Game, Session};

/// Routing prefix the host matches on
pub const PIXELS_TAG: &str = "pixels";

/// Visible cells at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub pixels: Vec<IVec2>,
}

impl Snapshot {
    /// Read the visible cells of a session (no mutation)
    pub fn capture(session: &Session) -> Self {
        let paddle = session.paddle.segments.iter().map(|s| s.pos);
        let ball = (!session.ball.hidden).then_some(session.ball.pos);
        let bricks = session
            .bricks
            .bricks
            .iter()
            .filter(|b| !b.hit)
            .flat_map(|b| b.cells.iter().copied());

        Self {
            pixels: paddle.chain(ball).chain(bricks).collect(),
        }
    }

    /// Coordinates flattened as `x0, y0, x1, y1, ...`
    pub fn to_flat(&self) -> Vec<i32> {
        self.pixels.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// `pixels x0 y0 x1 y1 ...`
impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(PIXELS_TAG)?;
        for value in self.to_flat() {
            write!(f, " {value}")?;
        }
        Ok(())
    }
}

impl Game {
    /// Visible cells of the current session
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Direction;

    #[test]
    fn test_start_layout_order() {
        let snapshot = Game::default().snapshot();
        // 10 paddle cells + ball + 12 bricks of 5 cells
        assert_eq!(snapshot.len(), 10 + 1 + 60);
        assert_eq!(snapshot.pixels[0], IVec2::new(8, 24));
        assert_eq!(snapshot.pixels[9], IVec2::new(17, 24));
        assert_eq!(snapshot.pixels[10], IVec2::new(12, 12));
        // First brick: column 0, row 0
        assert_eq!(&snapshot.pixels[11..16], &[
            IVec2::new(1, 2),
            IVec2::new(2, 2),
            IVec2::new(3, 2),
            IVec2::new(4, 2),
            IVec2::new(5, 2),
        ]);
        // Second brick: column 0, row 1
        assert_eq!(snapshot.pixels[16], IVec2::new(1, 4));
    }

    #[test]
    fn test_hidden_ball_and_hit_bricks_skipped() {
        let mut game = Game::default();
        game.session.ball.hidden = true;
        game.session.bricks.bricks[0].hit = true;
        let snapshot = game.snapshot();
        assert_eq!(snapshot.len(), 10 + 55);
        assert_eq!(snapshot.pixels[10], IVec2::new(1, 4));
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let mut game = Game::default();
        game.input(Direction::Left);
        game.update();
        let before = game.session.clone();
        let first = game.snapshot();
        let second = game.snapshot();
        assert_eq!(first, second);
        assert_eq!(game.session, before);
    }

    #[test]
    fn test_display_and_flat() {
        let snapshot = Snapshot {
            pixels: vec![IVec2::new(3, 4), IVec2::new(5, 6)],
        };
        assert_eq!(snapshot.to_flat(), vec![3, 4, 5, 6]);
        assert_eq!(snapshot.to_string(), "pixels 3 4 5 6");
        assert_eq!(Snapshot::default().to_string(), "pixels");
    }
}

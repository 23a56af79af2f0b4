//! Fixed-step simulation tick
//!
//! Core game loop that advances one session by exactly one step.

use glam::IVec2;

use super::collision::{
    PaddleContact, ball_brick_collision, ball_paddle_collision, ball_wall_collision,
    within_side_walls,
};
use super::state::{GameEvent, GamePhase, Session};
use crate::consts::{BLINK_HIDE_AT, BLINK_PERIOD};
use crate::settings::Settings;

/// Advance the session by one tick, returning what happened
pub fn tick(session: &mut Session, settings: &Settings) -> Vec<GameEvent> {
    let mut events = Vec::new();
    match session.phase {
        GamePhase::Playing => update_playing(session, settings, &mut events),
        GamePhase::GameOver => update_game_over(session),
    }
    events
}

fn update_playing(session: &mut Session, settings: &Settings, events: &mut Vec<GameEvent>) {
    let board = &settings.board;

    session.paddle.step(board);

    // Walls first so every later check sees this tick's real path
    let walls = ball_wall_collision(&session.ball, board, settings.ball.radius);
    if walls.side {
        session.ball.vel.x = -session.ball.vel.x;
    }
    if walls.top {
        session.ball.vel.y = -session.ball.vel.y;
    }
    if walls.any() {
        log::debug!("Wall hit at {}", session.ball.pos);
        events.push(GameEvent::WallHit);
    }

    // Bricks: one reflection per tick however many bricks were touched
    let struck = ball_brick_collision(&session.ball, &session.bricks);
    if !struck.is_empty() {
        session.ball.vel.y = -session.ball.vel.y;
        for index in struck {
            if let Some(brick) = session.bricks.bricks.get_mut(index) {
                brick.hit = true;
                log::debug!("Brick at {} hit", brick.anchor());
                events.push(GameEvent::BrickHit);
            }
        }
    }

    let lost = match ball_paddle_collision(&session.ball, &session.paddle, board) {
        PaddleContact::Clear => false,
        PaddleContact::Hit { english } => {
            session.ball.vel.y = -session.ball.vel.y;
            // English never undoes a wall reflection or carries the ball off the board
            let steered = session.ball.pos.x - session.ball.vel.x;
            if english && within_side_walls(steered, board, settings.ball.radius) {
                session.ball.vel.x = -session.ball.vel.x;
            }
            events.push(GameEvent::PaddleHit);
            false
        }
        PaddleContact::Miss => true,
    };

    // A full clear outranks a miss on the same tick
    let won = session.bricks.all_cleared();
    if won || lost {
        session.phase = GamePhase::GameOver;
        session.blink_timer = 0;
        session.ball.vel = IVec2::ZERO;
        if won {
            log::info!("All bricks cleared - game won");
            events.push(GameEvent::GameWon);
        } else {
            log::info!("Ball missed the paddle at {} - game over", session.ball.pos);
            events.push(GameEvent::GameOver);
        }
        return;
    }

    session.ball.pos += session.ball.vel;
}

/// Blink the ball: visible for half of each cycle
fn update_game_over(session: &mut Session) {
    session.blink_timer = (session.blink_timer + 1) % BLINK_PERIOD;
    session.ball.hidden = session.blink_timer >= BLINK_HIDE_AT;
}

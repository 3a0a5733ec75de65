//! Per-frame simulation step
//!
//! `tick` advances the whole game by one frame: input, paddle motion, ball
//! motion, collision resolution, scoring, and phase transitions. Order
//! matters - it defines tie-breaks and feel, so keep it as written.

use glam::Vec2;
use std::mem;

use crate::consts::*;
use crate::sim::geom::rects_intersect;
use crate::sim::state::{BrickGrid, GamePhase, GameState};

/// Key snapshot for a single frame.
///
/// `left`/`right` are held states; `launch`, `quit` and `debug_toggle` are
/// edge-triggered and cleared by `tick` itself once acted on, giving
/// press-once semantics without help from the host.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Launch ball / start game / dismiss game over
    pub launch: bool,
    /// Abandon the session and return to the menu
    pub quit: bool,
    /// Toggle the no-death debug mode
    pub debug_toggle: bool,
}

/// Advance the game state by one frame of `dt` seconds.
///
/// `dt` is capped at `MAX_DT` so a resume after host suspension can't step
/// the ball through paddle or walls.
pub fn tick(state: &mut GameState, input: &mut TickInput, dt: f32) {
    let dt = dt.min(MAX_DT);

    // Debug toggle is resolved regardless of phase
    if mem::take(&mut input.debug_toggle) {
        state.debug_no_death = !state.debug_no_death;
        log::info!("debug no-death mode: {}", state.debug_no_death);
    }

    match state.phase {
        GamePhase::MainMenu => tick_main_menu(state, input, dt),
        GamePhase::Serve | GamePhase::Playing => tick_court(state, input, dt),
        GamePhase::GameOver => tick_game_over(state, input, dt),
    }
}

/// Title screen: blink the START prompt and wait for the launch key
fn tick_main_menu(state: &mut GameState, input: &mut TickInput, dt: f32) {
    state.blink_timer -= dt;
    if state.blink_timer < -BLINK_RATE {
        state.blink_timer = BLINK_RATE;
    }

    if mem::take(&mut input.launch) {
        state.reset_session();
        // The first serve consumes a life
        state.lives -= 1;
        state.phase = GamePhase::Serve;
        log::info!("session started, {} lives remaining", state.lives);
    }
}

/// Serve and Playing share a frame: collisions, paddle, ball, evaluation
fn tick_court(state: &mut GameState, input: &mut TickInput, dt: f32) {
    let launch = mem::take(&mut input.launch);
    if state.phase == GamePhase::Serve && launch {
        // Straight up off the paddle at the lowest tier speed
        state.ball.dir = Vec2::Y;
        state.phase = GamePhase::Playing;
        log::info!("ball launched at level {}", state.level);
    }

    if state.phase == GamePhase::Playing {
        resolve_brick_collision(state);
        resolve_paddle_collision(state, input);
    }

    let direction = match (input.left, input.right) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    };
    state.paddle.apply_input(direction, dt);

    match state.phase {
        // Glued: the ball's x tracks the paddle every frame
        GamePhase::Serve => {
            state.ball.prev_pos = state.ball.pos;
            state.ball.pos.x = state.paddle.pos.x;
        }
        GamePhase::Playing => move_ball(state, dt),
        _ => {}
    }

    if state.bricks.remaining() == 0 {
        state.level = (state.level + 1).min(MAX_LEVEL);
        state.start_level();
        state.phase = GamePhase::Serve;
        log::info!("level complete, advancing to level {}", state.level);
    }

    if state.lives < 0 {
        state.phase = GamePhase::GameOver;
        state.game_over_timer = GAME_OVER_DURATION;
        log::info!("game over with score {}", state.score);
    }

    if mem::take(&mut input.quit) {
        state.reset_session();
        state.phase = GamePhase::MainMenu;
        log::info!("session abandoned");
    }
}

/// Game over screen: countdown or any launch press returns to the menu
fn tick_game_over(state: &mut GameState, input: &mut TickInput, dt: f32) {
    state.game_over_timer -= dt;
    if state.game_over_timer <= 0.0 || mem::take(&mut input.launch) {
        state.reset_session();
        state.phase = GamePhase::MainMenu;
    }
}

/// Scan the wall row-major and knock out the first brick the ball touches.
///
/// At most one brick dies per frame even when the ball overlaps several;
/// the fixed scan order is the deterministic tie-break.
fn resolve_brick_collision(state: &mut GameState) {
    let ball_rect = state.ball.bounds();

    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            if !state.bricks.is_alive(row, col) {
                continue;
            }
            if !rects_intersect(BrickGrid::brick_rect(row, col), ball_rect) {
                continue;
            }

            state.bricks.destroy(row, col);
            state.hits += 1;
            state.score = (state.score + ROW_POINTS[row]).min(MAX_SCORE);
            state.ball.dir.y = -state.ball.dir.y;

            // Speed escalation milestones: 4th hit, 12th hit, and first
            // contact with the upper two rows
            let bump = state.hits == 4
                || state.hits == 12
                || (state.speed_tier < 3 && row == 4)
                || (state.speed_tier < 4 && row == 5);
            if bump {
                state.speed_tier = (state.speed_tier + 1).min(BALL_SPEEDS.len() - 1);
            }
            return;
        }
    }
}

/// Bounce the ball off the paddle, steering by the held direction keys
fn resolve_paddle_collision(state: &mut GameState, input: &TickInput) {
    if !rects_intersect(state.paddle.bounds(), state.ball.bounds()) {
        return;
    }

    // Snap to rest on the paddle's top edge
    state.ball.pos.y = state.paddle.pos.y + (PADDLE_HEIGHT + BALL_SIZE) / 2.0;

    let angle = if input.left {
        DEFLECT_LEFT
    } else if input.right {
        DEFLECT_RIGHT
    } else if state.ball.dir.x < 0.0 {
        std::f32::consts::PI - DEFLECT_CENTER
    } else {
        DEFLECT_CENTER
    };
    state.ball.dir = Vec2::new(angle.cos(), angle.sin());
}

/// Integrate ball motion and reflect off the court walls.
///
/// The bottom edge costs a life and re-racks the serve pose instead of
/// bouncing, unless the no-death debug mode is active.
fn move_ball(state: &mut GameState, dt: f32) {
    let speed = state.ball_speed();
    state.ball.apply_motion(dt, speed);

    let ball = &mut state.ball;
    if ball.pos.x > MAX_BALL_X {
        ball.pos.x = MAX_BALL_X;
        ball.dir.x = -ball.dir.x;
    } else if ball.pos.x < -MAX_BALL_X {
        ball.pos.x = -MAX_BALL_X;
        ball.dir.x = -ball.dir.x;
    }

    if ball.pos.y > MAX_BALL_Y {
        ball.pos.y = MAX_BALL_Y;
        ball.dir.y = -ball.dir.y;
    }

    if ball.pos.y < -MAX_BALL_Y {
        if state.debug_no_death {
            ball.pos.y = -MAX_BALL_Y;
            ball.dir.y = -ball.dir.y;
        } else {
            state.lives -= 1;
            state.reset_serve_pose();
            state.phase = GamePhase::Serve;
            log::info!("ball lost, {} lives remaining", state.lives.max(0));
        }
    }
}

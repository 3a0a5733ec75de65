//! Game state and core simulation types
//!
//! The entire entity model lives in a single `GameState` aggregate owned by
//! the per-frame step; nothing here is global or shared across threads.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::geom::Rect;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen with blinking START prompt
    MainMenu,
    /// Ball glued above the paddle, waiting for launch input
    Serve,
    /// Ball free, physics active
    Playing,
    /// Run ended; countdown back to the menu
    GameOver,
}

/// The player's paddle
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Paddle {
    /// Center position; y stays fixed at PADDLE_Y
    pub pos: Vec2,
    /// Position at the start of the previous move
    pub prev_pos: Vec2,
    /// Velocity sign on x: -1, 0, or +1
    pub dir: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        let pos = Vec2::new(0.0, PADDLE_Y);
        Self {
            pos,
            prev_pos: pos,
            dir: 0.0,
        }
    }
}

impl Paddle {
    /// Bounding rect derived from the center position
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT))
    }

    /// Move along x by `direction * PADDLE_SPEED * dt`, clamped to the court
    pub fn apply_input(&mut self, direction: f32, dt: f32) {
        self.prev_pos = self.pos;
        self.dir = direction;
        self.pos.x = (self.pos.x + direction * PADDLE_SPEED * dt).clamp(-MAX_PADDLE_X, MAX_PADDLE_X);
    }
}

/// The ball - a square the size of the paddle's height
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Position at the start of the previous move
    pub prev_pos: Vec2,
    /// Unit-ish direction vector; a speed scalar comes from the tier table
    pub dir: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        let pos = Vec2::new(0.0, SERVE_BALL_Y);
        Self {
            pos,
            prev_pos: pos,
            dir: Vec2::ZERO,
        }
    }
}

impl Ball {
    /// Bounding rect derived from the center position
    pub fn bounds(&self) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(BALL_SIZE))
    }

    /// Advance position by direction * speed * dt
    pub fn apply_motion(&mut self, dt: f32, speed: f32) {
        self.prev_pos = self.pos;
        self.pos += self.dir * speed * dt;
    }
}

/// World-space center of the brick at (row, col).
///
/// Positions are always derived from the grid indices so the layout can't
/// drift from the court constants. Row 0 is the bottom row.
pub fn brick_center(row: usize, col: usize) -> Vec2 {
    Vec2::new(
        -COURT_HALF_WIDTH + BRICK_WIDTH * (col as f32 + 0.5),
        BRICK_FIRST_ROW_Y + BRICK_HEIGHT * row as f32,
    )
}

/// The destructible brick wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    alive: [[bool; BRICK_COLS]; BRICK_ROWS],
    remaining: u32,
}

impl Default for BrickGrid {
    fn default() -> Self {
        Self {
            alive: [[true; BRICK_COLS]; BRICK_ROWS],
            remaining: (BRICK_ROWS * BRICK_COLS) as u32,
        }
    }
}

impl BrickGrid {
    /// Restore every brick (level start only; death does not rebuild the wall)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.alive[row][col]
    }

    /// Count of bricks still standing
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Knock out a brick on first contact; no-op if already gone
    pub fn destroy(&mut self, row: usize, col: usize) {
        if self.alive[row][col] {
            self.alive[row][col] = false;
            self.remaining -= 1;
        }
    }

    /// Bounding rect of the cell at (row, col)
    pub fn brick_rect(row: usize, col: usize) -> Rect {
        Rect::from_center(brick_center(row, col), Vec2::new(BRICK_WIDTH, BRICK_HEIGHT))
    }

    /// Iterate (row, col) pairs of alive bricks in scan order
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..BRICK_ROWS)
            .flat_map(|row| (0..BRICK_COLS).map(move |col| (row, col)))
            .filter(|&(row, col)| self.alive[row][col])
    }
}

/// Complete game state, mutated once per frame by `tick`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase
    pub phase: GamePhase,
    /// Current level, 1..=99
    pub level: u32,
    /// Session score, clamped to 9999
    pub score: u32,
    /// Lives remaining; may reach -1 for one frame before game over resolves
    pub lives: i32,
    /// Brick hits this level; drives speed escalation milestones
    pub hits: u32,
    /// Index into BALL_SPEEDS
    pub speed_tier: usize,
    /// Countdown used only in the GameOver phase
    pub game_over_timer: f32,
    /// Menu text blink phase; prompt shows while positive
    pub blink_timer: f32,
    /// Debug mode: the bottom edge bounces instead of costing a life
    pub debug_no_death: bool,
    pub paddle: Paddle,
    pub ball: Ball,
    pub bricks: BrickGrid,
}

impl GameState {
    /// Fresh state at the main menu
    pub fn new() -> Self {
        Self {
            phase: GamePhase::MainMenu,
            level: 1,
            score: 0,
            lives: STARTING_LIVES,
            hits: 0,
            speed_tier: 0,
            game_over_timer: 0.0,
            blink_timer: BLINK_RATE,
            debug_no_death: false,
            paddle: Paddle::default(),
            ball: Ball::default(),
            bricks: BrickGrid::default(),
        }
    }

    /// Current ball speed from the tier table
    pub fn ball_speed(&self) -> f32 {
        BALL_SPEEDS[self.speed_tier.min(BALL_SPEEDS.len() - 1)]
    }

    /// Park paddle and ball in the serve pose (ball resting on the paddle)
    pub fn reset_serve_pose(&mut self) {
        self.paddle = Paddle::default();
        self.ball = Ball::default();
    }

    /// Rebuild the wall and reset the per-level escalation counters
    pub fn start_level(&mut self) {
        self.bricks.reset();
        self.hits = 0;
        self.speed_tier = 0;
        self.reset_serve_pose();
    }

    /// Full session reset, as when returning to the main menu
    pub fn reset_session(&mut self) {
        self.level = 1;
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.game_over_timer = 0.0;
        self.blink_timer = BLINK_RATE;
        self.debug_no_death = false;
        self.start_level();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_brick_layout_spans_court() {
        // Leftmost brick's left edge sits on the court boundary
        let first = BrickGrid::brick_rect(0, 0);
        assert!((first.x + COURT_HALF_WIDTH).abs() < 1e-4);

        // Rightmost brick's right edge sits on the opposite boundary
        let last = BrickGrid::brick_rect(0, BRICK_COLS - 1);
        assert!((last.x + last.w - COURT_HALF_WIDTH).abs() < 1e-4);

        // Top row stays inside the court
        let top = BrickGrid::brick_rect(BRICK_ROWS - 1, 0);
        assert!(top.y < COURT_HALF_HEIGHT);
    }

    #[test]
    fn test_brick_center_derivation() {
        let c = brick_center(0, 0);
        assert!((c.x - (-COURT_HALF_WIDTH + BRICK_WIDTH / 2.0)).abs() < 1e-4);
        assert!((c.y - BRICK_FIRST_ROW_Y).abs() < 1e-4);

        // One row up is exactly one brick height higher
        let up = brick_center(1, 0);
        assert!((up.y - c.y - BRICK_HEIGHT).abs() < 1e-4);
    }

    #[test]
    fn test_grid_reset_and_destroy() {
        let mut grid = BrickGrid::default();
        assert_eq!(grid.remaining(), 96);

        grid.destroy(2, 7);
        assert_eq!(grid.remaining(), 95);
        assert!(!grid.is_alive(2, 7));

        // Destroying twice doesn't double-count
        grid.destroy(2, 7);
        assert_eq!(grid.remaining(), 95);

        grid.reset();
        assert_eq!(grid.remaining(), 96);
        assert!(grid.is_alive(2, 7));
    }

    #[test]
    fn test_serve_pose_floats_ball_above_paddle() {
        let state = GameState::new();
        let paddle_top = state.paddle.pos.y + PADDLE_HEIGHT / 2.0;
        let ball_bottom = state.ball.pos.y - BALL_SIZE / 2.0;
        // Clear of the paddle so the launch frame doesn't count as a bounce
        assert!(ball_bottom > paddle_top);
        assert!(ball_bottom - paddle_top < BALL_SIZE);
    }

    #[test]
    fn test_ball_bounds_from_center() {
        let ball = Ball::default();
        let r = ball.bounds();
        assert!((r.w - BALL_SIZE).abs() < 1e-4);
        assert!((r.h - BALL_SIZE).abs() < 1e-4);
        assert_eq!(r.center(), ball.pos);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_in_court(
            start_x in -MAX_PADDLE_X..MAX_PADDLE_X,
            direction in prop::sample::select(vec![-1.0f32, 0.0, 1.0]),
            dt in 0.0f32..10.0,
        ) {
            let mut paddle = Paddle::default();
            paddle.pos.x = start_x;
            paddle.apply_input(direction, dt);
            prop_assert!(paddle.pos.x >= -MAX_PADDLE_X);
            prop_assert!(paddle.pos.x <= MAX_PADDLE_X);
            prop_assert!((paddle.pos.y - PADDLE_Y).abs() < 1e-6);
        }
    }
}

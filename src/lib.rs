//! Breakwall - a classic Breakout arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `scene`: Drawable frame description consumed by a renderer

pub mod scene;
pub mod sim;

/// Game configuration constants
pub mod consts {
    use std::f32::consts::PI;

    /// Court dimensions in world units (NES-flavored 256x240, origin at center)
    pub const COURT_WIDTH: f32 = 256.0;
    pub const COURT_HEIGHT: f32 = 240.0;
    pub const COURT_HALF_WIDTH: f32 = COURT_WIDTH / 2.0;
    pub const COURT_HALF_HEIGHT: f32 = COURT_HEIGHT / 2.0;

    /// Paddle defaults - a flat bat near the bottom edge
    pub const PADDLE_WIDTH: f32 = 40.0;
    pub const PADDLE_HEIGHT: f32 = 5.0;
    pub const PADDLE_SPEED: f32 = 180.0;
    pub const PADDLE_Y: f32 = -COURT_HALF_HEIGHT + 16.0;
    /// Paddle center x never leaves ±MAX_PADDLE_X
    pub const MAX_PADDLE_X: f32 = COURT_HALF_WIDTH - PADDLE_WIDTH / 2.0;

    /// Ball defaults - side length equals the paddle height
    pub const BALL_SIZE: f32 = 5.0;
    pub const MAX_BALL_X: f32 = COURT_HALF_WIDTH - BALL_SIZE / 2.0;
    pub const MAX_BALL_Y: f32 = COURT_HALF_HEIGHT - BALL_SIZE / 2.0;
    /// Ball floats just above the paddle while serving; the gap keeps the
    /// launch frame from registering as a paddle bounce
    pub const SERVE_BALL_Y: f32 = PADDLE_Y + (PADDLE_HEIGHT + BALL_SIZE) / 2.0 + 2.0;

    /// Brick grid: 6 rows x 16 columns filling the court width
    pub const BRICK_ROWS: usize = 6;
    pub const BRICK_COLS: usize = 16;
    pub const BRICK_WIDTH: f32 = COURT_WIDTH / BRICK_COLS as f32;
    pub const BRICK_HEIGHT: f32 = 8.0;
    /// Centerline of row 0 (the bottom row); rows stack upward from here
    pub const BRICK_FIRST_ROW_Y: f32 = 68.0;

    /// Points per row, bottom (row 0) to top (row 5)
    pub const ROW_POINTS: [u32; 6] = [1, 1, 4, 4, 7, 7];

    /// Ascending ball speed table indexed by the session speed tier
    pub const BALL_SPEEDS: [f32; 5] = [120.0, 150.0, 180.0, 215.0, 250.0];

    /// Outgoing angle off the paddle with left input held (radians)
    pub const DEFLECT_LEFT: f32 = 2.0 * PI / 3.0;
    /// Outgoing angle off the paddle with right input held
    pub const DEFLECT_RIGHT: f32 = PI / 3.0;
    /// Outgoing angle with no directional input (mirrored for leftward balls)
    pub const DEFLECT_CENTER: f32 = PI / 4.0;

    pub const STARTING_LIVES: i32 = 3;
    pub const MAX_LEVEL: u32 = 99;
    pub const MAX_SCORE: u32 = 9999;

    /// Menu text blink half-period in seconds
    pub const BLINK_RATE: f32 = 0.5;
    /// Game-over display duration before returning to the menu
    pub const GAME_OVER_DURATION: f32 = 5.0;

    /// Frame deltas are capped here so a suspended tab can't teleport the ball
    pub const MAX_DT: f32 = 1.0 / 30.0;
}

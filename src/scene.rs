//! Drawable frame description
//!
//! The simulation never issues draw calls; each frame it exposes a `Scene`
//! of positioned, colored rectangles plus HUD numbers, and the renderer
//! decides how to put them on screen.

use glam::Vec2;

use crate::consts::*;
use crate::sim::state::{GamePhase, GameState, brick_center};

/// NES-ish palette, one color per brick row from the bottom up:
/// cerulean, apple, citron, mandalay, piper, chestnut
pub const ROW_COLORS: [[u8; 3]; 6] = [
    [66, 72, 200],
    [72, 160, 72],
    [162, 162, 42],
    [180, 122, 48],
    [198, 108, 58],
    [200, 72, 72],
];

/// Paddle and ball share the chestnut red of the top brick rows
pub const PADDLE_COLOR: [u8; 3] = [200, 72, 72];
pub const BALL_COLOR: [u8; 3] = [200, 72, 72];

/// Mountain-mist silver for HUD text and the court border
pub const HUD_COLOR: [u8; 3] = [142, 142, 142];

/// A single axis-aligned rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectSprite {
    pub center: Vec2,
    pub size: Vec2,
    pub color: [u8; 3],
}

/// Numbers for the HUD text overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u32,
    pub level: u32,
    /// Floored at zero for display; the sim briefly tracks -1 internally
    pub lives: u32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone)]
pub struct Scene {
    pub phase: GamePhase,
    pub paddle: RectSprite,
    pub ball: RectSprite,
    /// Alive bricks only, in grid scan order
    pub bricks: Vec<RectSprite>,
    pub hud: Hud,
    /// Whether the blinking START prompt is on this frame
    pub show_start_text: bool,
}

/// Build the frame description for the current state
pub fn build_scene(state: &GameState) -> Scene {
    let bricks = state
        .bricks
        .iter_alive()
        .map(|(row, col)| RectSprite {
            center: brick_center(row, col),
            size: Vec2::new(BRICK_WIDTH, BRICK_HEIGHT),
            color: ROW_COLORS[row],
        })
        .collect();

    Scene {
        phase: state.phase,
        paddle: RectSprite {
            center: state.paddle.pos,
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            color: PADDLE_COLOR,
        },
        ball: RectSprite {
            center: state.ball.pos,
            size: Vec2::splat(BALL_SIZE),
            color: BALL_COLOR,
        },
        bricks,
        hud: Hud {
            score: state.score,
            level: state.level,
            lives: state.lives.max(0) as u32,
        },
        show_start_text: state.phase == GamePhase::MainMenu && state.blink_timer > 0.0,
    }
}

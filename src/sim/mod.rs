//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One synchronous step per frame, no scheduling primitives
//! - Fixed scan order for brick collisions (row-major, first match wins)
//! - No rendering or platform dependencies

pub mod geom;
pub mod state;
pub mod tick;

pub use geom::{
    CircleRectHit, Rect, circle_rect_distance, point_in_rect, rects_intersect,
    segment_intersects_rect, segments_intersect,
};
pub use state::{Ball, BrickGrid, GamePhase, GameState, Paddle};
pub use tick::{TickInput, tick};

//! Breakwall entry point
//!
//! The simulation core is host-agnostic; this binary wires it to a logger
//! and runs a short scripted session as a headless smoke run. A renderer
//! host drives the same `tick`/`build_scene` pair from its own frame loop.

use breakwall::scene::build_scene;
use breakwall::sim::{GamePhase, GameState, TickInput, tick};

/// Frame delta for the headless run (60 Hz)
const DT: f32 = 1.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Breakwall (headless) starting...");

    let mut state = GameState::new();

    // Start a session from the menu and launch the first ball
    let mut input = TickInput {
        launch: true,
        ..TickInput::default()
    };
    tick(&mut state, &mut input, DT);
    assert_eq!(state.phase, GamePhase::Serve);

    let mut input = TickInput {
        launch: true,
        ..TickInput::default()
    };
    tick(&mut state, &mut input, DT);
    assert_eq!(state.phase, GamePhase::Playing);

    // Ten simulated seconds of play, nudging the paddle under the ball
    for frame in 0..600 {
        let mut input = TickInput::default();
        if state.ball.pos.x < state.paddle.pos.x - 2.0 {
            input.left = true;
        } else if state.ball.pos.x > state.paddle.pos.x + 2.0 {
            input.right = true;
        }
        tick(&mut state, &mut input, DT);

        if frame % 120 == 0 {
            let scene = build_scene(&state);
            log::info!(
                "t={:>4.1}s score={:>4} lives={} bricks={}",
                frame as f32 * DT,
                scene.hud.score,
                scene.hud.lives,
                scene.bricks.len()
            );
        }
    }

    let scene = build_scene(&state);
    assert!(scene.hud.score > 0, "ball should have reached the wall");

    println!(
        "smoke run complete: score {} | level {} | lives {} | {} bricks standing",
        scene.hud.score,
        scene.hud.level,
        scene.hud.lives,
        scene.bricks.len()
    );
}

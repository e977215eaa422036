pub mod components;
pub mod config;
pub mod mapper;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use mapper::PaddleMapper;
pub use params::*;
pub use resources::*;
pub use session::*;

use hand_tracking::{estimate_hands, Frame, HandEstimate, HandEstimator};
use hecs::World;
use systems::*;

/// Render tick: advance paddles and ball by one display frame
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    let mapper = PaddleMapper::from_config(config);

    // 1. Ease paddles toward their tracked targets
    smooth_paddles(world, &mapper, config.smoothing_factor());

    // 2. Move ball
    move_ball(world);

    // 3. Check collisions (ball vs walls, paddles)
    check_collisions(world, config, events);

    // 4. Check scoring (ball exited the table)
    check_scoring(world, config, score, events, rng);
}

/// Tracking tick: locate both hands in `frame` and retarget the paddles
pub fn track(
    world: &mut World,
    frame: &Frame,
    config: &Config,
    estimator: &dyn HandEstimator,
    indicators: &mut HandIndicators,
) -> HandEstimate {
    let estimate = estimate_hands(frame, &config.skin, estimator, config.mirror);
    let mapper = PaddleMapper::from_config(config);
    ingest_hands(world, &estimate, &mapper, config.lost_hand, indicators);
    estimate
}

/// Helper to create a paddle entity, target initialised to its position
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleTarget::new(y)))
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    speed_multiplier: f32,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, speed_multiplier),))
}

pub mod components;
pub mod config;
pub mod geometry;
pub mod r#match;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::*;
pub use params::*;
pub use r#match::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Advance the simulation one fixed tick
pub fn step(
    world: &mut World,
    config: &Config,
    policy: &dyn OpponentPolicy,
    input: Intent,
    events: &mut Events,
) {
    // Events describe exactly one tick
    events.clear();

    // 1. Steer the player's paddle from the caller's input
    apply_player_intent(world, input);

    // 2. Steer the opponent from the ball's pre-move position
    drive_opponent(world, policy);

    // 3. Move both paddles, clamped to the field
    move_paddles(world, config);

    // 4. Move the ball and resolve walls, exits and paddle hits
    update_ball(world, config, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

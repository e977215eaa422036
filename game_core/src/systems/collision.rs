use crate::{Ball, Config, Events, GameEvent, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// Wall and paddle reflections are independent: a ball that meets both
/// conditions in the same tick is reflected on both axes.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Deliberately stricter than a bare flip whenever y is out of range:
        // only an outward-moving ball reflects, then y is clamped onto the wall.
        bounce_off_walls(ball, config, events);

        for &(side, paddle_y) in &paddles {
            if touches_paddle(ball, side, paddle_y, config) {
                bounce_off_paddle(ball, side, config, events);
                break;
            }
        }
    }
}

/// Top/bottom walls: reflect vy when the ball has left [0, canvas_height]
fn bounce_off_walls(ball: &mut Ball, config: &Config, events: &mut Events) {
    let height = config.canvas_height;
    let above = ball.pos.y < 0.0 && ball.vel.y < 0.0;
    let below = ball.pos.y > height && ball.vel.y > 0.0;
    if !(above || below) {
        return;
    }

    ball.vel.y = -ball.vel.y;
    // Clamp position to prevent stuck
    ball.pos.y = ball.pos.y.clamp(0.0, height);
    events.push(GameEvent::WallBounce);
}

/// Ball is inside the paddle's thickness band, within its span, and heading at it
fn touches_paddle(ball: &Ball, side: Side, paddle_y: f32, config: &Config) -> bool {
    let thickness = config.paddle_thickness();
    let in_band = match side {
        Side::Left => ball.pos.x < thickness && ball.vel.x < 0.0,
        Side::Right => ball.pos.x > config.canvas_width - thickness && ball.vel.x > 0.0,
    };
    in_band && ball.pos.y > paddle_y && ball.pos.y < paddle_y + config.paddle_height()
}

/// Reflect vx, bump the multiplier and rescale to the new speed
fn bounce_off_paddle(ball: &mut Ball, side: Side, config: &Config, events: &mut Events) {
    ball.vel.x = -ball.vel.x;

    ball.speed_multiplier =
        (ball.speed_multiplier + config.speed_increment).min(config.speed_ceiling);
    ball.vel = ball.vel.normalize_or_zero() * ball.target_speed(config);

    events.push(GameEvent::PaddleBounce(side));
}

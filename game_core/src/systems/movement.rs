use crate::{mapper, Ball, Paddle, PaddleMapper, PaddleTarget};
use hecs::World;

/// Ease each paddle toward its target, staying on the canvas
pub fn smooth_paddles(world: &mut World, paddle_mapper: &PaddleMapper, factor: f32) {
    for (_entity, (paddle, target)) in world.query_mut::<(&mut Paddle, &PaddleTarget)>() {
        paddle.y = paddle_mapper.clamp(mapper::smooth(paddle.y, target.y, factor));
    }
}

/// Move ball by one tick of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

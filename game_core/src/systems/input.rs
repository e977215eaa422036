use hand_tracking::HandEstimate;
use hecs::World;

use crate::{HandIndicators, LostHandPolicy, Paddle, PaddleMapper, PaddleTarget, Side};

/// Apply a hand estimate to paddle targets.
///
/// Only `PaddleTarget` is written here; the render tick moves the paddles.
pub fn ingest_hands(
    world: &mut World,
    estimate: &HandEstimate,
    mapper: &PaddleMapper,
    policy: LostHandPolicy,
    indicators: &mut HandIndicators,
) {
    for (_entity, (paddle, target)) in world.query_mut::<(&Paddle, &mut PaddleTarget)>() {
        let hand = match paddle.side {
            Side::Left => estimate.left,
            Side::Right => estimate.right,
        };

        match hand {
            Some(hand_y) => {
                target.y = mapper.map(hand_y, estimate.frame_height);
                indicators.set(
                    paddle.side,
                    Some(mapper.to_canvas(hand_y, estimate.frame_height)),
                );
            }
            None => {
                log::debug!("no {} hand in frame, policy {:?}", paddle.side.label(), policy);
                if policy == LostHandPolicy::Center {
                    target.y = mapper.center();
                }
                indicators.set(paddle.side, None);
            }
        }
    }
}

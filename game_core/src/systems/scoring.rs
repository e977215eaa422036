use crate::{Ball, Config, Events, GameEvent, GameRng, Score, Side};
use hecs::World;

/// Check if ball left the table (scoring)
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let winner = if ball.pos.x < 0.0 {
            Side::Right
        } else if ball.pos.x > config.canvas_width {
            Side::Left
        } else {
            continue;
        };

        score.increment(winner);
        events.push(GameEvent::Scored(winner));
        log::info!(
            "{} player scores: {} - {}",
            winner.label(),
            score.left,
            score.right
        );

        ball.reset(config, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, GameRng) {
        let world = World::new();
        let config = Config::for_canvas(800.0, 300.0);
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
    }

    fn ball(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let (_e, ball) = query.iter().next().expect("ball should exist");
        *ball
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 120.0), Vec2::new(-3.0, 1.0), 0.45);

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0, "Left player should not score");
        assert!(events.scored(Side::Right));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(801.0, 120.0), Vec2::new(3.0, 0.0), 0.2);

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.scored(Side::Left));
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 120.0), Vec2::new(-3.0, 1.0), 0.45);

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let b = ball(&world);
        let serve_speed = config.base_speed() * config.initial_multiplier;
        assert_eq!(b.pos, Vec2::new(400.0, 150.0));
        assert_eq!(b.speed_multiplier, config.initial_multiplier);
        assert!((b.vel.x.abs() - serve_speed).abs() < 1e-6);
        assert!((b.vel.y.abs() - serve_speed).abs() < 1e-6);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(0.0, 120.0), Vec2::new(-3.0, 1.0), 0.2);

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score, Score::new());
        assert!(events.is_empty(), "No scoring events");
        assert_eq!(ball(&world).pos, Vec2::new(0.0, 120.0));
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        let entity = create_ball(&mut world, Vec2::new(801.0, 120.0), Vec2::new(3.0, 0.0), 0.2);
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        world.get::<&mut Ball>(entity).unwrap().pos.x = 900.0;
        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 2, "Scores should accumulate");
        assert_eq!(score.right, 0);
        assert_eq!(events.len(), 2);
    }
}

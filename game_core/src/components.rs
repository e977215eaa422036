use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::{Config, GameRng};

/// Which end of the table a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Paddle component - `y` is the top edge, in canvas pixels
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }
}

/// Where hand tracking wants the paddle to be
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleTarget {
    pub y: f32,
}

impl PaddleTarget {
    pub fn new(y: f32) -> Self {
        Self { y }
    }
}

/// Ball component - velocity is in canvas pixels per render tick
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub speed_multiplier: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, speed_multiplier: f32) -> Self {
        Self {
            pos,
            vel,
            speed_multiplier,
        }
    }

    /// Fresh ball at the centre with a random diagonal direction
    pub fn serve(config: &Config, rng: &mut GameRng) -> Self {
        let mut ball = Self::new(Vec2::ZERO, Vec2::ZERO, config.initial_multiplier);
        ball.reset(config, rng);
        ball
    }

    /// Reset ball to center with the initial multiplier and random diagonal
    pub fn reset(&mut self, config: &Config, rng: &mut GameRng) {
        use rand::Rng;

        self.pos = config.center();
        self.speed_multiplier = config.initial_multiplier;

        let speed = config.base_speed() * self.speed_multiplier;
        let sx = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let sy = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(sx * speed, sy * speed);
    }

    /// Speed the ball should travel at for its current multiplier
    pub fn target_speed(&self, config: &Config) -> f32 {
        config.base_speed() * self.speed_multiplier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_centres_ball_with_diagonal_velocity() {
        let config = Config::for_canvas(800.0, 400.0);
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-3.0, 9.0), Vec2::new(40.0, 0.0), 0.55);

        ball.reset(&config, &mut rng);

        let speed = config.base_speed() * config.initial_multiplier;
        assert_eq!(ball.pos, Vec2::new(400.0, 200.0));
        assert_eq!(ball.speed_multiplier, config.initial_multiplier);
        assert_eq!(ball.vel.x.abs(), speed);
        assert_eq!(ball.vel.y.abs(), speed);
    }

    #[test]
    fn test_serve_directions_vary() {
        let config = Config::new();
        let mut rng = GameRng::new(99);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            let ball = Ball::serve(&config, &mut rng);
            seen.insert((ball.vel.x > 0.0, ball.vel.y > 0.0));
        }
        assert_eq!(seen.len(), 4, "all four diagonals should occur");
    }
}

//! Hand height (camera rows) to paddle offset (canvas pixels)

use crate::Config;

/// Affine map from camera space onto the paddle's travel range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleMapper {
    pub canvas_height: f32,
    pub paddle_height: f32,
}

impl PaddleMapper {
    pub fn new(canvas_height: f32, paddle_height: f32) -> Self {
        Self {
            canvas_height,
            paddle_height,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.canvas_height, config.paddle_height())
    }

    /// Largest valid top offset
    pub fn max_offset(&self) -> f32 {
        (self.canvas_height - self.paddle_height).max(0.0)
    }

    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }

    /// Offset that centres the paddle vertically
    pub fn center(&self) -> f32 {
        self.max_offset() / 2.0
    }

    /// Hand height projected onto the canvas, unclamped
    pub fn to_canvas(&self, hand_y: f32, frame_height: u32) -> f32 {
        hand_y / frame_height.max(1) as f32 * self.canvas_height
    }

    /// `(hand_y / H) * canvasHeight - paddleHeight / 2`, clamped to the canvas
    pub fn map(&self, hand_y: f32, frame_height: u32) -> f32 {
        self.clamp(self.to_canvas(hand_y, frame_height) - self.paddle_height / 2.0)
    }
}

/// One smoothing step: move `current` toward `target` by `factor` of the gap
pub fn smooth(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

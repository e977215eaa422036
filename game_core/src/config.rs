use hand_tracking::{EstimatorKind, SkinThresholds};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::Params;

/// A length given in canvas pixels or relative to one canvas dimension
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Extent {
    Pixels(f32),
    FractionOfWidth(f32),
    FractionOfHeight(f32),
}

impl Extent {
    pub fn resolve(&self, canvas_width: f32, canvas_height: f32) -> f32 {
        match *self {
            Extent::Pixels(px) => px,
            Extent::FractionOfWidth(f) => canvas_width * f,
            Extent::FractionOfHeight(f) => canvas_height * f,
        }
    }
}

/// What a paddle does when its half of the frame shows no hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LostHandPolicy {
    /// Keep the last target
    #[default]
    Hold,
    /// Return to the vertical centre
    Center,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("canvas must have positive size, got {width}x{height}")]
    NonPositiveCanvas { width: f32, height: f32 },
    #[error("{field} must resolve to a positive length, got {value}")]
    InvalidExtent { field: &'static str, value: f32 },
    #[error("paddle height {paddle} does not fit canvas height {canvas}")]
    PaddleTooTall { paddle: f32, canvas: f32 },
    #[error("paddles {thickness} thick overlap on a canvas {canvas} wide")]
    PaddleTooThick { thickness: f32, canvas: f32 },
    #[error("speed multipliers need 0 < initial ({initial}) <= ceiling ({ceiling}) and increment ({increment}) >= 0")]
    InvalidMultiplier {
        initial: f32,
        increment: f32,
        ceiling: f32,
    },
    #[error("smoothing factor must be in (0, 1], got {0}")]
    InvalidSmoothing(f32),
    #[error("tracking interval must be non-zero")]
    ZeroTrackingInterval,
    #[error("malformed config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game configuration, fixed for the lifetime of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub paddle_thickness: Extent,
    pub paddle_height: Extent,
    pub ball_radius: Extent,
    /// Ball speed per tick before the multiplier is applied
    pub base_speed: Extent,
    pub initial_multiplier: f32,
    pub speed_increment: f32,
    pub speed_ceiling: f32,
    pub tracking_interval_ms: u32,
    /// Per-tick approach factor in (0, 1]; None snaps immediately
    pub smoothing: Option<f32>,
    /// Swap which camera half drives which paddle
    pub mirror: bool,
    pub estimator: EstimatorKind,
    pub lost_hand: LostHandPolicy,
    pub skin: SkinThresholds,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self::for_canvas(Params::CANVAS_WIDTH, Params::CANVAS_HEIGHT)
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults scaled for a canvas of the given size
    pub fn for_canvas(canvas_width: f32, canvas_height: f32) -> Self {
        Self {
            canvas_width,
            canvas_height,
            paddle_thickness: Extent::Pixels(Params::PADDLE_THICKNESS),
            paddle_height: Extent::FractionOfHeight(Params::PADDLE_HEIGHT_FRACTION),
            ball_radius: Extent::FractionOfWidth(Params::BALL_RADIUS_FRACTION),
            base_speed: Extent::FractionOfWidth(Params::BASE_SPEED_FRACTION),
            initial_multiplier: Params::INITIAL_SPEED_MULTIPLIER,
            speed_increment: Params::SPEED_INCREMENT,
            speed_ceiling: Params::SPEED_CEILING,
            tracking_interval_ms: Params::TRACKING_INTERVAL_MS,
            smoothing: None,
            mirror: true,
            estimator: EstimatorKind::default(),
            lost_hand: LostHandPolicy::default(),
            skin: SkinThresholds::default(),
            seed: Params::SEED,
        }
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    fn resolve(&self, extent: Extent) -> f32 {
        extent.resolve(self.canvas_width, self.canvas_height)
    }

    pub fn paddle_thickness(&self) -> f32 {
        self.resolve(self.paddle_thickness)
    }

    pub fn paddle_height(&self) -> f32 {
        self.resolve(self.paddle_height)
    }

    pub fn ball_radius(&self) -> f32 {
        self.resolve(self.ball_radius)
    }

    pub fn base_speed(&self) -> f32 {
        self.resolve(self.base_speed)
    }

    /// Factor applied by the paddle smoothing step each render tick
    pub fn smoothing_factor(&self) -> f32 {
        self.smoothing.unwrap_or(1.0)
    }

    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// Clamp a paddle top offset to the canvas
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, (self.canvas_height - self.paddle_height()).max(0.0))
    }

    /// Reject configurations a session cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (w, h) = (self.canvas_width, self.canvas_height);
        if !(w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0) {
            return Err(ConfigError::NonPositiveCanvas {
                width: w,
                height: h,
            });
        }

        for (field, value) in [
            ("paddle_thickness", self.paddle_thickness()),
            ("paddle_height", self.paddle_height()),
            ("ball_radius", self.ball_radius()),
            ("base_speed", self.base_speed()),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidExtent { field, value });
            }
        }

        if self.paddle_height() > h {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height(),
                canvas: h,
            });
        }
        if self.paddle_thickness() * 2.0 >= w {
            return Err(ConfigError::PaddleTooThick {
                thickness: self.paddle_thickness(),
                canvas: w,
            });
        }

        let (initial, increment, ceiling) = (
            self.initial_multiplier,
            self.speed_increment,
            self.speed_ceiling,
        );
        if !(initial > 0.0 && increment >= 0.0 && ceiling >= initial && ceiling.is_finite()) {
            return Err(ConfigError::InvalidMultiplier {
                initial,
                increment,
                ceiling,
            });
        }

        if let Some(factor) = self.smoothing {
            if !(factor > 0.0 && factor <= 1.0) {
                return Err(ConfigError::InvalidSmoothing(factor));
            }
        }

        if self.tracking_interval_ms == 0 {
            return Err(ConfigError::ZeroTrackingInterval);
        }

        Ok(())
    }
}

/// Game tuning parameters for Hand Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas (full window width, half window height)
    pub const CANVAS_WIDTH: f32 = 1280.0;
    pub const CANVAS_HEIGHT: f32 = 360.0;

    // Paddle
    pub const PADDLE_THICKNESS: f32 = 10.0;
    pub const PADDLE_HEIGHT_FRACTION: f32 = 1.0 / 3.0; // of canvas height

    // Ball
    pub const BALL_RADIUS_FRACTION: f32 = 1.0 / 100.0; // of canvas width
    pub const BASE_SPEED_FRACTION: f32 = 1.0 / 160.0; // of canvas width, per tick
    pub const INITIAL_SPEED_MULTIPLIER: f32 = 0.2;
    pub const SPEED_INCREMENT: f32 = 0.05; // added on every paddle hit
    pub const SPEED_CEILING: f32 = 0.6;

    // Tracking
    pub const TRACKING_INTERVAL_MS: u32 = 50;

    pub const SEED: u64 = 12345;
}

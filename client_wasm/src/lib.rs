//! Browser binding for hand-controlled Pong
//!
//! JS owns the webcam, the canvas and the audio context. It pushes camera
//! frames with `submit_frame`, calls `advance` once per animation frame,
//! draws from the getters and plays the returned cue names.

use game_core::{Config, Cue, Session, SessionAction, Side};
use hand_tracking::{Frame, LatestFrame};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
}

const CUES: [Cue; 3] = [Cue::Bounce, Cue::Score, Cue::Start];

fn cue_by_name(name: &str) -> Option<Cue> {
    CUES.into_iter().find(|cue| cue.name() == name)
}

/// Tone frequency in Hz for a cue name, 0 if unknown
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn cue_frequency(name: &str) -> f32 {
    cue_by_name(name).map_or(0.0, |cue| cue.tone().frequency_hz)
}

/// Tone duration in seconds for a cue name, 0 if unknown
#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub fn cue_duration(name: &str) -> f32 {
    cue_by_name(name).map_or(0.0, |cue| cue.tone().duration_s)
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
pub struct HandPong {
    session: Session,
    camera: LatestFrame,
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen)]
impl HandPong {
    /// Build from a JSON config; an empty string uses the defaults
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(constructor))]
    pub fn new(config_json: &str) -> Result<HandPong, String> {
        let config = if config_json.trim().is_empty() {
            Config::new()
        } else {
            Config::from_json(config_json).map_err(|e| e.to_string())?
        };
        let session = Session::new(config).map_err(|e| e.to_string())?;
        Ok(Self {
            session,
            camera: LatestFrame::new(),
        })
    }

    pub fn start(&mut self) -> bool {
        self.session.start().success
    }

    pub fn pause(&mut self) -> bool {
        self.session.pause().success
    }

    pub fn resume(&mut self) -> bool {
        self.session.resume().success
    }

    pub fn stop(&mut self) -> bool {
        self.session.stop().success
    }

    /// Apply a control by name (`START`, `PAUSE`, `RESUME`, `STOP`)
    pub fn control(&mut self, action: &str) -> bool {
        match SessionAction::parse(action) {
            Some(action) => self.session.transition(action).success,
            None => {
                log::warn!("unknown control {:?}", action);
                false
            }
        }
    }

    /// Hand the newest camera frame over; replaces any frame not yet tracked
    pub fn submit_frame(&mut self, rgba: Vec<u8>, width: u32, height: u32) {
        let frame = Frame::new(rgba, width, height);
        if !frame.is_well_formed() {
            log::warn!(
                "dropping malformed {}x{} frame ({} bytes)",
                width,
                height,
                frame.rgba.len()
            );
            return;
        }
        self.camera.submit(frame);
    }

    /// Run one animation frame and return the cue names it produced
    pub fn advance(&mut self, now_ms: f64) -> Vec<String> {
        self.session.advance(now_ms, &mut self.camera);
        self.session
            .drain_cues()
            .into_iter()
            .map(|cue| cue.name().to_string())
            .collect()
    }

    /// The "Flip Video" toggle
    pub fn set_mirror(&mut self, mirror: bool) {
        self.session.set_mirror(mirror);
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn mirror(&self) -> bool {
        self.session.config().mirror
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn state(&self) -> String {
        format!("{:?}", self.session.state())
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn canvas_width(&self) -> f32 {
        self.session.config().canvas_width
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn canvas_height(&self) -> f32 {
        self.session.config().canvas_height
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn left_paddle_y(&self) -> f32 {
        self.session.snapshot().left_paddle_y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn right_paddle_y(&self) -> f32 {
        self.session.snapshot().right_paddle_y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_height(&self) -> f32 {
        self.session.config().paddle_height()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn paddle_thickness(&self) -> f32 {
        self.session.config().paddle_thickness()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_x(&self) -> f32 {
        self.session.snapshot().ball_pos.x
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_y(&self) -> f32 {
        self.session.snapshot().ball_pos.y
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn ball_radius(&self) -> f32 {
        self.session.config().ball_radius()
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_left(&self) -> u32 {
        self.session.score().get(Side::Left)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn score_right(&self) -> u32 {
        self.session.score().get(Side::Right)
    }

    /// Debug overlay: left hand height on the canvas, if seen last tracking tick
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn left_hand_y(&self) -> Option<f32> {
        self.session.hand_indicators().get(Side::Left)
    }

    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn right_hand_y(&self) -> Option<f32> {
        self.session.hand_indicators().get(Side::Right)
    }

    /// Frames overwritten before tracking got to them
    #[cfg_attr(target_arch = "wasm32", wasm_bindgen(getter))]
    pub fn dropped_frames(&self) -> f64 {
        self.camera.dropped() as f64
    }
}

//! Webcam hand locating for Hand Pong
//!
//! Classifies skin pixels with a fixed RGB rule, folds them into per-row
//! counts for each half of the frame and reduces each half to one hand height.

pub mod estimator;
pub mod frame;
pub mod heat;
pub mod skin;
pub mod source;

pub use estimator::*;
pub use frame::*;
pub use heat::*;
pub use skin::*;
pub use source::*;

/// Hand heights for one frame, in camera rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandEstimate {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub frame_height: u32,
}

impl HandEstimate {
    pub fn none(frame_height: u32) -> Self {
        Self {
            left: None,
            right: None,
            frame_height,
        }
    }

    pub fn detected_count(&self) -> usize {
        self.left.is_some() as usize + self.right.is_some() as usize
    }
}

/// Run the locator and one estimator over both halves of `frame`
pub fn estimate_hands(
    frame: &Frame,
    thresholds: &SkinThresholds,
    estimator: &dyn HandEstimator,
    mirror: bool,
) -> HandEstimate {
    let mask = classify(frame, thresholds);
    let heat = HeatRows::from_mask(&mask, mirror);

    let estimate = HandEstimate {
        left: estimator.estimate(&heat.left),
        right: estimator.estimate(&heat.right),
        frame_height: mask.height,
    };

    log::trace!(
        "hands {}x{}: skin left={} right={} -> {:?} / {:?}",
        frame.width,
        frame.height,
        heat.left.total(),
        heat.right.total(),
        estimate.left,
        estimate.right
    );

    estimate
}

use crate::frame::Frame;

/// Supplier of camera frames for the tracking tick
pub trait FrameSource {
    /// Newest frame, or None when the camera has nothing yet
    fn capture_frame(&mut self) -> Option<Frame>;
}

/// Single-slot mailbox holding only the most recently submitted frame.
///
/// Capture pushes at its own pace; older frames are overwritten unread.
#[derive(Debug, Default)]
pub struct LatestFrame {
    slot: Option<Frame>,
    dropped: u64,
}

impl LatestFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(&mut self, frame: Frame) {
        if self.slot.replace(frame).is_some() {
            self.dropped += 1;
        }
    }

    pub fn has_frame(&self) -> bool {
        self.slot.is_some()
    }

    /// Frames overwritten before anyone took them
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl FrameSource for LatestFrame {
    fn capture_frame(&mut self) -> Option<Frame> {
        self.slot.take()
    }
}

impl<F: FnMut() -> Option<Frame>> FrameSource for F {
    fn capture_frame(&mut self) -> Option<Frame> {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_yields_nothing() {
        let mut latest = LatestFrame::new();
        assert!(!latest.has_frame());
        assert_eq!(latest.capture_frame(), None);
    }

    #[test]
    fn test_newest_frame_wins() {
        let mut latest = LatestFrame::new();
        latest.submit(Frame::filled(1, 1, [1, 1, 1, 255]));
        latest.submit(Frame::filled(1, 1, [2, 2, 2, 255]));
        assert_eq!(latest.dropped(), 1);

        let frame = latest.capture_frame().expect("frame should be available");
        assert_eq!(frame.rgb(0, 0), Some((2, 2, 2)));
        assert_eq!(latest.capture_frame(), None);
    }

    #[test]
    fn test_closure_source() {
        let mut calls = 0;
        let mut source = || -> Option<Frame> {
            calls += 1;
            None
        };
        assert_eq!(source.capture_frame(), None);
        assert_eq!(calls, 1);
    }
}

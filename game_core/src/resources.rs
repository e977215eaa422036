use std::collections::VecDeque;

use crate::Side;

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,  // Left player score
    pub right: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(crate::Params::SEED)
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    WallBounce,
    PaddleBounce(Side),
    /// The given side won the point
    Scored(Side),
}

impl GameEvent {
    pub fn cue(&self) -> Cue {
        match self {
            GameEvent::Started => Cue::Start,
            GameEvent::WallBounce | GameEvent::PaddleBounce(_) => Cue::Bounce,
            GameEvent::Scored(_) => Cue::Score,
        }
    }
}

/// Sound cue for the audio shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Bounce,
    Score,
    Start,
}

/// Sine blip parameters for a cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_s: f32,
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Cue::Bounce => "bounce",
            Cue::Score => "score",
            Cue::Start => "start",
        }
    }

    pub fn tone(&self) -> Tone {
        let (frequency_hz, duration_s) = match self {
            Cue::Bounce => (500.0, 0.1),
            Cue::Score => (700.0, 0.15),
            Cue::Start => (400.0, 0.5),
        };
        Tone {
            frequency_hz,
            duration_s,
        }
    }
}

/// Events emitted since the shell last drained them.
///
/// Holds at most [`Events::CAPACITY`]; older events are dropped first.
#[derive(Debug, Clone, Default)]
pub struct Events {
    list: VecDeque<GameEvent>,
}

impl Events {
    pub const CAPACITY: usize = 256;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        if self.list.len() == Self::CAPACITY {
            self.list.pop_front();
        }
        self.list.push_back(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.list.iter()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        self.list.drain(..).collect()
    }

    pub fn wall_bounces(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::WallBounce))
    }

    pub fn paddle_bounces(&self) -> usize {
        self.count(|e| matches!(e, GameEvent::PaddleBounce(_)))
    }

    pub fn scored(&self, side: Side) -> bool {
        self.list.contains(&GameEvent::Scored(side))
    }

    fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.list.iter().filter(|e| pred(e)).count()
    }
}

/// Fixed-interval scheduler for the tracking tick
#[derive(Debug, Clone, Copy)]
pub struct TrackingClock {
    pub interval_ms: f64,
    last_ms: Option<f64>,
}

impl TrackingClock {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms as f64,
            last_ms: None,
        }
    }

    /// True (and records `now_ms`) when a tracking tick is due
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let due = match self.last_ms {
            None => true,
            Some(last) => now_ms - last >= self.interval_ms || now_ms < last,
        };
        if due {
            self.last_ms = Some(now_ms);
        }
        due
    }

    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

/// Last hand heights mapped into canvas space, for the debug overlay
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HandIndicators {
    pub left: Option<f32>,
    pub right: Option<f32>,
}

impl HandIndicators {
    pub fn get(&self, side: Side) -> Option<f32> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn set(&mut self, side: Side, y: Option<f32>) {
        match side {
            Side::Left => self.left = y,
            Side::Right => self.right = y,
        }
    }
}

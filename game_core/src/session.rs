//! Session lifecycle and tick scheduling
//!
//! A session owns every piece of game state. The render tick writes the ball,
//! the score and the paddle positions; the tracking tick writes only paddle
//! targets and hand indicators. Both run on the caller's thread.

use glam::Vec2;
use hand_tracking::{FrameSource, HandEstimate, HandEstimator};
use hecs::World;

use crate::{
    create_ball, create_paddle, step, track, Ball, Config, ConfigError, Cue, Events, GameEvent,
    GameRng, HandIndicators, Paddle, PaddleMapper, PaddleTarget, Score, Side, TrackingClock,
};

/// Session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
    Paused,
    Stopped,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    Pause,
    Resume,
    Stop,
}

impl SessionAction {
    /// Parse an action name (for easier JS interop)
    pub fn parse(action: &str) -> Option<Self> {
        match action {
            "START" => Some(SessionAction::Start),
            "PAUSE" => Some(SessionAction::Pause),
            "RESUME" => Some(SessionAction::Resume),
            "STOP" => Some(SessionAction::Stop),
            _ => None,
        }
    }
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: SessionState,
    pub to_state: SessionState,
    pub action: SessionAction,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub state: SessionState,
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub paddle_height: f32,
    pub paddle_thickness: f32,
    pub ball_pos: Vec2,
    pub ball_radius: f32,
    pub score: Score,
    pub hands: HandIndicators,
}

pub struct Session {
    world: World,
    config: Config,
    estimator: Box<dyn HandEstimator>,
    score: Score,
    events: Events,
    rng: GameRng,
    clock: TrackingClock,
    indicators: HandIndicators,
    state: SessionState,
    ticks: u64,
}

impl Session {
    /// Validate `config` and build an idle session using its estimator
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let estimator = Box::new(config.estimator);
        Self::with_estimator(config, estimator)
    }

    /// Like [`Session::new`] but with a caller-supplied estimator
    pub fn with_estimator(
        config: Config,
        estimator: Box<dyn HandEstimator>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        let mut rng = GameRng::new(config.seed);

        let center = PaddleMapper::from_config(&config).center();
        for side in Side::BOTH {
            create_paddle(&mut world, side, center);
        }
        let ball = Ball::serve(&config, &mut rng);
        create_ball(&mut world, ball.pos, ball.vel, ball.speed_multiplier);

        log::info!(
            "session ready: {}x{} canvas, estimator {}, mirror {}",
            config.canvas_width,
            config.canvas_height,
            estimator.label(),
            config.mirror
        );

        Ok(Self {
            world,
            clock: TrackingClock::new(config.tracking_interval_ms),
            config,
            estimator,
            score: Score::new(),
            events: Events::new(),
            rng,
            indicators: HandIndicators::default(),
            state: SessionState::Idle,
            ticks: 0,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Render ticks run since the last start
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Check if a transition is valid
    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_state(action).is_some()
    }

    /// Attempt a transition; a successful Start also resets the match
    pub fn transition(&mut self, action: SessionAction) -> TransitionResult {
        let from_state = self.state;

        let Some(next_state) = self.next_state(action) else {
            log::warn!("ignoring {:?} while {:?}", action, from_state);
            return TransitionResult {
                success: false,
                from_state,
                to_state: from_state,
                action,
            };
        };

        self.state = next_state;
        if action == SessionAction::Start {
            self.reset_match();
        }
        log::info!("session {:?} -> {:?}", from_state, next_state);

        TransitionResult {
            success: true,
            from_state,
            to_state: next_state,
            action,
        }
    }

    /// Get next state for a given action (if valid)
    fn next_state(&self, action: SessionAction) -> Option<SessionState> {
        use SessionAction as A;
        use SessionState as S;

        match (self.state, action) {
            (S::Idle | S::Stopped | S::Running | S::Paused, A::Start) => Some(S::Running),
            (S::Running, A::Pause) => Some(S::Paused),
            (S::Paused, A::Resume) => Some(S::Running),
            (S::Running | S::Paused, A::Stop) => Some(S::Stopped),
            _ => None,
        }
    }

    pub fn start(&mut self) -> TransitionResult {
        self.transition(SessionAction::Start)
    }

    pub fn pause(&mut self) -> TransitionResult {
        self.transition(SessionAction::Pause)
    }

    pub fn resume(&mut self) -> TransitionResult {
        self.transition(SessionAction::Resume)
    }

    pub fn stop(&mut self) -> TransitionResult {
        self.transition(SessionAction::Stop)
    }

    /// Zero the score, centre the paddles and serve a fresh ball
    fn reset_match(&mut self) {
        self.score.reset();
        self.events.clear();
        self.clock.reset();
        self.indicators = HandIndicators::default();
        self.ticks = 0;

        let center = PaddleMapper::from_config(&self.config).center();
        for (_e, (paddle, target)) in self
            .world
            .query_mut::<(&mut Paddle, &mut PaddleTarget)>()
        {
            paddle.y = center;
            target.y = center;
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(&self.config, &mut self.rng);
        }

        self.events.push(GameEvent::Started);
    }

    /// Flip which camera half drives which paddle (takes effect next tracking tick)
    pub fn set_mirror(&mut self, mirror: bool) {
        if self.config.mirror != mirror {
            log::info!("mirror {}", if mirror { "on" } else { "off" });
        }
        self.config.mirror = mirror;
    }

    /// One display frame of physics; does nothing unless running
    pub fn render_tick(&mut self) {
        if !self.is_running() {
            return;
        }
        step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
        );
        self.ticks += 1;
    }

    /// Capture, estimate and retarget; a missing frame leaves paddles untouched
    pub fn tracking_tick(&mut self, source: &mut dyn FrameSource) -> Option<HandEstimate> {
        if !self.is_running() {
            return None;
        }
        let Some(frame) = source.capture_frame() else {
            log::trace!("no camera frame yet, skipping tracking tick");
            return None;
        };
        Some(track(
            &mut self.world,
            &frame,
            &self.config,
            self.estimator.as_ref(),
            &mut self.indicators,
        ))
    }

    /// Drive both ticks from one clock: tracking when its interval has
    /// elapsed, then a render tick.
    ///
    /// Events pile up until [`Session::drain_events`] or
    /// [`Session::drain_cues`] takes them; past `Events::CAPACITY` the oldest
    /// are dropped.
    pub fn advance(&mut self, now_ms: f64, source: &mut dyn FrameSource) {
        if !self.is_running() {
            return;
        }
        if self.clock.poll(now_ms) {
            self.tracking_tick(source);
        }
        self.render_tick();
    }

    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
    }

    pub fn paddle_target(&self, side: Side) -> Option<f32> {
        self.world
            .query::<(&Paddle, &PaddleTarget)>()
            .iter()
            .find(|(_e, (p, _t))| p.side == side)
            .map(|(_e, (_p, t))| t.y)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    /// Label of the estimator used by the tracking tick
    pub fn estimator_label(&self) -> &'static str {
        self.estimator.label()
    }

    pub fn hand_indicators(&self) -> HandIndicators {
        self.indicators
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        let center = PaddleMapper::from_config(&self.config).center();
        RenderSnapshot {
            state: self.state,
            left_paddle_y: self.paddle_y(Side::Left).unwrap_or(center),
            right_paddle_y: self.paddle_y(Side::Right).unwrap_or(center),
            paddle_height: self.config.paddle_height(),
            paddle_thickness: self.config.paddle_thickness(),
            ball_pos: self.ball().map_or(self.config.center(), |b| b.pos),
            ball_radius: self.config.ball_radius(),
            score: self.score,
            hands: self.indicators,
        }
    }

    /// Take all events since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Take all pending sound cues since the last drain
    pub fn drain_cues(&mut self) -> Vec<Cue> {
        self.drain_events().iter().map(GameEvent::cue).collect()
    }
}

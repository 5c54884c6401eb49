//! Game state machine driving rounds, playback and judging.
//!
//! The machine never sleeps. Time only passes through `update(dt)`, which
//! fires due timers in order; the logic thread calls it every tick and
//! tests call it directly to step through a game.
//!
//! Phases: `Idle -> Playing -> AwaitingInput -> (AwaitingInput | RoundComplete
//! -> Playing | GameOver)`.

mod input;
mod scheduler;
mod snapshot;

pub use scheduler::{Scheduled, Scheduler, TimerEvent};

use crate::logic::audio::AudioContext;
use crate::logic::feedback::{FeedbackController, Haptics};
use crate::logic::round::{self, Playback, PlaybackStep};
use crate::models::color::Color;
use crate::models::settings::GameMode;
use crate::models::timing::LEAD_IN;
use rand::rngs::StdRng;
use std::time::Duration;

/// Current state of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No game running (before the first start, after acknowledging game over).
    Idle,
    /// Lead-in or sequence replay; presses are ignored.
    Playing,
    /// Waiting for the player to repeat the sequence.
    AwaitingInput,
    /// Sequence repeated; waiting before the next round.
    RoundComplete,
    /// Wrong press; terminal until the next start.
    GameOver,
}

/// Transient state of one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub sequence: Vec<Color>,
    pub user_input: Vec<Color>,
    /// Length of the last fully repeated sequence.
    pub score: u32,
    pub phase: Phase,
    /// Identity of the session; timers from other generations are dropped.
    pub generation: u64,
}

impl GameSession {
    fn fresh(generation: u64, phase: Phase) -> Self {
        Self {
            sequence: Vec::new(),
            user_input: Vec::new(),
            score: 0,
            phase,
            generation,
        }
    }
}

pub struct GameMachine<A, H> {
    session: GameSession,
    mode: GameMode,
    feedback: FeedbackController<A, H>,
    scheduler: Scheduler,
    playback: Option<Playback>,
    rng: StdRng,
}

impl<A: AudioContext, H: Haptics> GameMachine<A, H> {
    pub fn new(feedback: FeedbackController<A, H>, mode: GameMode, rng: StdRng) -> Self {
        Self {
            session: GameSession::fresh(0, Phase::Idle),
            mode,
            feedback,
            scheduler: Scheduler::new(),
            playback: None,
            rng,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn feedback(&self) -> &FeedbackController<A, H> {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut FeedbackController<A, H> {
        &mut self.feedback
    }

    /// Whether the color buttons accept presses.
    pub fn buttons_enabled(&self) -> bool {
        self.session.phase == Phase::AwaitingInput && self.playback.is_none()
    }

    /// Starts a new game, abandoning any game in progress.
    ///
    /// Round 1 begins after the lead-in.
    pub fn start_game(&mut self) {
        let generation = self.session.generation + 1;
        self.reset(generation, Phase::Playing);
        self.scheduler.schedule(LEAD_IN, generation, TimerEvent::LeadIn);
        log::info!("LOGIC: New game (session {})", generation);
    }

    /// Dismisses the game-over panel and returns to idle.
    pub fn acknowledge_game_over(&mut self) {
        if self.session.phase != Phase::GameOver {
            return;
        }
        let generation = self.session.generation + 1;
        self.reset(generation, Phase::Idle);
    }

    fn reset(&mut self, generation: u64, phase: Phase) {
        self.session = GameSession::fresh(generation, phase);
        self.playback = None;
        self.feedback.release_all();
    }

    /// Advances the game clock by `dt`, firing every timer that falls due.
    pub fn update(&mut self, dt: Duration) {
        let until = self.scheduler.now() + dt;
        while let Some(timer) = self.scheduler.pop_due(until) {
            self.dispatch(timer);
        }
        self.scheduler.settle(until);
    }

    fn dispatch(&mut self, timer: Scheduled) {
        if timer.generation != self.session.generation {
            log::debug!(
                "LOGIC: Dropping {:?} from session {} (current {})",
                timer.event,
                timer.generation,
                self.session.generation
            );
            return;
        }

        match timer.event {
            TimerEvent::LeadIn => {
                if self.session.phase == Phase::Playing && self.session.sequence.is_empty() {
                    self.begin_round();
                }
            }
            TimerEvent::NextRound => {
                if self.session.phase == Phase::RoundComplete {
                    self.begin_round();
                }
            }
            TimerEvent::Resume => {
                if self.session.phase == Phase::Playing {
                    self.pump_playback();
                }
            }
            TimerEvent::Release { color, resume } => {
                self.feedback.release(color);
                if resume && self.session.phase == Phase::Playing {
                    self.pump_playback();
                }
            }
        }
    }

    /// Extends the sequence by one color and replays it from the start.
    fn begin_round(&mut self) {
        self.session.phase = Phase::Playing;
        self.session.user_input.clear();

        let timing = round::advance(&mut self.session.sequence, &mut self.rng);
        let len = self.session.sequence.len();
        log::info!(
            "LOGIC: Round {} (hold {:?}, gap {:?}, replay {:?})",
            len,
            timing.highlight,
            timing.gap,
            timing.playback_duration(len)
        );

        self.playback = Some(Playback::new(self.session.sequence.clone(), timing));
        self.pump_playback();
    }

    /// Pulls the next playback step and arms the timer that ends it.
    fn pump_playback(&mut self) {
        let generation = self.session.generation;
        let step = self.playback.as_mut().and_then(|p| p.next());

        match step {
            Some(PlaybackStep::Wait(gap)) => {
                self.scheduler.schedule(gap, generation, TimerEvent::Resume);
            }
            Some(PlaybackStep::Flash { color, hold }) => {
                self.feedback.press(color, self.mode);
                self.scheduler.schedule(
                    hold,
                    generation,
                    TimerEvent::Release {
                        color,
                        resume: true,
                    },
                );
            }
            None => {
                self.playback = None;
                self.session.phase = Phase::AwaitingInput;
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }
}

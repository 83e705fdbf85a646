use rand::Rng;
use tracing::debug;

use super::card::{Card, CardState};
use super::config::GameConfig;
use super::deck::build_deck;
use super::resolver::{self, Verdict};
use super::selection::{SelectionStatus, SelectionTracker};
use super::{Cue, GameError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndReason {
    AllMatched,
    TimedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the first input; the clock has not started.
    Intro,
    Playing,
    Complete(EndReason),
}

/// One live play-through from deal to terminal condition. Owns the deck,
/// the selection, the score and both countdown timers; the frontend owns
/// the `Round` and drives it one tick per frame.
pub struct Round {
    config: GameConfig,
    cards: Vec<Card>,
    selection: SelectionTracker,
    score: i32,
    elapsed_ms: u32,
    remaining_ms: u32,
    /// Grace-window countdown; non-zero while a mismatched pair is shown.
    grace_ms: u32,
    phase: Phase,
    cues: Vec<Cue>,
}

impl Round {
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Result<Self, GameError> {
        let cards = build_deck(&config, rng)?;
        let phase = if config.intro_screen {
            Phase::Intro
        } else {
            Phase::Playing
        };
        Ok(Round {
            remaining_ms: config.round_time_ms,
            config,
            cards,
            selection: SelectionTracker::default(),
            score: 0,
            elapsed_ms: 0,
            grace_ms: 0,
            phase,
            cues: Vec::new(),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Time left on the round clock, `None` for the untimed variant.
    pub fn remaining_ms(&self) -> Option<u32> {
        self.config.is_timed().then_some(self.remaining_ms)
    }

    /// True while a mismatched pair sits in its grace window.
    pub fn is_resolving(&self) -> bool {
        self.grace_ms > 0
    }

    pub fn input_locked(&self) -> bool {
        self.is_resolving() || self.selection.is_locked()
    }

    pub fn matched_pairs(&self) -> usize {
        self.cards
            .iter()
            .filter(|c| c.state() == CardState::Matched)
            .count()
            / 2
    }

    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Whether `index` is currently held as an unresolved pick.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selection.holds(index)
    }

    /// Dismisses the intro screen and starts the clock.
    pub fn begin(&mut self) {
        if self.phase == Phase::Intro {
            self.phase = Phase::Playing;
        }
    }

    /// Advances both countdowns by the measured inter-frame duration and
    /// runs the terminal checks. A no-op outside `Playing`.
    pub fn tick(&mut self, dt_ms: u32) -> Result<(), GameError> {
        if self.phase != Phase::Playing {
            return Ok(());
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.config.is_timed() {
            self.remaining_ms = self.remaining_ms.saturating_sub(dt_ms);
        }

        if self.grace_ms > 0 {
            self.grace_ms = self.grace_ms.saturating_sub(dt_ms);
            if self.grace_ms == 0 {
                self.reset_mismatched_pair()?;
            }
        }

        self.check_terminal();
        Ok(())
    }

    /// Dispatches a click on the card at `index`. Stale and ineligible
    /// clicks (locked tracker, face-up card, out of bounds, re-click of
    /// the held first pick) are plain no-ops.
    pub fn handle_click(&mut self, index: usize) -> Result<(), GameError> {
        match self.phase {
            Phase::Intro => {
                self.begin();
                return Ok(());
            }
            Phase::Complete(_) => return Ok(()),
            Phase::Playing => {}
        }

        if self.input_locked() {
            return Ok(());
        }
        let Some(card) = self.cards.get(index) else {
            return Ok(());
        };
        if !card.is_clickable() || self.selection.holds(index) {
            return Ok(());
        }

        self.cards[index].reveal();
        self.cues.push(Cue::Tap);
        if self.selection.offer(index) == SelectionStatus::PairReady {
            self.resolve_pair()?;
        }
        Ok(())
    }

    fn resolve_pair(&mut self) -> Result<(), GameError> {
        let Some((a, b)) = self.selection.pair() else {
            return Ok(());
        };

        let resolution = resolver::resolve(
            &self.cards[a],
            &self.cards[b],
            self.elapsed_ms,
            &self.config.scoring,
        );
        self.score += resolution.score_delta;
        debug!(
            verdict = ?resolution.verdict,
            delta = resolution.score_delta,
            score = self.score,
            "pair resolved"
        );

        match resolution.verdict {
            Verdict::Match => {
                self.cards[a].mark_matched()?;
                self.cards[b].mark_matched()?;
                self.selection.clear();
                self.cues.push(Cue::Match);
                self.check_terminal();
            }
            Verdict::Mismatch => {
                self.cues.push(Cue::Mismatch);
                if self.config.grace_window_ms == 0 {
                    self.reset_mismatched_pair()?;
                } else {
                    // Pair stays visible; the locked tracker keeps input out
                    // until the window elapses.
                    self.grace_ms = self.config.grace_window_ms;
                }
            }
        }
        Ok(())
    }

    fn reset_mismatched_pair(&mut self) -> Result<(), GameError> {
        if let Some((a, b)) = self.selection.pair() {
            self.cards[a].hide()?;
            self.cards[b].hide()?;
        }
        self.selection.clear();
        Ok(())
    }

    fn check_terminal(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        if self.cards.iter().all(|c| c.state() == CardState::Matched) {
            self.phase = Phase::Complete(EndReason::AllMatched);
        } else if self.config.is_timed() && self.remaining_ms == 0 {
            self.phase = Phase::Complete(EndReason::TimedOut);
        }
    }

    /// Drains the sound cues produced since the last call.
    pub fn take_cues(&mut self) -> Vec<Cue> {
        std::mem::take(&mut self.cues)
    }
}

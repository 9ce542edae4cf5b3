//! Typewriter text animation.
//!
//! [`Typewriter`] is the pure state machine: it types a phrase one character
//! at a time, pauses, deletes it again and moves on to the next phrase,
//! forever. [`Animator`] drives it on a tokio timer and publishes every frame.

pub mod animator;

pub use animator::Animator;

use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_TYPING_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_DELETING_INTERVAL: Duration = Duration::from_millis(50);
pub const DEFAULT_PAUSE_DURATION: Duration = Duration::from_millis(2000);

/// Rejected typewriter settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("invalid configuration: phrase list is empty")]
    EmptyPhraseList,

    #[error("invalid configuration: {0} must be greater than zero")]
    ZeroDuration(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Typing,
    Pausing,
    Deleting,
}

/// Per-character and pause timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub typing_interval: Duration,
    pub deleting_interval: Duration,
    pub pause_duration: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            typing_interval: DEFAULT_TYPING_INTERVAL,
            deleting_interval: DEFAULT_DELETING_INTERVAL,
            pause_duration: DEFAULT_PAUSE_DURATION,
        }
    }
}

impl Timing {
    fn validate(&self) -> Result<(), InvalidConfiguration> {
        if self.typing_interval.is_zero() {
            return Err(InvalidConfiguration::ZeroDuration("typing interval"));
        }
        if self.deleting_interval.is_zero() {
            return Err(InvalidConfiguration::ZeroDuration("deleting interval"));
        }
        if self.pause_duration.is_zero() {
            return Err(InvalidConfiguration::ZeroDuration("pause duration"));
        }
        Ok(())
    }
}

/// Snapshot of what the typewriter is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub text: String,
    pub mode: Mode,
    pub phrase_index: usize,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timing: Timing,
    phrase_index: usize,
    /// Byte length of the shown prefix; always on a char boundary.
    cursor: usize,
    mode: Mode,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, timing: Timing) -> Result<Self, InvalidConfiguration>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Err(InvalidConfiguration::EmptyPhraseList);
        }
        timing.validate()?;
        Ok(Self {
            phrases,
            timing,
            phrase_index: 0,
            cursor: 0,
            mode: Mode::Typing,
        })
    }

    pub fn text(&self) -> &str {
        &self.phrase()[..self.cursor]
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn frame(&self) -> Frame {
        Frame {
            text: self.text().to_string(),
            mode: self.mode,
            phrase_index: self.phrase_index,
        }
    }

    fn phrase(&self) -> &str {
        &self.phrases[self.phrase_index]
    }

    fn is_complete(&self) -> bool {
        self.cursor == self.phrase().len()
    }

    /// How long to wait before the next [`advance`](Self::advance).
    ///
    /// Zero for the two transitions that happen without a timer: a fully
    /// typed phrase entering the pause, and an emptied phrase moving on.
    pub fn delay(&self) -> Duration {
        match self.mode {
            Mode::Typing if self.is_complete() => Duration::ZERO,
            Mode::Typing => self.timing.typing_interval,
            Mode::Pausing => self.timing.pause_duration,
            Mode::Deleting if self.cursor == 0 => Duration::ZERO,
            Mode::Deleting => self.timing.deleting_interval,
        }
    }

    /// Apply exactly one transition and return the resulting frame.
    pub fn advance(&mut self) -> Frame {
        match self.mode {
            Mode::Typing => {
                if self.is_complete() {
                    self.mode = Mode::Pausing;
                } else {
                    let next = self.phrase()[self.cursor..]
                        .chars()
                        .next()
                        .map_or(0, char::len_utf8);
                    self.cursor += next;
                }
            }
            Mode::Pausing => {
                self.mode = Mode::Deleting;
            }
            Mode::Deleting => {
                if self.cursor == 0 {
                    self.mode = Mode::Typing;
                    self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                } else {
                    let last = self.phrase()[..self.cursor]
                        .chars()
                        .next_back()
                        .map_or(0, char::len_utf8);
                    self.cursor -= last;
                }
            }
        }
        self.frame()
    }
}

use crate::typewriter::Frame;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// The typewriter published a new frame
    Typed(Frame),

    /// Tick for smooth scrolling and the blinking cursor
    Tick,
}

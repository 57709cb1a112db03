use crossterm::event;

use super::event::TuiEvent;

/// Produces the event stream consumed by [`Tui::run`](super::Tui::run).
///
/// Every input event marks the screen dirty, so each key press is followed
/// by exactly one render. Between inputs the loop blocks on the terminal
/// instead of polling.
#[derive(Debug)]
pub(super) struct EventLoop {
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(super) fn new() -> Self {
        // The first frame must be drawn before any input arrives.
        Self { dirty: true }
    }

    pub(super) fn next(&mut self) -> anyhow::Result<TuiEvent> {
        if self.dirty {
            self.dirty = false;
            return Ok(TuiEvent::Render);
        }
        self.dirty = true;
        Ok(event::read()?.into())
    }
}

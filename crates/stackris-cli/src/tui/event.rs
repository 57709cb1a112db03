use crossterm::event::Event as CrosstermEvent;

#[derive(Debug, Clone, derive_more::From)]
pub(super) enum TuiEvent {
    /// The screen content is stale and must be redrawn.
    Render,
    /// An input event arrived from the terminal.
    Crossterm(CrosstermEvent),
}

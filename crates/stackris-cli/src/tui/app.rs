use crossterm::event::Event;
use ratatui::Frame;

/// Application driven by the terminal runner.
pub trait App {
    /// Returns `true` when the application wants to leave the terminal.
    fn should_exit(&self) -> bool;

    /// Reacts to a terminal event.
    fn handle_event(&mut self, event: Event);

    /// Draws the application to the given frame.
    fn draw(&self, frame: &mut Frame);
}

use super::{App, event::TuiEvent, event_loop::EventLoop};

/// Owns the terminal for the lifetime of an [`App`].
///
/// The runner enters the alternate screen, feeds events to the application
/// and redraws after each one, then restores the terminal on exit.
#[derive(Debug, Default)]
pub struct Tui {
    events: EventLoop,
}

impl Tui {
    pub fn new() -> Self {
        Self {
            events: EventLoop::new(),
        }
    }

    pub fn run<A>(mut self, app: &mut A) -> anyhow::Result<()>
    where
        A: App,
    {
        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    TuiEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    TuiEvent::Crossterm(event) => app.handle_event(event),
                }
            }
            Ok(())
        })
    }
}

use crossterm::event::Event;
use ratatui::Frame;
use stackris_engine::PieceSeed;

use crate::{command::play::screens::SessionScreen, tui::App};

#[derive(Debug)]
pub struct PlayApp {
    screen: SessionScreen,
}

impl PlayApp {
    pub fn new(seed: Option<PieceSeed>) -> Self {
        Self {
            screen: SessionScreen::new(seed),
        }
    }

    pub fn seed(&self) -> PieceSeed {
        self.screen.seed()
    }
}

impl App for PlayApp {
    fn should_exit(&self) -> bool {
        self.screen.should_exit()
    }

    fn handle_event(&mut self, event: Event) {
        self.screen.handle_event(&event);
    }

    fn draw(&self, frame: &mut Frame) {
        self.screen.draw(frame);
    }
}

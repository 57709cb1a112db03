use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::{Color, Style},
    text::Text,
};
use stackris_engine::{PieceSeed, SupplySession};

use crate::ui::widgets::SessionDisplay;

const CONTROLS: &str =
    "Controls: 1 (Play) | 2 (Reserve) | 3 (Recall) | 4 (Swap Front/Top) | 5 (Swap Three) | Q (Quit)";

/// Outcome of the most recent command, echoed under the session view.
#[derive(Debug)]
enum Status {
    Info(String),
    Error(String),
}

impl Status {
    fn text(&self) -> &str {
        match self {
            Status::Info(text) | Status::Error(text) => text,
        }
    }

    fn style(&self) -> Style {
        match self {
            Status::Info(_) => Style::default(),
            Status::Error(_) => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug)]
pub struct SessionScreen {
    session: SupplySession,
    status: Option<Status>,
    is_exiting: bool,
}

impl SessionScreen {
    pub fn new(seed: Option<PieceSeed>) -> Self {
        let session = match seed {
            Some(seed) => SupplySession::with_seed(seed),
            None => SupplySession::new(),
        };
        Self {
            session,
            status: None,
            is_exiting: false,
        }
    }

    pub fn seed(&self) -> PieceSeed {
        self.session.seed()
    }

    pub fn should_exit(&self) -> bool {
        self.is_exiting
    }

    pub fn draw(&self, frame: &mut Frame<'_>) {
        let session_display = SessionDisplay::new(&self.session);
        let help_text = Text::from(CONTROLS)
            .style(Style::default().fg(Color::DarkGray))
            .centered();

        let [main_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(session_display.height()),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas::<3>(frame.area());

        frame.render_widget(&session_display, main_area);
        if let Some(status) = &self.status {
            let status_text = Text::from(status.text()).style(status.style()).centered();
            frame.render_widget(status_text, status_area);
        }
        frame.render_widget(help_text, help_area);
    }

    pub fn handle_event(&mut self, event: &Event) {
        if let Some(event) = event.as_key_event() {
            match event.code {
                KeyCode::Char('1') => {
                    let piece = self.session.play_piece();
                    self.status = Some(Status::Info(format!("played {piece}")));
                }
                KeyCode::Char('2') => {
                    self.status = Some(match self.session.reserve_piece() {
                        Ok(piece) => Status::Info(format!("sent {piece} to the reserve")),
                        Err(err) => Status::Error(err.to_string()),
                    });
                }
                KeyCode::Char('3') => {
                    self.status = Some(match self.session.recall_piece() {
                        Ok(piece) => Status::Info(format!("recalled {piece} for play")),
                        Err(err) => Status::Error(err.to_string()),
                    });
                }
                KeyCode::Char('4') => {
                    self.status = Some(match self.session.swap_front_top() {
                        Ok(()) => {
                            Status::Info("swapped the front piece with the reserve top".to_owned())
                        }
                        Err(err) => Status::Error(err.to_string()),
                    });
                }
                KeyCode::Char('5') => {
                    self.status = Some(match self.session.swap_triple() {
                        Ok(()) => {
                            Status::Info("swapped the front three pieces with the reserve".to_owned())
                        }
                        Err(err) => Status::Error(err.to_string()),
                    });
                }
                KeyCode::Char('q' | '0') | KeyCode::Esc => self.is_exiting = true,
                _ => {}
            }
        }
    }
}

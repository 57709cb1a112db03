use stackris_engine::PieceSeed;

use crate::{command::play::app::PlayApp, tui::Tui};

mod app;
mod screens;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Seed for the piece sequence (32 hex characters); random if omitted
    #[clap(long)]
    seed: Option<PieceSeed>,
}

pub(crate) fn run(arg: &PlayArg) -> anyhow::Result<()> {
    let PlayArg { seed } = arg;

    let mut app = PlayApp::new(*seed);

    Tui::new().run(&mut app)?;

    // Printed after the terminal is restored so the sequence can be replayed
    // with `--seed`.
    println!("session seed: {}", app.seed());

    Ok(())
}

//! Terminal entry point: wire one controller to stdin/stdout and play.

use anyhow::Result;
use concentration::{GameController, GameRng, Shell};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so the board rendering on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let controller = GameController::new(GameRng::from_entropy());
    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout();

    Shell::new(controller, stdin, stdout).run()
}

//! Interactive terminal shell.
//!
//! A blocking line loop around the controller: pick the prompt for the
//! current state, read one line, feed it to `step`, and print the tagged
//! output with crossterm styling. All I/O lives here; the core performs
//! none.

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::style::{style, Attribute, Color, StyledContent, Stylize};

use crate::core::PlayerColor;
use crate::game::{GameController, GameState, Identity, Span};

/// The shell loop, generic over its streams so tests can script it.
pub struct Shell<R, W> {
    controller: GameController,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Wrap a controller with an input and output stream.
    pub fn new(controller: GameController, input: R, output: W) -> Self {
        Self {
            controller,
            input,
            output,
        }
    }

    /// Run the game until the player declines a restart or input ends.
    ///
    /// End of input (or a read failure) is the external-interrupt case: the
    /// shell prints the farewell and exits cleanly, with nothing to persist.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let prompt = self.prompt();
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            let mut line = String::new();
            // A failed read is treated like end of input.
            let read = self.input.read_line(&mut line).unwrap_or(0);
            if read == 0 {
                let farewell = style("\nEnding game...".to_string())
                    .with(Color::White)
                    .attribute(Attribute::Bold);
                writeln!(self.output, "{farewell}")?;
                return Ok(());
            }

            let input = line.trim_end_matches(['\r', '\n']);
            let step_output = self.controller.step(input);

            for span in &step_output.spans {
                let styled = self.styled(span);
                write!(self.output, "{styled}")?;
            }
            writeln!(self.output)?;

            // Stop condition: declined the restart offer.
            if self.controller.state() == GameState::GameOver
                && input.eq_ignore_ascii_case("n")
            {
                return Ok(());
            }
        }
    }

    /// Prompt matching the controller's current state.
    fn prompt(&self) -> StyledContent<String> {
        let (identity, text) = match self.controller.state() {
            GameState::NewGame => (Identity::Neutral, "Enter board size (4 or 6): "),
            GameState::FlipCard1 | GameState::FlipCard2 => (
                Identity::Player(self.controller.current_player()),
                "Select a card (eg. A1): ",
            ),
            GameState::GetNextPlayer => (Identity::Neutral, "Press enter to continue: "),
            GameState::GameOver => (Identity::Neutral, "\nRestart game? (Y/N) "),
        };
        self.style_identity(identity, text.to_string())
    }

    fn styled(&self, span: &Span) -> StyledContent<String> {
        self.style_identity(span.identity, span.text.clone())
    }

    fn style_identity(&self, identity: Identity, text: String) -> StyledContent<String> {
        let color = match identity {
            Identity::Player(id) => player_color(self.controller.players()[id].color),
            Identity::Neutral => Color::White,
            Identity::Error => Color::Red,
        };
        style(text).with(color).attribute(Attribute::Bold)
    }
}

fn player_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Green => Color::Green,
        PlayerColor::Yellow => Color::Yellow,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Purple => Color::Magenta,
        PlayerColor::Cyan => Color::Cyan,
    }
}

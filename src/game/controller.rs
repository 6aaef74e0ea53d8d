//! The turn state machine.
//!
//! `GameController` drives a finite state machine over five states. Each
//! step takes one raw input line, validates it, mutates the board and player
//! scores, and returns identity-tagged text plus (implicitly) the next
//! state. The surrounding shell owns all blocking I/O; `step` performs none.
//!
//! ## States
//!
//! ```text
//! NewGame -> FlipCard1 -> FlipCard2 -> GetNextPlayer -> FlipCard1 ...
//!                              |
//!                              v
//!                          GameOver -> NewGame (restart)
//! ```
//!
//! Invalid input never changes state; the error is reported and the shell
//! re-prompts.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Board, BoardSize, Coord};
use crate::core::{GameRng, PlayerId, Players};

use super::error::TurnError;
use super::output::{Span, StepOutput};

/// Named states of the turn machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for a board size ("4" or "6").
    NewGame,
    /// Waiting for the first card coordinate of the turn.
    FlipCard1,
    /// Waiting for the second card coordinate of the turn.
    FlipCard2,
    /// Waiting for any input before handing the turn over.
    GetNextPlayer,
    /// Waiting for a restart decision ("Y"/"N").
    GameOver,
}

/// The game: board, players, current turn, and machine state.
///
/// Owns the board and both players exclusively for its lifetime. All side
/// effects of `step` are confined to those fields; the only randomness is
/// inside card arrangement.
#[derive(Debug)]
pub struct GameController {
    board: Board,
    players: Players,
    current: PlayerId,
    state: GameState,
    rng: GameRng,
}

impl GameController {
    /// Create a controller in the `NewGame` state with default players.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self::with_board(Board::new(), rng)
    }

    /// Create a controller around a specific board (custom icon banks).
    #[must_use]
    pub fn with_board(board: Board, rng: GameRng) -> Self {
        Self {
            board,
            players: Players::default(),
            current: PlayerId::One,
            state: GameState::NewGame,
            rng,
        }
    }

    /// Current machine state; the shell selects its prompt from this.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Both players (scores and display colors).
    #[must_use]
    pub fn players(&self) -> &Players {
        &self.players
    }

    /// The board, for inspection.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Advance the machine by one input line.
    ///
    /// Invalid input produces an `Identity::Error` span and leaves the state
    /// (and all game data) untouched.
    pub fn step(&mut self, input: &str) -> StepOutput {
        let from = self.state;
        let output = match self.try_step(input) {
            Ok(output) => output,
            Err(err) => StepOutput::single(Span::error(format!("Error: {err}"))),
        };
        debug!(?from, to = ?self.state, input, "step");
        output
    }

    fn try_step(&mut self, input: &str) -> Result<StepOutput, TurnError> {
        match self.state {
            GameState::NewGame => self.step_new_game(input),
            GameState::FlipCard1 | GameState::FlipCard2 => self.step_flip(input),
            GameState::GetNextPlayer => Ok(self.step_next_player()),
            GameState::GameOver => self.step_game_over(input),
        }
    }

    /// `NewGame`: take a board size, arrange the cards, start player 1.
    fn step_new_game(&mut self, input: &str) -> Result<StepOutput, TurnError> {
        let size = BoardSize::parse(input).ok_or(TurnError::InvalidBoardSize)?;

        self.board.arrange_cards(size, &mut self.rng);
        self.state = GameState::FlipCard1;

        Ok(StepOutput::single(self.turn_banner(false)))
    }

    /// Shared validation pipeline for both flip states, short-circuiting on
    /// the first failure: format, range, already-matched, and (second flip
    /// only) already-open.
    fn step_flip(&mut self, input: &str) -> Result<StepOutput, TurnError> {
        let coord = Coord::parse(input).ok_or(TurnError::InvalidCoordinateFormat)?;

        if !self.board.card_exists(coord) {
            return Err(TurnError::CoordinateOutOfRange);
        }
        if !self.board.card_unmatched(coord) {
            return Err(TurnError::CardAlreadyMatched);
        }

        if self.state == GameState::FlipCard1 {
            self.board.open_card(coord);
            self.state = GameState::FlipCard2;
            return Ok(StepOutput::single(Span::player(
                self.current,
                format!("{}Card 2", self.board),
            )));
        }

        // Second flip: the cell must still be face down, not the card just
        // opened as card 1.
        if !self.board.card_closed(coord) {
            return Err(TurnError::CardAlreadyOpenThisTurn);
        }

        self.board.open_card(coord);
        let mut text = self.board.to_string();

        let matched = self.board.commit_match();
        if matched {
            self.players[self.current].score += 1;
            text.push_str(&format!(
                "Congratulations! You got a match!\nScore: {}",
                self.players[self.current].score
            ));
        } else {
            text.push_str(&format!(
                "Sorry, it was not a match\nScore: {}",
                self.players[self.current].score
            ));
        }

        self.board.end_turn();

        let mut output = StepOutput::single(Span::player(self.current, text));

        if self.board.check_win() {
            self.append_game_over(&mut output);
            self.state = GameState::GameOver;
        } else {
            self.state = GameState::GetNextPlayer;
        }

        Ok(output)
    }

    /// `GetNextPlayer`: any input continues; the turn passes only if the
    /// previous turn was not a match.
    fn step_next_player(&mut self) -> StepOutput {
        if !self.board.matched() {
            self.current = self.current.opponent();
        }
        self.state = GameState::FlipCard1;
        StepOutput::single(self.turn_banner(true))
    }

    /// `GameOver`: "Y" restarts with fresh scores, "N" ends (the shell's
    /// stop condition), anything else is an error.
    fn step_game_over(&mut self, input: &str) -> Result<StepOutput, TurnError> {
        if input.eq_ignore_ascii_case("y") {
            self.players.reset_scores();
            self.current = PlayerId::One;
            self.state = GameState::NewGame;
            Ok(StepOutput::single(Span::neutral("Restarting game...")))
        } else if input.eq_ignore_ascii_case("n") {
            Ok(StepOutput::single(Span::neutral("Ending game...")))
        } else {
            Err(TurnError::InvalidRestartChoice)
        }
    }

    /// Turn-start banner: player name, board, and the "Card 1" prompt.
    ///
    /// The turn-handoff variant puts a blank line between the title and the
    /// grid; the game-start variant runs them together.
    fn turn_banner(&self, with_gap: bool) -> Span {
        let gap = if with_gap { "\n" } else { "" };
        Span::player(
            self.current,
            format!("\n{}'s turn{gap}{}Card 1", self.current, self.board),
        )
    }

    /// Win/tie announcement plus the final score block.
    fn append_game_over(&self, output: &mut StepOutput) {
        match self.players.leader() {
            Some(winner) => output.push(Span::player(winner, format!("\n\n{winner} wins!"))),
            None => output.push(Span::neutral(
                "\n\nIt's a tie! Guess you're both winners!",
            )),
        }

        output.push(Span::neutral("\n\nFinal Scores:\n"));
        for (id, player) in self.players.iter() {
            let line_break = if id == PlayerId::One { "\n" } else { "" };
            output.push(Span::player(id, format!("{id}: {}{line_break}", player.score)));
        }
    }
}

//! Turn-taking controller for a human against the computer.

use super::action::{IgnoredReason, MoveOutcome, Placement};
use super::invariants::assert_invariants;
use super::strategy::{Computer, Difficulty, ThinkingDelay};
use super::{Board, GameStatus, Move, Position};
use crate::config::GameConfig;
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game controller.
///
/// Owns the live board and the computer opponent. Every mutating call runs
/// to completion, including any computer replies, before returning.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    pub(super) board: Board,
    pub(super) first_mover: Move,
    pub(super) current_move: Move,
    pub(super) user_marker: Move,
    pub(super) game_ended: bool,
    pub(super) winner: Move,
    pub(super) difficulty: Difficulty,
    pub(super) history: Vec<Placement>,
    computer: Computer,
    delay: ThinkingDelay,
    rng: StdRng,
}

/// Externally observable state of a game, for presentation layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    /// Board contents, including winning flags.
    board: Board,
    /// Marker to move next.
    current_move: Move,
    /// True once the game has been won or drawn.
    game_ended: bool,
    /// Winning marker, `Empty` when there is none.
    winner: Move,
    /// Marker that opened this game.
    first_mover: Move,
    /// Computer difficulty.
    difficulty: Difficulty,
    /// Marker played by the human.
    user_marker: Move,
    /// Placements so far.
    history: Vec<Placement>,
}

impl TicTacToe {
    /// Creates a game from `config`.
    ///
    /// X moves first. If the computer plays X it moves at once.
    #[instrument(skip(config), fields(difficulty = %config.difficulty(), user_marker = %config.user_marker()))]
    pub fn new(config: &GameConfig) -> Self {
        let delay = ThinkingDelay::from_millis(*config.thinking_delay_ms());
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        let user_marker = if config.user_marker().is_empty() {
            warn!("Empty user marker, defaulting to X");
            Move::X
        } else {
            *config.user_marker()
        };

        let mut game = Self {
            board: Board::new(),
            first_mover: Move::X,
            current_move: Move::X,
            user_marker,
            game_ended: false,
            winner: Move::Empty,
            difficulty: *config.difficulty(),
            history: Vec::new(),
            computer: Computer::new(*config.difficulty(), delay),
            delay,
            rng,
        };
        game.play_computer_turns();
        game
    }

    /// Returns the live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the marker that opened this game.
    pub fn first_mover(&self) -> Move {
        self.first_mover
    }

    /// Returns the marker to move next.
    pub fn current_move(&self) -> Move {
        self.current_move
    }

    /// Returns the human's marker.
    pub fn user_marker(&self) -> Move {
        self.user_marker
    }

    /// Returns the computer's marker, always the opposite of the human's.
    pub fn computer_marker(&self) -> Move {
        self.user_marker.opposite()
    }

    /// Returns true once the game has been won or drawn.
    pub fn game_ended(&self) -> bool {
        self.game_ended
    }

    /// Returns the winner, or `Move::Empty` if there is none.
    pub fn winner(&self) -> Move {
        self.winner
    }

    /// Returns the configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the active computer opponent.
    pub fn computer(&self) -> &Computer {
        &self.computer
    }

    /// Returns the placements made this game, in order.
    pub fn history(&self) -> &[Placement] {
        &self.history
    }

    /// Derives the current status from the board.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Returns the status line shown to the player.
    pub fn message(&self) -> String {
        if !self.game_ended {
            format!("Player {}'s turn", self.current_move)
        } else if self.winner.is_empty() {
            "Game ended as a draw".to_string()
        } else {
            format!("Winner is {}", self.winner)
        }
    }

    /// Captures every observable field.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            current_move: self.current_move,
            game_ended: self.game_ended,
            winner: self.winner,
            first_mover: self.first_mover,
            difficulty: self.difficulty,
            user_marker: self.user_marker,
            history: self.history.clone(),
        }
    }

    /// Starts a new game.
    ///
    /// The opening side alternates between games. If the computer opens, it
    /// moves before this returns.
    #[instrument(skip(self))]
    pub fn reset_game_state(&mut self) {
        self.board.reset();
        self.computer = Computer::new(self.difficulty, self.delay);
        self.first_mover = self.first_mover.opposite();
        self.current_move = self.first_mover;
        self.game_ended = false;
        self.winner = Move::Empty;
        self.history.clear();
        info!(first_mover = %self.first_mover, "Game reset");

        self.play_computer_turns();
    }

    /// Switches difficulty, replacing the computer with a fresh one.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        self.computer = Computer::new(difficulty, self.delay);
    }

    /// Switches the human to `marker`.
    ///
    /// If the game is running and the computer now holds the marker to move,
    /// the computer plays immediately. `Move::Empty` is ignored.
    #[instrument(skip(self))]
    pub fn set_user_marker(&mut self, marker: Move) {
        if marker.is_empty() {
            warn!("Ignoring empty user marker");
            return;
        }
        self.user_marker = marker;
        self.play_computer_turns();
    }

    /// Places the marker to move at `position`.
    ///
    /// Requests on an occupied square or after the game has ended are
    /// ignored. If the game continues and the computer is next, it replies
    /// before this returns.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, position: Position) -> MoveOutcome {
        if self.game_ended {
            debug!("Ignoring move after game end");
            return MoveOutcome::Ignored(IgnoredReason::GameOver);
        }
        if !self.board.cell(position).is_empty() {
            debug!("Ignoring move on occupied square");
            return MoveOutcome::Ignored(IgnoredReason::SquareOccupied(position));
        }

        self.apply(position);
        self.play_computer_turns();
        MoveOutcome::Applied
    }

    /// Plays computer moves while it is the computer's turn.
    ///
    /// Each iteration fills one empty cell, so this ends within nine plies.
    fn play_computer_turns(&mut self) {
        while !self.game_ended && self.current_move == self.computer_marker() {
            let marker = self.computer_marker();
            let mut simulation = Board::copy_of(&self.board);

            match self.computer.choose_move(&mut simulation, marker, &mut self.rng) {
                Some(position) if self.board.cell(position).is_empty() => {
                    debug!(%marker, %position, "Computer moves");
                    self.apply(position);
                }
                other => {
                    warn!(?other, "Computer produced no playable move");
                    break;
                }
            }
        }
    }

    /// Places the current marker and advances the state machine.
    fn apply(&mut self, position: Position) {
        let marker = self.current_move;
        self.board.place(position, marker);
        self.history.push(Placement::new(marker, position));

        match self.board.status() {
            GameStatus::Won { winner, line } => {
                for pos in line {
                    self.board.set_cell(pos, winner, true);
                }
                self.winner = winner;
                self.game_ended = true;
                info!(%winner, "Game won");
            }
            GameStatus::Draw => {
                self.game_ended = true;
                info!("Game drawn");
            }
            GameStatus::InProgress => {
                self.current_move = marker.opposite();
            }
        }

        assert_invariants(self);
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

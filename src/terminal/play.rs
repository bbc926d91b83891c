//! Line-based interactive play.

use crate::games::tictactoe::{GameStatus, MoveOutcome, Position, TicTacToe};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const HELP: &str = "Enter 1-9 (keypad order) or row,col to move, r to start a new game, q to quit.";

/// Runs an interactive session until `q` or end of input.
///
/// Commands are read one per line from `input`; the board and status line
/// are written to `output` after each command.
#[instrument(skip_all)]
pub fn play_session<R: BufRead, W: Write>(
    game: &mut TicTacToe,
    input: R,
    output: &mut W,
) -> Result<()> {
    info!("Starting terminal session");
    writeln!(output, "{}", HELP)?;
    render(game, output)?;

    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let command = line.trim().to_ascii_lowercase();
        debug!(%command, "Command received");

        match command.as_str() {
            "" => continue,
            "q" | "quit" | "exit" => break,
            "r" | "reset" | "new" => game.reset_game_state(),
            "h" | "help" | "?" => writeln!(output, "{}", HELP)?,
            text => match text.parse::<Position>() {
                Ok(position) => {
                    if let MoveOutcome::Ignored(reason) = game.make_move(position) {
                        writeln!(output, "{}", reason)?;
                    }
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
        }

        render(game, output)?;
    }

    info!("Terminal session finished");
    Ok(())
}

/// Writes the board, the status line and a prompt.
fn render<W: Write>(game: &TicTacToe, output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", game.board())?;
    writeln!(output)?;
    writeln!(output, "{}", game.message())?;

    if let GameStatus::Won { line, .. } = game.status() {
        let labels: Vec<&str> = line.iter().map(|pos| pos.label()).collect();
        writeln!(output, "Winning line: {}", labels.join(", "))?;
    }

    if game.game_ended() {
        writeln!(output, "Type r to play again or q to quit.")?;
    } else {
        write!(output, "Your move ({}): ", game.user_marker())?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::games::tictactoe::{Difficulty, Move};
    use std::io::Cursor;

    fn pro_game() -> TicTacToe {
        TicTacToe::new(&GameConfig::default().with_difficulty(Difficulty::Pro).with_seed(5))
    }

    #[test]
    fn test_session_applies_moves() {
        let mut game = pro_game();
        let mut output = Vec::new();

        play_session(&mut game, Cursor::new("5\nq\n"), &mut output).expect("session runs");

        assert_eq!(game.board().cell(Position::CENTER).marker(), Move::X);
        assert_eq!(game.board().count(Move::O), 1);
        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("Player X's turn"));
    }

    #[test]
    fn test_session_reports_bad_input() {
        let mut game = pro_game();
        let mut output = Vec::new();

        play_session(&mut game, Cursor::new("banana\n5\n5\n"), &mut output).expect("session runs");

        let text = String::from_utf8(output).expect("utf8 output");
        assert!(text.contains("Cannot read 'banana' as a position"));
        assert!(text.contains("already occupied"));
    }

    #[test]
    fn test_session_reset_starts_new_game() {
        let mut game = pro_game();
        let mut output = Vec::new();

        play_session(&mut game, Cursor::new("5\nr\n"), &mut output).expect("session runs");

        // O opens the second game; the computer plays O and takes the corner.
        assert_eq!(game.first_mover(), Move::O);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.board().cell(Position::TOP_LEFT).marker(), Move::O);
    }
}

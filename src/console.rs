//! Line-oriented console front end.
//!
//! Reads one command per line and drives a [`GameEngine`]. Accepted forms:
//!
//! - `c3 c6`: move the piece centered on c3 so it is centered on c6
//! - `c3 n 3`: move the piece centered on c3 three cells north
//! - `board`, `moves`, `resign`, `help`, `quit`

use crate::games::gess::{Coord, Direction, GameEngine, MoveError, TurnResult, TurnState};
use derive_more::{Display, From};
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

const HELP: &str = "\
Commands:
  <from> <to>            e.g. `c3 c6`
  <from> <dir> <dist>    e.g. `c3 n 3` (dir: n ne e se s sw w nw)
  board | moves | resign | help | quit";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Move by origin and destination.
    MoveTo(Coord, Coord),
    /// Move by origin, direction and distance.
    Slide(Coord, Direction, i32),
    /// Print the board.
    Board,
    /// List legal moves.
    Moves,
    /// Resign for the player on turn.
    Resign,
    /// Print help.
    Help,
    /// Leave the game.
    Quit,
}

/// Error parsing a console command.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum CommandError {
    /// Wrong number of words or an unknown keyword.
    #[display("Unrecognized command {:?} (try `help`)", _0)]
    Unrecognized(String),

    /// A coordinate failed to parse.
    #[display("{}", _0)]
    #[from]
    Coord(crate::games::gess::CoordError),

    /// A direction failed to parse.
    #[display("Unknown direction {:?}", _0)]
    Direction(String),

    /// A distance failed to parse.
    #[display("Invalid distance {:?}", _0)]
    Distance(String),
}

impl std::error::Error for CommandError {}

impl std::str::FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            ["board"] => Ok(Command::Board),
            ["moves"] => Ok(Command::Moves),
            ["resign"] => Ok(Command::Resign),
            ["help"] => Ok(Command::Help),
            ["quit"] | ["exit"] => Ok(Command::Quit),
            [from, to] => Ok(Command::MoveTo(from.parse()?, to.parse()?)),
            [from, direction, distance] => {
                let direction = direction
                    .parse()
                    .map_err(|_| CommandError::Direction(direction.to_string()))?;
                let distance = distance
                    .parse()
                    .map_err(|_| CommandError::Distance(distance.to_string()))?;
                Ok(Command::Slide(from.parse()?, direction, distance))
            }
            _ => Err(CommandError::Unrecognized(line.trim().to_string())),
        }
    }
}

/// Runs a game until it ends, the input closes, or the players quit.
#[instrument(skip_all)]
pub fn run(
    engine: &mut GameEngine,
    input: impl BufRead,
    mut output: impl Write,
) -> std::io::Result<()> {
    writeln!(output, "{}\n", engine.grid())?;
    writeln!(output, "{}", HELP)?;
    prompt(engine, &mut output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt(engine, &mut output)?;
            continue;
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                prompt(engine, &mut output)?;
                continue;
            }
        };
        debug!(?command, "Console command");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Board => writeln!(output, "{}", engine.grid())?,
            Command::Moves => {
                let moves = engine.legal_moves();
                writeln!(output, "{} legal moves", moves.len())?;
                for mv in moves {
                    writeln!(output, "  {}", mv)?;
                }
            }
            Command::Resign => match engine.to_move() {
                Some(player) => {
                    let outcome = engine.resign(player).map_err(std::io::Error::other)?;
                    writeln!(output, "{} resigns. {}", player, outcome)?;
                }
                None => writeln!(output, "{}", MoveError::GameAlreadyOver)?,
            },
            Command::MoveTo(from, to) => {
                let result = engine.submit_move_to(from, to);
                report(engine, result, &mut output)?;
            }
            Command::Slide(from, direction, distance) => {
                let result = engine.submit_move(from, direction, distance);
                report(engine, result, &mut output)?;
            }
        }

        if engine.outcome().is_over() {
            writeln!(output, "Game over: {}", engine.outcome())?;
            break;
        }
        prompt(engine, &mut output)?;
    }
    Ok(())
}

fn report(
    engine: &GameEngine,
    result: Result<TurnResult, MoveError>,
    output: &mut impl Write,
) -> std::io::Result<()> {
    match result {
        Ok(turn) => {
            writeln!(output, "{}", engine.grid())?;
            if !turn.captures().is_empty() {
                let cells: Vec<String> = turn
                    .captures()
                    .iter()
                    .map(|c| format!("{} ({})", c.coord, c.player))
                    .collect();
                writeln!(output, "Captured: {}", cells.join(", "))?;
            }
            if let TurnState::Finished(outcome) = turn.next() {
                writeln!(output, "{}", outcome)?;
            }
        }
        Err(e) => writeln!(output, "Illegal move: {}", e)?,
    }
    Ok(())
}

fn prompt(engine: &GameEngine, output: &mut impl Write) -> std::io::Result<()> {
    if let Some(player) = engine.to_move() {
        write!(output, "{} to move> ", player)?;
        output.flush()?;
    }
    Ok(())
}

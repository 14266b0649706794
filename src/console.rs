#![cfg(feature = "std")]

//! Line-oriented console front end. Reading and writing go through an
//! injected `BufRead`/`Write` pair so sessions can be driven from memory.

use std::io::{self, BufRead, Write};

use crate::common::{MoveError, MoveResult, ParseError, Player};
use crate::game::Game;

/// How a console session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Input ended before the game was decided.
    Withdrawn,
    Won { player: Player, name: String },
}

/// Parse `row, column` into a pair of integers.
///
/// Whitespace anywhere is ignored. Components beyond the second are ignored.
pub fn parse_coordinate(input: &str) -> Result<(i64, i64), ParseError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut parts = compact.split(',');
    let (row, column) = match (parts.next(), parts.next()) {
        (Some(r), Some(c)) => (r, c),
        _ => return Err(ParseError::MissingComponent),
    };
    let parse = |s: &str| {
        s.parse::<i64>()
            .map_err(|_| ParseError::InvalidNumber(s.to_string()))
    };
    Ok((parse(row)?, parse(column)?))
}

pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Console::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and return the writer, e.g. to inspect captured output.
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Read one line without its trailing newline. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.writer, "{}", text)?;
        self.writer.flush()
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    /// Ask for a player's name until a non-blank line arrives.
    pub fn prompt_name(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        loop {
            self.prompt(&format!("Input your name {}: ", label))?;
            match self.read_line()? {
                None => return Ok(None),
                Some(name) if name.trim().is_empty() => continue,
                Some(name) => return Ok(Some(name.trim().to_string())),
            }
        }
    }

    /// Ask for a `row, column` pair until one parses.
    pub fn prompt_coordinate(&mut self) -> anyhow::Result<Option<(i64, i64)>> {
        loop {
            self.prompt("Input coordinate (row, column): ")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_coordinate(&line) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => self.say(&format!("✗ {}", e))?,
            }
        }
    }
}

/// Run a full two-player session on `game`.
///
/// Returns when a player wins or input ends. Only I/O failures are errors.
pub fn run_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut Game,
) -> anyhow::Result<SessionOutcome> {
    console.say("Welcome to TicTacToe for the console.")?;
    log::info!(
        "session start: {}x{} board, anti-diagonal wins {}",
        game.board().size(),
        game.board().size(),
        if game.rules().anti_diagonal { "on" } else { "off" }
    );

    let Some(name_x) = console.prompt_name("player X")? else {
        return withdraw(console);
    };
    let Some(name_o) = console.prompt_name("player O")? else {
        return withdraw(console);
    };
    let name_of = |p: Player| match p {
        Player::X => name_x.as_str(),
        Player::O => name_o.as_str(),
    };
    console.say("\nStart Game\n")?;

    loop {
        let Some((row, column)) = console.prompt_coordinate()? else {
            return withdraw(console);
        };
        match game.apply_move(row, column) {
            Ok(result) => {
                console.say(&game.board().render())?;
                match result {
                    MoveResult::Continue { next } => {
                        console.say(&format!("\n{}'s turn ({})\n", name_of(next), next))?;
                    }
                    MoveResult::Win(player) => {
                        let name = name_of(player).to_string();
                        console.say(&format!("\n{} wins!\n", name))?;
                        return Ok(SessionOutcome::Won { player, name });
                    }
                }
            }
            Err(e @ (MoveError::OutOfBounds { .. } | MoveError::CellOccupied { .. })) => {
                log::warn!("rejected move ({}, {}): {}", row, column, e);
                console.say(&format!("✗ {}", e))?;
            }
            Err(MoveError::GameAlreadyOver) => {
                // Only reachable when the game was already won on entry.
                return Ok(match game.winner() {
                    Some(player) => SessionOutcome::Won {
                        player,
                        name: name_of(player).to_string(),
                    },
                    None => SessionOutcome::Withdrawn,
                });
            }
        }
    }
}

fn withdraw<R: BufRead, W: Write>(console: &mut Console<R, W>) -> anyhow::Result<SessionOutcome> {
    console.say("\nGoodbye stranger...")?;
    Ok(SessionOutcome::Withdrawn)
}

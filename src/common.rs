//! Common types for tic-tac-toe: players, cell symbols, move outcomes and errors.

use alloc::string::String;

/// One of the two players sharing the terminal. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opponent of this player.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_char(self) -> char {
        Symbol::from(self).as_char()
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Symbol {
    #[default]
    Empty,
    X,
    O,
}

impl Symbol {
    /// Character drawn for this symbol; a blank for `Empty`.
    pub fn as_char(self) -> char {
        match self {
            Symbol::Empty => ' ',
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Symbol::Empty
    }

    /// The player owning this symbol, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Symbol::Empty => None,
            Symbol::X => Some(Player::X),
            Symbol::O => Some(Player::O),
        }
    }
}

impl From<Player> for Symbol {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Symbol::X,
            Player::O => Symbol::O,
        }
    }
}

/// Outcome of a move that was applied to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// No winner yet; `next` is now the active player.
    Continue { next: Player },
    /// The move completed a line for this player.
    Win(Player),
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Row or column index is out of bounds [0..N).
    OutOfBounds { row: usize, column: usize },
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { row, column } => {
                write!(f, "Cell ({}, {}) is outside the board", row, column)
            }
        }
    }
}

/// Rejections from `Game::apply_move`. None of them change game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Coordinate is outside the grid.
    OutOfBounds { row: i64, column: i64 },
    /// Target cell already holds a symbol.
    CellOccupied { row: usize, column: usize },
    /// A winner was already declared.
    GameAlreadyOver,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::OutOfBounds { row, column } => MoveError::OutOfBounds {
                row: row as i64,
                column: column as i64,
            },
        }
    }
}

impl core::fmt::Display for MoveError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MoveError::OutOfBounds { row, column } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, column)
            }
            MoveError::CellOccupied { row, column } => {
                write!(f, "Cell ({}, {}) is already taken", row, column)
            }
            MoveError::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

/// Malformed coordinate text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer than two comma-separated components.
    MissingComponent,
    /// A component is not an integer.
    InvalidNumber(String),
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseError::MissingComponent => {
                write!(f, "Expected two numbers separated by a comma (e.g. 1, 2)")
            }
            ParseError::InvalidNumber(s) => write!(f, "Invalid number '{}'", s),
        }
    }
}

/// Errors from building configuration values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board side length is not one of the allowed sizes.
    UnsupportedSize(usize),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::UnsupportedSize(n) => {
                write!(f, "Unsupported board size {} (allowed: 3, 5, 7)", n)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
#[cfg(feature = "std")]
impl std::error::Error for MoveError {}
#[cfg(feature = "std")]
impl std::error::Error for ParseError {}
#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

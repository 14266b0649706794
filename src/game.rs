use crate::{
    board::Board,
    common::{MoveError, MoveResult, Player, Symbol},
    config::{BoardSize, WinRules},
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the given player to move.
    AwaitingMove(Player),
    /// Terminal: the given player completed a line.
    Won(Player),
}

/// Turn state and move orchestration for a single game.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    status: GameStatus,
    moves: usize,
    rules: WinRules,
}

impl Game {
    /// Create a new game with default rules. `X` moves first.
    pub fn new(size: BoardSize) -> Self {
        Self::with_rules(size, WinRules::default())
    }

    pub fn with_rules(size: BoardSize, rules: WinRules) -> Self {
        Self {
            board: Board::new(size),
            status: GameStatus::AwaitingMove(Player::X),
            moves: 0,
            rules,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn rules(&self) -> WinRules {
        self.rules
    }

    /// Number of moves applied so far.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// The player whose move is awaited, or `None` once the game is won.
    pub fn active_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::AwaitingMove(p) => Some(p),
            GameStatus::Won(_) => None,
        }
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(p) => Some(p),
            GameStatus::AwaitingMove(_) => None,
        }
    }

    /// Fewest total moves after which the first player can own a full line.
    pub fn min_moves_for_win(&self) -> usize {
        2 * self.board.size() - 1
    }

    /// Validate and apply a move for the active player.
    ///
    /// Rejections leave the board, the move counter and the active player
    /// untouched.
    pub fn apply_move(&mut self, row: i64, column: i64) -> Result<MoveResult, MoveError> {
        let player = match self.status {
            GameStatus::Won(_) => return Err(MoveError::GameAlreadyOver),
            GameStatus::AwaitingMove(p) => p,
        };
        if !self.board.is_in_bounds(row, column) {
            return Err(MoveError::OutOfBounds { row, column });
        }
        let (r, c) = (row as usize, column as usize);
        if !self.board.get(r, c)?.is_empty() {
            return Err(MoveError::CellOccupied { row: r, column: c });
        }

        self.board.set(r, c, Symbol::from(player))?;
        self.moves += 1;
        log::debug!("move {}: {} at ({}, {})", self.moves, player, r, c);

        if self.moves >= self.min_moves_for_win() && self.completes_line(r, c) {
            self.status = GameStatus::Won(player);
            log::info!("{} wins after {} moves", player, self.moves);
            return Ok(MoveResult::Win(player));
        }

        let next = player.other();
        self.status = GameStatus::AwaitingMove(next);
        Ok(MoveResult::Continue { next })
    }

    /// True if a line through the anchor cell (row, column) is uniformly
    /// filled with the anchor's symbol.
    fn completes_line(&self, row: usize, column: usize) -> bool {
        let anchor = match self.board.get(row, column) {
            Ok(s) if !s.is_empty() => s,
            _ => return false,
        };
        let n = self.board.size();
        is_uniform(self.board.row(row), anchor)
            || is_uniform(self.board.column(column), anchor)
            || (row == column && is_uniform(self.board.diagonal(), anchor))
            || (self.rules.anti_diagonal
                && row + column == n - 1
                && is_uniform(self.board.anti_diagonal(), anchor))
    }
}

fn is_uniform(mut line: impl Iterator<Item = Symbol>, anchor: Symbol) -> bool {
    line.all(|s| s == anchor)
}

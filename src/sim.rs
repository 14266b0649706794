#![cfg(feature = "std")]

//! Random-vs-random self play, used by the `sim` binary.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::common::{MoveResult, Player};
use crate::config::{BoardSize, WinRules};
use crate::game::Game;

/// JSON-friendly result of a simulated game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    pub size: usize,
    pub moves: usize,
    pub winner: Option<Player>,
    pub board: String,
}

/// Play one game where each player picks a uniformly random empty cell.
///
/// X draws from an RNG seeded with `seed`, O from `seed + 1`. The game stops
/// at the first win or when no empty cell is left.
pub fn play_random(seed: u64, size: BoardSize, rules: WinRules) -> anyhow::Result<GameSummary> {
    let mut rng_x = SmallRng::seed_from_u64(seed);
    let mut rng_o = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut game = Game::with_rules(size, rules);

    while let Some(player) = game.active_player() {
        let empty = game.board().empty_cells();
        if empty.is_empty() {
            log::debug!("board full after {} moves, no winner", game.move_count());
            break;
        }
        let rng = match player {
            Player::X => &mut rng_x,
            Player::O => &mut rng_o,
        };
        let (r, c) = empty[rng.random_range(0..empty.len())];
        if let MoveResult::Win(_) = game.apply_move(r as i64, c as i64)? {
            break;
        }
    }

    Ok(GameSummary {
        size: game.board().size(),
        moves: game.move_count(),
        winner: game.winner(),
        board: game.board().render(),
    })
}

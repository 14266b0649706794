use tictactoe::{
    BoardSize, Game, GameStatus, MoveError, MoveResult, Player, Symbol, WinRules,
};

fn play(game: &mut Game, moves: &[(i64, i64)]) -> MoveResult {
    let mut last = None;
    for &(r, c) in moves {
        last = Some(game.apply_move(r, c).unwrap());
    }
    last.expect("at least one move")
}

#[test]
fn test_initial_state() {
    let game = Game::new(BoardSize::Small);
    assert_eq!(game.status(), GameStatus::AwaitingMove(Player::X));
    assert_eq!(game.active_player(), Some(Player::X));
    assert_eq!(game.move_count(), 0);
    assert_eq!(game.winner(), None);
    assert_eq!(game.rules(), WinRules::default());
}

#[test]
fn test_turns_alternate() {
    let mut game = Game::new(BoardSize::Small);
    assert_eq!(
        game.apply_move(0, 0).unwrap(),
        MoveResult::Continue { next: Player::O }
    );
    assert_eq!(game.active_player(), Some(Player::O));
    assert_eq!(
        game.apply_move(1, 1).unwrap(),
        MoveResult::Continue { next: Player::X }
    );
    assert_eq!(game.active_player(), Some(Player::X));
    assert_eq!(game.board().get(0, 0).unwrap(), Symbol::X);
    assert_eq!(game.board().get(1, 1).unwrap(), Symbol::O);
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_out_of_bounds_leaves_state_unchanged() {
    let mut game = Game::new(BoardSize::Small);
    game.apply_move(0, 0).unwrap();
    let before = game.board().render();
    for (r, c) in [(3, 0), (0, 3), (-1, 1), (1, -5), (100, 100)] {
        assert_eq!(
            game.apply_move(r, c).unwrap_err(),
            MoveError::OutOfBounds { row: r, column: c }
        );
    }
    assert_eq!(game.board().render(), before);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.active_player(), Some(Player::O));
}

#[test]
fn test_occupied_cell_leaves_state_unchanged() {
    let mut game = Game::new(BoardSize::Small);
    game.apply_move(1, 2).unwrap();
    let before = game.board().render();
    assert_eq!(
        game.apply_move(1, 2).unwrap_err(),
        MoveError::CellOccupied { row: 1, column: 2 }
    );
    assert_eq!(game.board().render(), before);
    assert_eq!(game.board().get(1, 2).unwrap(), Symbol::X);
    assert_eq!(game.move_count(), 1);
    assert_eq!(game.active_player(), Some(Player::O));
}

#[test]
fn test_row_win() {
    let mut game = Game::new(BoardSize::Small);
    let result = play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(result, MoveResult::Win(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.active_player(), None);
}

#[test]
fn test_column_win() {
    let mut game = Game::new(BoardSize::Small);
    let result = play(&mut game, &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 0)]);
    assert_eq!(result, MoveResult::Win(Player::X));
}

#[test]
fn test_diagonal_win() {
    let mut game = Game::new(BoardSize::Small);
    let result = play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(result, MoveResult::Win(Player::X));
}

#[test]
fn test_second_player_can_win() {
    let mut game = Game::new(BoardSize::Small);
    let result = play(
        &mut game,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)],
    );
    assert_eq!(result, MoveResult::Win(Player::O));
    assert_eq!(game.winner(), Some(Player::O));
}

#[test]
fn test_anti_diagonal_detected_by_default() {
    let mut game = Game::new(BoardSize::Small);
    let result = play(&mut game, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(result, MoveResult::Win(Player::X));
}

#[test]
fn test_anti_diagonal_ignored_by_classic_rules() {
    let mut game = Game::with_rules(BoardSize::Small, WinRules::classic());
    let result = play(&mut game, &[(0, 2), (0, 0), (1, 1), (0, 1), (2, 0)]);
    assert_eq!(result, MoveResult::Continue { next: Player::O });
    assert_eq!(game.winner(), None);
}

#[test]
fn test_classic_rules_still_detect_main_diagonal() {
    let mut game = Game::with_rules(BoardSize::Small, WinRules::classic());
    let result = play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(result, MoveResult::Win(Player::X));
}

#[test]
fn test_moves_after_win_are_rejected() {
    let mut game = Game::new(BoardSize::Small);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let before = game.board().render();
    assert_eq!(
        game.apply_move(2, 2).unwrap_err(),
        MoveError::GameAlreadyOver
    );
    assert_eq!(game.apply_move(9, 9).unwrap_err(), MoveError::GameAlreadyOver);
    assert_eq!(game.board().render(), before);
    assert_eq!(game.move_count(), 5);
}

#[test]
fn test_min_moves_for_win() {
    assert_eq!(Game::new(BoardSize::Small).min_moves_for_win(), 5);
    assert_eq!(Game::new(BoardSize::Middle).min_moves_for_win(), 9);
    assert_eq!(Game::new(BoardSize::Large).min_moves_for_win(), 13);
}

#[test]
fn test_middle_board_row_needs_all_five_cells() {
    let mut game = Game::new(BoardSize::Middle);
    // X fills row 2 except its last cell, O plays on row 4.
    let result = play(
        &mut game,
        &[(2, 0), (4, 0), (2, 1), (4, 1), (2, 2), (4, 2), (2, 3), (4, 4)],
    );
    assert_eq!(result, MoveResult::Continue { next: Player::X });
    assert_eq!(game.apply_move(2, 4).unwrap(), MoveResult::Win(Player::X));
    assert_eq!(game.move_count(), 9);
}

#[test]
fn test_full_board_without_winner_keeps_awaiting() {
    let mut game = Game::new(BoardSize::Small);
    // X O X / X O O / O X X
    let result = play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(result, MoveResult::Continue { next: Player::O });
    assert!(game.board().empty_cells().is_empty());
    for r in 0..3 {
        for c in 0..3 {
            assert!(matches!(
                game.apply_move(r, c),
                Err(MoveError::CellOccupied { .. })
            ));
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Playing (move that does not light the whole board)
/// - Playing -> Won (first move after which every cell is lit)
///
/// Won is terminal for the session.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
}

impl GameState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A game session from the generated board to the win. Owns its board
/// exclusively; each move replaces it with the post-move copy in one step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    state: GameState,
    move_count: u32,
}

impl Game {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            move_count: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn size(&self) -> Coord2 {
        self.board.size()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, coords: Coord2) -> bool {
        self.board[coords]
    }

    /// In-bounds moves made so far; no-op moves are not counted.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Applies a player move. Total over all integer coordinates:
    /// out-of-bounds moves and moves after the win are accepted no-ops,
    /// never errors. The win check runs after every move application,
    /// no-ops included.
    pub fn toggle(&mut self, mv: (i32, i32)) -> ToggleOutcome {
        if self.state.is_won() {
            return ToggleOutcome::NoChange;
        }

        let in_bounds = self.board.contains(mv);
        self.board = self.board.apply_move(mv);
        if in_bounds {
            self.move_count = self.move_count.saturating_add(1);
        }

        if self.board.is_all_lit() {
            self.state = GameState::Won;
            log::debug!("board fully lit after {} moves", self.move_count);
            ToggleOutcome::Won
        } else if in_bounds {
            ToggleOutcome::Toggled
        } else {
            ToggleOutcome::NoChange
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_board_is_won_in_one_move() {
        let mut game = Game::new(Board::all_dark((1, 1)));

        let outcome = game.toggle((0, 0));

        assert_eq!(outcome, ToggleOutcome::Won);
        assert_eq!(game.state(), GameState::Won);
        assert!(game.cell_at((0, 0)));
    }

    #[test]
    fn two_by_two_diagonal_sequence_does_not_win() {
        let mut game = Game::new(Board::all_dark((2, 2)));

        assert_eq!(game.toggle((0, 0)), ToggleOutcome::Toggled);
        assert_eq!(game.toggle((1, 1)), ToggleOutcome::Toggled);

        assert_eq!(game.state(), GameState::Playing);
        assert!(game.cell_at((0, 0)));
        assert!(game.cell_at((1, 1)));
        assert!(!game.cell_at((0, 1)));
        assert!(!game.cell_at((1, 0)));
    }

    #[test]
    fn out_of_bounds_move_changes_nothing() {
        let mut game = Game::new(Board::from_lit_coords((3, 3), &[(0, 0)]).unwrap());
        let before = game.board().clone();

        assert_eq!(game.toggle((-1, 1)), ToggleOutcome::NoChange);
        assert_eq!(game.toggle((1, 3)), ToggleOutcome::NoChange);

        assert_eq!(game.board(), &before);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.state(), GameState::Playing);
    }

    #[test]
    fn won_state_latches_and_later_moves_are_noops() {
        let mut game = Game::new(Board::all_dark((1, 2)));

        assert_eq!(game.toggle((0, 0)), ToggleOutcome::Won);
        let won_board = game.board().clone();

        assert_eq!(game.toggle((0, 1)), ToggleOutcome::NoChange);
        assert_eq!(game.toggle((0, 0)), ToggleOutcome::NoChange);

        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.board(), &won_board);
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn win_check_runs_even_for_noop_moves() {
        // A board that is already fully lit has not been "won" until a move
        // is applied; the check after a no-op move is enough.
        let mut game = Game::new(Board::from_lit_coords((1, 1), &[(0, 0)]).unwrap());
        assert_eq!(game.state(), GameState::Playing);

        assert_eq!(game.toggle((5, 5)), ToggleOutcome::Won);
        assert_eq!(game.state(), GameState::Won);
    }

    #[test]
    fn session_round_trips_through_serde() {
        let mut game = Game::new(Board::all_dark((3, 4)));
        game.toggle((1, 2));
        game.toggle((0, 0));

        let encoded = serde_json::to_string(&game).unwrap();
        let decoded: Game = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, game);
    }
}

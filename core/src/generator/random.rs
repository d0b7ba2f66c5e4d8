use rand::prelude::*;

use super::*;

/// Generation strategy that scrambles the all-dark board with random toggle
/// moves. The toggle is self-inverse and toggles commute, so the result is
/// always solvable by replaying the same moves in any order.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R> {
    rng: R,
}

impl RandomBoardGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Like [`BoardGenerator::generate`], but also returns the scramble
    /// moves in the order they were applied.
    pub fn generate_with_trace(mut self, config: GameConfig) -> (Board, Vec<Coord2>) {
        let (rows, cols) = config.size;
        let num_moves = match config.target_moves {
            MoveBudget::Exact(n) => n,
            MoveBudget::Random => self
                .rng
                .random_range(1..=u32::from(config.total_cells())),
        };
        log::debug!("scrambling {:?} board with {} moves", config.size, num_moves);

        let mut board = Board::all_dark(config.size);
        let mut trace = Vec::with_capacity(num_moves as usize);
        for _ in 0..num_moves {
            let coords = (
                self.rng.random_range(0..rows),
                self.rng.random_range(0..cols),
            );
            board.toggle(coords);
            trace.push(coords);
        }

        if board.is_all_lit() {
            log::warn!("scramble produced an already-lit board");
        }
        (board, trace)
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(self, config: GameConfig) -> Board {
        self.generate_with_trace(config).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(mut board: Board, trace: &[Coord2]) -> Board {
        for &(row, col) in trace {
            board = board.apply_move((i32::from(row), i32::from(col)));
        }
        board
    }

    #[test]
    fn zero_budget_yields_the_all_dark_board() {
        let config = GameConfig::new((4, 7), 0).unwrap();

        let (board, trace) = RandomBoardGenerator::from_seed(1).generate_with_trace(config);

        assert!(board.is_all_dark());
        assert!(trace.is_empty());
    }

    #[test]
    fn replaying_the_trace_restores_the_all_dark_board() {
        for seed in 0..20 {
            let config = GameConfig::new((5, 5), 15).unwrap();

            let (board, trace) =
                RandomBoardGenerator::from_seed(seed).generate_with_trace(config);

            assert_eq!(trace.len(), 15);
            assert!(replay(board, &trace).is_all_dark(), "seed {}", seed);
        }
    }

    #[test]
    fn random_budget_stays_within_one_to_total_cells() {
        for seed in 0..20 {
            let config = GameConfig::new((3, 4), -1).unwrap();

            let (board, trace) =
                RandomBoardGenerator::from_seed(seed).generate_with_trace(config);

            assert!((1..=12).contains(&trace.len()), "seed {}", seed);
            assert!(replay(board, &trace).is_all_dark(), "seed {}", seed);
        }
    }

    #[test]
    fn generation_is_deterministic_for_a_seed() {
        let config = GameConfig::new((6, 6), -1).unwrap();

        let first = RandomBoardGenerator::from_seed(42).generate(config);
        let second = RandomBoardGenerator::from_seed(42).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn scramble_moves_stay_on_the_board() {
        let config = GameConfig::new((2, 9), 50).unwrap();

        let (_, trace) = RandomBoardGenerator::from_seed(7).generate_with_trace(config);

        assert!(trace.iter().all(|&(row, col)| row < 2 && col < 9));
    }
}

//! Conway's Game of Life over a sparse, unbounded board
//!
//! The board stores live cells only. Each generation is computed as a
//! brand new board; the previous one is never mutated in place. Only
//! cells adjacent to at least one live cell can change state, so the
//! transition walks live cells and their neighborhoods instead of the
//! whole lattice.

use heapless::FnvIndexSet;
use rand::Rng;

use crate::grid::Cell;

/// Maximum live cells tracked at once (power of two for the index set).
/// The seed density keeps realistic populations far below this; cells
/// past the cap are dropped on insert.
pub const MAX_CELLS: usize = 1024;

/// Seeded epochs per Life invocation.
pub const EPOCHS: u8 = 5;

/// Generations rendered per epoch.
pub const GENERATIONS_PER_EPOCH: u16 = 500;

/// Seed population as a percentage of total grid cells.
pub const SEED_DENSITY_PCT: u32 = 33;

/// Seconds the seed generation stays up, so the viewer can read it.
pub const SEED_PAUSE_SECS: u64 = 3;

/// Milliseconds between rendered generations.
pub const FRAME_INTERVAL_MS: u64 = 50;

/// The set of currently live cells.
pub type Board = FnvIndexSet<Cell, MAX_CELLS>;

/// Compute the next generation under the standard B3/S23 rule.
///
/// A cell is live in the result iff it has exactly 3 live neighbors, or
/// has exactly 2 and is currently live. Candidates are the live cells
/// and their 8-neighborhoods; everything else is dead on both sides of
/// the transition. An empty board is a fixed point.
pub fn transition(board: &Board) -> Board {
    let mut next = Board::new();
    for &cell in board.iter() {
        evaluate(board, cell, &mut next);
        for neighbor in cell.neighbors() {
            evaluate(board, neighbor, &mut next);
        }
    }
    next
}

/// Apply the survival/birth rule to one candidate cell.
fn evaluate(board: &Board, candidate: Cell, next: &mut Board) {
    if next.contains(&candidate) {
        return;
    }
    let count = live_neighbors(board, candidate);
    if count == 3 || (count == 2 && board.contains(&candidate)) {
        let _ = next.insert(candidate);
    }
}

/// Count live cells in the candidate's Moore neighborhood.
fn live_neighbors(board: &Board, cell: Cell) -> usize {
    cell.neighbors()
        .iter()
        .filter(|n| board.contains(n))
        .count()
}

/// Seed a board at roughly [`SEED_DENSITY_PCT`] of the grid.
///
/// Coordinates are sampled inclusive of `cols` and `rows`, one past the
/// last visible column/row; those cells are clipped at render time.
/// Duplicate draws collapse under set semantics, so the live population
/// lands at or slightly below the target count.
pub fn seed(rng: &mut impl Rng, cols: u16, rows: u16) -> Board {
    let population = cols as u32 * rows as u32 * SEED_DENSITY_PCT / 100;
    let mut board = Board::new();
    for _ in 0..population {
        let cell = Cell::new(
            rng.random_range(0..=cols as i16),
            rng.random_range(0..=rows as i16),
        );
        let _ = board.insert(cell);
    }
    board
}

/// Drives repeated seeded epochs of the Life rule.
///
/// Each epoch starts from a fresh random seeding and runs for a fixed
/// generation count. There is no stagnation or extinction detection;
/// the run is purely time bounded.
#[derive(Debug)]
pub struct LifeSession {
    board: Board,
    epoch: u8,
    generation: u16,
    cols: u16,
    rows: u16,
}

impl LifeSession {
    /// Seed the first epoch on a `cols` x `rows` grid.
    pub fn new(rng: &mut impl Rng, cols: u16, rows: u16) -> Self {
        Self {
            board: seed(rng, cols, rows),
            epoch: 0,
            generation: 0,
            cols,
            rows,
        }
    }

    /// The board to render for the current generation.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Zero-based index of the current epoch.
    pub fn epoch(&self) -> u8 {
        self.epoch
    }

    /// Whether the current generation is an epoch's freshly seeded
    /// board. The renderer overlays the mode label on these frames and
    /// the runner holds them for [`SEED_PAUSE_SECS`].
    pub fn is_seed_frame(&self) -> bool {
        self.generation == 0
    }

    /// Step to the next generation, reseeding at epoch boundaries.
    ///
    /// Returns `false` once all epochs have run; the session is then
    /// finished and the board should no longer be rendered.
    pub fn advance(&mut self, rng: &mut impl Rng) -> bool {
        self.generation += 1;
        if self.generation == GENERATIONS_PER_EPOCH {
            self.epoch += 1;
            if self.epoch == EPOCHS {
                return false;
            }
            self.generation = 0;
            self.board = seed(rng, self.cols, self.rows);
        } else {
            self.board = transition(&self.board);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn board_of(cells: &[(i16, i16)]) -> Board {
        let mut board = Board::new();
        for &(x, y) in cells {
            let _ = board.insert(Cell::new(x, y));
        }
        board
    }

    fn boards_equal(a: &Board, b: &Board) -> bool {
        a.len() == b.len() && a.iter().all(|cell| b.contains(cell))
    }

    /// Full-grid reference rule over the bounding box of the live cells,
    /// padded by one so every possible birth site is visited.
    fn brute_force(board: &Board) -> Board {
        let mut next = Board::new();
        let Some(first) = board.iter().next() else {
            return next;
        };
        let (mut min_x, mut max_x, mut min_y, mut max_y) =
            (first.x, first.x, first.y, first.y);
        for cell in board.iter() {
            min_x = min_x.min(cell.x);
            max_x = max_x.max(cell.x);
            min_y = min_y.min(cell.y);
            max_y = max_y.max(cell.y);
        }
        for y in (min_y - 1)..=(max_y + 1) {
            for x in (min_x - 1)..=(max_x + 1) {
                let cell = Cell::new(x, y);
                let count = live_neighbors(board, cell);
                if count == 3 || (count == 2 && board.contains(&cell)) {
                    let _ = next.insert(cell);
                }
            }
        }
        next
    }

    #[test]
    fn test_empty_board_is_fixed_point() {
        let empty = Board::new();
        assert!(transition(&empty).is_empty());
        assert!(transition(&transition(&empty)).is_empty());
    }

    #[test]
    fn test_lone_cell_dies() {
        let board = board_of(&[(0, 0)]);
        assert!(transition(&board).is_empty());
    }

    #[test]
    fn test_block_is_stable() {
        let block = board_of(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert!(boards_equal(&transition(&block), &block));
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let vertical = board_of(&[(1, 1), (1, 2), (1, 3)]);
        let horizontal = board_of(&[(0, 2), (1, 2), (2, 2)]);

        let once = transition(&vertical);
        assert!(boards_equal(&once, &horizontal));
        let twice = transition(&once);
        assert!(boards_equal(&twice, &vertical));
    }

    #[test]
    fn test_transition_is_deterministic() {
        let board = board_of(&[(0, 0), (1, 0), (2, 0), (2, 1), (1, 2)]);
        assert!(boards_equal(&transition(&board), &transition(&board)));
    }

    #[test]
    fn test_seed_stays_inside_inclusive_bounds() {
        let mut rng = SmallRng::seed_from_u64(7);
        let board = seed(&mut rng, 32, 16);
        assert!(!board.is_empty());
        assert!(board.len() <= 32 * 16 * 33 / 100);
        for cell in board.iter() {
            assert!((0..=32).contains(&cell.x));
            assert!((0..=16).contains(&cell.y));
        }
    }

    #[test]
    fn test_session_runs_all_epochs() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut session = LifeSession::new(&mut rng, 8, 8);

        let mut frames = 1u32;
        let mut seed_frames = 1u32;
        while session.advance(&mut rng) {
            frames += 1;
            if session.is_seed_frame() {
                seed_frames += 1;
            }
        }

        assert_eq!(frames, EPOCHS as u32 * GENERATIONS_PER_EPOCH as u32);
        assert_eq!(seed_frames, EPOCHS as u32);
        assert_eq!(session.epoch(), EPOCHS);
    }

    proptest! {
        #[test]
        fn prop_candidate_pruning_matches_brute_force(
            cells in prop::collection::vec((-8i16..8, -8i16..8), 0..48),
        ) {
            let mut board = Board::new();
            for (x, y) in cells {
                let _ = board.insert(Cell::new(x, y));
            }
            prop_assert!(boards_equal(&transition(&board), &brute_force(&board)));
        }

        #[test]
        fn prop_transition_is_referentially_transparent(
            cells in prop::collection::vec((-8i16..8, -8i16..8), 0..48),
        ) {
            let mut board = Board::new();
            for (x, y) in cells {
                let _ = board.insert(Cell::new(x, y));
            }
            prop_assert!(boards_equal(&transition(&board), &transition(&board)));
        }
    }
}

use queens_core::{Position, SolutionGrid};
use rand::{Rng, seq::SliceRandom as _};

/// Produces one valid queen placement for a `size`×`size` board.
///
/// Queens are assigned one per column by backtracking search, trying
/// candidate rows in a shuffled order so repeated calls explore different
/// arrangements. A row is rejected when a queen in an earlier column shares
/// the row or either diagonal.
///
/// The search succeeds for every size except 2 and 3, where no
/// non-attacking arrangement exists; in that case (or on any search
/// failure) the main-diagonal placement is returned so downstream stages
/// always receive one queen per row and per column. This operation cannot
/// fail.
pub(crate) fn generate_solution<R: Rng + ?Sized>(size: u8, rng: &mut R) -> SolutionGrid {
    let mut candidates: Vec<u8> = (0..size).collect();
    candidates.shuffle(rng);

    let mut queen_rows = Vec::with_capacity(usize::from(size));
    let queens: Vec<Position> = if place_remaining(&mut queen_rows, &candidates, size) {
        queen_rows
            .iter()
            .zip(0u8..)
            .map(|(&row, col)| Position::new(row, col))
            .collect()
    } else {
        (0..size).map(|i| Position::new(i, i)).collect()
    };
    SolutionGrid::from_queens(size, &queens)
}

/// Backtracking step: `queen_rows[c]` holds the queen row of column `c` for
/// all columns placed so far.
fn place_remaining(queen_rows: &mut Vec<u8>, candidates: &[u8], size: u8) -> bool {
    if queen_rows.len() == usize::from(size) {
        return true;
    }
    for &row in candidates {
        if is_safe(queen_rows, row) {
            queen_rows.push(row);
            if place_remaining(queen_rows, candidates, size) {
                return true;
            }
            queen_rows.pop();
        }
    }
    false
}

fn is_safe(queen_rows: &[u8], row: u8) -> bool {
    let col = queen_rows.len();
    queen_rows.iter().enumerate().all(|(placed_col, &placed_row)| {
        placed_row != row && col - placed_col != usize::from(placed_row.abs_diff(row))
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn rng(seed: u64) -> Pcg64Mcg {
        Pcg64Mcg::seed_from_u64(seed)
    }

    #[test]
    fn test_solutions_satisfy_queens_rule() {
        for size in [1, 4, 5, 6, 7, 8, 10] {
            for seed in 0..8 {
                let solution = generate_solution(size, &mut rng(seed));
                assert!(
                    solution.satisfies_queens_rule(),
                    "size {size}, seed {seed}: {:?}",
                    solution.queens().collect::<Vec<_>>()
                );
            }
        }
    }

    #[test]
    fn test_one_queen_per_row_and_column() {
        for size in [2, 3, 5, 8] {
            let solution = generate_solution(size, &mut rng(1));
            let queens: Vec<_> = solution.queens().collect();
            assert_eq!(queens.len(), usize::from(size));
            let mut rows: Vec<_> = queens.iter().map(|q| q.row()).collect();
            let mut cols: Vec<_> = queens.iter().map(|q| q.col()).collect();
            rows.sort_unstable();
            cols.sort_unstable();
            assert_eq!(rows, (0..size).collect::<Vec<_>>());
            assert_eq!(cols, (0..size).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_unsolvable_sizes_fall_back_to_diagonal() {
        // No non-attacking arrangement exists for 2x2 or 3x3; the diagonal
        // keeps one queen per row and column for the partitioner.
        for size in [2, 3] {
            let solution = generate_solution(size, &mut rng(7));
            let expected: Vec<_> = (0..size).map(|i| Position::new(i, i)).collect();
            assert_eq!(solution.queens().collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_shuffle_produces_varied_arrangements() {
        let solutions: Vec<Vec<_>> = (0..16)
            .map(|seed| generate_solution(8, &mut rng(seed)).queens().collect())
            .collect();
        assert!(solutions.iter().any(|s| s != &solutions[0]));
    }
}

//! Scoring a grown pattern against a target.

use crate::schema::{Colour, GROWN_SIZE, Grid};

/// Penalty for a cell position where either grid is empty.
pub const EMPTY_PENALTY: f64 = 0.002;

/// Score how well two grids agree.
///
/// Per cell: +1 for matching red or matching blue, -1 for red against
/// blue, and `-EMPTY_PENALTY` once if either side is empty. The result is
/// not normalized.
///
/// # Panics
///
/// Panics if the grids differ in shape or are not 60x60.
pub fn score(a: &Grid, b: &Grid) -> f64 {
    assert_eq!(
        a.shape(),
        b.shape(),
        "cannot score a {:?} grid against a {:?} grid",
        a.shape(),
        b.shape()
    );
    a.assert_shape(GROWN_SIZE, GROWN_SIZE);

    let mut total = 0.0f64;
    for (&x, &y) in a.cells().iter().zip(b.cells()) {
        total += cell_score(x, y);
    }
    total
}

#[inline]
fn cell_score(a: Colour, b: Colour) -> f64 {
    match (a, b) {
        (Colour::Empty, _) | (_, Colour::Empty) => -EMPTY_PENALTY,
        (Colour::Red, Colour::Red) | (Colour::Blue, Colour::Blue) => 1.0,
        (Colour::Red, Colour::Blue) | (Colour::Blue, Colour::Red) => -1.0,
    }
}

/// Per-outcome cell counts behind a score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub red_matches: usize,
    pub blue_matches: usize,
    pub mismatches: usize,
    pub empty: usize,
}

impl ScoreBreakdown {
    /// Tally outcomes for two 60x60 grids.
    pub fn tally(a: &Grid, b: &Grid) -> Self {
        assert_eq!(a.shape(), b.shape(), "shape mismatch in score breakdown");
        a.assert_shape(GROWN_SIZE, GROWN_SIZE);
        let mut out = Self::default();
        for (&x, &y) in a.cells().iter().zip(b.cells()) {
            match (x, y) {
                (Colour::Empty, _) | (_, Colour::Empty) => out.empty += 1,
                (Colour::Red, Colour::Red) => out.red_matches += 1,
                (Colour::Blue, Colour::Blue) => out.blue_matches += 1,
                _ => out.mismatches += 1,
            }
        }
        out
    }

    /// Fraction of non-empty positions where the colours agree.
    pub fn accuracy(&self) -> f64 {
        let live = self.red_matches + self.blue_matches + self.mismatches;
        if live == 0 {
            0.0
        } else {
            (self.red_matches + self.blue_matches) as f64 / live as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SEED_SIZE, Target, target_2};
    use proptest::prelude::*;

    #[test]
    fn test_target_self_match() {
        let t = target_2();
        assert_eq!(score(&t, &t), 3600.0);
    }

    #[test]
    fn test_all_red_vs_all_blue() {
        let red = Grid::filled(GROWN_SIZE, GROWN_SIZE, Colour::Red);
        let blue = Grid::filled(GROWN_SIZE, GROWN_SIZE, Colour::Blue);
        assert_eq!(score(&red, &blue), -3600.0);
        assert_eq!(score(&blue, &red), -3600.0);
    }

    #[test]
    fn test_empty_adult_against_target() {
        let empty = Grid::empty(GROWN_SIZE, GROWN_SIZE);
        let s = score(&empty, &Target::Pinwheel.grid());
        assert!((s - (-3600.0 * EMPTY_PENALTY)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_penalty_fires_once_per_cell() {
        let empty = Grid::empty(GROWN_SIZE, GROWN_SIZE);
        assert!((score(&empty, &empty) - (-3600.0 * EMPTY_PENALTY)).abs() < 1e-9);
        assert_eq!(cell_score(Colour::Empty, Colour::Empty), -EMPTY_PENALTY);
    }

    #[test]
    fn test_cell_score_table() {
        for a in Colour::ALL {
            for b in Colour::ALL {
                let expected = match (a, b) {
                    (Colour::Empty, _) | (_, Colour::Empty) => -EMPTY_PENALTY,
                    _ if a == b => 1.0,
                    _ => -1.0,
                };
                assert_eq!(cell_score(a, b), expected, "{:?} vs {:?}", a, b);
                assert_eq!(cell_score(a, b), cell_score(b, a));
            }
        }
    }

    #[test]
    fn test_every_target_self_matches() {
        for target in Target::ALL {
            let g = target.grid();
            assert_eq!(score(&g, &g), 3600.0, "{:?}", target);
        }
    }

    #[test]
    #[should_panic(expected = "cannot score")]
    fn test_shape_mismatch_panics() {
        score(&Grid::empty(SEED_SIZE, SEED_SIZE), &target_2());
    }

    #[test]
    #[should_panic(expected = "expected a 60x60 grid")]
    fn test_non_grown_shape_panics() {
        let red = Grid::filled(3, 3, Colour::Red);
        score(&red, &red);
    }

    #[test]
    #[should_panic(expected = "expected a 60x60 grid")]
    fn test_breakdown_rejects_seed_grids() {
        let seed = Grid::empty(SEED_SIZE, SEED_SIZE);
        ScoreBreakdown::tally(&seed, &seed);
    }

    #[test]
    fn test_breakdown() {
        let target = target_2();
        let adult = Grid::from_fn(GROWN_SIZE, GROWN_SIZE, |i, j| match (i, j) {
            (0, 0) => Colour::Empty,
            (0, 59) => Colour::Red,
            _ => target.get(i, j),
        });
        let breakdown = ScoreBreakdown::tally(&adult, &target);
        assert_eq!(
            breakdown,
            ScoreBreakdown {
                red_matches: 1799,
                blue_matches: 1799,
                mismatches: 1,
                empty: 1,
            }
        );
        assert!((breakdown.accuracy() - 3598.0 / 3599.0).abs() < 1e-12);
    }

    fn live_colour() -> impl Strategy<Value = Colour> {
        prop_oneof![Just(Colour::Red), Just(Colour::Blue)]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_self_score_counts_live_cells(
            cells in prop::collection::vec(live_colour(), GROWN_SIZE * GROWN_SIZE),
        ) {
            let grid = Grid::from_fn(GROWN_SIZE, GROWN_SIZE, |i, j| cells[i * GROWN_SIZE + j]);
            let expected = (grid.count(Colour::Red) + grid.count(Colour::Blue)) as f64;
            prop_assert_eq!(score(&grid, &grid), expected);
        }
    }
}

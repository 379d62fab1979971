use alloc::vec::Vec;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::*;

/// Uniform mine placement without replacement. Deliberately places no safe
/// zone around any starting cell: the very first reveal can hit a mine.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RandomLayoutGenerator {
    seed: u64,
}

impl RandomLayoutGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl LayoutGenerator for RandomLayoutGenerator {
    fn generate(self, config: GameConfig) -> Layout {
        use rand::prelude::*;

        let total = config.total_cells() as usize;
        let mines = config.mines() as usize;

        let mut mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        // Partial Fisher-Yates over the flat cell indices: the first `mines`
        // entries of `order` end up as a uniform sample without replacement.
        let mut order: Vec<usize> = (0..total).collect();
        {
            let slots = mask.as_slice_mut().expect("mask should be standard layout");
            for drawn in 0..mines {
                let pick = rng.random_range(drawn..total);
                order.swap(drawn, pick);
                slots[order[drawn]] = true;
            }
        }

        let layout = Layout::from_mine_mask(mask);
        if layout.mine_count() != config.mines() {
            log::warn!(
                "generated layout mine count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines()
            );
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recounts mine neighbors by hand, independent of the layout's own
    /// neighbor iteration.
    fn recount_neighbors(layout: &Layout, (row, col): Coord2) -> u8 {
        let (rows, cols) = layout.size();
        let mut count = 0;
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let nr = row as i32 + dr;
                let nc = col as i32 + dc;
                if nr < 0 || nc < 0 || nr >= rows as i32 || nc >= cols as i32 {
                    continue;
                }
                if layout.contains_mine((nr as Coord, nc as Coord)) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn places_exact_mine_count_with_correct_adjacency() {
        let config = GameConfig::new(9, 7, 12).unwrap();

        for seed in 0..20 {
            let layout = RandomLayoutGenerator::new(seed).generate(config);

            assert_eq!(layout.mine_count(), 12);
            for row in 0..9 {
                for col in 0..7 {
                    match layout.cell_at((row, col)) {
                        LayoutCell::Mine => {}
                        LayoutCell::Clear(n) => {
                            assert_eq!(n, recount_neighbors(&layout, (row, col)));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_layout() {
        let config = GameConfig::new(16, 16, 40).unwrap();

        let first = RandomLayoutGenerator::new(1234).generate(config);
        let second = RandomLayoutGenerator::new(1234).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn zero_mines_yields_all_clear_zero() {
        let config = GameConfig::new(5, 5, 0).unwrap();

        let layout = RandomLayoutGenerator::new(7).generate(config);

        assert_eq!(layout.mine_count(), 0);
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(layout.cell_at((row, col)), LayoutCell::Clear(0));
            }
        }
    }
}

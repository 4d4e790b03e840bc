use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Picks every target uniformly among all subsets of the requested size.
///
/// The generator is seeded once and reused across rounds, so a fixed seed replays the same sequence of targets.
#[derive(Clone, Debug)]
pub struct RandomTargetGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomTargetGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TargetGenerator for RandomTargetGenerator {
    fn generate(&mut self, grid: GridConfig, difficulty: Difficulty) -> TargetSet {
        let amount = difficulty.for_grid(grid).get();

        // sampling without replacement, always terminates since amount < grid.size()
        let mut cells: Cells = index::sample(&mut self.rng, grid.size().into(), amount.into())
            .into_iter()
            .map(|index| index as CellIndex)
            .collect();
        cells.sort_unstable();

        if cells.len() != usize::from(amount) {
            log::warn!(
                "Generated target size mismatch, actual: {}, requested: {}",
                cells.len(),
                amount
            );
        }
        TargetSet::from_sorted_unchecked(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_difficulty_yields_exact_unique_targets() {
        let grid = GridConfig::default();
        let mut generator = RandomTargetGenerator::new(7);

        for value in MIN_DIFFICULTY..=MAX_DIFFICULTY {
            for _ in 0..20 {
                let target = generator.generate(grid, Difficulty::new(value));

                assert_eq!(target.len(), usize::from(value));
                assert!(target.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
                assert!(target.iter().all(|cell| cell < grid.size()));
            }
        }
    }

    #[test]
    fn maximum_difficulty_on_tiny_grid_terminates() {
        let grid = GridConfig::new(2, 2);
        let mut generator = RandomTargetGenerator::new(1);

        let target = generator.generate(grid, Difficulty::MAX);

        assert_eq!(target.len(), 1);
    }

    #[test]
    fn same_seed_replays_same_targets() {
        let grid = GridConfig::default();
        let mut a = RandomTargetGenerator::new(42);
        let mut b = RandomTargetGenerator::new(42);

        for _ in 0..10 {
            assert_eq!(
                a.generate(grid, Difficulty::DEFAULT),
                b.generate(grid, Difficulty::DEFAULT)
            );
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn every_cell_gets_picked_over_many_rounds() {
        let grid = GridConfig::default();
        let mut generator = RandomTargetGenerator::new(3);
        let mut hits = [0u32; GRID_SIZE as usize];

        for _ in 0..2000 {
            for cell in generator.generate(grid, Difficulty::new(5)).iter() {
                hits[usize::from(cell)] += 1;
            }
        }

        // expected 400 per cell
        assert!(hits.iter().all(|&count| (250..550).contains(&count)), "{hits:?}");
    }
}

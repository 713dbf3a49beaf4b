use ndarray::Array2;

use super::*;

/// How [`RandomMineGenerator`] picks distinct mine cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Placement {
    /// Draw random cells until enough unoccupied ones were hit. Slows down as the field fills up.
    Rejection,
    /// Sample distinct cell indices directly, linear in the number of cells.
    #[default]
    Shuffle,
}

/// Purely random generation strategy, reproducible from its seed.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    placement: Placement,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, placement: Placement) -> Self {
        Self { seed, placement }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(seed, Placement::default())
    }

    /// Seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        use rand::prelude::*;

        Self::from_seed(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, config: FieldConfig) -> Result<MineLayout> {
        use rand::prelude::*;

        config.validate()?;

        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        match self.placement {
            Placement::Rejection => {
                let mut mines_placed = 0;
                while mines_placed < config.mines {
                    let coords = (
                        rng.random_range(0..config.rows),
                        rng.random_range(0..config.columns),
                    );
                    let tile = &mut mines[coords.to_nd_index()];
                    if !*tile {
                        *tile = true;
                        mines_placed += 1;
                    }
                }
            }
            Placement::Shuffle => {
                let columns = usize::from(config.columns);
                let picks = rand::seq::index::sample(
                    &mut rng,
                    config.total_cells() as usize,
                    config.mines as usize,
                );
                for index in picks.iter() {
                    mines[[index / columns, index % columns]] = true;
                }
            }
        }

        log::debug!(
            "Placed {} mines on {}x{} field ({:?}, seed {})",
            config.mines,
            config.rows,
            config.columns,
            self.placement,
            self.seed
        );

        MineLayout::from_mine_mask(mines)
    }
}

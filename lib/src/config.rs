//! World configuration.

use crate::{error::Error, grid::Grid, world::World};
use educe::Educe;
use rand::{rngs::StdRng, SeedableRng};

/// World configuration.
///
/// The world will be generated from this configuration.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
pub struct Config {
    /// Number of rows.
    #[educe(Default = 20)]
    pub rows: usize,

    /// Number of columns.
    #[educe(Default = 20)]
    pub cols: usize,

    /// Whether the first generation is randomized.
    ///
    /// If `false`, the world starts all-dead.
    #[educe(Default = true)]
    pub randomize: bool,

    /// Seed for the random source used to randomize the first generation.
    ///
    /// `None` means seeding from the operating system, so tests can pass
    /// a seed and get the same first generation every time.
    pub seed: Option<u64>,

    /// The upper bound on the generation count.
    ///
    /// `None` means that there is no limit.
    pub max_generations: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::default()
        }
    }

    /// Sets whether the first generation is randomized.
    pub fn set_randomize(mut self, randomize: bool) -> Self {
        self.randomize = randomize;
        self
    }

    /// Sets the seed for the random source.
    pub fn set_seed<T: Into<Option<u64>>>(mut self, seed: T) -> Self {
        self.seed = seed.into();
        self
    }

    /// Sets the upper bound on the generation count.
    pub fn set_max_generations<T: Into<Option<u64>>>(mut self, max_generations: T) -> Self {
        self.max_generations = max_generations.into();
        self
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the dimensions are not positive.
    pub fn world(&self) -> Result<World, Error> {
        let grid = if self.randomize {
            let mut rng = match self.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Grid::random(self.rows, self.cols, &mut rng)?
        } else {
            Grid::new(self.rows, self.cols)?
        };
        let mut world = World::from_grid(grid);
        world.set_max_generations(self.max_generations);
        Ok(world)
    }
}

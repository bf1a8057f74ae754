//! __Rust Life Simulator__
//!
//! A simulator for [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life).
//!
//! The grid is a finite rectangle of binary cells, without wrapping.
//! Cells outside the grid are always dead.
//!
//! This is the library for three interfaces:
//!
//! * A [TUI](https://en.wikipedia.org/wiki/Text-based_user_interface),
//! * A desktop GUI,
//! * Your own front-end, via [`World`].
//!
//! # Example
//!
//! Run a 5×5 blinker for three generations:
//!
//! ```rust
//! use rlifesim_lib::Config;
//!
//! # fn main() -> Result<(), rlifesim_lib::Error> {
//! let mut world = Config::new(5, 5).set_randomize(false).world()?;
//! for col in 1..4 {
//!     world.set_cell((2, col), rlifesim_lib::ALIVE)?;
//! }
//! world.step();
//! assert_eq!(world.generation(), 2);
//! assert_eq!(world.current().get((1, 2))?, rlifesim_lib::ALIVE);
//! # Ok(())
//! # }
//! ```

mod cells;
pub mod codec;
mod config;
mod error;
mod grid;
mod neighborhood;
mod world;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use codec::ParseError;
pub use config::Config;
pub use error::Error;
pub use grid::Grid;
pub use neighborhood::count_live_neighbors;
pub use world::World;

use rlifesim_lib::{
    codec, count_live_neighbors, Config, Error, Grid, ParseError, State, World, ALIVE, DEAD,
};
use std::error::Error as StdError;

#[test]
fn default() -> Result<(), Box<dyn StdError>> {
    let world = Config::default().world()?;
    assert_eq!(world.rows(), 20);
    assert_eq!(world.cols(), 20);
    assert_eq!(world.generation(), 1);
    Ok(())
}

#[test]
fn invalid_dimensions() {
    assert_eq!(Config::new(0, 5).world(), Err(Error::InvalidDimensions));
    assert_eq!(Config::new(5, 0).world(), Err(Error::InvalidDimensions));
    assert_eq!(Grid::new(0, 0), Err(Error::InvalidDimensions));
}

#[test]
fn out_of_bounds() -> Result<(), Box<dyn StdError>> {
    let mut grid = Grid::new(3, 4)?;
    assert_eq!(grid.get((3, 0)), Err(Error::OutOfBounds((3, 0))));
    assert_eq!(grid.get((0, 4)), Err(Error::OutOfBounds((0, 4))));
    assert_eq!(grid.set((5, 5), ALIVE), Err(Error::OutOfBounds((5, 5))));
    assert_eq!(grid.get((2, 3))?, DEAD);
    Ok(())
}

#[test]
fn invalid_value() -> Result<(), Box<dyn StdError>> {
    let mut grid = Grid::new(2, 2)?;
    assert_eq!(grid.set((0, 0), State(2)), Err(Error::InvalidValue(State(2))));
    assert_eq!(grid.get((0, 0))?, DEAD);
    Ok(())
}

#[test]
fn seeded_random_is_deterministic() -> Result<(), Box<dyn StdError>> {
    let world = Config::new(10, 10).set_seed(42).world()?;
    let again = Config::new(10, 10).set_seed(42).world()?;
    assert_eq!(world.current(), again.current());
    Ok(())
}

#[test]
fn neighbor_counts() -> Result<(), Box<dyn StdError>> {
    let grid = codec::load("111\n111\n111\n")?;
    assert_eq!(count_live_neighbors(&grid, (1, 1)), 8);
    assert_eq!(count_live_neighbors(&grid, (0, 0)), 3);
    assert_eq!(count_live_neighbors(&grid, (0, 1)), 5);
    assert_eq!(count_live_neighbors(&grid, (2, 2)), 3);

    let lonely = codec::load("100\n000\n000\n")?;
    assert_eq!(count_live_neighbors(&lonely, (0, 0)), 0);
    assert_eq!(count_live_neighbors(&lonely, (1, 1)), 1);
    assert_eq!(count_live_neighbors(&lonely, (2, 2)), 0);
    Ok(())
}

#[test]
fn rule() -> Result<(), Box<dyn StdError>> {
    // A 2x2 block is a still life: every living cell has 3 neighbors.
    let block = codec::load("0000\n0110\n0110\n0000\n")?;
    let mut world = World::from_grid(block.clone());
    world.step();
    assert_eq!(world.current(), &block);

    // A single living cell dies of loneliness.
    let mut world = World::from_grid(codec::load("000\n010\n000\n")?);
    world.step();
    assert_eq!(world.population(), 0);

    // A dead cell with 3 living neighbors is born.
    let mut world = World::from_grid(codec::load("110\n100\n000\n")?);
    world.step();
    assert_eq!(world.current().get((1, 1))?, ALIVE);
    Ok(())
}

#[test]
fn blinker_oscillates() -> Result<(), Box<dyn StdError>> {
    let horizontal = codec::load("00000\n00000\n01110\n00000\n00000\n")?;
    let vertical = codec::load("00000\n00100\n00100\n00100\n00000\n")?;
    let mut world = World::from_grid(horizontal.clone());

    world.step();
    assert_eq!(world.current(), &vertical);
    world.step();
    assert_eq!(world.current(), &horizontal);

    // The stagnation check only looks one generation back,
    // so the 2-cycle is never detected.
    for _ in 0..100 {
        assert!(world.is_changing());
        world.step();
    }
    assert_eq!(world.generation(), 103);
    Ok(())
}

#[test]
fn empty_world_halts() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(8, 8).set_randomize(false).world()?;
    assert!(!world.is_changing());
    assert!(world.is_halted());
    world.step();
    assert_eq!(world.generation(), 1);
    Ok(())
}

#[test]
fn stagnation() -> Result<(), Box<dyn StdError>> {
    // The block becomes stagnant right after the first step.
    let mut world = World::from_grid(codec::load("0000\n0110\n0110\n0000\n")?);
    assert!(world.is_changing());
    world.step();
    assert_eq!(world.generation(), 2);
    assert!(!world.is_changing());
    assert!(world.is_halted());
    world.step();
    world.step();
    assert_eq!(world.generation(), 2);
    Ok(())
}

#[test]
fn editing_wakes_a_stagnant_world() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(5, 5).set_randomize(false).world()?;
    assert!(world.is_halted());
    for col in 1..4 {
        world.set_cell((2, col), ALIVE)?;
    }
    assert!(world.is_changing());
    world.step();
    assert_eq!(world.generation(), 2);
    assert_eq!(world.current().get((1, 2))?, ALIVE);
    Ok(())
}

#[test]
fn toggle() -> Result<(), Box<dyn StdError>> {
    let mut world = Config::new(3, 3).set_randomize(false).world()?;
    assert_eq!(world.toggle_cell((1, 1))?, ALIVE);
    assert_eq!(world.toggle_cell((1, 1))?, DEAD);
    assert_eq!(world.toggle_cell((9, 9)), Err(Error::OutOfBounds((9, 9))));
    Ok(())
}

#[test]
fn max_generations() -> Result<(), Box<dyn StdError>> {
    let horizontal = codec::load("00000\n00000\n01110\n00000\n00000\n")?;
    let mut world = World::from_grid(horizontal);
    world.set_max_generations(Some(3));
    world.step();
    world.step();
    assert_eq!(world.generation(), 3);
    assert!(world.is_max_generations_exceeded());
    let frozen = world.current().clone();
    world.step();
    assert_eq!(world.generation(), 3);
    assert_eq!(world.current(), &frozen);
    Ok(())
}

#[test]
fn load() -> Result<(), Box<dyn StdError>> {
    let grid = codec::load("101\n010\n101\n")?;
    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 3);
    assert_eq!(grid.get((0, 0))?, ALIVE);
    assert_eq!(grid.get((0, 1))?, DEAD);
    assert_eq!(grid.get((1, 1))?, ALIVE);
    assert_eq!(grid.population(), 5);
    Ok(())
}

#[test]
fn load_skips_blank_lines() -> Result<(), Box<dyn StdError>> {
    let grid = codec::load("11\n\n00\n\n")?;
    assert_eq!(grid.rows(), 2);
    assert_eq!(grid.cols(), 2);
    Ok(())
}

#[test]
fn load_errors() {
    assert_eq!(codec::load(""), Err(ParseError::Empty.into()));
    assert_eq!(codec::load("\n\n"), Err(ParseError::Empty.into()));
    assert_eq!(
        codec::load("101\n0x0\n"),
        Err(ParseError::InvalidChar('x', 2).into())
    );
    assert_eq!(
        codec::load("101\n01\n"),
        Err(ParseError::UnevenRows(2).into())
    );
}

#[test]
fn save() -> Result<(), Box<dyn StdError>> {
    let grid = codec::load("101\n010\n101\n")?;
    assert_eq!(codec::save(&grid), "1 0 1\n0 1 0\n1 0 1\n");
    Ok(())
}

#[test]
fn saved_text_does_not_load_back() -> Result<(), Box<dyn StdError>> {
    // The save format has separators and the load format rejects them.
    let grid = codec::load("101\n010\n101\n")?;
    assert_eq!(
        codec::load(&codec::save(&grid)),
        Err(ParseError::InvalidChar(' ', 1).into())
    );
    Ok(())
}

#[test]
fn display() -> Result<(), Box<dyn StdError>> {
    let grid = codec::load("101\n010\n101\n")?;
    assert_eq!(grid.to_string(), "o.o\n.o.\no.o\n");
    Ok(())
}

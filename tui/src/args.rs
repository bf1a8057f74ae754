//! Parsing command-line arguments.

use clap::{
    command,
    error::{Error, ErrorKind, Result as ClapResult},
    value_parser, Arg, ArgAction,
};
use rlifesim_lib::{codec, Config, World};
use std::{fs, path::PathBuf};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) world: World,
    pub(crate) fps: u64,
    pub(crate) output: PathBuf,
    pub(crate) no_tui: bool,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        let matches = command!()
            .long_about(
                "Simulating Conway's Game of Life in the terminal\n\
                 \n\
                 The world is a finite grid of binary cells, without wrapping. \n\
                 Every frame, each cell lives or dies by the rule B3/S23.\n\
                 \n\
                 The simulation stops when a generation equals the one before \n\
                 it, or when the generation count reaches --max. Oscillating \n\
                 patterns never trigger the first condition, so with --no-tui \n\
                 you probably want to set --max.\n",
            )
            .arg(
                Arg::new("ROWS")
                    .help("Number of rows of the world")
                    .index(1)
                    .default_value("20")
                    .value_parser(value_parser!(usize))
                    .conflicts_with("FILE"),
            )
            .arg(
                Arg::new("COLS")
                    .help("Number of columns of the world")
                    .index(2)
                    .default_value("20")
                    .value_parser(value_parser!(usize))
                    .conflicts_with("FILE"),
            )
            .arg(
                Arg::new("FILE")
                    .help("Reads the first generation from a file")
                    .long_help(
                        "Reads the first generation from a file\n\
                         One line per row, each character `0` or `1`, \
                         without separators.\nThe dimensions of the world \
                         are taken from the file.\n",
                    )
                    .short('f')
                    .long("file")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("MAX")
                    .help("Maximal number of generations")
                    .long_help(
                        "Maximal number of generations\n\
                         If this value is set to 0, it means there is no limitation.\n",
                    )
                    .short('m')
                    .long("max")
                    .default_value("0")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("SEED")
                    .help("Seed for randomizing the first generation")
                    .long("seed")
                    .value_parser(value_parser!(u64)),
            )
            .arg(
                Arg::new("FPS")
                    .help("Number of generations per second")
                    .long("fps")
                    .default_value("10")
                    .value_parser(value_parser!(u64).range(1..)),
            )
            .arg(
                Arg::new("OUTPUT")
                    .help("File to save the current generation to")
                    .short('o')
                    .long("output")
                    .default_value("pattern.txt")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("DEAD")
                    .help("Starts with an all-dead world instead of a random one")
                    .long("dead")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("FILE"),
            )
            .arg(
                Arg::new("NOTUI")
                    .help("Runs without entering the TUI and prints the last generation")
                    .short('n')
                    .long("no-tui")
                    .action(ArgAction::SetTrue),
            )
            .get_matches();

        let rows = *matches.get_one::<usize>("ROWS").unwrap();
        let cols = *matches.get_one::<usize>("COLS").unwrap();
        let max_generations = match *matches.get_one::<u64>("MAX").unwrap() {
            0 => None,
            i => Some(i),
        };
        let fps = *matches.get_one::<u64>("FPS").unwrap();
        let output = matches.get_one::<PathBuf>("OUTPUT").unwrap().clone();
        let no_tui = matches.get_flag("NOTUI");

        let world = if let Some(path) = matches.get_one::<PathBuf>("FILE") {
            let text = fs::read_to_string(path).map_err(|e| {
                Error::raw(
                    ErrorKind::ValueValidation,
                    format!("unable to read {}: {}\n", path.display(), e),
                )
            })?;
            let grid = codec::load(&text).map_err(|e| {
                Error::raw(
                    ErrorKind::ValueValidation,
                    format!("unable to parse {}: {}\n", path.display(), e),
                )
            })?;
            let mut world = World::from_grid(grid);
            world.set_max_generations(max_generations);
            world
        } else {
            Config::new(rows, cols)
                .set_randomize(!matches.get_flag("DEAD"))
                .set_seed(matches.get_one::<u64>("SEED").copied())
                .set_max_generations(max_generations)
                .world()
                .map_err(|e| Error::raw(ErrorKind::ValueValidation, format!("{}\n", e)))?
        };

        Ok(Self {
            world,
            fps,
            output,
            no_tui,
        })
    }
}

/// Steps the world until it halts and prints the last generation.
pub(crate) fn run_headless(args: Args) {
    let mut world = args.world;
    while !world.is_halted() {
        world.step();
    }
    print!("{}", world.current());
    println!("Gen: {}  Cells: {}", world.generation(), world.population());
}

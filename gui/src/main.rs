mod app;

use app::App;
use clap::{
    command,
    error::{Error, ErrorKind, Result as ClapResult},
    value_parser, Arg, ArgAction,
};
use log::info;
use rlifesim_lib::{codec, Config, World};
use std::{fs, path::PathBuf};

/// Height reserved for the toolbar above the grid.
const TOOLBAR_HEIGHT: f32 = 32.0;

struct Args {
    world: World,
    config: Config,
    cell_size: f32,
    speed: f32,
}

/// Parses the command-line arguments.
fn parse_args() -> ClapResult<Args> {
    let matches = command!()
        .long_about(
            "Simulating Conway's Game of Life in a window\n\
             \n\
             Click a cell to toggle it. Pausing first makes clicking easier.\n",
        )
        .arg(
            Arg::new("ROWS")
                .help("Number of rows of the world")
                .index(1)
                .default_value("50")
                .value_parser(value_parser!(usize))
                .conflicts_with("FILE"),
        )
        .arg(
            Arg::new("COLS")
                .help("Number of columns of the world")
                .index(2)
                .default_value("50")
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
            Arg::new("SPEED")
                .help("Number of generations per second")
                .long("speed")
                .default_value("10")
                .value_parser(value_parser!(u32).range(1..=60)),
        )
        .arg(
            Arg::new("CELLSIZE")
                .help("Side of a cell, in pixels")
                .long("cell-size")
                .default_value("15")
                .value_parser(value_parser!(u32).range(2..)),
        )
        .arg(
            Arg::new("DEAD")
                .help("Starts with an all-dead world instead of a random one")
                .long("dead")
                .action(ArgAction::SetTrue)
                .conflicts_with("FILE"),
        )
        .get_matches();

    let max_generations = match *matches.get_one::<u64>("MAX").unwrap() {
        0 => None,
        i => Some(i),
    };
    let cell_size = *matches.get_one::<u32>("CELLSIZE").unwrap() as f32;
    let speed = *matches.get_one::<u32>("SPEED").unwrap() as f32;

    let (world, config) = if let Some(path) = matches.get_one::<PathBuf>("FILE") {
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
        let config = Config::new(grid.rows(), grid.cols()).set_max_generations(max_generations);
        let mut world = World::from_grid(grid);
        world.set_max_generations(max_generations);
        (world, config)
    } else {
        let config = Config::new(
            *matches.get_one::<usize>("ROWS").unwrap(),
            *matches.get_one::<usize>("COLS").unwrap(),
        )
        .set_randomize(!matches.get_flag("DEAD"))
        .set_seed(matches.get_one::<u64>("SEED").copied())
        .set_max_generations(max_generations);
        let world = config
            .world()
            .map_err(|e| Error::raw(ErrorKind::ValueValidation, format!("{}\n", e)))?;
        (world, config)
    };

    Ok(Args {
        world,
        config,
        cell_size,
        speed,
    })
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    let args = parse_args().unwrap_or_else(|e| e.exit());
    info!(
        "starting with a {}x{} world",
        args.world.rows(),
        args.world.cols()
    );

    let width = args.world.cols() as f32 * args.cell_size + 16.0;
    let height = args.world.rows() as f32 * args.cell_size + TOOLBAR_HEIGHT + 16.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
        ..Default::default()
    };
    let app = App::new(args.world, args.config, args.cell_size, args.speed);
    eframe::run_native("Game of Life", options, Box::new(|_cc| Box::new(app)))
}

mod args;
mod tui;

use args::Args;
use std::process;

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if args.no_tui {
        args::run_headless(args);
    } else if let Err(e) = tui::run(args) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

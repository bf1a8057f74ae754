//! The text-based user interface.

use crate::args::Args;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEventKind},
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use rlifesim_lib::{codec, World, ALIVE};
use std::{
    fs,
    io::{self, Stdout, Write},
    path::PathBuf,
    time::{Duration, Instant},
};

/// The window of the simulation.
struct LifeWindow {
    world: World,
    /// Time between two steps.
    tick: Duration,
    /// Where the `s` key saves the current generation.
    output: PathBuf,
    paused: bool,
    /// A transient message shown in the bottom bar after saving.
    message: Option<String>,
    stdout: Stdout,
}

impl LifeWindow {
    fn new(args: Args) -> Self {
        Self {
            world: args.world,
            tick: Duration::from_millis(1000 / args.fps),
            output: args.output,
            paused: true,
            message: None,
            stdout: io::stdout(),
        }
    }

    /// Redraws the world and the two status bars.
    fn update(&mut self) -> io::Result<()> {
        queue!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        queue!(
            self.stdout,
            Print(format!(
                "Gen: {}  Cells: {}",
                self.world.generation(),
                self.world.population()
            ))
        )?;

        let grid = self.world.current();
        let border = format!("+{}+", "-".repeat(grid.cols()));
        queue!(self.stdout, MoveTo(0, 1), Print(&border))?;
        for (row, cells) in grid.iter_rows().enumerate() {
            let line: String = cells
                .iter()
                .map(|&cell| if cell == ALIVE { 'o' } else { '.' })
                .collect();
            queue!(
                self.stdout,
                MoveTo(0, row as u16 + 2),
                Print(format!("|{}|", line))
            )?;
        }
        queue!(
            self.stdout,
            MoveTo(0, grid.rows() as u16 + 2),
            Print(&border)
        )?;

        let status = if let Some(message) = &self.message {
            message.clone()
        } else if self.world.is_max_generations_exceeded() {
            String::from("Reached the last generation. Press [q] to quit.")
        } else if !self.world.is_changing() {
            String::from("Stagnant. Press [q] to quit.")
        } else if self.paused {
            String::from("Paused. Press [space] to resume, [n] to step, [s] to save.")
        } else {
            String::from("Running. Press [space] to pause.")
        };
        queue!(
            self.stdout,
            MoveTo(0, grid.rows() as u16 + 3),
            Print(status)
        )?;
        self.stdout.flush()
    }

    /// Saves the current generation to the output file.
    ///
    /// An I/O error only changes the message in the bottom bar;
    /// the world is left as it is.
    fn save(&mut self) {
        self.message = match fs::write(&self.output, codec::save(self.world.current())) {
            Ok(()) => Some(format!("Saved to {}.", self.output.display())),
            Err(e) => Some(format!("Unable to save: {}.", e)),
        };
    }
}

/// Runs the simulation in the TUI.
pub(crate) fn run(args: Args) -> io::Result<()> {
    let mut window = LifeWindow::new(args);
    enable_raw_mode()?;
    execute!(window.stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(&mut window);

    execute!(window.stdout, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    print!("{}", window.world.current());
    println!(
        "Gen: {}  Cells: {}",
        window.world.generation(),
        window.world.population()
    );
    result
}

fn event_loop(window: &mut LifeWindow) -> io::Result<()> {
    let mut last_step = Instant::now();
    loop {
        window.update()?;

        let timeout = if window.paused {
            // No frame deadline while paused. Wake up once in a while
            // so transient messages still get redrawn.
            Duration::from_millis(100)
        } else {
            window.tick.saturating_sub(last_step.elapsed())
        };
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                window.message = None;
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        window.paused = !window.paused;
                        last_step = Instant::now();
                    }
                    KeyCode::Char('n') => {
                        if window.paused {
                            window.world.step();
                        }
                    }
                    KeyCode::Char('s') => window.save(),
                    _ => (),
                }
            }
        }

        if !window.paused && last_step.elapsed() >= window.tick {
            window.world.step();
            last_step = Instant::now();
            if window.world.is_halted() {
                window.paused = true;
            }
        }
    }
    Ok(())
}

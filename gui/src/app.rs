//! The eframe application.

use egui::{pos2, Color32, Rect, Sense, Stroke, Vec2};
use rlifesim_lib::{Config, World, ALIVE};
use std::time::{Duration, Instant};

/// Color of a living cell.
const LIVE_COLOR: Color32 = Color32::from_rgb(0, 0, 200);
/// Color of a dead cell.
const DEAD_COLOR: Color32 = Color32::WHITE;

pub struct App {
    world: World,
    /// Configuration to rebuild the world from,
    /// for the `Random` and `Clear` buttons.
    config: Config,
    /// Side of a cell, in pixels.
    cell_size: f32,
    /// Number of generations per second.
    speed: f32,
    running: bool,
    last_update: Instant,
}

impl App {
    pub fn new(world: World, config: Config, cell_size: f32, speed: f32) -> Self {
        Self {
            world,
            config,
            cell_size,
            speed,
            running: false,
            last_update: Instant::now(),
        }
    }

    /// Why the world stopped, if it did.
    fn halt_reason(&self) -> Option<&'static str> {
        if self.world.is_max_generations_exceeded() {
            Some("Reached the last generation")
        } else if !self.world.is_changing() {
            Some("Stagnant")
        } else {
            None
        }
    }

    /// Replaces the world with a fresh one built from the configuration.
    fn reset(&mut self, randomize: bool) {
        self.running = false;
        // A fresh seed every time, or `Random` would repeat itself.
        if let Ok(world) = self
            .config
            .clone()
            .set_randomize(randomize)
            .set_seed(None)
            .world()
        {
            self.world = world;
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let text = if self.running { "Pause" } else { "Resume" };
            if ui.button(text).clicked() {
                self.running = !self.running;
                self.last_update = Instant::now();
            }
            if ui.button("Step").clicked() && !self.running {
                self.world.step();
            }
            if ui.button("Random").clicked() {
                self.reset(true);
            }
            if ui.button("Clear").clicked() {
                self.reset(false);
            }

            ui.separator();
            ui.label("Speed:");
            ui.add(egui::Slider::new(&mut self.speed, 1.0..=60.0).suffix(" gen/s"));

            ui.separator();
            ui.label(format!("Gen: {}", self.world.generation()));
            ui.label(format!("Cells: {}", self.world.population()));
            if let Some(reason) = self.halt_reason() {
                ui.separator();
                ui.label(reason);
            }
        });
    }

    fn grid(&mut self, ui: &mut egui::Ui) {
        let (rows, cols) = (self.world.rows(), self.world.cols());
        let size = Vec2::new(cols as f32 * self.cell_size, rows as f32 * self.cell_size);
        let (response, painter) = ui.allocate_painter(size, Sense::click());
        let origin = response.rect.min;

        for (row, cells) in self.world.current().iter_rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let rect = Rect::from_min_size(
                    pos2(
                        origin.x + col as f32 * self.cell_size,
                        origin.y + row as f32 * self.cell_size,
                    ),
                    Vec2::splat(self.cell_size),
                );
                let color = if cell == ALIVE { LIVE_COLOR } else { DEAD_COLOR };
                painter.rect_filled(rect.shrink(0.5), 0.0, color);
                painter.rect_stroke(rect, 0.0, Stroke::new(0.5, Color32::BLACK));
            }
        }

        // Clicking a cell toggles it. Division by the cell size maps the
        // pointer back to grid coordinates.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let row = ((pos.y - origin.y) / self.cell_size) as usize;
                let col = ((pos.x - origin.x) / self.cell_size) as usize;
                let _ = self.world.toggle_cell((row, col));
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let interval = Duration::from_secs_f32(1.0 / self.speed);
        if self.running {
            if self.world.is_halted() {
                self.running = false;
            } else if self.last_update.elapsed() >= interval {
                self.world.step();
                self.last_update = Instant::now();
            }
            ctx.request_repaint_after(interval);
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));
        egui::CentralPanel::default().show(ctx, |ui| self.grid(ui));
    }
}

// src/app.rs
//
// Desktop shell for the lotto generator: a single fixed-size window with two
// parameter inputs, a Generate action, a monospace result box and
// clear/copy-to-clipboard actions, plus a status line at the bottom.
//
// Validation failures only touch the status line; previously displayed games
// stay on screen. The displayed result set is owned here and replaced as a
// whole on each successful draw.

use eframe::egui;

use crate::config::AppConfig;
use crate::defs::{MAIN_COUNT, Number};
use crate::draw::draw;
use crate::game::{Game, format_games};
use crate::logging::{log_error, log_info};

struct StatusLine {
    message: String,
    is_error: bool,
}

pub struct LottoApp {
    config: AppConfig,
    count_input: String,
    max_input: String,
    subtitle: String,
    games: Vec<Game>,
    status: StatusLine,
}

impl LottoApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            count_input: config.default_count.to_string(),
            max_input: config.default_max_number.to_string(),
            subtitle: format!(
                "Generates random {MAIN_COUNT} main numbers + 1 bonus (1-{} by default).",
                config.default_max_number
            ),
            games: Vec::new(),
            status: StatusLine {
                message: "Ready.".to_string(),
                is_error: false,
            },
            config,
        }
    }

    fn set_status(&mut self, message: &str, is_error: bool) {
        self.status = StatusLine {
            message: message.to_string(),
            is_error,
        };
    }

    fn on_generate(&mut self) {
        let count = match self.count_input.trim().parse::<u32>() {
            Ok(c) if c > 0 => c,
            _ => {
                self.set_status(
                    "Please enter a valid positive integer for number of games.",
                    true,
                );
                return;
            }
        };

        // An empty max number falls back to the configured default.
        let max_raw = self.max_input.trim();
        let max_number = if max_raw.is_empty() {
            self.config.default_max_number
        } else {
            match max_raw.parse::<Number>() {
                Ok(m) if usize::from(m) >= MAIN_COUNT + 1 => m,
                _ => {
                    self.set_status(
                        &format!(
                            "Please enter a valid integer >= {} for max number.",
                            MAIN_COUNT + 1
                        ),
                        true,
                    );
                    return;
                }
            }
        };

        match draw(count, max_number, MAIN_COUNT) {
            Ok(games) => {
                let drawn = games.len();
                self.games = games;
                self.subtitle = format!(
                    "Generating {MAIN_COUNT} main + 1 bonus from range 1-{max_number}."
                );
                self.set_status(
                    &format!("Generated {drawn} game(s) with range 1-{max_number}."),
                    false,
                );
                log_info(&format!("Drew {drawn} game(s) with range 1-{max_number}"));
            }
            Err(e) => {
                self.set_status(&format!("Error: {e}"), true);
                log_error(&format!("Draw failed: {e}"));
            }
        }
    }

    fn on_clear(&mut self) {
        self.games.clear();
        self.set_status("Cleared.", false);
        log_info("Results cleared");
    }

    fn on_copy(&mut self, ctx: &egui::Context) {
        if self.games.is_empty() {
            self.set_status("Nothing to copy.", true);
            return;
        }
        ctx.copy_text(format_games(&self.games));
        self.set_status("Copied to clipboard.", false);
        log_info(&format!("Copied {} game(s) to clipboard", self.games.len()));
    }

    fn render_header(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Lotto Generator");
            ui.label(egui::RichText::new(&self.subtitle).size(12.0));
        });
        ui.add_space(8.0);
    }

    fn render_inputs(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("parameter_inputs")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label("Number of games:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.count_input)
                        .desired_width(80.0)
                        .hint_text("e.g. 4"),
                );
                ui.end_row();

                ui.label("Max number (range 1-N):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.max_input)
                        .desired_width(80.0)
                        .hint_text("45 or 47"),
                );
                ui.end_row();
            });
        ui.add_space(4.0);
        if ui.button("Generate").clicked() {
            self.on_generate();
        }
    }

    fn render_results(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().auto_shrink(false).show(ui, |ui| {
            if !self.games.is_empty() {
                ui.monospace(format_games(&self.games));
            }
        });
    }

    fn render_actions(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.on_clear();
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Copy to clipboard").clicked() {
                    self.on_copy(ctx);
                }
            });
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let color = if self.status.is_error {
            egui::Color32::RED
        } else {
            ui.visuals().text_color()
        };
        ui.label(
            egui::RichText::new(&self.status.message)
                .color(color)
                .size(11.0),
        );
    }
}

impl eframe::App for LottoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("actions_and_status").show(ctx, |ui| {
            ui.add_space(4.0);
            self.render_actions(ctx, ui);
            self.render_status(ui);
            ui.add_space(2.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_header(ui);
            self.render_inputs(ui);
            ui.separator();
            self.render_results(ui);
        });
    }
}

use crate::interfaces::horserace_interface::HorseraceInterface;
use eframe::egui;
use flume::{Receiver, Sender};
use horserace::core::competitor::PROGRESS_MAX;
use horserace::core::race::RacePars;
use horserace::interfaces::gui_interface::{EngineCommand, RaceSnapshot};
use std::time::Duration;

#[derive(Debug)]
pub struct RaceBoard {
    pub horserace_interface: HorseraceInterface,
    pub repaint_interval: Duration,
}

impl RaceBoard {
    pub fn new(
        rx: Receiver<RaceSnapshot>,
        cmd_tx: Sender<EngineCommand>,
        race_pars: &RacePars,
    ) -> RaceBoard {
        RaceBoard {
            horserace_interface: HorseraceInterface::new(rx, cmd_tx),
            // repaint twice per tick such that no tick is skipped visibly
            repaint_interval: race_pars.get_interval() / 2,
        }
    }

    pub fn set_ui_content(&mut self, ui: &mut egui::Ui) {
        // CONTROLS --------------------------------------------------------------------------------
        ui.horizontal(|ui| {
            let start_enabled = self.horserace_interface.get_start_enabled();
            let reset_enabled = self.horserace_interface.get_reset_enabled();

            if ui
                .add_enabled(start_enabled, egui::Button::new("Start"))
                .clicked()
            {
                self.horserace_interface.send_command(EngineCommand::Start);
            }

            if ui
                .add_enabled(reset_enabled, egui::Button::new("Reset"))
                .clicked()
            {
                self.horserace_interface.send_command(EngineCommand::Reset);
            }

            ui.label(format!(
                "Tick: {}",
                self.horserace_interface.race_snapshot.tick_count
            ));
        });

        ui.separator();

        // PROGRESS BARS ---------------------------------------------------------------------------
        let race_snapshot = &self.horserace_interface.race_snapshot;

        for horse_state in race_snapshot.horse_states.iter() {
            let color = egui::Color32::from_rgb(
                horse_state.color.r,
                horse_state.color.g,
                horse_state.color.b,
            );

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(&horse_state.name).color(color));
                ui.add(
                    egui::ProgressBar::new(horse_state.progress as f32 / PROGRESS_MAX as f32)
                        .fill(color)
                        .text(format!("{}", horse_state.progress)),
                );
            });
        }

        // RESULTS ---------------------------------------------------------------------------------
        if race_snapshot.finished {
            ui.separator();
            ui.heading("Results");

            egui::Grid::new("results_grid")
                .num_columns(2)
                .striped(true)
                .show(ui, |ui| {
                    ui.strong("Horse");
                    ui.strong("Time");
                    ui.end_row();

                    for entry in race_snapshot.results.iter() {
                        ui.label(entry.name.as_str());
                        ui.label(entry.get_time_str());
                        ui.end_row();
                    }
                });
        }
    }
}

impl eframe::App for RaceBoard {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // update race interface
        self.horserace_interface.update();

        // update UI content
        egui::CentralPanel::default().show(ctx, |ui| {
            self.set_ui_content(ui);
        });

        // request repaint of the UI
        ctx.request_repaint_after(self.repaint_interval);
    }
}

use ah_kinetics::{SimulationResult, Species};
use egui_extras::{Column, TableBuilder};

/// Full result table: time plus one column per species.
#[derive(Default)]
pub struct TableView;

impl TableView {
    pub fn show(&mut self, ui: &mut egui::Ui, result: &SimulationResult) {
        ui.heading("📋 Resultados de la Simulación");

        ui.push_id("results_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(260.0)
                .cell_layout(egui::Layout::right_to_left(egui::Align::Center))
                .column(Column::exact(40.0)) // Row index
                .column(Column::initial(110.0).at_least(80.0)) // time
                .columns(Column::initial(140.0).at_least(100.0), Species::ALL.len())
                .header(22.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("");
                    });
                    header.col(|ui| {
                        ui.strong("time");
                    });
                    for species in Species::ALL {
                        header.col(|ui| {
                            ui.strong(species.column_name());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, result.len(), |mut row| {
                        let p = result.points[row.index()];
                        let i = row.index();
                        row.col(|ui| {
                            ui.weak(i.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.4}", p.time));
                        });
                        for species in Species::ALL {
                            row.col(|ui| {
                                ui.label(format!("{:.6}", species.value_of(&p)));
                            });
                        }
                    });
                });
        });
    }
}

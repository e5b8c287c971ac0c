use ah_kinetics::{SimulationResult, Species};
use egui_extras::{Column, TableBuilder};

/// Two-column view of one species against time.
pub struct ExploreView {
    selected: Species,
}

impl Default for ExploreView {
    fn default() -> Self {
        Self {
            selected: Species::Hemicellulose,
        }
    }
}

impl ExploreView {
    pub fn show(&mut self, ui: &mut egui::Ui, result: &SimulationResult) {
        ui.heading("🔍 Exploración de Datos");

        ui.horizontal(|ui| {
            ui.label("Selecciona una variable para explorar:");
            egui::ComboBox::from_id_salt("explore_species")
                .selected_text(self.selected.column_name())
                .show_ui(ui, |ui| {
                    for species in Species::ALL {
                        ui.selectable_value(&mut self.selected, species, species.column_name());
                    }
                });
        });

        let species = self.selected;
        ui.push_id("explore_table", |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .max_scroll_height(220.0)
                .cell_layout(egui::Layout::right_to_left(egui::Align::Center))
                .column(Column::initial(110.0).at_least(80.0))
                .column(Column::initial(140.0).at_least(100.0))
                .header(22.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("time");
                    });
                    header.col(|ui| {
                        ui.strong(species.column_name());
                    });
                })
                .body(|body| {
                    body.rows(20.0, result.len(), |mut row| {
                        let p = result.points[row.index()];
                        row.col(|ui| {
                            ui.label(format!("{:.4}", p.time));
                        });
                        row.col(|ui| {
                            ui.label(format!("{:.6}", species.value_of(&p)));
                        });
                    });
                });
        });
    }
}

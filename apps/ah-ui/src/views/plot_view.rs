use ah_kinetics::{SimulationResult, Species};
use egui_plot::{Legend, Line, Plot, PlotPoints};

#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn show(&mut self, ui: &mut egui::Ui, result: &SimulationResult) {
        ui.heading("📊 Gráfica Interactiva de Concentraciones");
        ui.label("Concentraciones en función del tiempo");

        let lines: Vec<Line> = Species::ALL
            .into_iter()
            .map(|species| {
                let plot_points: PlotPoints = result.series_points(species).into();
                Line::new(plot_points).name(species.column_name())
            })
            .collect();

        Plot::new("concentrations_plot")
            .legend(Legend::default())
            .height(320.0)
            .x_axis_label("Tiempo (min)")
            .y_axis_label("Concentración (g/L)")
            .show(ui, |plot_ui| {
                for line in lines {
                    plot_ui.line(line);
                }
            });
    }
}

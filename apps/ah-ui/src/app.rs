use crate::views::{CreditsView, ExploreView, ParamsView, PlotView, TableView};
use ah_app::{ExportFormat, RunRequest, RunResponse, run_service};
use ah_kinetics::SimulationInputs;
use egui_file_dialog::FileDialog;
use std::path::PathBuf;

pub struct AcidHydroChemApp {
    inputs: SimulationInputs,
    last_run: Option<RunResponse>,
    status: Option<Status>,
    file_dialog: FileDialog,
    params_view: ParamsView,
    table_view: TableView,
    plot_view: PlotView,
    explore_view: ExploreView,
    credits_view: CreditsView,
}

#[derive(Debug, Clone)]
enum Status {
    Success(String),
    Error(String),
}

impl AcidHydroChemApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let file_dialog = FileDialog::new().default_file_name(ah_results::CSV_FILE_NAME);

        Self {
            inputs: SimulationInputs::default(),
            last_run: None,
            status: None,
            file_dialog,
            params_view: ParamsView,
            table_view: TableView,
            plot_view: PlotView,
            explore_view: ExploreView::default(),
            credits_view: CreditsView,
        }
    }

    fn simulate(&mut self) {
        match run_service::run(&RunRequest::new(self.inputs)) {
            Ok(response) => {
                self.last_run = Some(response);
                self.status = Some(Status::Success(
                    "Simulación completada exitosamente.".to_string(),
                ));
            }
            Err(e) => {
                self.last_run = None;
                self.status = Some(Status::Error(format!("Simulación fallida: {}", e)));
            }
        }
    }

    fn export_csv(&mut self, path: PathBuf) {
        if let Some(run) = &self.last_run {
            match run_service::export(&run.result, ExportFormat::Csv, &path) {
                Ok(()) => {
                    self.status = Some(Status::Success(format!(
                        "Resultados guardados en {}",
                        path.display()
                    )));
                }
                Err(e) => {
                    self.status = Some(Status::Error(format!("Error al guardar CSV: {}", e)));
                }
            }
        }
    }
}

/// Drop the shown run once the sliders no longer match the inputs it was
/// computed from. Returns whether a run was dropped.
fn discard_stale_run(last_run: &mut Option<RunResponse>, inputs: &SimulationInputs) -> bool {
    if last_run
        .as_ref()
        .is_some_and(|run| run.result.inputs != *inputs)
    {
        *last_run = None;
        return true;
    }
    false
}

impl eframe::App for AcidHydroChemApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("title").show(ctx, |ui| {
            ui.heading("⚗️ Simulador de Procesos Químicos: ACIDHYDROCHEM");
        });

        let params_action = egui::SidePanel::left("parameters")
            .default_width(260.0)
            .show(ctx, |ui| self.params_view.show(ui, &mut self.inputs))
            .inner;

        if discard_stale_run(&mut self.last_run, &self.inputs) {
            self.status = None;
        }

        if params_action.simulate {
            self.simulate();
        }

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.export_csv(path.to_path_buf());
        }

        let mut open_save_dialog = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                match &self.status {
                    Some(Status::Success(message)) => {
                        ui.colored_label(egui::Color32::from_rgb(0, 160, 0), message);
                    }
                    Some(Status::Error(message)) => {
                        ui.colored_label(egui::Color32::RED, message);
                    }
                    None => {
                        ui.label("Ajusta los parámetros y presiona \"Simular\".");
                    }
                }

                if let Some(run) = &self.last_run {
                    ui.separator();
                    self.table_view.show(ui, &run.result);

                    ui.separator();
                    self.plot_view.show(ui, &run.result);

                    ui.separator();
                    if ui.button("💾 Descargar Resultados como CSV").clicked() {
                        open_save_dialog = true;
                    }

                    ui.separator();
                    self.explore_view.show(ui, &run.result);

                    self.credits_view.show(ui);
                }
            });
        });

        if open_save_dialog {
            self.file_dialog.save_file();
        }
    }
}

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod views;

use app::AcidHydroChemApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Simulador ACIDHYDROCHEM"),
        ..Default::default()
    };

    eframe::run_native(
        "Simulador ACIDHYDROCHEM",
        options,
        Box::new(|cc| Ok(Box::new(AcidHydroChemApp::new(cc)))),
    )
}

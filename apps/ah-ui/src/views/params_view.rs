use ah_kinetics::{Parameter, SimulationInputs};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParamsAction {
    pub simulate: bool,
}

#[derive(Default)]
pub struct ParamsView;

impl ParamsView {
    pub fn show(&mut self, ui: &mut egui::Ui, inputs: &mut SimulationInputs) -> ParamsAction {
        ui.heading("Parámetros de Entrada");
        ui.separator();

        for parameter in Parameter::ALL {
            let spec = parameter.spec();
            ui.label(spec.label);
            ui.add(
                egui::Slider::new(inputs.get_mut(parameter), spec.min..=spec.max)
                    .step_by(spec.step),
            );
            ui.add_space(6.0);
        }

        if inputs.solid_mass_kg <= 0.0 {
            ui.colored_label(
                egui::Color32::from_rgb(200, 120, 0),
                "La biomasa sólida debe ser mayor que cero",
            );
        }

        ui.separator();

        ParamsAction {
            simulate: ui.button("Simular").clicked(),
        }
    }
}

const AUTHORS: [&str; 3] = [
    "M.Sc. Luis Antonio Velázquez Herrera",
    "Ph.D. Leticia López Zamora",
    "Ph.D. Eusebio Bolaños Reynoso",
];

const INSTITUTION: [&str; 2] = [
    "Tecnológico Nacional de México / Instituto Tecnológico de Orizaba, Veracruz",
    "División de Estudios de Posgrado e Investigación",
];

#[derive(Default)]
pub struct CreditsView;

impl CreditsView {
    pub fn show(&mut self, ui: &mut egui::Ui) {
        ui.separator();
        ui.strong("Autores:");
        for author in AUTHORS {
            ui.label(format!("• {author}"));
        }
        ui.add_space(4.0);
        ui.strong("Institución:");
        for line in INSTITUTION {
            ui.label(line);
        }
    }
}

use egui;

use super::UiAction;

#[derive(Default)]
pub struct SearchBarState {
    query: String,
    first_frame: bool,
}

impl SearchBarState {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            first_frame: true,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, searching: bool) -> Option<UiAction> {
        let mut search_triggered = false;

        ui.horizontal(|ui| {
            ui.label("Search:");

            let button_width = 80.0;
            let field = egui::TextEdit::singleline(&mut self.query)
                .hint_text("Name or description")
                .desired_width((ui.available_width() - button_width).max(120.0));
            let response = ui.add(field);

            if self.first_frame {
                response.request_focus();
                self.first_frame = false;
            }

            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                search_triggered = true;
                response.request_focus();
            }

            let label = if searching { "Searching…" } else { "Search" };
            if ui.button(label).clicked() {
                search_triggered = true;
            }
        });

        ui.input_mut(|i| {
            if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
                self.query.clear();
            }
        });

        search_triggered.then(|| UiAction::Search(self.query.clone()))
    }
}

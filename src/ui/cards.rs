use egui;

use super::UiAction;
use crate::render::card::LINK_LABEL;
use crate::render::{Card, CardContainer};

/// Draws every card in the container. Record text is shown as plain labels.
pub fn show_cards(ui: &mut egui::Ui, container: &CardContainer) -> Option<UiAction> {
    let mut action = None;

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for card in container.cards() {
                if let Some(a) = show_card(ui, card) {
                    action = Some(a);
                }
                ui.add_space(6.0);
            }
        });

    action
}

fn show_card(ui: &mut egui::Ui, card: &Card) -> Option<UiAction> {
    let mut action = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());

        ui.heading(&card.heading);
        ui.label(&card.year);
        ui.label(&card.description);

        if let Some(link) = &card.link {
            ui.horizontal(|ui| {
                ui.add(egui::Hyperlink::from_label_and_url(LINK_LABEL, link).open_in_new_tab(true));
                if ui.small_button("Copy link").clicked() {
                    action = Some(UiAction::CopyLink(link.clone()));
                }
            });
        }
    });

    action
}

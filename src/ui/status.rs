use chrono::{DateTime, Local};
use egui;

#[derive(Debug, Clone, Default)]
pub enum Status {
    #[default]
    Idle,
    Searching {
        query: String,
    },
    Done {
        query: String,
        count: usize,
        at: DateTime<Local>,
    },
    Failed {
        message: String,
        at: DateTime<Local>,
    },
}

impl Status {
    pub fn text(&self) -> String {
        match self {
            Status::Idle => "Type a query and press Search".to_string(),
            Status::Searching { query } => format!("Searching for {:?}…", query),
            Status::Done { query, count, at } => {
                let noun = if *count == 1 { "result" } else { "results" };
                if query.is_empty() {
                    format!("{} {} ({})", count, noun, format_timestamp(at))
                } else {
                    format!("{} {} for {:?} ({})", count, noun, query, format_timestamp(at))
                }
            }
            Status::Failed { message, at } => {
                format!("Search failed ({}): {}", format_timestamp(at), message)
            }
        }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let text = self.text();
        match self {
            Status::Failed { .. } => {
                ui.colored_label(ui.visuals().error_fg_color, text);
            }
            _ => {
                ui.weak(text);
            }
        }
    }
}

fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%H:%M:%S").to_string()
}

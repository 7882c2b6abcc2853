use eframe::egui;
use std::sync::mpsc;
use std::sync::Arc;

use crate::catalog::FileLoader;
use crate::clipboard::copy_to_clipboard;
use crate::config::Config;
use crate::render::CardContainer;
use crate::search::{SearchOutcome, Searcher};
use crate::ui::{show_cards, SearchBarState, Status, UiAction};
use crate::watcher::{self, DatasetChanged, DatasetWatcher};

pub struct VitrineApp {
    search_bar: SearchBarState,
    container: CardContainer,
    status: Status,

    searcher: Searcher,

    dataset_events: mpsc::Receiver<DatasetChanged>,
    _watcher: Option<DatasetWatcher>,
}

impl VitrineApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let loader = FileLoader::new(config.dataset_path.clone());
        let mut searcher = Searcher::new(Arc::new(loader), Some(cc.egui_ctx.clone()));

        let (event_tx, event_rx) = mpsc::channel();
        let watcher = if config.watch_dataset {
            match watcher::watch_dataset(&config.dataset_path, event_tx, cc.egui_ctx.clone()) {
                Ok(w) => Some(w),
                Err(e) => {
                    log::error!("Failed to watch {}: {}", config.dataset_path.display(), e);
                    None
                }
            }
        } else {
            None
        };

        let mut status = Status::Idle;
        if config.search_on_start {
            searcher.trigger("");
            status = Status::Searching { query: String::new() };
        }

        Self {
            search_bar: SearchBarState::new(),
            container: CardContainer::new(),
            status,
            searcher,
            dataset_events: event_rx,
            _watcher: watcher,
        }
    }

    fn start_search(&mut self, query: String) {
        self.searcher.trigger(&query);
        self.status = Status::Searching { query };
    }

    fn collect_results(&mut self) {
        if let Some(outcome) = self.searcher.poll() {
            apply_outcome(&mut self.container, &mut self.status, outcome);
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Search(query) => self.start_search(query),
            UiAction::CopyLink(link) => {
                if let Err(e) = copy_to_clipboard(&link) {
                    log::error!("Failed to copy to clipboard: {}", e);
                } else {
                    log::info!("Link copied to clipboard");
                }
            }
        }
    }
}

/// Renders a finished search. A failed load leaves the cards untouched.
pub fn apply_outcome(container: &mut CardContainer, status: &mut Status, outcome: SearchOutcome) {
    let at = chrono::Local::now();
    match outcome.result {
        Ok(records) => {
            log::info!("{} records match {:?}", records.len(), outcome.query);
            container.render(&records);
            if container.is_empty() {
                log::debug!("Nothing to show for {:?}", outcome.query);
            }
            *status = Status::Done {
                query: outcome.query,
                count: records.len(),
                at,
            };
        }
        Err(e) => {
            log::error!("Search for {:?} failed: {}", outcome.query, e);
            *status = Status::Failed {
                message: e.to_string(),
                at,
            };
        }
    }
}

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut dataset_changed = false;
        while self.dataset_events.try_recv().is_ok() {
            dataset_changed = true;
        }
        if dataset_changed {
            if let Some(generation) = self.searcher.retrigger() {
                log::debug!("Dataset changed, re-running search #{}", generation);
                self.status = Status::Searching {
                    query: self.searcher.last_query().unwrap_or_default().to_string(),
                };
            }
        }

        self.collect_results();

        let mut actions = Vec::new();

        egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            actions.extend(self.search_bar.show(ui, self.searcher.is_pending()));
            ui.add_space(6.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.status.show(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(show_cards(ui, &self.container));
        });

        for action in actions {
            self.handle_action(action);
        }
    }
}

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;

use crate::catalog::{filter, LoadError, Loader, Record};

pub fn run_pipeline(loader: &dyn Loader, query: &str) -> Result<Vec<Record>, LoadError> {
    let dataset = loader.load()?;
    Ok(filter(&dataset, query))
}

#[derive(Debug)]
pub struct SearchOutcome {
    pub generation: u64,
    pub query: String,
    pub result: Result<Vec<Record>, LoadError>,
}

/// Runs each triggered search on its own worker thread.
///
/// Triggers are numbered; `poll` only hands back the outcome of the most
/// recent one, so a slow earlier search can never overwrite a newer result.
pub struct Searcher {
    loader: Arc<dyn Loader>,
    latest: u64,
    pending: bool,
    last_query: Option<String>,
    sender: mpsc::Sender<SearchOutcome>,
    receiver: mpsc::Receiver<SearchOutcome>,
    repaint: Option<egui::Context>,
}

impl Searcher {
    pub fn new(loader: Arc<dyn Loader>, repaint: Option<egui::Context>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            loader,
            latest: 0,
            pending: false,
            last_query: None,
            sender,
            receiver,
            repaint,
        }
    }

    pub fn trigger(&mut self, query: &str) -> u64 {
        self.latest += 1;
        self.pending = true;
        self.last_query = Some(query.to_string());

        let generation = self.latest;
        let query = query.to_string();
        let loader = Arc::clone(&self.loader);
        let sender = self.sender.clone();
        let repaint = self.repaint.clone();

        log::debug!("Search #{} started for {:?}", generation, query);

        thread::spawn(move || {
            let result = run_pipeline(loader.as_ref(), &query);
            if sender.send(SearchOutcome { generation, query, result }).is_err() {
                log::debug!("Search #{} finished after the UI went away", generation);
                return;
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        generation
    }

    pub fn retrigger(&mut self) -> Option<u64> {
        let query = self.last_query.clone()?;
        Some(self.trigger(&query))
    }

    /// Drains finished searches and returns the latest one, if it is done.
    pub fn poll(&mut self) -> Option<SearchOutcome> {
        let mut current = None;
        while let Ok(outcome) = self.receiver.try_recv() {
            if outcome.generation == self.latest {
                current = Some(outcome);
            } else {
                log::debug!(
                    "Discarding stale search #{} (latest is #{})",
                    outcome.generation,
                    self.latest
                );
            }
        }

        if current.is_some() {
            self.pending = false;
        }
        current
    }

    pub fn last_query(&self) -> Option<&str> {
        self.last_query.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

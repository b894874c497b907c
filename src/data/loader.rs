//! Background dataset loading
//!
//! Reading and parsing the CSV happens off the UI thread. The UI polls the
//! loader each frame and sets up charts only once the outcome arrives.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, TryRecvError, channel};
use std::thread;

use super::film::Dataset;
use super::source::DataSource;
use crate::error::DataLoadError;

/// Result of one load request
#[derive(Debug)]
pub enum LoadOutcome {
    /// Dataset read successfully
    Loaded(Arc<Dataset>),
    /// Reading failed; nothing should be rendered
    Failed(DataLoadError),
}

/// One in-flight load on a worker thread
///
/// Dropping the loader detaches the thread; its result is discarded.
pub struct DatasetLoader {
    path: PathBuf,
    rx: Receiver<LoadOutcome>,
    finished: bool,
}

impl DatasetLoader {
    /// Start loading `path`, calling `notify` from the worker once the outcome is ready
    pub fn spawn_with_notify(path: PathBuf, notify: impl Fn() + Send + 'static) -> Self {
        let (tx, rx) = channel::<LoadOutcome>();
        let worker_path = path.clone();

        log::info!("loading dataset from {}", path.display());
        thread::spawn(move || {
            let outcome = Self::load(&worker_path);
            if tx.send(outcome).is_ok() {
                notify();
            }
        });

        Self {
            path,
            rx,
            finished: false,
        }
    }

    fn load(path: &Path) -> LoadOutcome {
        profiling::scope!("load_dataset");

        match DataSource::load(path) {
            Ok(source) => {
                let dataset = source.to_dataset();
                log::info!("loaded {} films from {}", dataset.len(), path.display());
                LoadOutcome::Loaded(Arc::new(dataset))
            }
            Err(e) => {
                log::error!("failed to load {}: {}", path.display(), e);
                LoadOutcome::Failed(e)
            }
        }
    }

    /// Path being loaded
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Poll for the outcome (non-blocking); yields it at most once
    pub fn poll(&mut self) -> Option<LoadOutcome> {
        if self.finished {
            return None;
        }
        match self.rx.try_recv() {
            Ok(outcome) => {
                self.finished = true;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finished = true;
                Some(LoadOutcome::Failed(DataLoadError::Disconnected))
            }
        }
    }

    /// Block until the outcome is available
    #[cfg(test)]
    pub fn wait(self) -> LoadOutcome {
        self.rx
            .recv()
            .unwrap_or(LoadOutcome::Failed(DataLoadError::Disconnected))
    }
}

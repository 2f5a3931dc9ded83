//! Name-keyed logger registry
//!
//! An explicit object rather than implicit module-level state, so tests get
//! a fresh registry each and applications decide its lifetime (typically one
//! registry constructed at startup and handed around by reference).
//!
//! Repeat `get_logger` calls for a configured name are last-writer-wins: the
//! new options are validated in full, then replace the stored config
//! atomically. Handles obtained before the reconfiguration share the same
//! state and pick up the new config on their next call.

use crate::core::config::LoggerOptions;
use crate::core::error::Result;
use crate::core::logger::{Logger, SharedState};
use crate::sinks::FileSink;
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Default)]
pub struct LoggerRegistry {
    entries: RwLock<HashMap<String, Arc<SharedState>>>,
}

impl LoggerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get or (re)configure the logger for `name`.
    ///
    /// The first call for a name stores the validated config and opens the
    /// file destination. A repeat call revalidates, reopens, and replaces —
    /// an invalid option set fails here and leaves the existing
    /// configuration untouched.
    pub fn get_logger(&self, name: &str, options: LoggerOptions) -> Result<Logger> {
        // Validate and acquire resources before touching shared state.
        let config = options.into_config(name)?;
        let sink = match &config.file_path {
            Some(path) => Some(FileSink::open(path)?),
            None => None,
        };

        let mut entries = self.entries.write();
        match entries.get(name) {
            Some(shared) => {
                *shared.config.write() = config;
                *shared.file.lock() = sink;
                Ok(Logger::from_shared(Arc::clone(shared)))
            }
            None => {
                let shared = Arc::new(SharedState {
                    config: RwLock::new(config),
                    file: Mutex::new(sink),
                });
                entries.insert(name.to_string(), Arc::clone(&shared));
                Ok(Logger::from_shared(shared))
            }
        }
    }

    /// Handle to an already-configured logger, without reconfiguring it.
    pub fn get(&self, name: &str) -> Option<Logger> {
        self.entries
            .read()
            .get(name)
            .map(|shared| Logger::from_shared(Arc::clone(shared)))
    }

    /// Names configured so far, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

// SPDX-License-Identifier: GPL-3.0-or-later

//!
//! Paper Calendar config
//!

use log::info;
use paper_calendar_core::{Event, HourSpan};
use paper_calendar_renderer::CalendarStyle;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The config read from disk.  Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The hours shown by the day and week views
    pub hour_span: HourSpan,

    pub style: CalendarStyle,

    /// JSON files each holding an array of events.  Relative paths are
    /// relative to the config file.
    pub event_files: Vec<PathBuf>,

    /// Events written directly in the config
    pub events: Vec<Event>,
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse<T: for<'de> Deserialize<'de>>(path: &Path, data: &str) -> Result<T, ConfigError> {
    serde_json::from_str(data).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading config from {}", path.display());
        let data = read(path)?;
        let mut config: Config = parse(path, &data)?;
        if let Some(dir) = path.parent() {
            config.event_files = config
                .event_files
                .into_iter()
                .map(|file| dir.join(file))
                .collect();
        }
        Ok(config)
    }

    /// Every event: those in the config's event files, then `extra_files`,
    /// then the config's own events
    pub fn load_events(&self, extra_files: &[PathBuf]) -> Result<Vec<Event>, ConfigError> {
        let mut events = Vec::new();
        for path in self.event_files.iter().chain(extra_files) {
            let file_events: Vec<Event> = parse(path, &read(path)?)?;
            info!("Loaded {} event(s) from {}", file_events.len(), path.display());
            events.extend(file_events);
        }
        events.extend(self.events.iter().cloned());
        Ok(events)
    }
}

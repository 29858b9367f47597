//! Key-value persistence of raw observation arrays.
//!
//! The engine treats stored data as an opaque source: a JSON array of
//! `{"value": .., "label": ..}` objects saved under a fixed key.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::Observation;
use crate::error::{ChartError, ChartResult};

/// Key under which the chart data array is stored.
pub const CHART_DATA_KEY: &str = "app_chart_data";

/// Storage backend for observation arrays.
pub trait ObservationStore {
    /// Returns `None` when nothing is stored under `key`.
    fn load(&self, key: &str) -> ChartResult<Option<Vec<Observation>>>;

    fn save(&mut self, key: &str, observations: &[Observation]) -> ChartResult<()>;

    /// Removing a missing key is not an error.
    fn clear(&mut self, key: &str) -> ChartResult<()>;
}

/// Loads the chart data, logging and swallowing any storage failure.
pub fn load_chart_data<S: ObservationStore + ?Sized>(store: &S) -> Option<Vec<Observation>> {
    match store.load(CHART_DATA_KEY) {
        Ok(observations) => observations,
        Err(err) => {
            warn!(error = %err, key = CHART_DATA_KEY, "failed to load chart data");
            None
        }
    }
}

pub fn encode_observations(observations: &[Observation]) -> ChartResult<String> {
    Ok(serde_json::to_string(observations)?)
}

pub fn decode_observations(payload: &str) -> ChartResult<Vec<Observation>> {
    Ok(serde_json::from_str(payload)?)
}

/// In-memory store holding encoded payloads, useful for tests and web hosts
/// that bridge to their own local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: IndexMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw encoded payload stored under `key`.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert_raw(&mut self, key: impl Into<String>, payload: impl Into<String>) {
        self.entries.insert(key.into(), payload.into());
    }
}

impl ObservationStore for MemoryStore {
    fn load(&self, key: &str) -> ChartResult<Option<Vec<Observation>>> {
        self.entries
            .get(key)
            .map(|payload| decode_observations(payload))
            .transpose()
    }

    fn save(&mut self, key: &str, observations: &[Observation]) -> ChartResult<()> {
        let payload = encode_observations(observations)?;
        self.entries.insert(key.to_owned(), payload);
        Ok(())
    }

    fn clear(&mut self, key: &str) -> ChartResult<()> {
        self.entries.shift_remove(key);
        Ok(())
    }
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &str) -> ChartResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(ChartError::InvalidData(format!(
                "storage key `{key}` must be non-empty ascii alphanumerics, `_`, `-` or `.`"
            )));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl ObservationStore for JsonFileStore {
    fn load(&self, key: &str) -> ChartResult<Option<Vec<Observation>>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(payload) => {
                let observations = decode_observations(&payload)?;
                debug!(path = %path.display(), count = observations.len(), "loaded observations");
                Ok(Some(observations))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, observations: &[Observation]) -> ChartResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, encode_observations(observations)?)?;
        debug!(path = %path.display(), count = observations.len(), "saved observations");
        Ok(())
    }

    fn clear(&mut self, key: &str) -> ChartResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

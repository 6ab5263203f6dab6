//! Where the "onboarding completed" flag lives between launches.
//!
//! The default is [`Ephemeral`]: nothing survives a restart and onboarding
//! shows on every launch. [`JsonFileStore`] keeps the flag on disk for builds
//! that opt into `remember_onboarding`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("state file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("state file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub trait OnboardingStore {
    fn has_completed(&self) -> Result<bool, StoreError>;
    fn mark_completed(&mut self) -> Result<(), StoreError>;
}

/// Forgets everything; onboarding runs every launch.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ephemeral;

impl OnboardingStore for Ephemeral {
    fn has_completed(&self) -> Result<bool, StoreError> {
        Ok(false)
    }

    fn mark_completed(&mut self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct MemoryStore {
    pub completed: bool,
}

#[cfg(test)]
impl OnboardingStore for MemoryStore {
    fn has_completed(&self) -> Result<bool, StoreError> {
        Ok(self.completed)
    }

    fn mark_completed(&mut self) -> Result<(), StoreError> {
        self.completed = true;
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct StateFile {
    #[serde(default)]
    onboarding_completed: bool,
}

#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<StateFile, StoreError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(StateFile::default());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&json).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl OnboardingStore for JsonFileStore {
    fn has_completed(&self) -> Result<bool, StoreError> {
        Ok(self.read()?.onboarding_completed)
    }

    fn mark_completed(&mut self) -> Result<(), StoreError> {
        let state = StateFile {
            onboarding_completed: true,
        };
        let json = serde_json::to_string_pretty(&state).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;
        std::fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("wrote onboarding flag to {}", self.path.display());
        Ok(())
    }
}

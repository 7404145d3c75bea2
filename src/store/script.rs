//! Replayable mutation scripts
//!
//! A script is a JSON array of mutations in their wire form. Scripts are how
//! a recorded editing session is reproduced outside the UI.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use super::error::StoreError;
use super::mutation::Mutation;
use super::NodeGraphStore;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MutationScript {
    pub mutations: Vec<Mutation>,
}

impl MutationScript {
    pub fn new(mutations: Vec<Mutation>) -> Self {
        Self { mutations }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ReplayError> {
        serde_json::from_str(json).map_err(ReplayError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let content = std::fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn len(&self) -> usize {
        self.mutations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mutations.is_empty()
    }

    /// Commits every mutation in order and returns how many were applied.
    ///
    /// Stops at the first rejected mutation; earlier steps stay applied.
    pub fn apply(&self, store: &mut NodeGraphStore) -> Result<usize, ReplayError> {
        for (step, mutation) in self.mutations.iter().enumerate() {
            store
                .commit(mutation.clone())
                .map_err(|source| ReplayError::Rejected {
                    step,
                    mutation: mutation.name(),
                    source,
                })?;
        }
        info!("Replayed {} mutations", self.mutations.len());
        Ok(self.mutations.len())
    }
}

#[derive(Debug)]
pub enum ReplayError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Rejected {
        step: usize,
        mutation: &'static str,
        source: StoreError,
    },
}

impl Display for ReplayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read script {}: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid mutation script: {err}"),
            Self::Rejected {
                step,
                mutation,
                source,
            } => write!(f, "step {step} ({mutation}) rejected: {source}"),
        }
    }
}

impl Error for ReplayError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Rejected { source, .. } => Some(source),
        }
    }
}

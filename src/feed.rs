//! Backend feed boundary: `{ success, data, message }` envelopes in, typed
//! [`IpoRecord`]s out.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::IpoRecord;

/// Refresh cadence of the deployed pages. Sources never refresh on their own.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 300;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<Value>>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("failed to read feed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed feed payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("backend reported failure: {0}")]
    Upstream(String),
}

pub fn decode_feed(json: &str) -> Result<Vec<IpoRecord>, FeedError> {
    let envelope: FeedEnvelope = serde_json::from_str(json).map_err(|err| {
        warn!(
            component = "feed",
            event = "feed.decode.error",
            error = %err
        );
        FeedError::Decode(err)
    })?;

    if !envelope.success {
        let message = envelope
            .message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "unknown error".to_string());
        warn!(
            component = "feed",
            event = "feed.upstream.error",
            message = %message
        );
        return Err(FeedError::Upstream(message));
    }

    let raw = envelope.data.unwrap_or_default();
    let mut records = Vec::with_capacity(raw.len());
    for (index, value) in raw.into_iter().enumerate() {
        if !value.is_object() {
            warn!(
                component = "feed",
                event = "feed.record.skipped",
                index,
                reason = "not_an_object"
            );
            continue;
        }
        match serde_json::from_value::<IpoRecord>(value) {
            Ok(record) => records.push(record),
            Err(err) => warn!(
                component = "feed",
                event = "feed.record.skipped",
                index,
                reason = %err
            ),
        }
    }

    info!(
        component = "feed",
        event = "feed.loaded",
        records = records.len()
    );
    Ok(records)
}

pub fn load_feed_file(path: &Path) -> Result<Vec<IpoRecord>, FeedError> {
    let json = fs::read_to_string(path).map_err(|source| FeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode_feed(&json)
}

pub trait IpoSource: Send + Sync + 'static {
    fn records(&self) -> Result<Vec<IpoRecord>, FeedError>;
}

#[derive(Clone, Default)]
pub struct InMemoryIpoSource {
    inner: Arc<RwLock<Vec<IpoRecord>>>,
}

impl InMemoryIpoSource {
    pub fn new(records: Vec<IpoRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(records)),
        }
    }

    pub fn replace_records(&self, records: Vec<IpoRecord>) {
        let mut guard = self
            .inner
            .write()
            .expect("in-memory records lock should not be poisoned");
        *guard = records;
    }
}

impl IpoSource for InMemoryIpoSource {
    fn records(&self) -> Result<Vec<IpoRecord>, FeedError> {
        Ok(self
            .inner
            .read()
            .expect("in-memory records lock should not be poisoned")
            .clone())
    }
}

/// Re-reads the envelope file on every call.
#[derive(Debug, Clone)]
pub struct FileIpoSource {
    path: PathBuf,
}

impl FileIpoSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl IpoSource for FileIpoSource {
    fn records(&self) -> Result<Vec<IpoRecord>, FeedError> {
        load_feed_file(&self.path)
    }
}

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use crate::forms::parser::FormMessage;

/// Key format of stored entries, local time at microsecond precision.
/// Two appends landing in the same microsecond share a key and the later
/// one overwrites the earlier.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// The full persisted document: submission timestamp -> decoded message.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordDocument(pub BTreeMap<String, FormMessage>);

impl RecordDocument {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Timestamp-keyed JSON store backed by a single file.
///
/// The store is the only writer of its file within the process; the internal
/// mutex keeps the read-modify-write cycle single-writer even if multiple
/// tasks ever hold the same store.
pub struct RecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file with an empty document if it does not exist,
    /// creating parent directories as needed. An existing file is left alone.
    pub async fn init(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let empty = render_pretty(&RecordDocument::default())?;
        tokio::fs::write(&self.path, empty)
            .await
            .with_context(|| format!("failed to create {}", self.path.display()))?;

        Ok(())
    }

    /// Appends one message under a fresh timestamp key.
    ///
    /// Runs the full read-modify-write cycle under the store lock. On any
    /// failure the file keeps its previous content and the error propagates
    /// to the caller, which drops the message.
    pub async fn append(&self, message: FormMessage) -> Result<()> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read_document().await?;
        let key = Local::now().format(TIMESTAMP_FORMAT).to_string();
        document.0.insert(key, message);

        let rendered = render_pretty(&document)?;
        tokio::fs::write(&self.path, rendered)
            .await
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        Ok(())
    }

    /// Reads and parses the current document.
    pub async fn read_all(&self) -> Result<RecordDocument> {
        self.read_document().await
    }

    async fn read_document(&self) -> Result<RecordDocument> {
        let raw = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;

        serde_json::from_slice(&raw)
            .with_context(|| format!("{} contains malformed JSON", self.path.display()))
    }
}

/// Renders the document as human-readable JSON: 4-space indentation,
/// non-ASCII characters preserved literally.
fn render_pretty(document: &RecordDocument) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    document
        .serialize(&mut serializer)
        .context("failed to serialize record document")?;
    Ok(out)
}

// SPDX-License-Identifier: MPL-2.0
//! The reader's own reactions, persisted across sessions in CBOR format.
//!
//! The backend only keeps totals, so remembering which items *this* reader
//! already liked or disliked is a client concern. The ledger is stored
//! separately from `settings.toml` because it is not user-editable.
//!
//! # Path Resolution
//!
//! 1. `base_dir` passed to `load_from()`/`save_to()`
//! 2. `--data-dir` or `NEWSDECK_DATA_DIR`
//! 3. Platform-specific data directory

use crate::domain::news::{ItemId, ReactionKind};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Ledger file name within the app data directory.
const LEDGER_FILE: &str = "reactions.cbor";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum StoredReaction {
    Like,
    Dislike,
}

impl From<ReactionKind> for StoredReaction {
    fn from(kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Like => StoredReaction::Like,
            ReactionKind::Dislike => StoredReaction::Dislike,
        }
    }
}

impl From<StoredReaction> for ReactionKind {
    fn from(stored: StoredReaction) -> Self {
        match stored {
            StoredReaction::Like => ReactionKind::Like,
            StoredReaction::Dislike => ReactionKind::Dislike,
        }
    }
}

/// On-disk shape. A sorted map keeps the file stable between saves.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoredLedger {
    #[serde(default)]
    reactions: BTreeMap<String, StoredReaction>,
}

/// Which reaction, if any, the reader left on each item.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReactionLedger {
    reactions: HashMap<ItemId, ReactionKind>,
}

impl ReactionLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reader's reaction to `id`.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<ReactionKind> {
        self.reactions.get(id).copied()
    }

    /// Records `kind` for `id`. Returns `false` if it was already recorded.
    pub fn record(&mut self, id: ItemId, kind: ReactionKind) -> bool {
        self.reactions.insert(id, kind) != Some(kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reactions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// Loads the ledger from the default location.
    ///
    /// Returns a tuple of (ledger, optional_warning). A missing file is not
    /// an error; an unreadable or corrupt one yields an empty ledger and a
    /// warning the host can show.
    pub fn load() -> (Self, Option<String>) {
        Self::load_from(None)
    }

    /// Loads the ledger from a custom directory.
    pub fn load_from(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = Self::ledger_path_with_override(base_dir) else {
            return (Self::default(), None);
        };

        if !path.exists() {
            return (Self::default(), None);
        }

        let file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), %err, "could not open reaction ledger");
                return (
                    Self::default(),
                    Some(format!("Could not read {}: {}", path.display(), err)),
                );
            }
        };

        match ciborium::from_reader::<StoredLedger, _>(BufReader::new(file)) {
            Ok(stored) => {
                let reactions: HashMap<_, _> = stored
                    .reactions
                    .into_iter()
                    .map(|(id, kind)| (ItemId::from(id), ReactionKind::from(kind)))
                    .collect();
                debug!(count = reactions.len(), "loaded reaction ledger");
                (Self { reactions }, None)
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "discarding corrupt reaction ledger");
                (
                    Self::default(),
                    Some(format!("Saved reactions in {} are corrupt", path.display())),
                )
            }
        }
    }

    /// Saves the ledger to the default location.
    ///
    /// Returns an optional warning message if save failed.
    pub fn save(&self) -> Option<String> {
        self.save_to(None)
    }

    /// Saves the ledger to a custom directory, creating it if needed.
    pub fn save_to(&self, base_dir: Option<PathBuf>) -> Option<String> {
        let Some(path) = Self::ledger_path_with_override(base_dir) else {
            return Some("No data directory available for saved reactions".to_string());
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                return Some(format!("Could not create {}: {}", parent.display(), err));
            }
        }

        let stored = StoredLedger {
            reactions: self
                .reactions
                .iter()
                .map(|(id, kind)| (id.as_str().to_string(), StoredReaction::from(*kind)))
                .collect(),
        };

        match fs::File::create(&path) {
            Ok(file) => {
                if let Err(err) = ciborium::into_writer(&stored, BufWriter::new(file)) {
                    return Some(format!("Could not write {}: {}", path.display(), err));
                }
                None
            }
            Err(err) => Some(format!("Could not create {}: {}", path.display(), err)),
        }
    }

    fn ledger_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
        paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(LEDGER_FILE);
            path
        })
    }
}

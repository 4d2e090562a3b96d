//! Best score and tutorial flag, kept in a small JSON file.
//!
//! File layout: `{"tetrixapp_best": 1200, "tetrixapp_tutorial_seen": true}`.
//! A missing file means a first run. A file that cannot be read or parsed is
//! reported and treated as empty; the game never stops because of it.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoreData {
    #[serde(rename = "tetrixapp_best", default)]
    pub best: u32,
    #[serde(rename = "tetrixapp_tutorial_seen", default)]
    pub tutorial_seen: bool,
}

#[derive(Debug, Clone)]
pub struct Store {
    path: Option<PathBuf>,
    data: StoreData,
}

impl Store {
    /// Store that never touches the disk.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: StoreData::default(),
        }
    }

    /// Open the store at `path`, or an in-memory one when `None`.
    ///
    /// Returns the store plus a warning when an existing file was unusable.
    pub fn open(path: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = path else {
            return (Self::in_memory(), None);
        };
        match load(&path) {
            Ok(data) => (
                Self {
                    path: Some(path),
                    data,
                },
                None,
            ),
            Err(err) => {
                let warning = format!("{err:#}; starting with defaults");
                (
                    Self {
                        path: Some(path),
                        data: StoreData::default(),
                    },
                    Some(warning),
                )
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn best(&self) -> u32 {
        self.data.best
    }

    pub fn tutorial_seen(&self) -> bool {
        self.data.tutorial_seen
    }

    /// Save `score` if it beats the stored best. Returns whether it did.
    pub fn record_best(&mut self, score: u32) -> Result<bool> {
        if score <= self.data.best {
            return Ok(false);
        }
        self.data.best = score;
        self.save()?;
        Ok(true)
    }

    pub fn mark_tutorial_seen(&mut self) -> Result<()> {
        if self.data.tutorial_seen {
            return Ok(());
        }
        self.data.tutorial_seen = true;
        self.save()
    }

    /// Write the current values; a no-op for in-memory stores.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let json = serde_json::to_vec_pretty(&self.data)?;

        // Write then rename so a crash never leaves a half-written file.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("write {}", tmp.display()))?;
        fs::rename(&tmp, path).with_context(|| format!("replace {}", path.display()))?;
        Ok(())
    }
}

fn load(path: &Path) -> Result<StoreData> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(StoreData::default()),
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };
    serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_keys() {
        let data = StoreData {
            best: 1200,
            tutorial_seen: true,
        };
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(
            json,
            r#"{"tetrixapp_best":1200,"tetrixapp_tutorial_seen":true}"#
        );
    }

    #[test]
    fn test_missing_keys_default() {
        let data: StoreData = serde_json::from_str(r#"{"tetrixapp_best":5}"#).unwrap();
        assert_eq!(data.best, 5);
        assert!(!data.tutorial_seen);

        let data: StoreData = serde_json::from_str("{}").unwrap();
        assert_eq!(data, StoreData::default());
    }

    #[test]
    fn test_in_memory_store() {
        let mut store = Store::in_memory();
        assert!(store.record_best(10).unwrap());
        assert!(!store.record_best(10).unwrap());
        assert!(!store.record_best(3).unwrap());
        assert_eq!(store.best(), 10);
        store.mark_tutorial_seen().unwrap();
        assert!(store.tutorial_seen());
        assert!(store.path().is_none());
    }
}

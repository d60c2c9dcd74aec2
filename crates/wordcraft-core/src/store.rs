use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use wordcraft_types::{Definition, Flashcard};

use crate::error::StoreError;

/// On-disk document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreData {
    /// Lowercased word -> priority-sorted definitions
    #[serde(default)]
    pub dictionary: BTreeMap<String, Vec<Definition>>,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
}

/// Definition cache and flashcards bound to a single JSON file.
///
/// Every mutation rewrites the whole file. There is no locking, two
/// processes sharing a file will overwrite each other.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    data: StoreData,
}

impl Store {
    /// Load the store, starting empty when the file does not exist yet
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        if !path.exists() {
            tracing::info!("No store at {}, starting empty", path.display());
            return Ok(Self {
                path,
                data: StoreData::default(),
            });
        }

        let raw = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let data: StoreData = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: path.clone(),
            source,
        })?;

        tracing::info!(
            "Loaded store from {}: {} cached words, {} flashcards",
            path.display(),
            data.dictionary.len(),
            data.flashcards.len()
        );

        Ok(Self { path, data })
    }

    /// Rewrite the whole file, pretty-printed with 4-space indentation
    pub fn save(&self) -> Result<(), StoreError> {
        let mut buf = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        self.data.serialize(&mut serializer)?;

        fs::write(&self.path, buf).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!("Saved store to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &StoreData {
        &self.data
    }

    pub fn cached(&self, key: &str) -> Option<&[Definition]> {
        self.data.dictionary.get(key).map(Vec::as_slice)
    }

    /// Insert definitions under the lowercased key and persist immediately.
    /// The insert is undone if the write fails.
    pub fn cache_definitions(
        &mut self,
        key: &str,
        definitions: Vec<Definition>,
    ) -> Result<(), StoreError> {
        let key = key.to_lowercase();
        let previous = self.data.dictionary.insert(key.clone(), definitions);

        if let Err(e) = self.save() {
            match previous {
                Some(previous) => self.data.dictionary.insert(key, previous),
                None => self.data.dictionary.remove(&key),
            };
            return Err(e);
        }
        Ok(())
    }

    pub fn flashcards(&self) -> &[Flashcard] {
        &self.data.flashcards
    }

    /// Append a card and persist immediately, the card is dropped again if the write fails
    pub fn push_flashcard(&mut self, card: Flashcard) -> Result<(), StoreError> {
        self.data.flashcards.push(card);

        if let Err(e) = self.save() {
            self.data.flashcards.pop();
            return Err(e);
        }
        Ok(())
    }
}

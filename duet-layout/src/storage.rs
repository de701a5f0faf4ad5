use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::error::StorageError;

const STORAGE_DIR_NAME: &str = "duet";
const STORAGE_FILE_NAME: &str = "storage.json";

/// Key-value medium that persists string entries across sessions.
///
/// Implementations report failures through [`StorageError`]; callers that
/// treat the medium as a best-effort cache decide how to absorb them.
pub trait Storage {
    /// Read the value stored under `key`, or `None` when it is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage backed by a single JSON object file.
///
/// Entries written through this medium are JSON strings. Values of any other
/// type written by other tools are kept untouched on write; reading one of
/// them fails only for its own key.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Use the document at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use the per-user document at [`default_storage_path`].
    pub fn open_default() -> Self {
        Self::new(default_storage_path())
    }

    /// Return the location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StorageError> {
        let data = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(Map::new());
            },
            Err(err) => return Err(err.into()),
        };

        if data.trim().is_empty() {
            return Ok(Map::new());
        }

        Ok(serde_json::from_str(&data)?)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.read_entries()?;
        match entries.remove(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value)),
            Some(_) => Err(StorageError::NotAString(key.to_string())),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::Json(err)) => {
                log::warn!(
                    "replacing unreadable storage document {}: {err}",
                    self.path.display()
                );
                Map::new()
            },
            Err(err) => return Err(err),
        };
        entries.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload = serde_json::to_string_pretty(&entries)?;
        write_atomic(&self.path, payload.as_bytes())?;

        Ok(())
    }
}

/// Storage kept in process memory, used for tests and as a stand-in when
/// no durable medium exists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an entry, e.g. a value written by a previous session.
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Return the per-user storage document path.
///
/// Resolves to `$HOME/.config/duet/storage.json`, or a directory under the
/// system temp dir when `HOME` is not set.
pub fn default_storage_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join(STORAGE_DIR_NAME)
            .join(STORAGE_FILE_NAME);
    }

    std::env::temp_dir()
        .join(STORAGE_DIR_NAME)
        .join(STORAGE_FILE_NAME)
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{FileStorage, MemoryStorage, Storage};
    use crate::error::StorageError;

    #[test]
    fn given_missing_file_when_get_then_returns_none() {
        let root = test_temp_dir("missing_file");
        let storage = FileStorage::new(root.join("storage.json"));

        let value = storage.get("duet:sidebar").expect("missing file is ok");

        assert_eq!(value, None);
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_entries_when_set_then_other_keys_are_preserved() {
        let root = test_temp_dir("preserve_keys");
        let mut storage = FileStorage::new(root.join("nested/storage.json"));

        storage.set("first", "1").expect("first write should succeed");
        storage.set("second", "2").expect("second write should succeed");
        storage.set("first", "3").expect("overwrite should succeed");

        assert_eq!(storage.get("first").expect("read"), Some("3".into()));
        assert_eq!(storage.get("second").expect("read"), Some("2".into()));
        assert!(!root.join("nested/storage.json.tmp").exists());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_foreign_non_string_entry_when_reading_and_writing_then_it_is_kept()
    {
        let root = test_temp_dir("foreign_values");
        let path = root.join("storage.json");
        fs::write(
            &path,
            r#"{"other":5,"flags":{"dark":true},"duet:sidebar":"saved"}"#,
        )
        .expect("payload should be written");
        let mut storage = FileStorage::new(&path);

        assert_eq!(
            storage.get("duet:sidebar").expect("string entry is readable"),
            Some("saved".into())
        );
        assert!(matches!(
            storage.get("other"),
            Err(StorageError::NotAString(key)) if key == "other"
        ));

        storage.set("duet:sidebar", "updated").expect("write should succeed");

        let document: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(&path).expect("document should be readable"),
        )
        .expect("document should stay valid json");
        assert_eq!(document["other"], serde_json::json!(5));
        assert_eq!(document["flags"], serde_json::json!({"dark": true}));
        assert_eq!(document["duet:sidebar"], serde_json::json!("updated"));

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_corrupt_document_when_get_then_returns_json_error() {
        let root = test_temp_dir("corrupt_get");
        let path = root.join("storage.json");
        fs::write(&path, "{ not json").expect("payload should be written");
        let storage = FileStorage::new(&path);

        let result = storage.get("duet:sidebar");

        assert!(matches!(result, Err(StorageError::Json(_))));
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_corrupt_document_when_set_then_document_is_replaced() {
        let root = test_temp_dir("corrupt_set");
        let path = root.join("storage.json");
        fs::write(&path, "[1, 2").expect("payload should be written");
        let mut storage = FileStorage::new(&path);

        storage.set("key", "value").expect("write should recover");

        assert_eq!(storage.get("key").expect("read"), Some("value".into()));
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_directory_in_place_of_file_when_get_then_returns_io_error() {
        let root = test_temp_dir("directory_path");
        let storage = FileStorage::new(&root);

        let result = storage.get("key");

        assert!(matches!(result, Err(StorageError::Io(_))));
        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_memory_storage_when_seeded_then_entry_is_readable() {
        let storage = MemoryStorage::new().with_entry("key", "value");

        assert_eq!(storage.get("key").expect("read"), Some("value".into()));
        assert_eq!(storage.get("other").expect("read"), None);
        assert_eq!(storage.len(), 1);
    }

    pub(crate) fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "duet-storage-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}

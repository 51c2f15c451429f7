use std::path::{Path, PathBuf};

use nav_types::Dataset;

use crate::codec;
use crate::error::StoreResult;
use crate::traits::DatasetPersistence;

/// File name used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// A dataset stored as one pretty-printed JSON file.
#[derive(Clone, Debug)]
pub struct JsonFilePersistence {
    path: PathBuf,
}

impl JsonFilePersistence {
    /// Store at `path`. A blank path means [`DEFAULT_DATA_FILE`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = if path.as_os_str().to_string_lossy().trim().is_empty() {
            PathBuf::from(DEFAULT_DATA_FILE)
        } else {
            path
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetPersistence for JsonFilePersistence {
    fn load(&self) -> Dataset {
        codec::load(&self.path)
    }

    fn save(&self, dataset: &Dataset) -> StoreResult<()> {
        codec::save(&self.path, dataset)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_path_falls_back_to_default_file() {
        assert_eq!(JsonFilePersistence::new("").path(), Path::new(DEFAULT_DATA_FILE));
        assert_eq!(JsonFilePersistence::new("   ").path(), Path::new(DEFAULT_DATA_FILE));
        assert_eq!(JsonFilePersistence::new("nav.json").path(), Path::new("nav.json"));
    }

    #[test]
    fn save_and_load_through_backend() {
        let dir = tempfile::tempdir().unwrap();
        let backend = JsonFilePersistence::new(dir.path().join("data.json"));
        let mut dataset = backend.load();
        assert_eq!(dataset.next_id, 1);

        dataset.next_id = 10;
        backend.save(&dataset).unwrap();
        assert_eq!(backend.load().next_id, 10);
        assert!(backend.describe().ends_with("data.json"));
    }
}

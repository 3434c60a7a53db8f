//! JSON file adapter for todo snapshots.
//!
//! The whole list lives in one file inside a capability-scoped directory.
//! Saves go through a sibling temporary file and a rename, so readers see
//! either the previous snapshot or the new one. A failed rename removes the
//! temporary file again.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::todo::{
    domain::Todo,
    ports::{TodoStore, TodoStoreError, TodoStoreResult},
};

/// File name used when none is given.
pub const DEFAULT_FILE_NAME: &str = "todos.json";

/// Snapshot store backed by a JSON file.
#[derive(Debug)]
pub struct JsonFileTodoStore {
    dir: Dir,
    file_name: String,
}

impl JsonFileTodoStore {
    /// Creates a store for `file_name` inside an already opened directory.
    #[must_use]
    pub fn new(dir: Dir, file_name: impl Into<String>) -> Self {
        Self {
            dir,
            file_name: file_name.into(),
        }
    }

    /// Opens (creating if needed) `path` and stores the list in
    /// [`DEFAULT_FILE_NAME`] there.
    ///
    /// # Errors
    ///
    /// Returns [`TodoStoreError::Persistence`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Utf8Path) -> TodoStoreResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority())
            .map_err(TodoStoreError::persistence)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(TodoStoreError::persistence)?;
        Ok(Self::new(dir, DEFAULT_FILE_NAME))
    }

    /// Returns the snapshot file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    fn temp_name(&self) -> String {
        format!("{}.tmp", self.file_name)
    }
}

#[async_trait]
impl TodoStore for JsonFileTodoStore {
    async fn load(&self) -> TodoStoreResult<Vec<Todo>> {
        let contents = match self.dir.read_to_string(&self.file_name) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(TodoStoreError::persistence(err)),
        };
        decode_snapshot(&contents)
    }

    async fn save(&self, snapshot: &[Todo]) -> TodoStoreResult<()> {
        let encoded = serde_json::to_vec_pretty(snapshot).map_err(TodoStoreError::persistence)?;
        let temp_name = self.temp_name();
        self.dir
            .write(&temp_name, encoded)
            .map_err(TodoStoreError::persistence)?;
        self.dir
            .rename(&temp_name, &self.dir, &self.file_name)
            .map_err(|err| {
                if let Err(cleanup) = self.dir.remove_file(&temp_name) {
                    tracing::warn!(
                        file = %temp_name,
                        error = %cleanup,
                        "failed to remove temporary snapshot"
                    );
                }
                TodoStoreError::persistence(err)
            })
    }
}

/// Decodes a stored snapshot. Blank input and `null` mean "nothing saved".
fn decode_snapshot(contents: &str) -> TodoStoreResult<Vec<Todo>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }
    let decoded: Option<Vec<Todo>> =
        serde_json::from_str(contents).map_err(|err| TodoStoreError::Decode(err.to_string()))?;
    Ok(decoded.unwrap_or_default())
}

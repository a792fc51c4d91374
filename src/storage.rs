// Manages local file storage for tasks.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to the Task struct or its nested types (DateType, TaskKind)
// require incrementing LOCAL_STORAGE_VERSION below to prevent data
// corruption.
use crate::context::AppContext;
use crate::model::Task;
use anyhow::Result;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Increment this when making breaking changes to the Task struct
// serialization format.
// Version history:
// - v0: bare task array, no wrapper
// - v1: versioned wrapper
// - v2: DateType enum for due/dtstart with AllDay/Specific support
const LOCAL_STORAGE_VERSION: u32 = 2;

/// Wrapper struct for versioned local storage
#[derive(Serialize, Deserialize)]
struct LocalStorageData {
    #[serde(default)]
    version: u32,
    tasks: Vec<Task>,
}

pub struct LocalStorage;

impl LocalStorage {
    /// Helper to get a sidecar lock file path
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive lock on a sidecar lock file, so
    /// two processes sharing one data file cannot interleave their writes.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Load all tasks. A missing file (first run) yields an empty list; the
    /// unversioned legacy format is still accepted and upgraded on the next
    /// save.
    pub fn load(ctx: &dyn AppContext) -> Result<Vec<Task>> {
        let path = ctx.get_task_file_path()?;
        if !path.exists() {
            return Ok(vec![]);
        }

        Self::with_lock(&path, || {
            let json = fs::read_to_string(&path)?;

            // Try to parse as versioned format first
            if let Ok(data) = serde_json::from_str::<LocalStorageData>(&json) {
                if data.version < LOCAL_STORAGE_VERSION {
                    log::info!(
                        "Migrating task file from v{} to v{}",
                        data.version,
                        LOCAL_STORAGE_VERSION
                    );
                }
                return Ok(data.tasks);
            }

            // Legacy format: a bare task array
            let tasks: Vec<Task> = serde_json::from_str(&json)?;
            Ok(tasks)
        })
    }

    /// Save all tasks under the current storage version.
    pub fn save(ctx: &dyn AppContext, tasks: &[Task]) -> Result<()> {
        let path = ctx.get_task_file_path()?;
        Self::with_lock(&path, || {
            let data = LocalStorageData {
                version: LOCAL_STORAGE_VERSION,
                tasks: tasks.to_vec(),
            };
            let json = serde_json::to_string_pretty(&data)?;
            Self::atomic_write(&path, json)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;
    use crate::model::DateType;

    #[test]
    fn test_atomic_write_and_load() {
        let ctx = TestContext::new();
        let tasks = vec![
            Task::todo("read book"),
            Task::deadline("return book", DateType::parse("2026-08-12").unwrap()),
        ];

        LocalStorage::save(&ctx, &tasks).unwrap();
        let loaded = LocalStorage::load(&ctx).unwrap();

        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let ctx = TestContext::new();
        assert!(LocalStorage::load(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_load_legacy_unversioned_format() {
        let ctx = TestContext::new();
        let tasks = vec![Task::todo("water plants")];
        let path = ctx.get_task_file_path().unwrap();

        // Bare array, the pre-wrapper format
        LocalStorage::atomic_write(&path, serde_json::to_string(&tasks).unwrap()).unwrap();

        let loaded = LocalStorage::load(&ctx).unwrap();
        assert_eq!(loaded, tasks);
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let ctx = TestContext::new();
        LocalStorage::save(&ctx, &[Task::todo("old")]).unwrap();
        LocalStorage::save(&ctx, &[Task::todo("new")]).unwrap();

        let loaded = LocalStorage::load(&ctx).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].summary, "new");
    }
}

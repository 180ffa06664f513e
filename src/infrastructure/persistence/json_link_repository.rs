//! JSON file implementation of the link repository.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::{AppError, map_io_error};

/// Link repository backed by a single JSON file.
///
/// The file holds the whole collection as one JSON array of
/// `{"code", "original", "createdAt"}` records. Every mutation rewrites the
/// file in full. A missing file reads as an empty collection; a file that
/// exists but does not parse is reported as [`AppError::StorageParse`].
pub struct JsonLinkRepository {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl JsonLinkRepository {
    /// Creates a repository persisting to `path`.
    ///
    /// The file is created lazily on the first `save_all`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The file path this repository persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_collection(&self) -> Result<Vec<Link>, AppError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("store file {} not found, starting empty", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(map_io_error(e, &self.path)),
        };

        serde_json::from_str(&raw).map_err(|e| {
            AppError::storage_parse(
                "Stored link collection is not valid JSON",
                json!({
                    "path": self.path.display().to_string(),
                    "source": e.to_string(),
                }),
            )
        })
    }

    fn write_collection(&self, links: &[Link]) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| map_io_error(e, parent))?;
        }

        let raw = serde_json::to_vec_pretty(links).map_err(|e| {
            AppError::internal(
                "Failed to serialize link collection",
                json!({ "source": e.to_string() }),
            )
        })?;

        fs::write(&self.path, raw).map_err(|e| map_io_error(e, &self.path))?;
        debug!("persisted {} links to {}", links.len(), self.path.display());
        Ok(())
    }
}

impl LinkRepository for JsonLinkRepository {
    fn load_all(&self) -> Result<Vec<Link>, AppError> {
        self.read_collection()
    }

    fn save_all(&self, links: &[Link]) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().expect("store lock poisoned");
        self.write_collection(links)
    }

    fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.read_collection()?.into_iter().find(|l| l.code == code))
    }

    fn insert_if_absent(&self, new_link: NewLink) -> Result<Link, AppError> {
        let _guard = self.write_lock.lock().expect("store lock poisoned");

        let mut links = self.read_collection()?;
        if links.iter().any(|l| l.code == new_link.code) {
            return Err(AppError::conflict(
                "Code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let link = Link::new(new_link.code, new_link.original, Utc::now());
        links.push(link.clone());
        self.write_collection(&links)?;

        Ok(link)
    }
}

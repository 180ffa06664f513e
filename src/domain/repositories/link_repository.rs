//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;

/// Repository interface for the persisted link collection.
///
/// The collection is an ordered sequence of [`Link`] records; insertion order
/// is display order. The whole collection is serialized and overwritten on
/// every mutation — there is no incremental update and no delete or edit
/// operation.
///
/// One store instance is shared by both the shortening and the resolving
/// services, so a single owner mediates every read and write.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::JsonLinkRepository`] - JSON file implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait LinkRepository: Send + Sync {
    /// Reads the persisted collection in insertion order.
    ///
    /// Returns an empty collection when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageParse`] if persisted content exists but
    /// cannot be deserialized, and [`AppError::Internal`] on I/O errors.
    fn load_all(&self) -> Result<Vec<Link>, AppError>;

    /// Serializes and overwrites the entire persisted collection.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on serialization or I/O errors.
    fn save_all(&self, links: &[Link]) -> Result<(), AppError>;

    /// Finds a link by its short code (exact, case-sensitive match).
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Same as [`Self::load_all`].
    fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically inserts a link if its code is not already taken.
    ///
    /// Reloads the collection fresh, checks uniqueness, appends, and
    /// persists in one step, so two callers inside the same process cannot
    /// race between the check and the write. Concurrent processes remain
    /// last-writer-wins at the file level.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    /// Propagates [`Self::load_all`] / [`Self::save_all`] failures.
    fn insert_if_absent(&self, new_link: NewLink) -> Result<Link, AppError>;
}

//! Generic repository contract
//!
//! `Repository<E>` is the only data-access seam of the service. It knows
//! nothing about villas; resource-specific behavior lives in the thin
//! wrappers of `domain::repositories`. Implementations live in
//! `infra/storage/repositories.rs`.

use async_trait::async_trait;
use thiserror::Error;

/// A persistable record addressed by an integer key
pub trait Entity: Clone + Send + Sync + 'static {
    /// Typed filter accepted by [`Repository::get`]
    type Filter: Predicate<Self> + std::fmt::Debug + Send + Sync + 'static;

    /// Resource name used in logs and not-found errors
    const RESOURCE: &'static str;

    /// Identifier of this record (0 when not yet assigned)
    fn key(&self) -> i32;

    /// Store the identifier generated by the provider on insert.
    ///
    /// Entities with a natural key ignore this.
    fn assign_key(&mut self, _key: i32) {}
}

/// Filter expression over an entity.
///
/// Providers either evaluate it directly (`matches`) or translate it into
/// their own query language.
pub trait Predicate<E> {
    fn matches(&self, entity: &E) -> bool;
}

/// Change-tracking mode of a read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tracking {
    /// The caller may hand the value back to the same repository
    #[default]
    Tracked,
    /// The value is detached: mutating it never persists anything until it is
    /// explicitly passed to `update`
    Untracked,
}

/// Data-access failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No row matched the entity key
    #[error("{resource} with key {key} does not exist")]
    NotFound { resource: &'static str, key: i32 },

    /// Provider failure (connectivity, constraint violation, ...)
    #[error("{0}")]
    Persistence(String),
}

/// Generic CRUD contract over a persistence provider
///
/// No operation returns before its effect is durable, and no transaction
/// spans two calls.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Every row, unfiltered
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError>;

    /// First row matching `filter`, or `None`
    async fn get(&self, filter: E::Filter, tracking: Tracking)
        -> Result<Option<E>, RepositoryError>;

    /// Insert a new row; the generated key is written back into `entity`
    async fn create(&self, entity: &mut E) -> Result<(), RepositoryError>;

    /// Full replace of the row keyed by `entity.key()`
    async fn update(&self, entity: &E) -> Result<(), RepositoryError>;

    /// Delete the row keyed by `entity.key()`; deleting an absent row succeeds
    async fn remove(&self, entity: &E) -> Result<(), RepositoryError>;
}

//! Resource repositories
//!
//! Each wraps a generic `Repository<E>` and only adds last-update bookkeeping.

use super::filter::{VillaFilter, VillaNumberFilter};
use super::repository::{Repository, RepositoryError, Tracking};
use crate::contract::{Villa, VillaNumber};
use std::sync::Arc;

/// Villa repository
#[derive(Clone)]
pub struct VillaRepository {
    inner: Arc<dyn Repository<Villa>>,
}

impl VillaRepository {
    pub fn new(inner: Arc<dyn Repository<Villa>>) -> Self {
        Self { inner }
    }

    pub async fn get_all(&self) -> Result<Vec<Villa>, RepositoryError> {
        self.inner.get_all().await
    }

    pub async fn get(
        &self,
        filter: VillaFilter,
        tracking: Tracking,
    ) -> Result<Option<Villa>, RepositoryError> {
        self.inner.get(filter, tracking).await
    }

    pub async fn create(&self, villa: &mut Villa) -> Result<(), RepositoryError> {
        self.inner.create(villa).await
    }

    /// Stamp `updated_at` and replace the stored row
    pub async fn update(&self, villa: &mut Villa) -> Result<(), RepositoryError> {
        villa.updated_at = chrono::Utc::now();
        self.inner.update(villa).await
    }

    pub async fn remove(&self, villa: &Villa) -> Result<(), RepositoryError> {
        self.inner.remove(villa).await
    }
}

/// Villa number repository
#[derive(Clone)]
pub struct VillaNumberRepository {
    inner: Arc<dyn Repository<VillaNumber>>,
}

impl VillaNumberRepository {
    pub fn new(inner: Arc<dyn Repository<VillaNumber>>) -> Self {
        Self { inner }
    }

    pub async fn get_all(&self) -> Result<Vec<VillaNumber>, RepositoryError> {
        self.inner.get_all().await
    }

    pub async fn get(
        &self,
        filter: VillaNumberFilter,
        tracking: Tracking,
    ) -> Result<Option<VillaNumber>, RepositoryError> {
        self.inner.get(filter, tracking).await
    }

    pub async fn create(&self, number: &mut VillaNumber) -> Result<(), RepositoryError> {
        self.inner.create(number).await
    }

    /// Stamp `updated_at` and replace the stored row
    pub async fn update(&self, number: &mut VillaNumber) -> Result<(), RepositoryError> {
        number.updated_at = chrono::Utc::now();
        self.inner.update(number).await
    }

    pub async fn remove(&self, number: &VillaNumber) -> Result<(), RepositoryError> {
        self.inner.remove(number).await
    }
}

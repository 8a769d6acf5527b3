//! Domain service - validation, referential checks and repository orchestration

use super::filter::{VillaFilter, VillaNumberFilter};
use super::patch::{apply_patch, PatchOperation};
use super::repositories::{VillaNumberRepository, VillaRepository};
use super::repository::{RepositoryError, Tracking};
use super::validation::{self, ValidationRules};
use crate::contract::{
    NewVilla, NewVillaNumber, Villa, VillaError, VillaNumber, VillaNumberUpdate, VillaUpdate,
};
use tracing::{error, info, warn};

impl From<RepositoryError> for VillaError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { resource, key } => VillaError::not_found(resource, key),
            RepositoryError::Persistence(message) => {
                error!("Persistence failure: {}", message);
                VillaError::Persistence { message }
            }
        }
    }
}

/// Domain service for villas and villa numbers
pub struct Service {
    villas: VillaRepository,
    numbers: VillaNumberRepository,
    rules: ValidationRules,
}

impl Service {
    /// Create a new service instance
    pub fn new(villas: VillaRepository, numbers: VillaNumberRepository, rules: ValidationRules) -> Self {
        Self {
            villas,
            numbers,
            rules,
        }
    }

    // ===== Villa Operations =====

    /// List every villa
    pub async fn list_villas(&self) -> Result<Vec<Villa>, VillaError> {
        info!("Listing villas");
        Ok(self.villas.get_all().await?)
    }

    /// Get a villa by id
    pub async fn get_villa(&self, id: i32) -> Result<Villa, VillaError> {
        if let Err(e) = validation::validate_id("id", id) {
            warn!("Rejected villa lookup with id {}", id);
            return Err(e);
        }

        self.villas
            .get(VillaFilter::Id(id), Tracking::Tracked)
            .await?
            .ok_or_else(|| VillaError::not_found("villa", id))
    }

    /// Create a villa with a case-insensitively unique name
    pub async fn create_villa(&self, new: NewVilla) -> Result<Villa, VillaError> {
        validation::validate_new_villa(&new, &self.rules)?;

        if self
            .villas
            .get(VillaFilter::NameIgnoreCase(new.name.clone()), Tracking::Untracked)
            .await?
            .is_some()
        {
            warn!("Villa name '{}' already exists", new.name);
            return Err(VillaError::Duplicate {
                field: "name".to_string(),
                message: format!("a villa named '{}' already exists", new.name),
            });
        }

        let now = chrono::Utc::now();
        let mut villa = Villa {
            id: 0,
            name: new.name,
            detail: new.detail,
            occupancy: new.occupancy,
            square_meters: new.square_meters,
            rate: new.rate,
            image_url: new.image_url,
            amenity: new.amenity,
            created_at: now,
            updated_at: now,
        };
        self.villas.create(&mut villa).await?;

        info!("Created villa {} ('{}')", villa.id, villa.name);
        Ok(villa)
    }

    /// Replace a villa; `id` is the path identifier
    pub async fn update_villa(&self, id: i32, update: VillaUpdate) -> Result<(), VillaError> {
        validation::validate_id("id", id)?;
        validation::validate_villa_update(&update, id, &self.rules)?;

        let current = self.load_villa_untracked(id).await?;
        let mut villa = update.into_villa(current.created_at);
        self.villas.update(&mut villa).await?;

        info!("Updated villa {}", id);
        Ok(())
    }

    /// Apply patch operations to a villa and persist the result
    ///
    /// Nothing is written when any operation or the resulting state is invalid;
    /// all problems are reported together.
    pub async fn patch_villa(
        &self,
        id: i32,
        operations: &[PatchOperation],
    ) -> Result<(), VillaError> {
        validation::validate_id("id", id)?;
        if operations.is_empty() {
            return Err(VillaError::validation(
                "patch document must contain at least one operation",
            ));
        }

        let current = self.load_villa_untracked(id).await?;
        let mut draft = VillaUpdate::from(&current);

        let mut errors = apply_patch(&mut draft, operations);
        errors.extend(validation::villa_update_errors(&draft, id, &self.rules));
        if !errors.is_empty() {
            warn!("Rejected patch of villa {}: {} error(s)", id, errors.len());
            return Err(VillaError::Validation { errors });
        }

        let mut villa = draft.into_villa(current.created_at);
        self.villas.update(&mut villa).await?;

        info!("Patched villa {} with {} operation(s)", id, operations.len());
        Ok(())
    }

    /// Delete a villa
    pub async fn delete_villa(&self, id: i32) -> Result<(), VillaError> {
        validation::validate_id("id", id)?;

        let villa = self
            .villas
            .get(VillaFilter::Id(id), Tracking::Tracked)
            .await?
            .ok_or_else(|| VillaError::not_found("villa", id))?;
        self.villas.remove(&villa).await?;

        info!("Deleted villa {}", id);
        Ok(())
    }

    async fn load_villa_untracked(&self, id: i32) -> Result<Villa, VillaError> {
        self.villas
            .get(VillaFilter::Id(id), Tracking::Untracked)
            .await?
            .ok_or_else(|| VillaError::not_found("villa", id))
    }

    async fn ensure_villa_exists(&self, villa_id: i32) -> Result<(), VillaError> {
        let found = self
            .villas
            .get(VillaFilter::Id(villa_id), Tracking::Untracked)
            .await?;
        if found.is_none() {
            warn!("Villa number references missing villa {}", villa_id);
            return Err(VillaError::ForeignKey {
                field: "villa_id".to_string(),
                message: format!("villa {} does not exist", villa_id),
            });
        }
        Ok(())
    }

    // ===== Villa Number Operations =====

    /// List every villa number
    pub async fn list_villa_numbers(&self) -> Result<Vec<VillaNumber>, VillaError> {
        info!("Listing villa numbers");
        Ok(self.numbers.get_all().await?)
    }

    /// Get a villa number by its number
    pub async fn get_villa_number(&self, villa_no: i32) -> Result<VillaNumber, VillaError> {
        validation::validate_id("villa_no", villa_no)?;

        self.numbers
            .get(VillaNumberFilter::VillaNo(villa_no), Tracking::Tracked)
            .await?
            .ok_or_else(|| VillaError::not_found("villa_number", villa_no))
    }

    /// Create a villa number; the number must be unused and the villa must exist
    pub async fn create_villa_number(&self, new: NewVillaNumber) -> Result<VillaNumber, VillaError> {
        validation::validate_new_villa_number(&new)?;

        if self
            .numbers
            .get(VillaNumberFilter::VillaNo(new.villa_no), Tracking::Untracked)
            .await?
            .is_some()
        {
            warn!("Villa number {} already exists", new.villa_no);
            return Err(VillaError::Duplicate {
                field: "villa_no".to_string(),
                message: format!("villa number {} already exists", new.villa_no),
            });
        }

        self.ensure_villa_exists(new.villa_id).await?;

        let now = chrono::Utc::now();
        let mut number = VillaNumber {
            villa_no: new.villa_no,
            villa_id: new.villa_id,
            special_detail: new.special_detail,
            created_at: now,
            updated_at: now,
        };
        self.numbers.create(&mut number).await?;

        info!("Created villa number {} for villa {}", number.villa_no, number.villa_id);
        Ok(number)
    }

    /// Replace a villa number; `villa_no` is the path identifier
    pub async fn update_villa_number(
        &self,
        villa_no: i32,
        update: VillaNumberUpdate,
    ) -> Result<(), VillaError> {
        validation::validate_id("villa_no", villa_no)?;
        validation::validate_villa_number_update(&update, villa_no)?;

        self.ensure_villa_exists(update.villa_id).await?;

        let current = self
            .numbers
            .get(VillaNumberFilter::VillaNo(villa_no), Tracking::Untracked)
            .await?
            .ok_or_else(|| VillaError::not_found("villa_number", villa_no))?;

        let mut number = VillaNumber {
            villa_no: update.villa_no,
            villa_id: update.villa_id,
            special_detail: update.special_detail,
            created_at: current.created_at,
            updated_at: current.updated_at,
        };
        self.numbers.update(&mut number).await?;

        info!("Updated villa number {}", villa_no);
        Ok(())
    }

    /// Delete a villa number
    pub async fn delete_villa_number(&self, villa_no: i32) -> Result<(), VillaError> {
        validation::validate_id("villa_no", villa_no)?;

        let number = self
            .numbers
            .get(VillaNumberFilter::VillaNo(villa_no), Tracking::Tracked)
            .await?
            .ok_or_else(|| VillaError::not_found("villa_number", villa_no))?;
        self.numbers.remove(&number).await?;

        info!("Deleted villa number {}", villa_no);
        Ok(())
    }
}

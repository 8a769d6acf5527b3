//! SeaORM repository implementation
//!
//! One generic repository serves every entity; `SeaOrmMapping` supplies the
//! table, the row conversions and the filter translation.

use crate::contract::{Villa, VillaNumber};
use crate::domain::repository::{Entity, Repository, RepositoryError, Tracking};
use crate::domain::filter::name_key;
use crate::domain::{VillaFilter, VillaNumberFilter};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder,
};
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

use super::entity::{villa, villa_number};

/// Binding between a domain entity and its SeaORM table
pub trait SeaOrmMapping: Entity {
    type Table: EntityTrait;

    fn to_active_model(&self) -> <Self::Table as EntityTrait>::ActiveModel;

    fn from_model(model: <Self::Table as EntityTrait>::Model) -> Self;

    /// SQL translation of a domain filter
    fn condition(filter: &Self::Filter) -> Condition;

    /// Column used to give `get_all` a stable order
    fn order_column() -> <Self::Table as EntityTrait>::Column;
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        RepositoryError::Persistence(err.to_string())
    }
}

// ===== Generic Repository =====

pub struct SeaOrmRepository<E> {
    db: Arc<DatabaseConnection>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> Repository<E> for SeaOrmRepository<E>
where
    E: SeaOrmMapping,
    <E::Table as EntityTrait>::Model:
        IntoActiveModel<<E::Table as EntityTrait>::ActiveModel> + Send + Sync,
    <E::Table as EntityTrait>::ActiveModel: Send + Sync,
{
    async fn get_all(&self) -> Result<Vec<E>, RepositoryError> {
        debug!(resource = E::RESOURCE, "get_all");
        let rows = <E::Table as EntityTrait>::find()
            .order_by_asc(E::order_column())
            .all(&*self.db)
            .await?;

        Ok(rows.into_iter().map(E::from_model).collect())
    }

    async fn get(
        &self,
        filter: E::Filter,
        tracking: Tracking,
    ) -> Result<Option<E>, RepositoryError> {
        // Rows come back as owned values, so every read is already detached
        // from the connection; the mode only documents caller intent.
        debug!(resource = E::RESOURCE, ?filter, ?tracking, "get");
        let row = <E::Table as EntityTrait>::find()
            .filter(E::condition(&filter))
            .one(&*self.db)
            .await?;

        Ok(row.map(E::from_model))
    }

    async fn create(&self, entity: &mut E) -> Result<(), RepositoryError> {
        debug!(resource = E::RESOURCE, "create");
        let row = <E::Table as EntityTrait>::insert(entity.to_active_model())
            .exec_with_returning(&*self.db)
            .await?;

        *entity = E::from_model(row);
        Ok(())
    }

    async fn update(&self, entity: &E) -> Result<(), RepositoryError> {
        debug!(resource = E::RESOURCE, key = entity.key(), "update");
        match <E::Table as EntityTrait>::update(entity.to_active_model())
            .exec(&*self.db)
            .await
        {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated | DbErr::RecordNotFound(_)) => Err(RepositoryError::NotFound {
                resource: E::RESOURCE,
                key: entity.key(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    async fn remove(&self, entity: &E) -> Result<(), RepositoryError> {
        debug!(resource = E::RESOURCE, key = entity.key(), "remove");
        <E::Table as EntityTrait>::delete(entity.to_active_model())
            .exec(&*self.db)
            .await?;

        Ok(())
    }
}

// ===== Villa Mapping =====

impl SeaOrmMapping for Villa {
    type Table = villa::Entity;

    fn to_active_model(&self) -> villa::ActiveModel {
        self.into()
    }

    fn from_model(model: villa::Model) -> Self {
        model.into()
    }

    fn condition(filter: &VillaFilter) -> Condition {
        match filter {
            VillaFilter::Id(id) => Condition::all().add(villa::Column::Id.eq(*id)),
            VillaFilter::NameIgnoreCase(name) => {
                Condition::all().add(villa::Column::NameKey.eq(name_key(name)))
            }
        }
    }

    fn order_column() -> villa::Column {
        villa::Column::Id
    }
}

// ===== Villa Number Mapping =====

impl SeaOrmMapping for VillaNumber {
    type Table = villa_number::Entity;

    fn to_active_model(&self) -> villa_number::ActiveModel {
        self.into()
    }

    fn from_model(model: villa_number::Model) -> Self {
        model.into()
    }

    fn condition(filter: &VillaNumberFilter) -> Condition {
        match filter {
            VillaNumberFilter::VillaNo(no) => {
                Condition::all().add(villa_number::Column::VillaNo.eq(*no))
            }
        }
    }

    fn order_column() -> villa_number::Column {
        villa_number::Column::VillaNo
    }
}

//! Module wiring: storage, domain service and REST routes

use crate::config::Config;
use crate::domain::{Service, VillaNumberRepository, VillaRepository};
use crate::infra::storage::{migrations::Migrator, seed, SeaOrmRepository};
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Villa service module
pub struct VillaModule {
    config: Config,
    service: Arc<Service>,
}

impl VillaModule {
    /// Run the schema migrations
    pub async fn migrate(conn: &DatabaseConnection) -> Result<()> {
        Migrator::up(conn, None).await?;
        tracing::info!("Villa service migrations completed");
        Ok(())
    }

    /// Build repositories and the domain service, seeding sample data if enabled
    pub async fn init(conn: Arc<DatabaseConnection>, config: Config) -> Result<Self> {
        let villas = VillaRepository::new(Arc::new(SeaOrmRepository::new(conn.clone())));
        let numbers = VillaNumberRepository::new(Arc::new(SeaOrmRepository::new(conn)));

        if config.seed_sample_data {
            let inserted = seed::seed_sample_villas(&villas).await?;
            tracing::info!("Seeded {} sample villa(s)", inserted);
        }

        let service = Arc::new(Service::new(villas, numbers, config.validation_rules()));

        tracing::info!(
            max_name_length = config.max_name_length,
            "Villa service initialized"
        );
        Ok(Self { config, service })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn service(&self) -> Arc<Service> {
        self.service.clone()
    }

    /// Mount the REST routes on `router`
    pub fn register_rest(&self, router: axum::Router) -> Result<axum::Router> {
        tracing::info!("Registering villa service REST routes");
        crate::api::rest::routes::register_routes(router, self.service.clone())
    }
}

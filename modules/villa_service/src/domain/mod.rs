//! Domain layer - business logic and services

pub mod filter;
pub mod patch;
pub mod repositories;
pub mod repository;
pub mod service;
pub mod validation;

pub use filter::{VillaFilter, VillaNumberFilter};
pub use patch::{PatchOperation, VillaField};
pub use repositories::{VillaNumberRepository, VillaRepository};
pub use repository::{Entity, Predicate, Repository, RepositoryError, Tracking};
pub use service::Service;
pub use validation::ValidationRules;

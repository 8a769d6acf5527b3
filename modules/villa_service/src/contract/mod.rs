//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::VillaError;
pub use model::{NewVilla, NewVillaNumber, Villa, VillaNumber, VillaNumberUpdate, VillaUpdate};

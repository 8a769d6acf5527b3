//! Villa Service Module
//!
//! Villas and villa numbers behind a generic repository, exposed over REST
//! with a uniform response envelope.

// Public exports
pub mod contract;
pub use contract::{error::VillaError, NewVilla, NewVillaNumber, Villa, VillaNumber};

pub mod module;
pub use module::VillaModule;

pub mod config;
pub use config::Config;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;

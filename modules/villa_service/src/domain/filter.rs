//! Entity bindings and typed filters for the generic repository

use super::repository::{Entity, Predicate};
use crate::contract::{Villa, VillaNumber};

/// Case-folded form of a villa name; two names collide when their keys are equal
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

/// Lookup filters for villas
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VillaFilter {
    /// Exact identifier match
    Id(i32),
    /// Name match ignoring case
    NameIgnoreCase(String),
}

impl Predicate<Villa> for VillaFilter {
    fn matches(&self, villa: &Villa) -> bool {
        match self {
            Self::Id(id) => villa.id == *id,
            Self::NameIgnoreCase(name) => name_key(&villa.name) == name_key(name),
        }
    }
}

impl Entity for Villa {
    type Filter = VillaFilter;
    const RESOURCE: &'static str = "villa";

    fn key(&self) -> i32 {
        self.id
    }

    fn assign_key(&mut self, key: i32) {
        self.id = key;
    }
}

/// Lookup filters for villa numbers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VillaNumberFilter {
    /// Exact villa number match
    VillaNo(i32),
}

impl Predicate<VillaNumber> for VillaNumberFilter {
    fn matches(&self, number: &VillaNumber) -> bool {
        match self {
            Self::VillaNo(no) => number.villa_no == *no,
        }
    }
}

impl Entity for VillaNumber {
    type Filter = VillaNumberFilter;
    const RESOURCE: &'static str = "villa_number";

    fn key(&self) -> i32 {
        self.villa_no
    }
}

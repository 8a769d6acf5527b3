//! Contract models for the villa service
//!
//! These models are transport-agnostic and shared by the REST layer and storage.

use chrono::{DateTime, Utc};

/// A rentable villa
#[derive(Debug, Clone, PartialEq)]
pub struct Villa {
    /// Store-assigned identifier (0 until created)
    pub id: i32,
    /// Display name, unique across villas (case-insensitive)
    pub name: String,
    /// Free-form description
    pub detail: String,
    /// Maximum number of occupants
    pub occupancy: i32,
    /// Area in square meters
    pub square_meters: i32,
    /// Nightly rate
    pub rate: f64,
    /// Image reference
    pub image_url: String,
    /// Amenity description
    pub amenity: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// A numbered unit belonging to exactly one villa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillaNumber {
    /// Villa number, acts as the external identifier
    pub villa_no: i32,
    /// Owning villa
    pub villa_id: i32,
    /// Special details for this unit
    pub special_detail: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Fields accepted when creating a villa
#[derive(Debug, Clone, PartialEq)]
pub struct NewVilla {
    pub name: String,
    pub detail: String,
    pub occupancy: i32,
    pub square_meters: i32,
    pub rate: f64,
    pub image_url: String,
    pub amenity: String,
}

/// Full replacement of a villa; also the target of partial updates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VillaUpdate {
    pub id: i32,
    pub name: String,
    pub detail: String,
    pub occupancy: i32,
    pub square_meters: i32,
    pub rate: f64,
    pub image_url: String,
    pub amenity: String,
}

impl From<&Villa> for VillaUpdate {
    fn from(villa: &Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name.clone(),
            detail: villa.detail.clone(),
            occupancy: villa.occupancy,
            square_meters: villa.square_meters,
            rate: villa.rate,
            image_url: villa.image_url.clone(),
            amenity: villa.amenity.clone(),
        }
    }
}

impl VillaUpdate {
    /// Build the stored villa, keeping the original creation time
    pub fn into_villa(self, created_at: DateTime<Utc>) -> Villa {
        Villa {
            id: self.id,
            name: self.name,
            detail: self.detail,
            occupancy: self.occupancy,
            square_meters: self.square_meters,
            rate: self.rate,
            image_url: self.image_url,
            amenity: self.amenity,
            created_at,
            updated_at: created_at,
        }
    }
}

/// Fields accepted when creating a villa number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVillaNumber {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_detail: String,
}

/// Full replacement of a villa number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillaNumberUpdate {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_detail: String,
}

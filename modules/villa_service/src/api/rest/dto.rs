//! REST DTOs with serde derives for HTTP API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ===== Villa DTOs =====

/// Villa response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VillaDto {
    pub id: i32,

    #[schema(example = "Villa Real")]
    pub name: String,

    pub detail: String,

    pub occupancy: i32,

    pub square_meters: i32,

    #[schema(example = 200.0)]
    pub rate: f64,

    pub image_url: String,

    pub amenity: String,

    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Villa creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VillaCreateDto {
    #[schema(example = "Villa Real", max_length = 30)]
    pub name: String,

    #[serde(default)]
    pub detail: String,

    pub occupancy: i32,

    pub square_meters: i32,

    pub rate: f64,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub amenity: String,
}

/// Villa full-replace request; `id` must match the path
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VillaUpdateDto {
    pub id: i32,

    #[schema(example = "Villa Real", max_length = 30)]
    pub name: String,

    #[serde(default)]
    pub detail: String,

    pub occupancy: i32,

    pub square_meters: i32,

    pub rate: f64,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub amenity: String,
}

/// One partial-update instruction (JSON Patch subset)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperationDto {
    Add {
        #[schema(example = "/detail")]
        path: String,
        value: serde_json::Value,
    },
    Replace {
        #[schema(example = "/detail")]
        path: String,
        value: serde_json::Value,
    },
    Remove {
        #[schema(example = "/amenity")]
        path: String,
    },
}

// ===== Villa Number DTOs =====

/// Villa number response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VillaNumberDto {
    #[schema(example = 101)]
    pub villa_no: i32,

    pub villa_id: i32,

    pub special_detail: String,

    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,

    /// Last update timestamp
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Villa number creation request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VillaNumberCreateDto {
    #[schema(example = 101)]
    pub villa_no: i32,

    pub villa_id: i32,

    #[serde(default)]
    pub special_detail: String,
}

/// Villa number full-replace request; `villa_no` must match the path
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VillaNumberUpdateDto {
    #[schema(example = 101)]
    pub villa_no: i32,

    pub villa_id: i32,

    #[serde(default)]
    pub special_detail: String,
}

// Note: Conversion implementations live in mapper.rs

//! Partial update operations applied to a `VillaUpdate`
//!
//! Paths are JSON-Pointer style single segments (`/detail`). Field names are
//! matched ignoring case and underscores, so `/squareMeters` and
//! `/square_meters` address the same field.

use crate::contract::VillaUpdate;
use serde_json::Value;
use std::str::FromStr;

/// One field-level patch instruction
#[derive(Debug, Clone, PartialEq)]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Replace { path: String, value: Value },
    Remove { path: String },
}

impl PatchOperation {
    pub fn path(&self) -> &str {
        match self {
            Self::Add { path, .. } | Self::Replace { path, .. } | Self::Remove { path } => path,
        }
    }
}

/// Addressable fields of a `VillaUpdate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VillaField {
    Id,
    Name,
    Detail,
    Occupancy,
    SquareMeters,
    Rate,
    ImageUrl,
    Amenity,
}

impl FromStr for VillaField {
    type Err = String;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segment = path.strip_prefix('/').unwrap_or(path);
        if segment.is_empty() || segment.contains('/') {
            return Err(format!("path '{}' does not address a villa field", path));
        }

        let normalized: String = segment
            .chars()
            .filter(|c| *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "detail" => Ok(Self::Detail),
            "occupancy" => Ok(Self::Occupancy),
            "squaremeters" => Ok(Self::SquareMeters),
            "rate" => Ok(Self::Rate),
            "imageurl" => Ok(Self::ImageUrl),
            "amenity" => Ok(Self::Amenity),
            _ => Err(format!("path '{}' does not address a villa field", path)),
        }
    }
}

fn as_text(path: &str, value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok(String::new()),
        other => Err(format!("value for '{}' must be a string, got {}", path, other)),
    }
}

fn as_int(path: &str, value: &Value) -> Result<i32, String> {
    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| format!("value for '{}' must be a 32-bit integer, got {}", path, value))
}

fn as_number(path: &str, value: &Value) -> Result<f64, String> {
    value
        .as_f64()
        .ok_or_else(|| format!("value for '{}' must be a number, got {}", path, value))
}

fn set_field(target: &mut VillaUpdate, field: VillaField, path: &str, value: &Value) -> Result<(), String> {
    match field {
        VillaField::Id => target.id = as_int(path, value)?,
        VillaField::Name => target.name = as_text(path, value)?,
        VillaField::Detail => target.detail = as_text(path, value)?,
        VillaField::Occupancy => target.occupancy = as_int(path, value)?,
        VillaField::SquareMeters => target.square_meters = as_int(path, value)?,
        VillaField::Rate => target.rate = as_number(path, value)?,
        VillaField::ImageUrl => target.image_url = as_text(path, value)?,
        VillaField::Amenity => target.amenity = as_text(path, value)?,
    }
    Ok(())
}

fn reset_field(target: &mut VillaUpdate, field: VillaField) {
    match field {
        VillaField::Id => target.id = 0,
        VillaField::Name => target.name.clear(),
        VillaField::Detail => target.detail.clear(),
        VillaField::Occupancy => target.occupancy = 0,
        VillaField::SquareMeters => target.square_meters = 0,
        VillaField::Rate => target.rate = 0.0,
        VillaField::ImageUrl => target.image_url.clear(),
        VillaField::Amenity => target.amenity.clear(),
    }
}

/// Apply `operations` in order and return every failure.
///
/// Failing operations leave the target untouched; the remaining operations
/// still run.
pub fn apply_patch(target: &mut VillaUpdate, operations: &[PatchOperation]) -> Vec<String> {
    let mut errors = Vec::new();

    for op in operations {
        let path = op.path();
        let field = match path.parse::<VillaField>() {
            Ok(field) => field,
            Err(e) => {
                errors.push(e);
                continue;
            }
        };

        let outcome = match op {
            PatchOperation::Add { value, .. } | PatchOperation::Replace { value, .. } => {
                set_field(target, field, path, value)
            }
            PatchOperation::Remove { .. } => {
                reset_field(target, field);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            errors.push(e);
        }
    }

    errors
}

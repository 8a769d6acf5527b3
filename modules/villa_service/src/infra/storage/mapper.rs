//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{villa, villa_number};
use crate::contract::{Villa, VillaNumber};
use crate::domain::filter::name_key;
use sea_orm::ActiveValue::{NotSet, Set};

// ===== Villa Conversions =====

impl From<villa::Model> for Villa {
    fn from(entity: villa::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            detail: entity.detail,
            occupancy: entity.occupancy,
            square_meters: entity.square_meters,
            rate: entity.rate,
            image_url: entity.image_url,
            amenity: entity.amenity,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&Villa> for villa::ActiveModel {
    fn from(model: &Villa) -> Self {
        Self {
            // 0 means "not assigned yet": let the database generate it
            id: if model.id > 0 { Set(model.id) } else { NotSet },
            name: Set(model.name.clone()),
            name_key: Set(name_key(&model.name)),
            detail: Set(model.detail.clone()),
            occupancy: Set(model.occupancy),
            square_meters: Set(model.square_meters),
            rate: Set(model.rate),
            image_url: Set(model.image_url.clone()),
            amenity: Set(model.amenity.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

// ===== Villa Number Conversions =====

impl From<villa_number::Model> for VillaNumber {
    fn from(entity: villa_number::Model) -> Self {
        Self {
            villa_no: entity.villa_no,
            villa_id: entity.villa_id,
            special_detail: entity.special_detail,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<&VillaNumber> for villa_number::ActiveModel {
    fn from(model: &VillaNumber) -> Self {
        Self {
            villa_no: Set(model.villa_no),
            villa_id: Set(model.villa_id),
            special_detail: Set(model.special_detail.clone()),
            created_at: Set(model.created_at),
            updated_at: Set(model.updated_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn unassigned_villa_id_is_not_set() {
        let now = Utc::now();
        let villa = Villa {
            id: 0,
            name: "Villa Real".into(),
            detail: String::new(),
            occupancy: 5,
            square_meters: 50,
            rate: 200.0,
            image_url: String::new(),
            amenity: String::new(),
            created_at: now,
            updated_at: now,
        };
        let active: villa::ActiveModel = (&villa).into();
        assert_eq!(active.id, NotSet);

        let assigned = Villa { id: 9, ..villa };
        let active: villa::ActiveModel = (&assigned).into();
        assert_eq!(active.id, Set(9));
    }

    #[test]
    fn name_key_folds_non_ascii_letters() {
        let now = Utc::now();
        let villa = Villa {
            id: 0,
            name: "VILLA ÑANDÚ".into(),
            detail: String::new(),
            occupancy: 5,
            square_meters: 50,
            rate: 200.0,
            image_url: String::new(),
            amenity: String::new(),
            created_at: now,
            updated_at: now,
        };
        let active: villa::ActiveModel = (&villa).into();
        assert_eq!(active.name, Set("VILLA ÑANDÚ".to_string()));
        assert_eq!(active.name_key, Set("villa ñandú".to_string()));
    }

    #[test]
    fn villa_row_maps_every_field() {
        let now = Utc::now();
        let row = villa::Model {
            id: 3,
            name: "Premium Vista a la Piscina".into(),
            name_key: "premium vista a la piscina".into(),
            detail: "Detalle".into(),
            occupancy: 4,
            square_meters: 40,
            rate: 150.0,
            image_url: "img".into(),
            amenity: "pool".into(),
            created_at: now,
            updated_at: now,
        };
        let villa: Villa = row.clone().into();
        assert_eq!(villa.id, row.id);
        assert_eq!(villa.name, row.name);
        assert_eq!(villa.detail, row.detail);
        assert_eq!(villa.occupancy, row.occupancy);
        assert_eq!(villa.square_meters, row.square_meters);
        assert_eq!(villa.rate, row.rate);
        assert_eq!(villa.image_url, row.image_url);
        assert_eq!(villa.amenity, row.amenity);
        assert_eq!(villa.created_at, row.created_at);
        assert_eq!(villa.updated_at, row.updated_at);
    }
}

//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;
use crate::domain::PatchOperation;

// ===== Villa conversions =====

impl From<contract::Villa> for VillaDto {
    fn from(villa: contract::Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name,
            detail: villa.detail,
            occupancy: villa.occupancy,
            square_meters: villa.square_meters,
            rate: villa.rate,
            image_url: villa.image_url,
            amenity: villa.amenity,
            created_at: villa.created_at,
            updated_at: villa.updated_at,
        }
    }
}

impl From<VillaCreateDto> for contract::NewVilla {
    fn from(dto: VillaCreateDto) -> Self {
        Self {
            name: dto.name,
            detail: dto.detail,
            occupancy: dto.occupancy,
            square_meters: dto.square_meters,
            rate: dto.rate,
            image_url: dto.image_url,
            amenity: dto.amenity,
        }
    }
}

impl From<VillaUpdateDto> for contract::VillaUpdate {
    fn from(dto: VillaUpdateDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            detail: dto.detail,
            occupancy: dto.occupancy,
            square_meters: dto.square_meters,
            rate: dto.rate,
            image_url: dto.image_url,
            amenity: dto.amenity,
        }
    }
}

impl From<PatchOperationDto> for PatchOperation {
    fn from(dto: PatchOperationDto) -> Self {
        match dto {
            PatchOperationDto::Add { path, value } => Self::Add { path, value },
            PatchOperationDto::Replace { path, value } => Self::Replace { path, value },
            PatchOperationDto::Remove { path } => Self::Remove { path },
        }
    }
}

// ===== Villa Number conversions =====

impl From<contract::VillaNumber> for VillaNumberDto {
    fn from(number: contract::VillaNumber) -> Self {
        Self {
            villa_no: number.villa_no,
            villa_id: number.villa_id,
            special_detail: number.special_detail,
            created_at: number.created_at,
            updated_at: number.updated_at,
        }
    }
}

impl From<VillaNumberCreateDto> for contract::NewVillaNumber {
    fn from(dto: VillaNumberCreateDto) -> Self {
        Self {
            villa_no: dto.villa_no,
            villa_id: dto.villa_id,
            special_detail: dto.special_detail,
        }
    }
}

impl From<VillaNumberUpdateDto> for contract::VillaNumberUpdate {
    fn from(dto: VillaNumberUpdateDto) -> Self {
        Self {
            villa_no: dto.villa_no,
            villa_id: dto.villa_id,
            special_detail: dto.special_detail,
        }
    }
}

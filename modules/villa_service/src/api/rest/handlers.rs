//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    envelope::{ApiResponse, ErrorResponse},
    error::map_domain_error,
};
use crate::domain::{PatchOperation, Service};
use axum::http::header;
use std::sync::Arc;

/// `Location` header plus the created resource envelope
pub type Created<T> = ([(header::HeaderName, String); 1], ApiResponse<T>);

// ===== Villa Handlers =====

/// List all villas
pub async fn list_villas(service: Arc<Service>) -> Result<ApiResponse<Vec<VillaDto>>, ErrorResponse> {
    let villas = service.list_villas().await.map_err(map_domain_error)?;
    let items: Vec<VillaDto> = villas.into_iter().map(Into::into).collect();

    Ok(ApiResponse::ok(items))
}

/// Get a single villa
pub async fn get_villa(service: Arc<Service>, id: i32) -> Result<ApiResponse<VillaDto>, ErrorResponse> {
    let villa = service.get_villa(id).await.map_err(map_domain_error)?;

    Ok(ApiResponse::ok(villa.into()))
}

/// Create a villa
pub async fn create_villa(
    service: Arc<Service>,
    req: VillaCreateDto,
) -> Result<Created<VillaDto>, ErrorResponse> {
    let villa = service
        .create_villa(req.into())
        .await
        .map_err(map_domain_error)?;

    let location = format!("/api/villas/{}", villa.id);
    Ok((
        [(header::LOCATION, location)],
        ApiResponse::created(villa.into()),
    ))
}

/// Replace a villa
pub async fn update_villa(
    service: Arc<Service>,
    id: i32,
    req: VillaUpdateDto,
) -> Result<ErrorResponse, ErrorResponse> {
    service
        .update_villa(id, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(ApiResponse::no_content())
}

/// Partially update a villa
pub async fn patch_villa(
    service: Arc<Service>,
    id: i32,
    ops: Vec<PatchOperationDto>,
) -> Result<ErrorResponse, ErrorResponse> {
    let ops: Vec<PatchOperation> = ops.into_iter().map(Into::into).collect();
    service
        .patch_villa(id, &ops)
        .await
        .map_err(map_domain_error)?;

    Ok(ApiResponse::no_content())
}

/// Delete a villa
pub async fn delete_villa(service: Arc<Service>, id: i32) -> Result<ErrorResponse, ErrorResponse> {
    service.delete_villa(id).await.map_err(map_domain_error)?;

    Ok(ApiResponse::no_content())
}

// ===== Villa Number Handlers =====

/// List all villa numbers
pub async fn list_villa_numbers(
    service: Arc<Service>,
) -> Result<ApiResponse<Vec<VillaNumberDto>>, ErrorResponse> {
    let numbers = service.list_villa_numbers().await.map_err(map_domain_error)?;
    let items: Vec<VillaNumberDto> = numbers.into_iter().map(Into::into).collect();

    Ok(ApiResponse::ok(items))
}

/// Get a single villa number
pub async fn get_villa_number(
    service: Arc<Service>,
    villa_no: i32,
) -> Result<ApiResponse<VillaNumberDto>, ErrorResponse> {
    let number = service
        .get_villa_number(villa_no)
        .await
        .map_err(map_domain_error)?;

    Ok(ApiResponse::ok(number.into()))
}

/// Create a villa number
pub async fn create_villa_number(
    service: Arc<Service>,
    req: VillaNumberCreateDto,
) -> Result<Created<VillaNumberDto>, ErrorResponse> {
    let number = service
        .create_villa_number(req.into())
        .await
        .map_err(map_domain_error)?;

    let location = format!("/api/villa-numbers/{}", number.villa_no);
    Ok((
        [(header::LOCATION, location)],
        ApiResponse::created(number.into()),
    ))
}

/// Replace a villa number
pub async fn update_villa_number(
    service: Arc<Service>,
    villa_no: i32,
    req: VillaNumberUpdateDto,
) -> Result<ErrorResponse, ErrorResponse> {
    service
        .update_villa_number(villa_no, req.into())
        .await
        .map_err(map_domain_error)?;

    Ok(ApiResponse::no_content())
}

/// Delete a villa number
pub async fn delete_villa_number(
    service: Arc<Service>,
    villa_no: i32,
) -> Result<ErrorResponse, ErrorResponse> {
    service
        .delete_villa_number(villa_no)
        .await
        .map_err(map_domain_error)?;

    Ok(ApiResponse::no_content())
}

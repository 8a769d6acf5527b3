//! Route registration

use super::{dto::*, error, handlers, openapi::ApiDoc};
use crate::domain::Service;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path,
    },
    response::{IntoResponse, Response},
    routing::get,
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// Register all REST routes
pub fn register_routes(router: Router, service: Arc<Service>) -> anyhow::Result<Router> {
    let router = router
        // Villa endpoints
        .route("/api/villas", get(list_villas_handler).post(create_villa_handler))
        .route(
            "/api/villas/{id}",
            get(get_villa_handler)
                .put(update_villa_handler)
                .patch(patch_villa_handler)
                .delete(delete_villa_handler),
        )
        // Villa number endpoints
        .route(
            "/api/villa-numbers",
            get(list_villa_numbers_handler).post(create_villa_number_handler),
        )
        .route(
            "/api/villa-numbers/{villa_no}",
            get(get_villa_number_handler)
                .put(update_villa_number_handler)
                .delete(delete_villa_number_handler),
        )
        .route("/health", get(health_handler))
        .route("/api-docs/openapi.json", get(openapi_handler))
        // Add service as extension for handlers
        .layer(Extension(service));

    Ok(router)
}

// ===== Handler wrappers that extract service from Extension =====
//
// Path and body extraction failures are turned into 400 envelopes here so that
// no request reaches the domain with unparsed input.

async fn list_villas_handler(Extension(service): Extension<Arc<Service>>) -> Response {
    handlers::list_villas(service).await.into_response()
}

async fn get_villa_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Response {
    match path {
        Ok(Path(id)) => handlers::get_villa(service, id).await.into_response(),
        Err(rejection) => error::map_path_rejection(rejection).into_response(),
    }
}

async fn create_villa_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<VillaCreateDto>, JsonRejection>,
) -> Response {
    match json {
        Ok(Json(req)) => handlers::create_villa(service, req).await.into_response(),
        Err(rejection) => error::map_json_rejection(rejection).into_response(),
    }
}

async fn update_villa_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
    json: Result<Json<VillaUpdateDto>, JsonRejection>,
) -> Response {
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return error::map_path_rejection(rejection).into_response(),
    };
    match json {
        Ok(Json(req)) => handlers::update_villa(service, id, req).await.into_response(),
        Err(rejection) => error::map_json_rejection(rejection).into_response(),
    }
}

async fn patch_villa_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
    json: Result<Json<Vec<PatchOperationDto>>, JsonRejection>,
) -> Response {
    let id = match path {
        Ok(Path(id)) => id,
        Err(rejection) => return error::map_path_rejection(rejection).into_response(),
    };
    match json {
        Ok(Json(ops)) => handlers::patch_villa(service, id, ops).await.into_response(),
        Err(rejection) => error::map_json_rejection(rejection).into_response(),
    }
}

async fn delete_villa_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Response {
    match path {
        Ok(Path(id)) => handlers::delete_villa(service, id).await.into_response(),
        Err(rejection) => error::map_path_rejection(rejection).into_response(),
    }
}

async fn list_villa_numbers_handler(Extension(service): Extension<Arc<Service>>) -> Response {
    handlers::list_villa_numbers(service).await.into_response()
}

async fn get_villa_number_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Response {
    match path {
        Ok(Path(villa_no)) => handlers::get_villa_number(service, villa_no)
            .await
            .into_response(),
        Err(rejection) => error::map_path_rejection(rejection).into_response(),
    }
}

async fn create_villa_number_handler(
    Extension(service): Extension<Arc<Service>>,
    json: Result<Json<VillaNumberCreateDto>, JsonRejection>,
) -> Response {
    match json {
        Ok(Json(req)) => handlers::create_villa_number(service, req)
            .await
            .into_response(),
        Err(rejection) => error::map_json_rejection(rejection).into_response(),
    }
}

async fn update_villa_number_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
    json: Result<Json<VillaNumberUpdateDto>, JsonRejection>,
) -> Response {
    let villa_no = match path {
        Ok(Path(villa_no)) => villa_no,
        Err(rejection) => return error::map_path_rejection(rejection).into_response(),
    };
    match json {
        Ok(Json(req)) => handlers::update_villa_number(service, villa_no, req)
            .await
            .into_response(),
        Err(rejection) => error::map_json_rejection(rejection).into_response(),
    }
}

async fn delete_villa_number_handler(
    Extension(service): Extension<Arc<Service>>,
    path: Result<Path<i32>, PathRejection>,
) -> Response {
    match path {
        Ok(Path(villa_no)) => handlers::delete_villa_number(service, villa_no)
            .await
            .into_response(),
        Err(rejection) => error::map_path_rejection(rejection).into_response(),
    }
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

//! OpenAPI document built from the DTO schemas

use super::dto::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Villa API", description = "Villas and villa numbers"),
    components(schemas(
        VillaDto,
        VillaCreateDto,
        VillaUpdateDto,
        PatchOperationDto,
        VillaNumberDto,
        VillaNumberCreateDto,
        VillaNumberUpdateDto
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_dto_schemas() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;
        assert!(schemas.contains_key("VillaDto"));
        assert!(schemas.contains_key("PatchOperationDto"));
        assert!(schemas.contains_key("VillaNumberCreateDto"));
    }
}

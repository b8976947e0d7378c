use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::database::MongoDB;
use crate::models::{ProviderCreate, ProviderPublic};
use crate::services::{provider_service, DEFAULT_LIST_LIMIT};

#[derive(Deserialize)]
pub struct ProviderListQuery {
    pub city: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/providers",
    tag = "Providers",
    request_body = ProviderCreate,
    responses(
        (status = 201, description = "Provider created, returns the new id"),
        (status = 422, description = "Schema violation"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn create_provider(
    db: web::Data<MongoDB>,
    body: web::Json<ProviderCreate>,
) -> HttpResponse {
    log::info!("🖨️  POST /api/providers - new listing");

    match provider_service::create_provider(&db, body.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(serde_json::json!({ "id": id })),
        Err(e) => {
            log::error!("❌ Error creating provider: {}", e);
            e.to_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/providers",
    tag = "Providers",
    params(
        ("city" = Option<String>, Query, description = "City filter, case-insensitive contains")
    ),
    responses(
        (status = 200, description = "List of providers", body = [ProviderPublic]),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn list_providers(
    db: web::Data<MongoDB>,
    query: web::Query<ProviderListQuery>,
) -> HttpResponse {
    match provider_service::list_providers(&db, query.city.as_deref(), DEFAULT_LIST_LIMIT).await {
        Ok(providers) => HttpResponse::Ok().json(providers),
        Err(e) => {
            log::error!("❌ Error listing providers: {}", e);
            e.to_response()
        }
    }
}

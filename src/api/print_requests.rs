use actix_web::{web, HttpResponse};

use crate::database::MongoDB;
use crate::models::PrintRequestCreate;
use crate::services::print_request_service;

#[utoipa::path(
    post,
    path = "/api/print-requests",
    tag = "PrintRequests",
    request_body = PrintRequestCreate,
    responses(
        (status = 201, description = "Print request created, returns the new id"),
        (status = 400, description = "Malformed provider_id"),
        (status = 404, description = "Provider not found"),
        (status = 422, description = "Schema violation"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn create_print_request(
    db: web::Data<MongoDB>,
    body: web::Json<PrintRequestCreate>,
) -> HttpResponse {
    log::info!("📄 POST /api/print-requests - provider {}", body.provider_id);

    match print_request_service::create_print_request(&db, body.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(serde_json::json!({ "id": id })),
        Err(e) => {
            log::error!("❌ Error creating print request: {}", e);
            e.to_response()
        }
    }
}

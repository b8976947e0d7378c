use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::database::MongoDB;
use crate::models::{ReviewCreate, ReviewResponse};
use crate::services::{review_service, DEFAULT_LIST_LIMIT};

#[derive(Deserialize)]
pub struct ReviewListQuery {
    pub provider_id: String,
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Reviews",
    request_body = ReviewCreate,
    responses(
        (status = 201, description = "Review created, returns the new id"),
        (status = 400, description = "Malformed provider_id"),
        (status = 404, description = "Provider not found"),
        (status = 422, description = "Schema violation"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn create_review(db: web::Data<MongoDB>, body: web::Json<ReviewCreate>) -> HttpResponse {
    log::info!("⭐ POST /api/reviews - provider {}", body.provider_id);

    match review_service::create_review(&db, body.into_inner()).await {
        Ok(id) => HttpResponse::Created().json(serde_json::json!({ "id": id })),
        Err(e) => {
            log::error!("❌ Error creating review: {}", e);
            e.to_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/reviews",
    tag = "Reviews",
    params(
        ("provider_id" = String, Query, description = "Provider whose reviews to list")
    ),
    responses(
        (status = 200, description = "Reviews of the provider", body = [ReviewResponse]),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn list_reviews(
    db: web::Data<MongoDB>,
    query: web::Query<ReviewListQuery>,
) -> HttpResponse {
    match review_service::list_reviews(&db, &query.provider_id, DEFAULT_LIST_LIMIT).await {
        Ok(reviews) => HttpResponse::Ok().json(reviews),
        Err(e) => {
            log::error!("❌ Error listing reviews: {}", e);
            e.to_response()
        }
    }
}

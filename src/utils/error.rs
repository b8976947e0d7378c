use actix_web::HttpResponse;
use std::fmt;
use validator::ValidationErrors;

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationErrors),
    InvalidReference(String),
    NotFound(String),
    StoreUnavailable(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            AppError::InvalidReference(msg) => write!(f, "Invalid reference: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::StoreUnavailable(msg) => write!(f, "Store unavailable: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::StoreUnavailable(format!("Database error: {}", e))
    }
}

impl AppError {
    /// Maps each variant to its user-visible HTTP response.
    /// Validation errors carry the per-field detail map in the body.
    pub fn to_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(errors) => {
                HttpResponse::UnprocessableEntity().json(serde_json::json!({
                    "success": false,
                    "error": "Validation failed",
                    "fields": errors
                }))
            }
            AppError::InvalidReference(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "error": msg
            })),
            AppError::NotFound(msg) => HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": msg
            })),
            AppError::StoreUnavailable(msg) => {
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "success": false,
                    "error": msg
                }))
            }
        }
    }
}

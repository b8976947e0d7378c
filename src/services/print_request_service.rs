// ==================== PRINT REQUESTS ====================
// Contact requests for a provider's printer. Validates the reference,
// persists the record unmodified. No aggregation, no notification.

use crate::{
    database::MongoDB,
    models::{PrintRequest, PrintRequestCreate},
    services::provider_service,
    utils::error::AppError,
};
use validator::Validate;

const COLLECTION: &str = "printrequest";

/// POST /api/print-requests
pub async fn create_print_request(
    db: &MongoDB,
    input: PrintRequestCreate,
) -> Result<String, AppError> {
    input.validate()?;

    provider_service::find_existing_provider(db, &input.provider_id).await?;

    let request = PrintRequest {
        id: None,
        provider_id: input.provider_id,
        requester_name: input.requester_name,
        requester_email: input.requester_email,
        pages: input.pages,
        color: input.color,
        notes: input.notes,
    };

    let collection = db.collection::<PrintRequest>(COLLECTION);
    let result = collection.insert_one(&request).await?;

    let id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::StoreUnavailable("inserted id is not an ObjectId".to_string()))?;

    Ok(id.to_hex())
}

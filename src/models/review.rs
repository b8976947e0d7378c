use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review left by a neighbor for a provider.
/// Collection name: "review"
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Review {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    /// Hex id of the reviewed provider (weak reference, checked at creation)
    pub provider_id: String,

    pub reviewer_name: String,

    /// Star rating 1-5
    pub rating: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Request para criar review
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct ReviewCreate {
    pub provider_id: String,
    pub reviewer_name: String,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub rating: i32,
    pub comment: Option<String>,
}

/// Response de review
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ReviewResponse {
    pub id: String,
    pub provider_id: String,
    pub reviewer_name: String,
    pub rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        ReviewResponse {
            id: r.id.map(|id| id.to_hex()).unwrap_or_default(),
            provider_id: r.provider_id,
            reviewer_name: r.reviewer_name,
            rating: r.rating,
            comment: r.comment,
        }
    }
}

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

/// A neighbor offering their home printer.
/// Collection name: "provider"
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Provider {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    /// Public name shown to neighbors
    pub display_name: String,

    /// City or neighborhood text for simple location search
    pub city: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Base price per page in EUR
    pub price_per_page: f64,

    pub color_supported: bool,

    pub duplex: bool,

    /// Average rating, derived from reviews — never client-supplied
    pub rating: f64,

    /// Number of reviews, derived
    pub reviews_count: i64,
}

/// Request para criar provider
///
/// `rating` and `reviews_count` are not part of this schema: unknown input
/// keys are dropped and the service writes its own zeros.
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct ProviderCreate {
    pub display_name: String,
    pub city: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "must be zero or positive"))]
    pub price_per_page: f64,
    #[serde(default = "default_true")]
    pub color_supported: bool,
    #[serde(default = "default_true")]
    pub duplex: bool,
}

/// Response de provider (id exposed as opaque hex string)
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ProviderPublic {
    pub id: String,
    pub display_name: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price_per_page: f64,
    pub color_supported: bool,
    pub duplex: bool,
    pub rating: f64,
    pub reviews_count: i64,
}

impl From<Provider> for ProviderPublic {
    fn from(p: Provider) -> Self {
        ProviderPublic {
            id: p.id.map(|id| id.to_hex()).unwrap_or_default(),
            display_name: p.display_name,
            city: p.city,
            description: p.description,
            price_per_page: p.price_per_page,
            color_supported: p.color_supported,
            duplex: p.duplex,
            rating: p.rating,
            reviews_count: p.reviews_count,
        }
    }
}

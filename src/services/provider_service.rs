// ==================== PROVIDER LISTINGS ====================
// Create/list printer listings and the shared provider reference check
// used by reviews and print requests

use crate::{
    database::MongoDB,
    models::{Provider, ProviderCreate, ProviderPublic},
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use validator::Validate;

const COLLECTION: &str = "provider";

/// POST /api/providers - validates and persists a new listing
pub async fn create_provider(db: &MongoDB, input: ProviderCreate) -> Result<String, AppError> {
    input.validate()?;

    // Aggregates are server-derived; both start at zero no matter what the
    // caller sent
    let provider = Provider {
        id: None,
        display_name: input.display_name,
        city: input.city,
        description: input.description,
        price_per_page: input.price_per_page,
        color_supported: input.color_supported,
        duplex: input.duplex,
        rating: 0.0,
        reviews_count: 0,
    };

    let collection = db.collection::<Provider>(COLLECTION);
    let result = collection.insert_one(&provider).await?;

    let id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::StoreUnavailable("inserted id is not an ObjectId".to_string()))?;

    Ok(id.to_hex())
}

/// Case-insensitive "contains" filter on the city field.
/// An absent or empty filter matches everything.
fn city_filter(city: Option<&str>) -> Document {
    match city {
        Some(city) if !city.is_empty() => doc! {
            "city": { "$regex": city, "$options": "i" }
        },
        _ => doc! {},
    }
}

/// GET /api/providers - lists providers, optionally filtered by city
/// substring. Result order is store-native and not guaranteed.
pub async fn list_providers(
    db: &MongoDB,
    city: Option<&str>,
    limit: i64,
) -> Result<Vec<ProviderPublic>, AppError> {
    let collection = db.collection::<Provider>(COLLECTION);

    let options = mongodb::options::FindOptions::builder().limit(limit).build();

    let mut cursor = collection
        .find(city_filter(city))
        .with_options(options)
        .await?;

    let mut providers = Vec::new();

    while let Some(result) = cursor.next().await {
        match result {
            Ok(provider) => providers.push(ProviderPublic::from(provider)),
            Err(e) => log::error!("Error reading provider document: {}", e),
        }
    }

    Ok(providers)
}

/// Parses a caller-supplied provider id into the store's identifier type
pub fn parse_provider_id(provider_id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(provider_id)
        .map_err(|_| AppError::InvalidReference(format!("Invalid provider_id '{}'", provider_id)))
}

/// Reference validation shared by reviews and print requests: the id must be
/// well-formed and resolve to a stored provider. Existence check and the
/// dependent insert are not transactional; no delete operation exists, so the
/// window is unreachable.
pub async fn find_existing_provider(db: &MongoDB, provider_id: &str) -> Result<ObjectId, AppError> {
    let object_id = parse_provider_id(provider_id)?;

    let collection = db.collection::<Provider>(COLLECTION);
    collection
        .find_one(doc! { "_id": object_id })
        .await?
        .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))?;

    Ok(object_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_filter_is_case_insensitive_contains() {
        let filter = city_filter(Some("dam"));
        let city = filter.get_document("city").unwrap();
        assert_eq!(city.get_str("$regex").unwrap(), "dam");
        assert_eq!(city.get_str("$options").unwrap(), "i");
    }

    #[test]
    fn test_city_filter_absent_matches_all() {
        assert!(city_filter(None).is_empty());
        assert!(city_filter(Some("")).is_empty());
    }

    #[test]
    fn test_parse_provider_id_rejects_malformed() {
        let err = parse_provider_id("not-a-valid-id").unwrap_err();
        assert!(matches!(err, AppError::InvalidReference(_)));
    }

    #[test]
    fn test_parse_provider_id_accepts_hex() {
        assert!(parse_provider_id("507f1f77bcf86cd799439011").is_ok());
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_create_provider_forces_zero_aggregates() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/localprint_test".to_string());
        let db = MongoDB::new(&uri).await.expect("Failed to connect to MongoDB");

        let input: ProviderCreate = serde_json::from_value(serde_json::json!({
            "display_name": "Jan's Printer",
            "city": "Amsterdam",
            "price_per_page": 0.10,
            "rating": 4.9,
            "reviews_count": 120
        }))
        .unwrap();

        let id = create_provider(&db, input).await.unwrap();
        let object_id = parse_provider_id(&id).unwrap();

        let stored = db
            .collection::<Provider>(COLLECTION)
            .find_one(doc! { "_id": object_id })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(stored.rating, 0.0);
        assert_eq!(stored.reviews_count, 0);
    }

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_list_providers_city_substring() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/localprint_test".to_string());
        let db = MongoDB::new(&uri).await.expect("Failed to connect to MongoDB");

        for city in ["Amsterdam", "AMSTERDAM", "Rotterdam", "Utrecht"] {
            let input: ProviderCreate = serde_json::from_value(serde_json::json!({
                "display_name": format!("Printer in {}", city),
                "city": city,
                "price_per_page": 0.05
            }))
            .unwrap();
            create_provider(&db, input).await.unwrap();
        }

        let matches = list_providers(&db, Some("dam"), crate::services::DEFAULT_LIST_LIMIT)
            .await
            .unwrap();

        assert!(matches.iter().all(|p| p.city.to_lowercase().contains("dam")));
        assert!(matches.iter().any(|p| p.city == "Amsterdam"));
        assert!(matches.iter().any(|p| p.city == "AMSTERDAM"));
        assert!(matches.iter().any(|p| p.city == "Rotterdam"));
    }
}

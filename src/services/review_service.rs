// ==================== REVIEWS & RATING AGGREGATION ====================
// Creating a review recomputes the provider's average rating and review
// count from the full review set

use crate::{
    database::MongoDB,
    models::{Provider, Review, ReviewCreate, ReviewResponse},
    services::provider_service,
    utils::error::AppError,
};
use futures::stream::StreamExt;
use mongodb::bson::doc;
use validator::Validate;

const COLLECTION: &str = "review";
const PROVIDER_COLLECTION: &str = "provider";

/// POST /api/reviews - persists a review and refreshes the provider aggregate
pub async fn create_review(db: &MongoDB, input: ReviewCreate) -> Result<String, AppError> {
    input.validate()?;

    let provider_object_id =
        provider_service::find_existing_provider(db, &input.provider_id).await?;

    let review = Review {
        id: None,
        provider_id: input.provider_id.clone(),
        reviewer_name: input.reviewer_name,
        rating: input.rating,
        comment: input.comment,
    };

    let collection = db.collection::<Review>(COLLECTION);
    let result = collection.insert_one(&review).await?;

    let review_id = result
        .inserted_id
        .as_object_id()
        .ok_or_else(|| AppError::StoreUnavailable("inserted id is not an ObjectId".to_string()))?;

    // Recompute from the full review set instead of keeping a running sum:
    // one uncapped scan per write, and a stray inconsistency in a prior
    // aggregate is corrected by the next review
    let mut cursor = collection
        .find(doc! { "provider_id": &input.provider_id })
        .await?;

    let mut ratings = Vec::new();

    while let Some(result) = cursor.next().await {
        match result {
            Ok(review) => ratings.push(review.rating),
            Err(e) => log::error!("Error reading review document: {}", e),
        }
    }

    let rating = rating_average(&ratings);
    let reviews_count = ratings.len() as i64;

    db.collection::<Provider>(PROVIDER_COLLECTION)
        .update_one(
            doc! { "_id": provider_object_id },
            doc! { "$set": { "rating": rating, "reviews_count": reviews_count } },
        )
        .await?;

    log::info!(
        "⭐ Provider {} rating updated: {:.2} ({} reviews)",
        input.provider_id,
        rating,
        reviews_count
    );

    Ok(review_id.to_hex())
}

/// GET /api/reviews - reviews of one provider, no ordering guarantee
pub async fn list_reviews(
    db: &MongoDB,
    provider_id: &str,
    limit: i64,
) -> Result<Vec<ReviewResponse>, AppError> {
    let collection = db.collection::<Review>(COLLECTION);

    let options = mongodb::options::FindOptions::builder().limit(limit).build();

    let mut cursor = collection
        .find(doc! { "provider_id": provider_id })
        .with_options(options)
        .await?;

    let mut reviews = Vec::new();

    while let Some(result) = cursor.next().await {
        match result {
            Ok(review) => reviews.push(ReviewResponse::from(review)),
            Err(e) => log::error!("Error reading review document: {}", e),
        }
    }

    Ok(reviews)
}

/// Arithmetic mean rounded to 2 decimals, half away from zero.
/// Zero reviews yield 0.0.
fn rating_average(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }

    let sum: i32 = ratings.iter().sum();
    let mean = f64::from(sum) / ratings.len() as f64;

    (mean * 100.0).round() / 100.0
}

use mongodb::{Client, Collection, Database};
use std::error::Error;

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(std::time::Duration::from_secs(300));

        // Timeouts
        client_options.connect_timeout = Some(std::time::Duration::from_secs(5));
        client_options.server_selection_timeout = Some(std::time::Duration::from_secs(5));

        let client = Client::with_options(client_options)?;

        // Extract database name from URI or use default
        let db_name = uri
            .split('/')
            .last()
            .and_then(|s| s.split('?').next())
            .unwrap_or("localprint");

        let db = client.database(db_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { client, db };

        mongodb.ensure_indexes().await?;

        Ok(mongodb)
    }

    /// Creates indexes on the reference fields the services filter by
    async fn ensure_indexes(&self) -> Result<(), Box<dyn Error>> {
        use mongodb::bson::doc;
        use mongodb::IndexModel;

        log::info!("🔧 Creating database indexes...");

        // Index for review: (provider_id) - the rating recomputation scans
        // every review of one provider
        let reviews = self.database().collection::<mongodb::bson::Document>("review");

        let review_index = IndexModel::builder()
            .keys(doc! { "provider_id": 1 })
            .build();

        match reviews.create_index(review_index).await {
            Ok(_) => log::info!("   ✅ Index created: review(provider_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        // Index for printrequest: (provider_id)
        let print_requests = self
            .database()
            .collection::<mongodb::bson::Document>("printrequest");

        let print_request_index = IndexModel::builder()
            .keys(doc! { "provider_id": 1 })
            .build();

        match print_requests.create_index(print_request_index).await {
            Ok(_) => log::info!("   ✅ Index created: printrequest(provider_id)"),
            Err(e) => log::debug!("   ℹ️  Index already exists: {}", e),
        }

        log::info!("✅ Database indexes ready");

        Ok(())
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_connection() {
        dotenv::dotenv().ok();

        let uri = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/localprint_test".to_string());

        let db = MongoDB::new(&uri).await;
        assert!(db.is_ok());
    }
}

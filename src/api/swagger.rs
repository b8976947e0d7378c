use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Localprint API",
        version = "1.0.0",
        description = "Backend connecting neighbors who own a printer with people who need printing done.\n\n**Features:**\n- Printer listings with case-insensitive city search\n- Reviews with rolling average provider rating\n- Print requests\n- Health monitoring"
    ),
    paths(
        // Health
        crate::api::health::health_check,

        // Providers
        crate::api::providers::create_provider,
        crate::api::providers::list_providers,

        // Reviews
        crate::api::reviews::create_review,
        crate::api::reviews::list_reviews,

        // Print requests
        crate::api::print_requests::create_print_request,
    ),
    components(
        schemas(
            // Health
            crate::api::health::HealthResponse,

            // Entity schemas (all collections, for transparency)
            crate::models::User,
            crate::models::UserCreate,
            crate::models::Provider,
            crate::models::ProviderCreate,
            crate::models::ProviderPublic,
            crate::models::Review,
            crate::models::ReviewCreate,
            crate::models::ReviewResponse,
            crate::models::PrintRequest,
            crate::models::PrintRequestCreate,
            crate::models::ColorMode,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint reporting service and database status."),
        (name = "Providers", description = "Printer listings. Create a listing or search by city substring."),
        (name = "Reviews", description = "Star ratings for providers. Creating a review recomputes the provider's average rating and review count."),
        (name = "PrintRequests", description = "Contact requests expressing interest in a provider's printer."),
    )
)]
pub struct ApiDoc;

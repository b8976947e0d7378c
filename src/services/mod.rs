pub mod print_request_service;
pub mod provider_service;
pub mod review_service;

/// Fixed cap for list queries — no paging beyond this
pub const DEFAULT_LIST_LIMIT: i64 = 50;

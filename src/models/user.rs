use serde::{Deserialize, Serialize};
use validator::Validate;

fn default_true() -> bool {
    true
}

/// Neighbor account record. Schema only — no route exposes users yet.
/// Collection name: "user"
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct User {
    pub name: String,
    pub email: String,
    pub city: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct UserCreate {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    pub city: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_valid_email() {
        let input: UserCreate = serde_json::from_value(serde_json::json!({
            "name": "Anna",
            "email": "anna@example.com",
            "city": "Rotterdam"
        }))
        .unwrap();

        assert!(input.validate().is_ok());
        assert!(input.is_active);
    }

    #[test]
    fn test_empty_name_and_bad_email_both_reported() {
        let input: UserCreate = serde_json::from_value(serde_json::json!({
            "name": "",
            "email": "nope",
            "city": "Rotterdam"
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }
}

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Print color mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Bw,
    Color,
}

impl Default for ColorMode {
    fn default() -> Self {
        ColorMode::Bw
    }
}

/// A lightweight request to contact a provider for a print job.
/// Collection name: "printrequest"
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PrintRequest {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>)]
    pub id: Option<ObjectId>,

    pub provider_id: String,
    pub requester_name: String,
    pub requester_email: String,
    pub pages: i32,
    pub color: ColorMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Request para criar print request
#[derive(Debug, Deserialize, Validate, utoipa::ToSchema)]
pub struct PrintRequestCreate {
    pub provider_id: String,
    pub requester_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub requester_email: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub pages: i32,
    #[serde(default)]
    pub color: ColorMode,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        let input: PrintRequestCreate = serde_json::from_value(serde_json::json!({
            "provider_id": "507f1f77bcf86cd799439011",
            "requester_name": "Pieter",
            "requester_email": "pieter@example.com",
            "pages": 12,
            "color": "color",
            "notes": "Stapled, please"
        }))
        .unwrap();

        assert!(input.validate().is_ok());
        assert_eq!(input.color, ColorMode::Color);
    }

    #[test]
    fn test_color_defaults_to_bw() {
        let input: PrintRequestCreate = serde_json::from_value(serde_json::json!({
            "provider_id": "507f1f77bcf86cd799439011",
            "requester_name": "Pieter",
            "requester_email": "pieter@example.com",
            "pages": 5
        }))
        .unwrap();

        assert_eq!(input.color, ColorMode::Bw);
    }

    #[test]
    fn test_unknown_color_rejected_at_decode() {
        let result: Result<PrintRequestCreate, _> = serde_json::from_value(serde_json::json!({
            "provider_id": "507f1f77bcf86cd799439011",
            "requester_name": "Pieter",
            "requester_email": "pieter@example.com",
            "pages": 5,
            "color": "sepia"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_email_rejected() {
        let input: PrintRequestCreate = serde_json::from_value(serde_json::json!({
            "provider_id": "507f1f77bcf86cd799439011",
            "requester_name": "Pieter",
            "requester_email": "not-an-email",
            "pages": 5
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("requester_email"));
    }

    #[test]
    fn test_zero_pages_rejected() {
        let input: PrintRequestCreate = serde_json::from_value(serde_json::json!({
            "provider_id": "507f1f77bcf86cd799439011",
            "requester_name": "Pieter",
            "requester_email": "pieter@example.com",
            "pages": 0
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("pages"));
    }

    #[test]
    fn test_validation_reports_all_violated_fields() {
        // Validation is total: both bad fields show up in one report
        let input: PrintRequestCreate = serde_json::from_value(serde_json::json!({
            "provider_id": "507f1f77bcf86cd799439011",
            "requester_name": "Pieter",
            "requester_email": "not-an-email",
            "pages": 0
        }))
        .unwrap();

        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("requester_email"));
        assert!(fields.contains_key("pages"));
    }
}

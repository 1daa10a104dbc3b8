use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # User Record
///
/// The full user record as stored and as returned by the API.
///
/// ## Fields
/// - `id`: opaque unique identifier assigned by the store (UUID v4)
/// - `name`: display name
/// - `email`: unique email address
/// - `created_at`: RFC 3339 creation timestamp, serialized as `createdAt`
///
/// ## Example JSON
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "name": "Carlos Silva",
///   "email": "carlos@empresa.com",
///   "createdAt": "2024-05-01T12:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub email: String,
}

/// Failure envelope used by the 400/404/500 responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json;

    #[test]
    fn test_user_serializes_created_at_as_camel_case() {
        let user = User {
            id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            name: "Carlos Silva".to_string(),
            email: "carlos@empresa.com".to_string(),
            created_at: "2024-05-01T12:00:00Z".to_string(),
        };

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_user_round_trip() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Carlos Silva",
            "email": "carlos@empresa.com",
            "createdAt": "2024-05-01T12:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Carlos Silva");
        assert_eq!(user.created_at, "2024-05-01T12:00:00Z");
    }

    #[test]
    fn test_valid_create_request_deserialization() {
        let json = r#"{"name": "Carlos Silva", "email": "carlos@empresa.com"}"#;
        let req: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Carlos Silva");
        assert_eq!(req.email, "carlos@empresa.com");
    }

    #[test]
    fn test_create_request_missing_name() {
        let json = r#"{"email": "carlos@empresa.com"}"#;
        let result: Result<CreateUserRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_missing_email() {
        let json = r#"{"name": "Carlos Silva"}"#;
        let result: Result<CreateUserRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_null_field() {
        let json = r#"{"name": null, "email": "carlos@empresa.com"}"#;
        let result: Result<CreateUserRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_wrong_type() {
        let json = r#"{"name": 42, "email": "carlos@empresa.com"}"#;
        let result: Result<CreateUserRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_extra_fields_ignored() {
        let json = r#"{"name": "Carlos", "email": "c@e.com", "extra": true}"#;
        let req: CreateUserRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.name, "Carlos");
    }

    #[test]
    fn test_valid_login_request_deserialization() {
        let json = r#"{"email": "carlos@empresa.com"}"#;
        let req: LoginRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.email, "carlos@empresa.com");
    }

    #[test]
    fn test_login_request_missing_email() {
        let json = r#"{}"#;
        let result: Result<LoginRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_login_request_array_instead_of_object() {
        let json = r#"["carlos@empresa.com"]"#;
        let result: Result<LoginRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_error_response_shape() {
        let resp = ErrorResponse {
            error: "Usuário não encontrado".to_string(),
        };
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["error"], "Usuário não encontrado");
    }
}

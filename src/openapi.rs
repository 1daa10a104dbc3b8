use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. The same request/response structs that serde validates are the
/// ones documented here, so the spec cannot drift from the running service.
///
/// # Endpoints
/// - Health Check: `GET /`
/// - Create User: `POST /`
/// - Login: `POST /login`
///
/// # Schemas
/// - `User`: full user record
/// - `CreateUserRequest`: registration input
/// - `LoginRequest`: login input
/// - `ErrorResponse`: failure envelope
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::user::create_user,
        crate::routes::user::login,
    ),
    components(
        schemas(
            crate::models::user::User,
            crate::models::user::CreateUserRequest,
            crate::models::user::LoginRequest,
            crate::models::user::ErrorResponse
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Users", description = "User registration and login endpoints")
    ),
    info(
        description = "API for user registration and login by email lookup",
        title = "User Registry API",
        version = "0.3.0",
    )
)]
pub struct ApiDoc;

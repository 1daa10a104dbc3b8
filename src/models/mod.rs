/// # User Wire Types
///
/// Request and response payloads for the user endpoints.
///
/// ## Types
/// - [`User`]: full user record as returned by the API
/// - [`CreateUserRequest`]: body for `POST /`
/// - [`LoginRequest`]: body for `POST /login`
/// - [`ErrorResponse`]: `{ "error": "..." }` failure envelope
///
/// ## Serialization
/// All types serialize to/from JSON with camelCase names on the wire
/// (`createdAt`). The same structs feed the OpenAPI schema via `ToSchema`,
/// so the documented shape and the validated shape cannot drift apart.
///
/// [`User`]: crate::models::user::User
/// [`CreateUserRequest`]: crate::models::user::CreateUserRequest
/// [`LoginRequest`]: crate::models::user::LoginRequest
/// [`ErrorResponse`]: crate::models::user::ErrorResponse
pub mod user;

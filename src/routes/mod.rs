use actix_web::web;

/// # Health Check Endpoint
///
/// Liveness probe for the service.
///
/// ## Response
///
/// - **200 OK**: always
///   - Body: the literal string `hello world` (plain text)
///
/// No failure path exists for this endpoint.
pub mod health;

/// # User Endpoints
///
/// Registration and login-by-email lookup.
///
/// ## Request
/// - `POST /`: JSON object with `name` and `email` fields
/// - `POST /login`: JSON object with an `email` field
///
/// ## Responses
/// - **201 Created**: user registered, full record returned
/// - **200 OK**: login email exists, full record returned
/// - **400 Bad Request**:
///   - Malformed body or invalid email syntax
///   - Email already registered
/// - **404 Not Found**: login email unknown
/// - **500 Internal Server Error**: store failure during login
///
/// ## Example Request
/// ```json
/// { "name": "Carlos Silva", "email": "carlos@empresa.com" }
/// ```
pub mod user;

/// # API Route Configuration
///
/// Registers every endpoint at the application root.
///
/// ## Mounted Services
/// - Health check (see [`health::configure_routes`] for details)
/// - User registration and login (see [`user::configure_routes`] for details)
///
/// ## Example Endpoints
///
/// ```text
/// GET  /       - Health check
/// POST /       - Create user
/// POST /login  - Login by email
/// ```
///
/// [`health::configure_routes`]: crate::routes::health::configure_routes
/// [`user::configure_routes`]: crate::routes::user::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(user::configure_routes);
}

//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Constructs an Axum router with the authentication, pilot, and instructor endpoints
/// registered. Each endpoint is annotated with OpenAPI specifications via utoipa, which
/// are collected into a unified OpenAPI document. The router includes Swagger UI at
/// `/api/docs` for interactive API exploration and testing.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Register an email/password account
/// - `POST /api/auth/login` - Log in with email and password
/// - `POST /api/logout` - Logout current user
/// - `GET /api/auth/user` - Get current user information
/// - `GET /api/user/role` - Get current user's platform role
/// - `GET|POST /api/pilot-profile` - Read or upsert the pilot's insurance profile
/// - `GET|POST /api/flight-logs` - List the logbook or log a flight for verification
/// - `GET /api/maneuver-checks` - List maneuvers detected in the pilot's flights
/// - `GET /api/proficiency-score` - Get the pilot's scoring summary and discount
/// - `GET|POST /api/cfi/students` - List the roster or take on a student
/// - `GET /api/cfi/pending-reviews` - List students' flights awaiting review
/// - `PATCH /api/cfi/flights/{flight_log_id}/verify` - Verify or reject a flight
/// - `PATCH /api/cfi/maneuvers/{maneuver_check_id}/review` - Review a maneuver
/// - `GET|POST /api/cfi/endorsements` - List issued endorsements or issue one
///
/// # OpenAPI Documentation
/// The OpenAPI specification is available at `/api/docs/openapi.json` and includes:
/// - Endpoint paths and HTTP methods
/// - Request/response schemas
/// - Authentication requirements
/// - Error responses
///
/// # Swagger UI
/// Interactive API documentation is served at `/api/docs`, allowing developers to:
/// - Browse available endpoints
/// - View request/response schemas
/// - Test endpoints directly from the browser
/// - Download the OpenAPI specification
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes and middleware, ready to be
/// merged into the main application router.
///
/// # Example
/// ```ignore
/// let app_state = AppState { db, tiers };
/// let router = routes().with_state(app_state);
/// // Router is now ready to serve HTTP requests
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Airworthy", description = "Airworthy API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "Account API routes"),
        (name = controller::pilot::PILOT_TAG, description = "Pilot self-service API routes"),
        (name = controller::cfi::CFI_TAG, description = "Instructor API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::get_user))
        .routes(routes!(controller::user::get_user_role))
        .routes(routes!(
            controller::pilot::get_pilot_profile,
            controller::pilot::upsert_pilot_profile
        ))
        .routes(routes!(
            controller::pilot::get_flight_logs,
            controller::pilot::create_flight_log
        ))
        .routes(routes!(controller::pilot::get_maneuver_checks))
        .routes(routes!(controller::pilot::get_proficiency_score))
        .routes(routes!(
            controller::cfi::get_students,
            controller::cfi::assign_student
        ))
        .routes(routes!(controller::cfi::get_pending_reviews))
        .routes(routes!(controller::cfi::verify_flight))
        .routes(routes!(controller::cfi::review_maneuver))
        .routes(routes!(
            controller::cfi::get_endorsements,
            controller::cfi::issue_endorsement
        ))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}

//! Route definitions for the Weather Stylist service

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
    Router,
};

use crate::{handlers, middleware::session_guard, AppState};

/// Top-level service routes: the weather proxy and the checkout endpoint.
/// Both require a live session.
pub fn service_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/weather", get(handlers::get_weather))
        .route(
            "/create-checkout-session",
            post(handlers::create_checkout_session),
        )
        .route_layer(from_fn_with_state(state, session_guard))
}

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Auth routes (signup/login public, the rest session-gated)
        .nest("/auth", auth_routes(state.clone()))
        // Protected routes - profile and allowance
        .merge(account_routes(state.clone()))
        // Protected routes - outfit suggestions
        .nest("/outfit", outfit_routes(state))
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/logout", post(handlers::logout))
        .route("/password", put(handlers::change_password))
        .route("/account", delete(handlers::delete_account))
        .route_layer(from_fn_with_state(state, session_guard));

    Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .merge(protected)
}

/// Profile and credit status routes (protected)
fn account_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(handlers::get_profile))
        .route("/credits", get(handlers::get_credits))
        .route_layer(from_fn_with_state(state, session_guard))
}

/// Outfit suggestion routes (protected)
fn outfit_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::get_outfit))
        .route("/ask", post(handlers::ask_outfit))
        .route_layer(from_fn_with_state(state, session_guard))
}

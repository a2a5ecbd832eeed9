//! HTTP API Layer
//!
//! This crate exposes the OGPO premium calculator over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Quote creation, rating-table retrieval, health checks
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses; `InvalidFactor` maps to
//!   422 with a structured body
//!
//! The calculation itself is synchronous and pure; the handlers only add the
//! transport concerns (ids, timestamps, status codes). Any artificial latency
//! a front-end wants for responsiveness modelling belongs to the front-end,
//! not to this layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(calculator, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use domain_rating::PremiumCalculator;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, quote};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<PremiumCalculator>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `calculator` - Validated premium calculator
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(calculator: Arc<PremiumCalculator>, config: ApiConfig) -> Router {
    let state = AppState { calculator, config };

    // Public routes (no versioned prefix)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Rating routes
    let rating_routes = Router::new()
        .route("/quotes", post(quote::create_quote))
        .route("/rating/tables", get(quote::get_rating_tables));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", rating_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

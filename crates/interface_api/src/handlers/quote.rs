//! Quote handlers

use axum::{extract::State, Json};
use chrono::Utc;
use validator::Validate;

use core_kernel::{Currency, QuoteId};
use domain_rating::CoefficientTables;

use crate::dto::quote::{QuoteRequest, QuoteResponse};
use crate::{error::ApiError, AppState};

/// Calculates a premium quote for the submitted rating factors
pub async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<QuoteResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let factors = request.into_factors();
    let breakdown = state.calculator.calculate(&factors)?;

    let quote_id = QuoteId::new_v7();
    tracing::info!(
        %quote_id,
        vehicle_type = %factors.vehicle_type,
        region = %factors.region,
        premium = breakdown.premium(),
        "Issued premium quote"
    );

    Ok(Json(QuoteResponse {
        quote_id,
        premium: breakdown.premium(),
        currency: Currency::KZT,
        breakdown,
        calculated_at: Utc::now(),
    }))
}

/// Returns the active coefficient tables
///
/// Front-ends use this to populate their selectors and display the tariff;
/// the tables are public regulatory data.
pub async fn get_rating_tables(State(state): State<AppState>) -> Json<CoefficientTables> {
    Json(state.calculator.tables().clone())
}

//! Budget detection and tier list endpoints.
//!
//! POST /api/v1/budget   - Detect a budget in free text.
//! POST /api/v1/tierlist - Score and tier a list of candidate items.

use axum::Json;
use serde::Deserialize;

use gadgetbuddy_core::budget::detect_budget;
use gadgetbuddy_core::tier::build_tier_list;
use gadgetbuddy_types::money::Money;
use gadgetbuddy_types::tier::{Item, RankedItem};

use crate::http::error::AppError;
use crate::http::extractors::auth::Authenticated;
use crate::http::response::{ApiResponse, RequestTimer};

/// Request body for budget detection.
#[derive(Debug, Deserialize)]
pub struct BudgetRequest {
    pub text: String,
}

/// Request body for tier list construction.
#[derive(Debug, Deserialize)]
pub struct TierListRequest {
    pub items: Vec<Item>,
}

/// POST /api/v1/budget - `data` is the detected Money, or null.
pub async fn budget(
    _auth: Authenticated,
    Json(body): Json<BudgetRequest>,
) -> Result<Json<ApiResponse<Option<Money>>>, AppError> {
    let timer = RequestTimer::start();
    let money = detect_budget(&body.text);
    tracing::debug!(request_id = timer.request_id(), found = money.is_some(), "budget detection");
    Ok(Json(timer.finish(money)))
}

/// POST /api/v1/tierlist - Items ranked best first with their tiers.
pub async fn tierlist(
    _auth: Authenticated,
    Json(body): Json<TierListRequest>,
) -> Result<Json<ApiResponse<Vec<RankedItem>>>, AppError> {
    let timer = RequestTimer::start();
    let ranked = build_tier_list(&body.items);
    tracing::debug!(request_id = timer.request_id(), items = ranked.len(), "tier list built");
    Ok(Json(timer.finish(ranked)))
}

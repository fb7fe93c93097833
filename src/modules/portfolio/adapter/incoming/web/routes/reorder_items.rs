use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::reorder_items::ReorderItemsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub item_ids: Vec<String>,
}

/// Must be registered before the `/api/portfolios/items/{item_id}` PUT route,
/// otherwise "reorder" is swallowed as an item id.
#[put("/api/portfolios/items/reorder")]
pub async fn reorder_items_handler(
    user: VerifiedUser,
    req: web::Json<ReorderRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .reorder_items_use_case
        .execute(user.user_id, req.into_inner().item_ids)
        .await
    {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(ReorderItemsError::PortfolioNotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(ReorderItemsError::UnknownItemId(id)) => ApiResponse::bad_request(
            "UNKNOWN_ITEM_ID",
            &format!("Unknown portfolio item id: {}", id),
        ),

        Err(ReorderItemsError::RepositoryError(e)) => {
            error!("Repository error reordering items: {}", e);
            ApiResponse::internal_error()
        }
    }
}

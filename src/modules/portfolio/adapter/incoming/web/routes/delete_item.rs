use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::delete_item::DeleteItemError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/portfolios/items/{item_id}")]
pub async fn delete_item_handler(
    user: VerifiedUser,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let item_id = path.into_inner();

    match data
        .delete_item_use_case
        .execute(user.user_id, &item_id)
        .await
    {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteItemError::PortfolioNotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(DeleteItemError::ItemNotFound) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Portfolio item not found")
        }

        Err(DeleteItemError::RepositoryError(e)) => {
            error!("Repository error deleting item: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::delete_portfolio::DeletePortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/portfolios")]
pub async fn delete_portfolio_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.delete_portfolio_use_case.execute(user.user_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeletePortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(DeletePortfolioError::RepositoryError(e)) => {
            error!("Repository error deleting portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}

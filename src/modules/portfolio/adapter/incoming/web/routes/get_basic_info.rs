use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::get_portfolio::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Basic-info-only projection for screens that never render items.
#[get("/api/portfolios/basic-info")]
pub async fn get_basic_info_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_portfolio_use_case.execute(user.user_id).await {
        Ok(portfolio) => ApiResponse::success(portfolio.basic_info),

        Err(GetPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(GetPortfolioError::RepositoryError(e)) => {
            error!("Repository error fetching basic info: {}", e);
            ApiResponse::internal_error()
        }
    }
}

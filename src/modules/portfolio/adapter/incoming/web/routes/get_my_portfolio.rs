use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::get_portfolio::GetPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/portfolios/me")]
pub async fn get_my_portfolio_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.get_portfolio_use_case.execute(user.user_id).await {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(GetPortfolioError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(GetPortfolioError::RepositoryError(e)) => {
            error!("Repository error fetching portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::create_portfolio::CreatePortfolioError;
use crate::modules::portfolio::domain::entities::BasicInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[post("/api/portfolios")]
pub async fn create_portfolio_handler(
    user: VerifiedUser,
    req: web::Json<BasicInfo>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .create_portfolio_use_case
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(portfolio) => ApiResponse::created(portfolio),

        Err(CreatePortfolioError::AlreadyExists) => ApiResponse::conflict(
            "PORTFOLIO_ALREADY_EXISTS",
            "A portfolio already exists for this job seeker",
        ),

        Err(CreatePortfolioError::ProfileNotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Job seeker profile not found")
        }

        Err(CreatePortfolioError::RepositoryError(e)) => {
            error!("Repository error creating portfolio: {}", e);
            ApiResponse::internal_error()
        }
    }
}

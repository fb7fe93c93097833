use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::exists_portfolio::ExistsPortfolioError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[get("/api/portfolios/me/exists")]
pub async fn exists_portfolio_handler(
    user: VerifiedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.exists_portfolio_use_case.execute(user.user_id).await {
        Ok(exists) => ApiResponse::success(ExistsResponse { exists }),

        Err(ExistsPortfolioError::RepositoryError(e)) => {
            error!("Repository error checking portfolio existence: {}", e);
            ApiResponse::internal_error()
        }
    }
}

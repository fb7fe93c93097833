use actix_web::{put, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::update_basic_info::UpdateBasicInfoError;
use crate::modules::portfolio::domain::entities::BasicInfo;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The payload is the complete basic info section; partial updates are not
/// supported at this endpoint.
#[put("/api/portfolios/basic-info")]
pub async fn update_basic_info_handler(
    user: VerifiedUser,
    req: web::Json<BasicInfo>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .update_basic_info_use_case
        .execute(user.user_id, req.into_inner())
        .await
    {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(UpdateBasicInfoError::NotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(UpdateBasicInfoError::RepositoryError(e)) => {
            error!("Repository error updating basic info: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_multipart::form::MultipartForm;
use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::add_item::{AddItemError, NewItemData};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::item_form::{to_upload_files, ItemForm};

#[post("/api/portfolios/items")]
pub async fn add_item_handler(
    user: VerifiedUser,
    form: MultipartForm<ItemForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = form.into_inner();
    let payload = form.item.into_inner();

    let item_data = NewItemData {
        item_type: payload.item_type,
        title: payload.title,
        content: payload.content,
    };

    match data
        .add_item_use_case
        .execute(user.user_id, item_data, to_upload_files(form.files))
        .await
    {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(AddItemError::PortfolioNotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(AddItemError::ItemLimitExceeded) => ApiResponse::conflict(
            "ITEM_LIMIT_EXCEEDED",
            "Portfolio already holds the maximum number of items",
        ),

        Err(AddItemError::UploadFailed(e)) => {
            error!("Attachment upload failed while adding item: {}", e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "UPLOAD_FAILED",
                "Failed to store attachments",
            )
        }

        Err(AddItemError::RepositoryError(e)) => {
            error!("Repository error adding item: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use actix_multipart::form::MultipartForm;
use actix_web::{put, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::VerifiedUser;
use crate::modules::portfolio::application::use_cases::update_item::{
    UpdateItemData, UpdateItemError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::item_form::{to_upload_files, ItemForm};

#[put("/api/portfolios/items/{item_id}")]
pub async fn update_item_handler(
    user: VerifiedUser,
    path: web::Path<String>,
    form: MultipartForm<ItemForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let item_id = path.into_inner();
    let form = form.into_inner();
    let payload = form.item.into_inner();

    let item_data = UpdateItemData {
        item_type: payload.item_type,
        title: payload.title,
        content: payload.content,
    };

    match data
        .update_item_use_case
        .execute(
            user.user_id,
            &item_id,
            item_data,
            to_upload_files(form.files),
        )
        .await
    {
        Ok(portfolio) => ApiResponse::success(portfolio),

        Err(UpdateItemError::PortfolioNotFound) => {
            ApiResponse::not_found("PORTFOLIO_NOT_FOUND", "Portfolio not found")
        }

        Err(UpdateItemError::ItemNotFound) => {
            ApiResponse::not_found("ITEM_NOT_FOUND", "Portfolio item not found")
        }

        Err(UpdateItemError::UploadFailed(e)) => {
            error!("Attachment upload failed while updating item: {}", e);
            ApiResponse::error(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "UPLOAD_FAILED",
                "Failed to store attachments",
            )
        }

        Err(UpdateItemError::RepositoryError(e)) => {
            error!("Repository error updating item: {}", e);
            ApiResponse::internal_error()
        }
    }
}

use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::{
    AttachmentStorage, PortfolioStore, UploadFile,
};
use crate::modules::portfolio::domain::entities::{Attachment, ExtractionStatus, Portfolio};

#[derive(Debug, Clone)]
pub enum UpdateItemError {
    PortfolioNotFound,
    ItemNotFound,
    UploadFailed(String),
    RepositoryError(String),
}

#[derive(Debug, Clone)]
pub struct UpdateItemData {
    pub item_type: String,
    pub title: String,
    pub content: String,
}

/// An interface for the update portfolio item use case
#[async_trait]
pub trait IUpdateItemUseCase: Send + Sync {
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        item_id: &str,
        data: UpdateItemData,
        files: Vec<UploadFile>,
    ) -> Result<Portfolio, UpdateItemError>;
}

/// Replaces the item's textual fields and APPENDS any newly uploaded files to
/// its attachment list. Existing attachments are never touched here; removal
/// goes through item deletion.
pub struct UpdateItemUseCase<S, F>
where
    S: PortfolioStore,
    F: AttachmentStorage,
{
    portfolio_store: S,
    attachment_storage: F,
}

impl<S, F> UpdateItemUseCase<S, F>
where
    S: PortfolioStore,
    F: AttachmentStorage,
{
    pub fn new(portfolio_store: S, attachment_storage: F) -> Self {
        Self {
            portfolio_store,
            attachment_storage,
        }
    }

    async fn upload_files(
        &self,
        owner_id: Uuid,
        files: &[UploadFile],
    ) -> Result<Vec<Attachment>, UpdateItemError> {
        let mut attachments = Vec::new();
        let mut uploaded_keys: Vec<String> = Vec::new();

        for file in files {
            if file.is_empty() {
                continue;
            }

            match self.attachment_storage.upload(owner_id, file).await {
                Ok(object_key) => {
                    uploaded_keys.push(object_key.clone());
                    attachments.push(Attachment {
                        object_key,
                        original_filename: file.filename.clone(),
                        content_type: file.content_type.clone(),
                        file_size: file.bytes.len() as i64,
                        extraction_status: ExtractionStatus::Pending,
                    });
                }
                Err(e) => {
                    if !uploaded_keys.is_empty() {
                        if let Err(cleanup_err) =
                            self.attachment_storage.delete_many(&uploaded_keys).await
                        {
                            warn!(
                                error = %cleanup_err,
                                keys = ?uploaded_keys,
                                "failed to clean up partially uploaded attachments"
                            );
                        }
                    }
                    return Err(UpdateItemError::UploadFailed(e.to_string()));
                }
            }
        }

        Ok(attachments)
    }
}

#[async_trait]
impl<S, F> IUpdateItemUseCase for UpdateItemUseCase<S, F>
where
    S: PortfolioStore + Sync + Send,
    F: AttachmentStorage + Sync + Send,
{
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        item_id: &str,
        data: UpdateItemData,
        files: Vec<UploadFile>,
    ) -> Result<Portfolio, UpdateItemError> {
        let mut portfolio = self
            .portfolio_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| UpdateItemError::RepositoryError(e.to_string()))?
            .ok_or(UpdateItemError::PortfolioNotFound)?;

        // Item must exist before anything is uploaded.
        if portfolio.item(item_id).is_none() {
            return Err(UpdateItemError::ItemNotFound);
        }

        let new_attachments = self.upload_files(job_seeker_id, &files).await?;

        let now = Utc::now();
        {
            // Checked above; the aggregate has not changed since.
            let item = portfolio
                .item_mut(item_id)
                .ok_or(UpdateItemError::ItemNotFound)?;

            item.item_type = data.item_type;
            item.title = data.title;
            item.content = data.content;
            item.attachments.extend(new_attachments);
            item.updated_at = now;
        }

        portfolio.mark_needs_embedding();
        portfolio.touch(now);

        self.portfolio_store
            .update(&portfolio)
            .await
            .map_err(|e| UpdateItemError::RepositoryError(e.to_string()))?;

        portfolio.sort_items();
        Ok(portfolio)
    }
}

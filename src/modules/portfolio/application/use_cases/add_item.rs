use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::{
    AttachmentStorage, PortfolioStore, UploadFile,
};
use crate::modules::portfolio::domain::entities::{
    Attachment, ExtractionStatus, Portfolio, PortfolioItem,
};

#[derive(Debug, Clone)]
pub enum AddItemError {
    PortfolioNotFound,
    ItemLimitExceeded,
    UploadFailed(String),
    RepositoryError(String),
}

/// Caller-supplied fields of a new item; order and id are assigned here.
#[derive(Debug, Clone)]
pub struct NewItemData {
    pub item_type: String,
    pub title: String,
    pub content: String,
}

/// An interface for the add portfolio item use case
#[async_trait]
pub trait IAddItemUseCase: Send + Sync {
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        data: NewItemData,
        files: Vec<UploadFile>,
    ) -> Result<Portfolio, AddItemError>;
}

pub struct AddItemUseCase<S, F>
where
    S: PortfolioStore,
    F: AttachmentStorage,
{
    portfolio_store: S,
    attachment_storage: F,
}

impl<S, F> AddItemUseCase<S, F>
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

    /// Upload every non-empty file, returning the attachment records.
    /// On a mid-loop failure the keys uploaded so far in this call are
    /// best-effort deleted before the error is returned, so a failed add
    /// leaves no stray objects behind.
    async fn upload_files(
        &self,
        owner_id: Uuid,
        files: &[UploadFile],
    ) -> Result<Vec<Attachment>, AddItemError> {
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
                    return Err(AddItemError::UploadFailed(e.to_string()));
                }
            }
        }

        Ok(attachments)
    }
}

#[async_trait]
impl<S, F> IAddItemUseCase for AddItemUseCase<S, F>
where
    S: PortfolioStore + Sync + Send,
    F: AttachmentStorage + Sync + Send,
{
    async fn execute(
        &self,
        job_seeker_id: Uuid,
        data: NewItemData,
        files: Vec<UploadFile>,
    ) -> Result<Portfolio, AddItemError> {
        let mut portfolio = self
            .portfolio_store
            .find_by_job_seeker_id(job_seeker_id)
            .await
            .map_err(|e| AddItemError::RepositoryError(e.to_string()))?
            .ok_or(AddItemError::PortfolioNotFound)?;

        if !portfolio.has_item_capacity() {
            return Err(AddItemError::ItemLimitExceeded);
        }

        let attachments = self.upload_files(job_seeker_id, &files).await?;

        let now = Utc::now();
        let item = PortfolioItem::new(
            portfolio.next_item_order(),
            data.item_type,
            data.title,
            data.content,
            attachments,
            now,
        );

        portfolio.items.push(item);
        portfolio.mark_needs_embedding();
        portfolio.touch(now);

        self.portfolio_store
            .update(&portfolio)
            .await
            .map_err(|e| AddItemError::RepositoryError(e.to_string()))?;

        portfolio.sort_items();
        Ok(portfolio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::portfolio::application::ports::outgoing::{
        AttachmentStorageError, PortfolioStoreError,
    };
    use crate::modules::portfolio::domain::entities::{
        BasicInfo, Portfolio, MAX_PORTFOLIO_ITEMS,
    };
    use std::sync::Mutex;
    use tokio;

    fn sample_portfolio(job_seeker_id: Uuid) -> Portfolio {
        Portfolio::new(
            job_seeker_id,
            BasicInfo {
                name: "Kim".to_string(),
                school_name: "Seoul U".to_string(),
                major: "CS".to_string(),
                gpa: None,
                desired_position: None,
                reference_urls: vec![],
                awards: vec![],
                certifications: vec![],
                language_tests: vec![],
            },
            Utc::now(),
        )
    }

    fn item_data() -> NewItemData {
        NewItemData {
            item_type: "project".to_string(),
            title: "Chat server".to_string(),
            content: "Built a chat server".to_string(),
        }
    }

    fn upload_file(name: &str, bytes: &[u8]) -> UploadFile {
        UploadFile {
            filename: name.to_string(),
            content_type: "application/pdf".to_string(),
            bytes: bytes.to_vec(),
        }
    }

    // -----------------------------
    // Mock Portfolio Store
    // -----------------------------

    #[derive(Default)]
    struct MockPortfolioStore {
        pub portfolio: Option<Portfolio>,
        pub updated: Mutex<Option<Portfolio>>,
    }

    #[async_trait]
    impl PortfolioStore for MockPortfolioStore {
        async fn find_by_job_seeker_id(
            &self,
            _job_seeker_id: Uuid,
        ) -> Result<Option<Portfolio>, PortfolioStoreError> {
            Ok(self.portfolio.clone())
        }

        async fn exists_by_job_seeker_id(
            &self,
            _job_seeker_id: Uuid,
        ) -> Result<bool, PortfolioStoreError> {
            unimplemented!()
        }

        async fn insert(&self, _portfolio: &Portfolio) -> Result<(), PortfolioStoreError> {
            unimplemented!()
        }

        async fn update(&self, portfolio: &Portfolio) -> Result<(), PortfolioStoreError> {
            *self.updated.lock().unwrap() = Some(portfolio.clone());
            Ok(())
        }

        async fn delete(&self, _portfolio_id: Uuid) -> Result<(), PortfolioStoreError> {
            unimplemented!()
        }

        async fn find_by_job_seeker_ids(
            &self,
            _job_seeker_ids: &[Uuid],
        ) -> Result<Vec<Portfolio>, PortfolioStoreError> {
            unimplemented!()
        }
    }

    // -----------------------------
    // Mock Attachment Storage
    // -----------------------------

    #[derive(Default)]
    struct MockAttachmentStorage {
        pub fail_after: Option<usize>,
        pub uploaded: Mutex<Vec<String>>,
        pub deleted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AttachmentStorage for MockAttachmentStorage {
        async fn upload(
            &self,
            _owner_id: Uuid,
            file: &UploadFile,
        ) -> Result<String, AttachmentStorageError> {
            let mut uploaded = self.uploaded.lock().unwrap();
            if let Some(limit) = self.fail_after {
                if uploaded.len() >= limit {
                    return Err(AttachmentStorageError::UploadFailed(
                        "bucket unavailable".to_string(),
                    ));
                }
            }
            let key = format!("key-{}", file.filename);
            uploaded.push(key.clone());
            Ok(key)
        }

        async fn delete_many(
            &self,
            object_keys: &[String],
        ) -> Result<(), AttachmentStorageError> {
            self.deleted.lock().unwrap().extend_from_slice(object_keys);
            Ok(())
        }
    }

    // -----------------------------
    // Tests
    // -----------------------------

    #[tokio::test]
    async fn test_add_item_assigns_next_order_and_marks_dirty() {
        let job_seeker_id = Uuid::new_v4();
        let mut portfolio = sample_portfolio(job_seeker_id);
        portfolio.processing_status.needs_embedding = false;

        let store = MockPortfolioStore {
            portfolio: Some(portfolio),
            ..Default::default()
        };
        let use_case = AddItemUseCase::new(store, MockAttachmentStorage::default());

        let updated = use_case
            .execute(job_seeker_id, item_data(), vec![])
            .await
            .unwrap();

        assert_eq!(updated.items.len(), 1);
        let item = &updated.items[0];
        assert_eq!(item.order, 1);
        assert_eq!(item.title, "Chat server");
        assert!(item.attachments.is_empty());
        assert!(updated.processing_status.needs_embedding);

        let persisted = use_case.portfolio_store.updated.lock().unwrap().clone();
        let persisted = persisted.unwrap();
        assert_eq!(persisted.items.len(), 1);
        assert!(persisted.processing_status.needs_embedding);
    }

    #[tokio::test]
    async fn test_add_item_returns_whole_portfolio_sorted() {
        let job_seeker_id = Uuid::new_v4();
        let mut portfolio = sample_portfolio(job_seeker_id);
        portfolio.items.push(PortfolioItem::new(
            3,
            "project".to_string(),
            "Existing".to_string(),
            "content".to_string(),
            vec![],
            Utc::now(),
        ));

        let store = MockPortfolioStore {
            portfolio: Some(portfolio),
            ..Default::default()
        };
        let use_case = AddItemUseCase::new(store, MockAttachmentStorage::default());

        let updated = use_case
            .execute(job_seeker_id, item_data(), vec![])
            .await
            .unwrap();

        // The whole aggregate comes back, ordered, with the new item appended
        // after the highest existing order.
        assert_eq!(updated.job_seeker_id, job_seeker_id);
        assert_eq!(updated.items.len(), 2);
        assert_eq!(updated.items[0].title, "Existing");
        assert_eq!(updated.items[1].title, "Chat server");
        assert_eq!(updated.items[1].order, 4);
    }

    #[tokio::test]
    async fn test_add_item_skips_empty_files_and_records_attachments() {
        let job_seeker_id = Uuid::new_v4();
        let store = MockPortfolioStore {
            portfolio: Some(sample_portfolio(job_seeker_id)),
            ..Default::default()
        };
        let use_case = AddItemUseCase::new(store, MockAttachmentStorage::default());

        let files = vec![
            upload_file("report.pdf", b"pdf bytes"),
            upload_file("empty.pdf", b""),
            upload_file("slides.pdf", b"more bytes"),
        ];

        let updated = use_case
            .execute(job_seeker_id, item_data(), files)
            .await
            .unwrap();

        let item = &updated.items[0];
        assert_eq!(item.attachments.len(), 2);
        assert_eq!(item.attachments[0].original_filename, "report.pdf");
        assert_eq!(item.attachments[0].file_size, 9);
        assert_eq!(
            item.attachments[0].extraction_status,
            ExtractionStatus::Pending
        );
        assert_eq!(item.attachments[1].original_filename, "slides.pdf");
    }

    #[tokio::test]
    async fn test_add_item_rejects_when_at_capacity() {
        let job_seeker_id = Uuid::new_v4();
        let mut portfolio = sample_portfolio(job_seeker_id);
        for i in 0..MAX_PORTFOLIO_ITEMS {
            portfolio.items.push(PortfolioItem::new(
                i as i32 + 1,
                "project".to_string(),
                format!("item {}", i),
                "content".to_string(),
                vec![],
                Utc::now(),
            ));
        }

        let store = MockPortfolioStore {
            portfolio: Some(portfolio),
            ..Default::default()
        };
        let use_case = AddItemUseCase::new(store, MockAttachmentStorage::default());

        let result = use_case.execute(job_seeker_id, item_data(), vec![]).await;

        assert!(matches!(result, Err(AddItemError::ItemLimitExceeded)));
    }

    #[tokio::test]
    async fn test_add_item_upload_failure_rolls_back_uploaded_keys() {
        let job_seeker_id = Uuid::new_v4();
        let store = MockPortfolioStore {
            portfolio: Some(sample_portfolio(job_seeker_id)),
            ..Default::default()
        };
        // Second upload fails; the first key must be cleaned up.
        let storage = MockAttachmentStorage {
            fail_after: Some(1),
            ..Default::default()
        };
        let use_case = AddItemUseCase::new(store, storage);

        let files = vec![
            upload_file("a.pdf", b"aaa"),
            upload_file("b.pdf", b"bbb"),
        ];

        let result = use_case.execute(job_seeker_id, item_data(), files).await;

        match result {
            Err(AddItemError::UploadFailed(msg)) => {
                assert!(msg.contains("bucket unavailable"));
            }
            other => panic!("Expected UploadFailed, got {:?}", other),
        }

        let deleted = use_case.attachment_storage.deleted.lock().unwrap().clone();
        assert_eq!(deleted, vec!["key-a.pdf".to_string()]);
        // Nothing was persisted.
        assert!(use_case.portfolio_store.updated.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_item_portfolio_not_found() {
        let use_case = AddItemUseCase::new(
            MockPortfolioStore::default(),
            MockAttachmentStorage::default(),
        );

        let result = use_case.execute(Uuid::new_v4(), item_data(), vec![]).await;

        assert!(matches!(result, Err(AddItemError::PortfolioNotFound)));
    }
}

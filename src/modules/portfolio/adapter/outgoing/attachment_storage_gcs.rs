use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::modules::portfolio::application::ports::outgoing::attachment_storage::{
    AttachmentStorage, AttachmentStorageError, UploadFile,
};

/// Object keys are namespaced by owner so a bucket listing groups one job
/// seeker's files together: `{owner}/{uuid}.{ext}`.
fn object_key_for(owner_id: Uuid, filename: &str) -> String {
    match filename.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => {
            format!("{}/{}.{}", owner_id, Uuid::new_v4(), ext.to_lowercase())
        }
        _ => format!("{}/{}", owner_id, Uuid::new_v4()),
    }
}

fn is_not_found(msg: &str) -> bool {
    let m = msg.to_lowercase();
    m.contains("404") || m.contains("not found") || m.contains("no such object")
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types.
///
/// Tests implement this trait with a fake client.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_bytes(
        &self,
        bucket: &str,
        object_key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;

    async fn delete_object(&self, bucket: &str, object_key: &str) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_bytes(
        &self,
        bucket: &str,
        object_key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0.upload_bytes(bucket, object_key, content_type, bytes).await
    }

    async fn delete_object(&self, bucket: &str, object_key: &str) -> Result<(), String> {
        self.0.delete_object(bucket, object_key).await
    }
}

/// Production adapter: implements the AttachmentStorage port against GCS.
#[derive(Clone)]
pub struct GcsAttachmentStorage {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
    bucket: String,
}

impl GcsAttachmentStorage {
    /// Synchronous constructor; the client is initialized lazily on first use.
    pub fn new(bucket: String) -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
            bucket,
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, String> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    /// Test-friendly constructor with pre-initialized client.
    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>, bucket: &str) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
            bucket: bucket.to_string(),
        }
    }
}

#[async_trait]
impl AttachmentStorage for GcsAttachmentStorage {
    async fn upload(
        &self,
        owner_id: Uuid,
        file: &UploadFile,
    ) -> Result<String, AttachmentStorageError> {
        let client = self
            .get_client()
            .await
            .map_err(AttachmentStorageError::UploadFailed)?;

        let object_key = object_key_for(owner_id, &file.filename);

        client
            .upload_bytes(
                &self.bucket,
                &object_key,
                &file.content_type,
                file.bytes.clone(),
            )
            .await
            .map_err(AttachmentStorageError::UploadFailed)?;

        Ok(object_key)
    }

    async fn delete_many(&self, object_keys: &[String]) -> Result<(), AttachmentStorageError> {
        let client = self
            .get_client()
            .await
            .map_err(AttachmentStorageError::DeleteFailed)?;

        // Attempt every key; report the first real failure afterwards.
        // Objects that are already gone count as deleted.
        let mut first_failure: Option<String> = None;

        for key in object_keys {
            if let Err(msg) = client.delete_object(&self.bucket, key).await {
                if is_not_found(&msg) {
                    continue;
                }
                if first_failure.is_none() {
                    first_failure = Some(format!("{}: {}", key, msg));
                }
            }
        }

        match first_failure {
            None => Ok(()),
            Some(msg) => Err(AttachmentStorageError::DeleteFailed(msg)),
        }
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    client: google_cloud_storage::client::Client,
}

impl RealGcsClient {
    async fn new() -> Result<Self, String> {
        tracing::info!("Initializing GCS client...");

        let config = google_cloud_storage::client::ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| {
                tracing::error!("Failed to create GCS client config: {:?}", e);
                e.to_string()
            })?;

        Ok(Self {
            client: google_cloud_storage::client::Client::new(config),
        })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_bytes(
        &self,
        bucket: &str,
        object_key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};

        let upload_type = UploadType::Simple(Media {
            name: object_key.to_string().into(),
            content_type: content_type.to_string().into(),
            content_length: Some(bytes.len() as u64),
        });

        self.client
            .upload_object(
                &UploadObjectRequest {
                    bucket: bucket.to_string(),
                    ..Default::default()
                },
                bytes,
                &upload_type,
            )
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    async fn delete_object(&self, bucket: &str, object_key: &str) -> Result<(), String> {
        use google_cloud_storage::http::objects::delete::DeleteObjectRequest;

        self.client
            .delete_object(&DeleteObjectRequest {
                bucket: bucket.to_string(),
                object: object_key.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| e.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

pub mod attachment_storage;
pub mod portfolio_store;
pub mod profile_pointer_store;

pub use attachment_storage::{AttachmentStorage, AttachmentStorageError, UploadFile};
pub use portfolio_store::{PortfolioStore, PortfolioStoreError};
pub use profile_pointer_store::{ProfilePointer, ProfilePointerStore, ProfilePointerStoreError};

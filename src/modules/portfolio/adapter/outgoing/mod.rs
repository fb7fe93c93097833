pub mod attachment_storage_gcs;
pub mod portfolio_store_postgres;
pub mod profile_pointer_postgres;
pub mod sea_orm_entity;

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "portfolios")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id: Uuid,

    // Unique index enforces one portfolio per job seeker.
    #[sea_orm(column_name = "job_seeker_id", column_type = "Uuid")]
    pub job_seeker_id: Uuid,

    /// The aggregate body (basic_info, items, processing_status) as one
    /// JSONB document. All writes are whole-document replaces.
    #[sea_orm(column_type = "JsonBinary")]
    pub document: Json,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

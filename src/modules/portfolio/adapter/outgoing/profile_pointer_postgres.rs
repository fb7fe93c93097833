use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::job_seeker_profiles::{
    ActiveModel, Column, Entity,
};
use crate::modules::portfolio::application::ports::outgoing::profile_pointer_store::{
    ProfilePointer, ProfilePointerStore, ProfilePointerStoreError,
};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProfilePointerPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfilePointerPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProfilePointerStore for ProfilePointerPostgres {
    async fn ensure_exists(&self, job_seeker_id: Uuid) -> Result<(), ProfilePointerStoreError> {
        let existing = Entity::find()
            .filter(Column::UserId.eq(job_seeker_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        if existing.is_some() {
            return Ok(());
        }

        let now = Utc::now().fixed_offset();
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(job_seeker_id),
            portfolio_id: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        match model.insert(&*self.db).await {
            Ok(_) => Ok(()),
            // A concurrent ensure_exists won the insert race. The row is
            // there either way, which is all this method promises.
            Err(e) if is_unique_violation(&e) => Ok(()),
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn find_by_job_seeker_id(
        &self,
        job_seeker_id: Uuid,
    ) -> Result<Option<ProfilePointer>, ProfilePointerStoreError> {
        let row = Entity::find()
            .filter(Column::UserId.eq(job_seeker_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(row.map(|model| ProfilePointer {
            job_seeker_id: model.user_id,
            portfolio_id: model.portfolio_id,
        }))
    }

    async fn save(&self, pointer: ProfilePointer) -> Result<(), ProfilePointerStoreError> {
        let model = ActiveModel {
            portfolio_id: Set(pointer.portfolio_id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::UserId.eq(pointer.job_seeker_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        if results.is_empty() {
            return Err(ProfilePointerStoreError::DatabaseError(format!(
                "no profile row for job seeker {}",
                pointer.job_seeker_id
            )));
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_unique_violation(e: &DbErr) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505")
}

fn map_db_err(e: DbErr) -> ProfilePointerStoreError {
    ProfilePointerStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

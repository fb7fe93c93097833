use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::portfolio::adapter::outgoing::sea_orm_entity::portfolios::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::portfolio::application::ports::outgoing::portfolio_store::{
    PortfolioStore, PortfolioStoreError,
};
use crate::modules::portfolio::domain::entities::{
    BasicInfo, Portfolio, PortfolioItem, ProcessingStatus,
};

// ============================================================================
// Store Implementation
// ============================================================================

#[derive(Clone)]
pub struct PortfolioStorePostgres {
    db: Arc<DatabaseConnection>,
}

impl PortfolioStorePostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PortfolioStore for PortfolioStorePostgres {
    async fn find_by_job_seeker_id(
        &self,
        job_seeker_id: Uuid,
    ) -> Result<Option<Portfolio>, PortfolioStoreError> {
        Entity::find()
            .filter(Column::JobSeekerId.eq(job_seeker_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_portfolio)
            .transpose()
    }

    async fn exists_by_job_seeker_id(
        &self,
        job_seeker_id: Uuid,
    ) -> Result<bool, PortfolioStoreError> {
        let found = Entity::find()
            .filter(Column::JobSeekerId.eq(job_seeker_id))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.is_some())
    }

    async fn insert(&self, portfolio: &Portfolio) -> Result<(), PortfolioStoreError> {
        let model = ActiveModel {
            id: Set(portfolio.id),
            job_seeker_id: Set(portfolio.job_seeker_id),
            document: Set(to_document(portfolio)?),
            created_at: Set(portfolio.created_at.fixed_offset()),
            updated_at: Set(portfolio.updated_at.fixed_offset()),
        };

        model
            .insert(&*self.db)
            .await
            .map_err(map_unique_violation)?;

        Ok(())
    }

    async fn update(&self, portfolio: &Portfolio) -> Result<(), PortfolioStoreError> {
        let model = ActiveModel {
            document: Set(to_document(portfolio)?),
            updated_at: Set(portfolio.updated_at.fixed_offset()),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(portfolio.id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        if results.is_empty() {
            return Err(PortfolioStoreError::NotFound);
        }

        Ok(())
    }

    async fn delete(&self, portfolio_id: Uuid) -> Result<(), PortfolioStoreError> {
        let result = Entity::delete_by_id(portfolio_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(PortfolioStoreError::NotFound);
        }

        Ok(())
    }

    async fn find_by_job_seeker_ids(
        &self,
        job_seeker_ids: &[Uuid],
    ) -> Result<Vec<Portfolio>, PortfolioStoreError> {
        Entity::find()
            .filter(Column::JobSeekerId.is_in(job_seeker_ids.to_vec()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_portfolio)
            .collect()
    }
}

// ============================================================================
// Document mapping
// ============================================================================

/// Shape of the JSONB `document` column. Identity and timestamps live in
/// their own columns, so they are excluded here.
#[derive(Serialize, Deserialize)]
struct DocumentBody {
    basic_info: BasicInfo,
    items: Vec<PortfolioItem>,
    processing_status: ProcessingStatus,
}

fn to_document(portfolio: &Portfolio) -> Result<serde_json::Value, PortfolioStoreError> {
    let body = DocumentBody {
        basic_info: portfolio.basic_info.clone(),
        items: portfolio.items.clone(),
        processing_status: portfolio.processing_status.clone(),
    };
    serde_json::to_value(&body).map_err(|e| PortfolioStoreError::SerializationError(e.to_string()))
}

fn model_to_portfolio(model: portfolios::Model) -> Result<Portfolio, PortfolioStoreError> {
    let body: DocumentBody = serde_json::from_value(model.document)
        .map_err(|e| PortfolioStoreError::SerializationError(e.to_string()))?;

    Ok(Portfolio {
        id: model.id,
        job_seeker_id: model.job_seeker_id,
        basic_info: body.basic_info,
        items: body.items,
        processing_status: body.processing_status,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_unique_violation(e: DbErr) -> PortfolioStoreError {
    let msg = e.to_string().to_lowercase();

    if (msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505"))
        && msg.contains("job_seeker_id")
    {
        PortfolioStoreError::AlreadyExists
    } else {
        PortfolioStoreError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> PortfolioStoreError {
    PortfolioStoreError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

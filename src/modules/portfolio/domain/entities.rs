use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hard cap on portfolio items per job seeker.
pub const MAX_PORTFOLIO_ITEMS: usize = 5;

//
// ──────────────────────────────────────────────────────────
// Basic info (wholesale-replaced, never patched field-wise)
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub award_name: String,
    pub achievement: String,
    pub award_year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub certification_name: String,
    pub issue_year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageTest {
    pub test_name: String,
    pub score: String,
    pub issue_year: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub school_name: String,
    pub major: String,
    pub gpa: Option<f64>,
    pub desired_position: Option<String>,
    #[serde(default)]
    pub reference_urls: Vec<String>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub language_tests: Vec<LanguageTest>,
}

//
// ──────────────────────────────────────────────────────────
// Items and attachments
// ──────────────────────────────────────────────────────────
//

/// Lifecycle of the out-of-process content extraction pipeline.
/// This service only ever writes `Pending`; an external worker moves it on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionStatus {
    Pending,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    /// Opaque key into the attachment store; never interpreted here.
    pub object_key: String,
    pub original_filename: String,
    pub content_type: String,
    pub file_size: i64,
    pub extraction_status: ExtractionStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub id: String,
    /// Display order, ascending. Unique within a portfolio but not dense:
    /// deletions leave gaps until an explicit reorder.
    pub order: i32,
    pub item_type: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PortfolioItem {
    pub fn new(
        order: i32,
        item_type: String,
        title: String,
        content: String,
        attachments: Vec<Attachment>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            order,
            item_type,
            title,
            content,
            attachments,
            created_at: now,
            updated_at: now,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Embedding dirty flag
// ──────────────────────────────────────────────────────────
//

/// Consumed by the asynchronous embedding job: every content mutation raises
/// `needs_embedding`; only the external consumer clears it and stamps
/// `last_processed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessingStatus {
    pub needs_embedding: bool,
    pub last_processed: Option<DateTime<Utc>>,
}

//
// ──────────────────────────────────────────────────────────
// Aggregate
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReorderError {
    #[error("unknown portfolio item id: {0}")]
    UnknownItemId(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub id: Uuid,
    pub job_seeker_id: Uuid,
    pub basic_info: BasicInfo,
    pub items: Vec<PortfolioItem>,
    pub processing_status: ProcessingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Portfolio {
    /// A fresh portfolio starts with no items and the embedding flag raised,
    /// so the first indexing pass picks up the basic info.
    pub fn new(job_seeker_id: Uuid, basic_info: BasicInfo, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_seeker_id,
            basic_info,
            items: Vec::new(),
            processing_status: ProcessingStatus {
                needs_embedding: true,
                last_processed: None,
            },
            created_at: now,
            updated_at: now,
        }
    }

    pub fn has_item_capacity(&self) -> bool {
        self.items.len() < MAX_PORTFOLIO_ITEMS
    }

    /// Next order value: max of existing orders plus one. Monotonic per
    /// portfolio; freed values are never reused, so after deletions the
    /// sequence stays sparse until a reorder renumbers it.
    pub fn next_item_order(&self) -> i32 {
        self.items.iter().map(|item| item.order).max().unwrap_or(0) + 1
    }

    pub fn item(&self, item_id: &str) -> Option<&PortfolioItem> {
        self.items.iter().find(|item| item.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut PortfolioItem> {
        self.items.iter_mut().find(|item| item.id == item_id)
    }

    pub fn remove_item(&mut self, item_id: &str) -> Option<PortfolioItem> {
        let idx = self.items.iter().position(|item| item.id == item_id)?;
        Some(self.items.remove(idx))
    }

    /// Sort items ascending by `order`. Display order is resolved at read
    /// time; stored order is insertion order.
    pub fn sort_items(&mut self) {
        self.items.sort_by_key(|item| item.order);
    }

    /// Dense 1-based renumbering in the caller-supplied sequence. Fails on
    /// the first id that matches no item, leaving already-assigned orders
    /// behind (the aggregate is discarded on error, never persisted).
    pub fn apply_reorder(&mut self, ordered_item_ids: &[String]) -> Result<(), ReorderError> {
        for (position, item_id) in ordered_item_ids.iter().enumerate() {
            let item = self
                .item_mut(item_id)
                .ok_or_else(|| ReorderError::UnknownItemId(item_id.clone()))?;
            item.order = position as i32 + 1;
        }
        Ok(())
    }

    /// Raise the re-embedding flag. Called by every content mutation, even
    /// when the new value equals the old one (no diffing).
    pub fn mark_needs_embedding(&mut self) {
        self.processing_status.needs_embedding = true;
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}

use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Client-facing comment: exactly one of `productId` / `articleId` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub product_id: Option<Uuid>,
    pub article_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<models::Comment> for Comment {
    fn from(comment: models::Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content,
            product_id: comment.parent.product_id(),
            article_id: comment.parent.article_id(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}

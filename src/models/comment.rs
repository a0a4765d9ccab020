use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// The record a comment is attached to. A comment always has exactly one parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommentParent {
    Product(Uuid),
    Article(Uuid),
}

impl CommentParent {
    pub fn id(&self) -> Uuid {
        match self {
            CommentParent::Product(id) | CommentParent::Article(id) => *id,
        }
    }

    /// Foreign key column holding this kind of parent.
    pub fn column(&self) -> &'static str {
        match self {
            CommentParent::Product(_) => "product_id",
            CommentParent::Article(_) => "article_id",
        }
    }

    pub fn product_id(&self) -> Option<Uuid> {
        match self {
            CommentParent::Product(id) => Some(*id),
            CommentParent::Article(_) => None,
        }
    }

    pub fn article_id(&self) -> Option<Uuid> {
        match self {
            CommentParent::Article(id) => Some(*id),
            CommentParent::Product(_) => None,
        }
    }

    /// Rebuilds the parent from the two nullable persistence columns.
    pub fn from_columns(product_id: Option<Uuid>, article_id: Option<Uuid>) -> Option<Self> {
        match (product_id, article_id) {
            (Some(id), None) => Some(CommentParent::Product(id)),
            (None, Some(id)) => Some(CommentParent::Article(id)),
            _ => None,
        }
    }
}

impl fmt::Display for CommentParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommentParent::Product(id) => write!(f, "product:{}", id),
            CommentParent::Article(id) => write!(f, "article:{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub content: String,
    pub parent: CommentParent,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

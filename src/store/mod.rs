//! Persistence seam.
//!
//! Route handlers only talk to [`ResourceStore`]. The process entry point decides
//! which implementation to inject:
//!
//! 1. [`PgStore`] keeps records in PostgreSQL through the `db` query modules
//! 2. [`MemoryStore`] keeps records in process, used by tests and local runs
//!
//! Every operation returns [`StoreResult`], where a missing record is reported as
//! [`StoreError::NotFound`] and anything else as [`StoreError::Database`].

use crate::forms;
use crate::models::{self, CommentParent};
use crate::pagination::{CursorPage, OffsetPage};
use async_trait::async_trait;
use std::fmt;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Product,
    Article,
    Comment,
}

impl Entity {
    pub fn parent_of(parent: &CommentParent) -> Self {
        match parent {
            CommentParent::Product(_) => Entity::Product,
            CommentParent::Article(_) => Entity::Article,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Product => write!(f, "Product"),
            Entity::Article => write!(f, "Article"),
            Entity::Comment => write!(f, "Comment"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0} not found")]
    NotFound(Entity),
    #[error("database error: {0}")]
    Database(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ResourceStore: Send + Sync {
    async fn insert_product(&self, form: forms::CreateProduct) -> StoreResult<models::Product>;

    /// Products matching `page.search` in name or description, ordered and windowed.
    async fn list_products(&self, page: &OffsetPage) -> StoreResult<Vec<models::Product>>;

    async fn fetch_product(&self, id: Uuid) -> StoreResult<models::Product>;

    /// Applies the present fields and refreshes `updated_at`.
    async fn update_product(
        &self,
        id: Uuid,
        patch: forms::PatchProduct,
    ) -> StoreResult<models::Product>;

    /// Removes the product and its comments, returning the removed product.
    async fn delete_product(&self, id: Uuid) -> StoreResult<models::Product>;

    async fn insert_article(&self, form: forms::CreateArticle) -> StoreResult<models::Article>;

    /// Articles matching `page.search` in title or content, ordered and windowed.
    async fn list_articles(&self, page: &OffsetPage) -> StoreResult<Vec<models::Article>>;

    async fn fetch_article(&self, id: Uuid) -> StoreResult<models::Article>;

    async fn update_article(
        &self,
        id: Uuid,
        patch: forms::PatchArticle,
    ) -> StoreResult<models::Article>;

    async fn delete_article(&self, id: Uuid) -> StoreResult<models::Article>;

    /// Comments of one parent, newest first, starting after the page cursor.
    async fn list_comments(
        &self,
        parent: CommentParent,
        page: &CursorPage,
    ) -> StoreResult<Vec<models::Comment>>;

    /// Fails with the parent's `NotFound` when the parent does not exist.
    async fn insert_comment(
        &self,
        parent: CommentParent,
        form: forms::CreateComment,
    ) -> StoreResult<models::Comment>;

    /// A comment attached to a different parent is reported as not found.
    async fn update_comment(
        &self,
        parent: CommentParent,
        id: Uuid,
        patch: forms::PatchComment,
    ) -> StoreResult<models::Comment>;

    async fn delete_comment(&self, parent: CommentParent, id: Uuid)
        -> StoreResult<models::Comment>;

    /// Drops every record of every collection.
    async fn clear(&self) -> StoreResult<()>;
}

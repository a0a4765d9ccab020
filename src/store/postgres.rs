use super::{ResourceStore, StoreResult};
use crate::db;
use crate::forms;
use crate::models::{self, CommentParent};
use crate::pagination::{CursorPage, OffsetPage};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

/// PostgreSQL-backed store. The pool is shared by all in-flight requests.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ResourceStore for PgStore {
    async fn insert_product(&self, form: forms::CreateProduct) -> StoreResult<models::Product> {
        db::product::insert(&self.pool, form).await
    }

    async fn list_products(&self, page: &OffsetPage) -> StoreResult<Vec<models::Product>> {
        db::product::fetch_page(&self.pool, page).await
    }

    async fn fetch_product(&self, id: Uuid) -> StoreResult<models::Product> {
        db::product::fetch(&self.pool, id).await
    }

    async fn update_product(
        &self,
        id: Uuid,
        patch: forms::PatchProduct,
    ) -> StoreResult<models::Product> {
        db::product::update(&self.pool, id, patch).await
    }

    async fn delete_product(&self, id: Uuid) -> StoreResult<models::Product> {
        db::product::delete(&self.pool, id).await
    }

    async fn insert_article(&self, form: forms::CreateArticle) -> StoreResult<models::Article> {
        db::article::insert(&self.pool, form).await
    }

    async fn list_articles(&self, page: &OffsetPage) -> StoreResult<Vec<models::Article>> {
        db::article::fetch_page(&self.pool, page).await
    }

    async fn fetch_article(&self, id: Uuid) -> StoreResult<models::Article> {
        db::article::fetch(&self.pool, id).await
    }

    async fn update_article(
        &self,
        id: Uuid,
        patch: forms::PatchArticle,
    ) -> StoreResult<models::Article> {
        db::article::update(&self.pool, id, patch).await
    }

    async fn delete_article(&self, id: Uuid) -> StoreResult<models::Article> {
        db::article::delete(&self.pool, id).await
    }

    async fn list_comments(
        &self,
        parent: CommentParent,
        page: &CursorPage,
    ) -> StoreResult<Vec<models::Comment>> {
        db::comment::fetch_page(&self.pool, parent, page).await
    }

    async fn insert_comment(
        &self,
        parent: CommentParent,
        form: forms::CreateComment,
    ) -> StoreResult<models::Comment> {
        db::comment::insert(&self.pool, parent, form).await
    }

    async fn update_comment(
        &self,
        parent: CommentParent,
        id: Uuid,
        patch: forms::PatchComment,
    ) -> StoreResult<models::Comment> {
        db::comment::update(&self.pool, parent, id, patch).await
    }

    async fn delete_comment(
        &self,
        parent: CommentParent,
        id: Uuid,
    ) -> StoreResult<models::Comment> {
        db::comment::delete(&self.pool, parent, id).await
    }

    async fn clear(&self) -> StoreResult<()> {
        let query_span = tracing::info_span!("Truncate all collections");
        sqlx::query("TRUNCATE comment, article, product")
            .execute(&self.pool)
            .instrument(query_span)
            .await
            .map(|_| ())
            .map_err(db::database_error)
    }
}

mod common;

use async_trait::async_trait;
use marketboard::forms;
use marketboard::models::{self, CommentParent};
use marketboard::pagination::{CursorPage, OffsetPage};
use marketboard::store::{MemoryStore, ResourceStore, StoreResult};
use reqwest::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Delegates to the in-process store, but listing products stalls.
struct StallingStore {
    inner: MemoryStore,
    stall: Duration,
}

#[async_trait]
impl ResourceStore for StallingStore {
    async fn insert_product(&self, form: forms::CreateProduct) -> StoreResult<models::Product> {
        self.inner.insert_product(form).await
    }

    async fn list_products(&self, page: &OffsetPage) -> StoreResult<Vec<models::Product>> {
        tokio::time::sleep(self.stall).await;
        self.inner.list_products(page).await
    }

    async fn fetch_product(&self, id: Uuid) -> StoreResult<models::Product> {
        self.inner.fetch_product(id).await
    }

    async fn update_product(
        &self,
        id: Uuid,
        patch: forms::PatchProduct,
    ) -> StoreResult<models::Product> {
        self.inner.update_product(id, patch).await
    }

    async fn delete_product(&self, id: Uuid) -> StoreResult<models::Product> {
        self.inner.delete_product(id).await
    }

    async fn insert_article(&self, form: forms::CreateArticle) -> StoreResult<models::Article> {
        self.inner.insert_article(form).await
    }

    async fn list_articles(&self, page: &OffsetPage) -> StoreResult<Vec<models::Article>> {
        self.inner.list_articles(page).await
    }

    async fn fetch_article(&self, id: Uuid) -> StoreResult<models::Article> {
        self.inner.fetch_article(id).await
    }

    async fn update_article(
        &self,
        id: Uuid,
        patch: forms::PatchArticle,
    ) -> StoreResult<models::Article> {
        self.inner.update_article(id, patch).await
    }

    async fn delete_article(&self, id: Uuid) -> StoreResult<models::Article> {
        self.inner.delete_article(id).await
    }

    async fn list_comments(
        &self,
        parent: CommentParent,
        page: &CursorPage,
    ) -> StoreResult<Vec<models::Comment>> {
        self.inner.list_comments(parent, page).await
    }

    async fn insert_comment(
        &self,
        parent: CommentParent,
        form: forms::CreateComment,
    ) -> StoreResult<models::Comment> {
        self.inner.insert_comment(parent, form).await
    }

    async fn update_comment(
        &self,
        parent: CommentParent,
        id: Uuid,
        patch: forms::PatchComment,
    ) -> StoreResult<models::Comment> {
        self.inner.update_comment(parent, id, patch).await
    }

    async fn delete_comment(
        &self,
        parent: CommentParent,
        id: Uuid,
    ) -> StoreResult<models::Comment> {
        self.inner.delete_comment(parent, id).await
    }

    async fn clear(&self) -> StoreResult<()> {
        self.inner.clear().await
    }
}

#[tokio::test]
async fn slow_request_is_answered_with_gateway_timeout() {
    let store: Arc<dyn ResourceStore> = Arc::new(StallingStore {
        inner: MemoryStore::new(),
        stall: Duration::from_secs(5),
    });
    let app = common::spawn_app_with(store, 1).await;
    let client = reqwest::Client::new();

    let response = client
        .get(&format!("{}/product", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Request timed out");

    let response = client
        .get(&format!("{}/article", &app.address))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(response.status(), StatusCode::OK);
}

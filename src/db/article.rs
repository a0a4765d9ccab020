use super::database_error;
use crate::forms;
use crate::models;
use crate::pagination::OffsetPage;
use crate::store::{Entity, StoreError, StoreResult};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert(pool: &PgPool, form: forms::CreateArticle) -> StoreResult<models::Article> {
    let query_span = tracing::info_span!("Saving new article into the database");
    sqlx::query_as::<_, models::Article>(
        r#"
        INSERT INTO article (id, title, content, created_at, updated_at)
        VALUES ($1, $2, $3, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(form.title)
    .bind(form.content)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|article| {
        tracing::info!("New article {} has been saved to database", article.id);
        article
    })
    .map_err(database_error)
}

pub async fn fetch_page(pool: &PgPool, page: &OffsetPage) -> StoreResult<Vec<models::Article>> {
    let query_span = tracing::info_span!("Fetch page of articles", search = %page.search);
    let sql = format!(
        r#"
        SELECT *
        FROM article
        WHERE title ILIKE $1 ESCAPE '\' OR content ILIKE $1 ESCAPE '\'
        ORDER BY created_at {order}, id {order}
        OFFSET $2
        LIMIT $3
        "#,
        order = page.order.as_sql()
    );

    sqlx::query_as::<_, models::Article>(&sql)
        .bind(page.like_pattern())
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(database_error)
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> StoreResult<models::Article> {
    let query_span = tracing::info_span!("Fetch article by id", %id);
    sqlx::query_as::<_, models::Article>(r"SELECT * FROM article WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(database_error)?
        .ok_or(StoreError::NotFound(Entity::Article))
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    patch: forms::PatchArticle,
) -> StoreResult<models::Article> {
    let query_span = tracing::info_span!("Updating article", %id);
    sqlx::query_as::<_, models::Article>(
        r#"
        UPDATE article
        SET
            title = COALESCE($2, title),
            content = COALESCE($3, content),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(patch.title)
    .bind(patch.content)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(database_error)?
    .ok_or(StoreError::NotFound(Entity::Article))
}

pub async fn delete(pool: &PgPool, id: Uuid) -> StoreResult<models::Article> {
    let query_span = tracing::info_span!("Delete article", %id);
    sqlx::query_as::<_, models::Article>(r"DELETE FROM article WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(database_error)?
        .ok_or(StoreError::NotFound(Entity::Article))
}

use super::database_error;
use crate::forms;
use crate::models::{self, CommentParent};
use crate::pagination::{Cursor, CursorPage};
use crate::store::{Entity, StoreError, StoreResult};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

/// Persistence shape of a comment: the parent lives in two nullable columns.
#[derive(Debug, sqlx::FromRow)]
struct CommentRow {
    id: Uuid,
    content: String,
    product_id: Option<Uuid>,
    article_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CommentRow> for models::Comment {
    type Error = StoreError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        let parent = CommentParent::from_columns(row.product_id, row.article_id).ok_or_else(|| {
            StoreError::Database(format!("comment {} does not have exactly one parent", row.id))
        })?;

        Ok(models::Comment {
            id: row.id,
            content: row.content,
            parent,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_comments(rows: Vec<CommentRow>) -> StoreResult<Vec<models::Comment>> {
    rows.into_iter().map(models::Comment::try_from).collect()
}

pub async fn fetch_page(
    pool: &PgPool,
    parent: CommentParent,
    page: &CursorPage,
) -> StoreResult<Vec<models::Comment>> {
    let query_span = tracing::info_span!("Fetch page of comments", %parent);
    let column = parent.column();

    let rows = match page.cursor {
        Cursor::Unresolvable => return Ok(vec![]),
        Cursor::Start => {
            let sql = format!(
                r#"
                SELECT *
                FROM comment
                WHERE {column} = $1
                ORDER BY created_at DESC, id DESC
                LIMIT $2
                "#
            );
            sqlx::query_as::<_, CommentRow>(&sql)
                .bind(parent.id())
                .bind(page.limit)
                .fetch_all(pool)
                .instrument(query_span)
                .await
        }
        Cursor::After(cursor) => {
            // an unknown cursor makes the row comparison NULL, so the page is empty
            let sql = format!(
                r#"
                SELECT *
                FROM comment
                WHERE {column} = $1
                  AND (created_at, id) < (
                      SELECT created_at, id FROM comment WHERE id = $2 AND {column} = $1
                  )
                ORDER BY created_at DESC, id DESC
                LIMIT $3
                "#
            );
            sqlx::query_as::<_, CommentRow>(&sql)
                .bind(parent.id())
                .bind(cursor)
                .bind(page.limit)
                .fetch_all(pool)
                .instrument(query_span)
                .await
        }
    }
    .map_err(database_error)?;

    into_comments(rows)
}

pub async fn insert(
    pool: &PgPool,
    parent: CommentParent,
    form: forms::CreateComment,
) -> StoreResult<models::Comment> {
    let query_span = tracing::info_span!("Saving new comment into the database", %parent);
    let row = sqlx::query_as::<_, CommentRow>(
        r#"
        INSERT INTO comment (id, content, product_id, article_id, created_at, updated_at)
        VALUES ($1, $2, $3, $4, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(form.content)
    .bind(parent.product_id())
    .bind(parent.article_id())
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map_err(|err| match err {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            StoreError::NotFound(Entity::parent_of(&parent))
        }
        err => database_error(err),
    })?;

    tracing::info!("New comment {} has been saved to database", row.id);
    row.try_into()
}

pub async fn update(
    pool: &PgPool,
    parent: CommentParent,
    id: Uuid,
    patch: forms::PatchComment,
) -> StoreResult<models::Comment> {
    let query_span = tracing::info_span!("Updating comment", %id, %parent);
    let sql = format!(
        r#"
        UPDATE comment
        SET
            content = COALESCE($3, content),
            updated_at = NOW()
        WHERE id = $1 AND {column} = $2
        RETURNING *
        "#,
        column = parent.column()
    );

    sqlx::query_as::<_, CommentRow>(&sql)
        .bind(id)
        .bind(parent.id())
        .bind(patch.content)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(database_error)?
        .ok_or(StoreError::NotFound(Entity::Comment))?
        .try_into()
}

pub async fn delete(
    pool: &PgPool,
    parent: CommentParent,
    id: Uuid,
) -> StoreResult<models::Comment> {
    let query_span = tracing::info_span!("Delete comment", %id, %parent);
    let sql = format!(
        r"DELETE FROM comment WHERE id = $1 AND {column} = $2 RETURNING *",
        column = parent.column()
    );

    sqlx::query_as::<_, CommentRow>(&sql)
        .bind(id)
        .bind(parent.id())
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(database_error)?
        .ok_or(StoreError::NotFound(Entity::Comment))?
        .try_into()
}

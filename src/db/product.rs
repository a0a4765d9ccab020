use super::database_error;
use crate::forms;
use crate::models;
use crate::pagination::OffsetPage;
use crate::store::{Entity, StoreError, StoreResult};
use sqlx::PgPool;
use tracing::Instrument;
use uuid::Uuid;

pub async fn insert(pool: &PgPool, form: forms::CreateProduct) -> StoreResult<models::Product> {
    let query_span = tracing::info_span!("Saving new product into the database");
    sqlx::query_as::<_, models::Product>(
        r#"
        INSERT INTO product (id, name, description, price, tags, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(form.name)
    .bind(form.description)
    .bind(form.price)
    .bind(form.tags)
    .fetch_one(pool)
    .instrument(query_span)
    .await
    .map(|product| {
        tracing::info!("New product {} has been saved to database", product.id);
        product
    })
    .map_err(database_error)
}

pub async fn fetch_page(pool: &PgPool, page: &OffsetPage) -> StoreResult<Vec<models::Product>> {
    let query_span = tracing::info_span!("Fetch page of products", search = %page.search);
    let sql = format!(
        r#"
        SELECT *
        FROM product
        WHERE name ILIKE $1 ESCAPE '\' OR description ILIKE $1 ESCAPE '\'
        ORDER BY created_at {order}, id {order}
        OFFSET $2
        LIMIT $3
        "#,
        order = page.order.as_sql()
    );

    sqlx::query_as::<_, models::Product>(&sql)
        .bind(page.like_pattern())
        .bind(page.offset)
        .bind(page.limit)
        .fetch_all(pool)
        .instrument(query_span)
        .await
        .map_err(database_error)
}

pub async fn fetch(pool: &PgPool, id: Uuid) -> StoreResult<models::Product> {
    let query_span = tracing::info_span!("Fetch product by id", %id);
    sqlx::query_as::<_, models::Product>(r"SELECT * FROM product WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(database_error)?
        .ok_or(StoreError::NotFound(Entity::Product))
}

pub async fn update(
    pool: &PgPool,
    id: Uuid,
    patch: forms::PatchProduct,
) -> StoreResult<models::Product> {
    let query_span = tracing::info_span!("Updating product", %id);
    sqlx::query_as::<_, models::Product>(
        r#"
        UPDATE product
        SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            price = COALESCE($4, price),
            tags = COALESCE($5, tags),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(id)
    .bind(patch.name)
    .bind(patch.description)
    .bind(patch.price)
    .bind(patch.tags)
    .fetch_optional(pool)
    .instrument(query_span)
    .await
    .map_err(database_error)?
    .ok_or(StoreError::NotFound(Entity::Product))
}

/// Comments of the product go with it (`ON DELETE CASCADE`).
pub async fn delete(pool: &PgPool, id: Uuid) -> StoreResult<models::Product> {
    let query_span = tracing::info_span!("Delete product", %id);
    sqlx::query_as::<_, models::Product>(r"DELETE FROM product WHERE id = $1 RETURNING *")
        .bind(id)
        .fetch_optional(pool)
        .instrument(query_span)
        .await
        .map_err(database_error)?
        .ok_or(StoreError::NotFound(Entity::Product))
}

use crate::errors::ApiError;
use crate::forms;
use crate::helpers::{body_into_form, parse_id, JsonResponse};
use crate::models::CommentParent;
use crate::store::ResourceStore;
use crate::views;
use actix_web::{post, web, web::Bytes, HttpResponse, Result};
use std::sync::Arc;

async fn add(
    parent: CommentParent,
    body: &Bytes,
    store: &dyn ResourceStore,
) -> Result<HttpResponse, ApiError> {
    let form = body_into_form::<forms::CreateComment>(body)?;

    store
        .insert_comment(parent, form)
        .await
        .map(|comment| {
            tracing::info!("Comment {} added to {}", comment.id, parent);
            JsonResponse::build()
                .set_item(views::Comment::from(comment))
                .created()
        })
        .map_err(ApiError::from)
}

#[tracing::instrument(name = "Add product comment.", skip(body, store))]
#[post("/product/{product_id}")]
pub async fn product_add(
    path: web::Path<(String,)>,
    body: Bytes,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let parent = CommentParent::Product(parse_id(&path.0, "Product")?);
    add(parent, &body, store.get_ref().as_ref()).await
}

#[tracing::instrument(name = "Add article comment.", skip(body, store))]
#[post("/article/{article_id}")]
pub async fn article_add(
    path: web::Path<(String,)>,
    body: Bytes,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let parent = CommentParent::Article(parse_id(&path.0, "Article")?);
    add(parent, &body, store.get_ref().as_ref()).await
}

use crate::errors::ApiError;
use crate::helpers::{parse_id, JsonResponse, Message};
use crate::models::CommentParent;
use crate::store::ResourceStore;
use actix_web::{delete, web, HttpResponse, Result};
use std::sync::Arc;

async fn delete(
    parent: CommentParent,
    comment_id: &str,
    store: &dyn ResourceStore,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(comment_id, "Comment")?;

    store
        .delete_comment(parent, id)
        .await
        .map(|comment| {
            tracing::info!("Comment {} removed from {}", comment.id, parent);
            JsonResponse::<Message>::no_content()
        })
        .map_err(ApiError::from)
}

#[tracing::instrument(name = "Delete product comment.", skip(store))]
#[delete("/product/{product_id}/{comment_id}")]
pub async fn product_item(
    path: web::Path<(String, String)>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let (product_id, comment_id) = path.into_inner();
    let parent = CommentParent::Product(parse_id(&product_id, "Product")?);
    delete(parent, &comment_id, store.get_ref().as_ref()).await
}

#[tracing::instrument(name = "Delete article comment.", skip(store))]
#[delete("/article/{article_id}/{comment_id}")]
pub async fn article_item(
    path: web::Path<(String, String)>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let (article_id, comment_id) = path.into_inner();
    let parent = CommentParent::Article(parse_id(&article_id, "Article")?);
    delete(parent, &comment_id, store.get_ref().as_ref()).await
}

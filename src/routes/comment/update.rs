use crate::errors::ApiError;
use crate::forms;
use crate::helpers::{body_into_form, parse_id, JsonResponse};
use crate::models::CommentParent;
use crate::store::ResourceStore;
use crate::views;
use actix_web::{patch, web, web::Bytes, HttpResponse, Result};
use std::sync::Arc;

async fn update(
    parent: CommentParent,
    comment_id: &str,
    body: &Bytes,
    store: &dyn ResourceStore,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(comment_id, "Comment")?;
    let form = body_into_form::<forms::PatchComment>(body)?;

    store
        .update_comment(parent, id, form)
        .await
        .map(|comment| {
            JsonResponse::build()
                .set_item(views::Comment::from(comment))
                .ok()
        })
        .map_err(ApiError::from)
}

#[tracing::instrument(name = "Update product comment.", skip(body, store))]
#[patch("/product/{product_id}/{comment_id}")]
pub async fn product_item(
    path: web::Path<(String, String)>,
    body: Bytes,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let (product_id, comment_id) = path.into_inner();
    let parent = CommentParent::Product(parse_id(&product_id, "Product")?);
    update(parent, &comment_id, &body, store.get_ref().as_ref()).await
}

#[tracing::instrument(name = "Update article comment.", skip(body, store))]
#[patch("/article/{article_id}/{comment_id}")]
pub async fn article_item(
    path: web::Path<(String, String)>,
    body: Bytes,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let (article_id, comment_id) = path.into_inner();
    let parent = CommentParent::Article(parse_id(&article_id, "Article")?);
    update(parent, &comment_id, &body, store.get_ref().as_ref()).await
}

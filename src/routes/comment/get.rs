use crate::errors::ApiError;
use crate::helpers::JsonResponse;
use crate::models::CommentParent;
use crate::pagination::{CursorPage, CursorQuery};
use crate::store::ResourceStore;
use crate::views;
use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;
use uuid::Uuid;

async fn list(
    parent: Option<CommentParent>,
    query: CursorQuery,
    store: &dyn ResourceStore,
) -> Result<HttpResponse, ApiError> {
    let page = CursorPage::try_from(query)?;
    // a malformed parent id owns no comments
    let Some(parent) = parent else {
        return Ok(JsonResponse::<views::Comment>::build().set_list(vec![]).ok());
    };

    store
        .list_comments(parent, &page)
        .await
        .map(|comments| {
            let comments = comments
                .into_iter()
                .map(Into::into)
                .collect::<Vec<views::Comment>>();
            JsonResponse::build().set_list(comments).ok()
        })
        .map_err(ApiError::from)
}

#[tracing::instrument(name = "List product comments.", skip(store))]
#[get("/product/{product_id}")]
pub async fn product_list(
    path: web::Path<(String,)>,
    query: web::Query<CursorQuery>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let parent = Uuid::parse_str(&path.0).ok().map(CommentParent::Product);
    list(parent, query.into_inner(), store.get_ref().as_ref()).await
}

#[tracing::instrument(name = "List article comments.", skip(store))]
#[get("/article/{article_id}")]
pub async fn article_list(
    path: web::Path<(String,)>,
    query: web::Query<CursorQuery>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let parent = Uuid::parse_str(&path.0).ok().map(CommentParent::Article);
    list(parent, query.into_inner(), store.get_ref().as_ref()).await
}

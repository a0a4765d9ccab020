use crate::errors::ApiError;
use crate::helpers::{parse_id, JsonResponse};
use crate::pagination::{OffsetPage, OffsetQuery};
use crate::store::ResourceStore;
use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "List articles.", skip(store))]
#[get("")]
pub async fn list(
    query: web::Query<OffsetQuery>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let page = OffsetPage::try_from(query.into_inner())?;

    store
        .list_articles(&page)
        .await
        .map(|articles| JsonResponse::build().set_list(articles).ok())
        .map_err(ApiError::from)
}

#[tracing::instrument(name = "Get article.", skip(store))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.0, "Article")?;

    store
        .fetch_article(id)
        .await
        .map(|article| JsonResponse::build().set_item(article).ok())
        .map_err(ApiError::from)
}

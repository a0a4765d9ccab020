use crate::errors::ApiError;
use crate::helpers::{parse_id, JsonResponse};
use crate::pagination::{OffsetPage, OffsetQuery};
use crate::store::ResourceStore;
use actix_web::{get, web, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "List products.", skip(store))]
#[get("")]
pub async fn list(
    query: web::Query<OffsetQuery>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let page = OffsetPage::try_from(query.into_inner())?;

    store
        .list_products(&page)
        .await
        .map(|products| JsonResponse::build().set_list(products).ok())
        .map_err(ApiError::from)
}

#[tracing::instrument(name = "Get product.", skip(store))]
#[get("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.0, "Product")?;

    store
        .fetch_product(id)
        .await
        .map(|product| JsonResponse::build().set_item(product).ok())
        .map_err(ApiError::from)
}

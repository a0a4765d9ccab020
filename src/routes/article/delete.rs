use crate::errors::ApiError;
use crate::helpers::{parse_id, JsonResponse};
use crate::store::ResourceStore;
use actix_web::{delete, web, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Delete article.", skip(store))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.0, "Article")?;

    store
        .delete_article(id)
        .await
        .map(|article| {
            tracing::info!("Article {} has been deleted", article.id);
            JsonResponse::deleted("Article", article.id)
        })
        .map_err(ApiError::from)
}

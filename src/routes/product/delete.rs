use crate::errors::ApiError;
use crate::helpers::{parse_id, JsonResponse};
use crate::store::ResourceStore;
use actix_web::{delete, web, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Delete product.", skip(store))]
#[delete("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.0, "Product")?;

    store
        .delete_product(id)
        .await
        .map(|product| {
            tracing::info!("Product {} has been deleted", product.id);
            JsonResponse::deleted("Product", product.id)
        })
        .map_err(ApiError::from)
}

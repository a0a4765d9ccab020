use crate::errors::ApiError;
use crate::forms;
use crate::helpers::{body_into_form, parse_id, JsonResponse};
use crate::store::ResourceStore;
use actix_web::{patch, web, web::Bytes, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Update product.", skip(body, store))]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    body: Bytes,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.0, "Product")?;
    let form = body_into_form::<forms::PatchProduct>(&body)?;

    store
        .update_product(id, form)
        .await
        .map(|product| JsonResponse::build().set_item(product).ok())
        .map_err(ApiError::from)
}

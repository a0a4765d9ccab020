use crate::errors::ApiError;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::store::ResourceStore;
use actix_web::{post, web, web::Bytes, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Add product.", skip(body, store))]
#[post("")]
pub async fn add(
    body: Bytes,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let form = body_into_form::<forms::CreateProduct>(&body)?;

    store
        .insert_product(form)
        .await
        .map(|product| JsonResponse::build().set_item(product).created())
        .map_err(ApiError::from)
}

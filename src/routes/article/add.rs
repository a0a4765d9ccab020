use crate::errors::ApiError;
use crate::forms;
use crate::helpers::{body_into_form, JsonResponse};
use crate::store::ResourceStore;
use actix_web::{post, web, web::Bytes, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Add article.", skip(body, store))]
#[post("")]
pub async fn add(
    body: Bytes,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let form = body_into_form::<forms::CreateArticle>(&body)?;

    store
        .insert_article(form)
        .await
        .map(|article| JsonResponse::build().set_item(article).created())
        .map_err(ApiError::from)
}

use crate::errors::ApiError;
use crate::forms;
use crate::helpers::{body_into_form, parse_id, JsonResponse};
use crate::store::ResourceStore;
use actix_web::{patch, web, web::Bytes, HttpResponse, Result};
use std::sync::Arc;

#[tracing::instrument(name = "Update article.", skip(body, store))]
#[patch("/{id}")]
pub async fn item(
    path: web::Path<(String,)>,
    body: Bytes,
    store: web::Data<Arc<dyn ResourceStore>>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&path.0, "Article")?;
    let form = body_into_form::<forms::PatchArticle>(&body)?;

    store
        .update_article(id, form)
        .await
        .map(|article| JsonResponse::build().set_item(article).ok())
        .map_err(ApiError::from)
}

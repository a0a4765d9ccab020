pub mod article;
pub mod comment;
pub mod product;

use crate::store::StoreError;

pub(crate) fn database_error(err: sqlx::Error) -> StoreError {
    tracing::error!("Failed to execute query: {:?}", err);
    StoreError::Database(err.to_string())
}

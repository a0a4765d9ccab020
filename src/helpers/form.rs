use crate::errors::ApiError;
use actix_web::web::Bytes;
use serde::de::DeserializeOwned;
use serde_valid::Validate;
use uuid::Uuid;

/// Decodes a JSON body into a form and runs its constraint checks.
pub fn body_into_form<T>(body: &Bytes) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let deserializer = &mut serde_json::Deserializer::from_slice(body);
    let form: T = serde_path_to_error::deserialize(deserializer).map_err(|err| {
        let path = err.path().to_string();
        ApiError::not_valid(format!("{}: {}", path, err.into_inner()))
    })?;

    form.validate().map_err(|errors| {
        tracing::debug!("Invalid data received {}", errors);
        ApiError::not_valid(format!("Invalid data received: {}", errors))
    })?;

    Ok(form)
}

/// Path ids that are not UUIDs can never match a record.
pub fn parse_id(raw: &str, entity: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::NotFound(format!("{} not found", entity)))
}

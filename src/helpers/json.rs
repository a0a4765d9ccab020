use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of error responses and delete confirmations.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }
}

/// Builds success responses. Items and lists are written as the bare JSON body.
#[derive(Debug)]
pub struct JsonResponse<T> {
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponse<T> {
    fn default() -> Self {
        Self {
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> Self {
        Self::default()
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn ok(self) -> HttpResponse {
        self.respond(StatusCode::OK)
    }

    pub fn created(self) -> HttpResponse {
        self.respond(StatusCode::CREATED)
    }

    fn respond(self, status: StatusCode) -> HttpResponse {
        let mut builder = HttpResponse::build(status);
        match (self.item, self.list) {
            (Some(item), _) => builder.json(item),
            (None, Some(list)) => builder.json(list),
            (None, None) => builder.finish(),
        }
    }
}

impl JsonResponse<Message> {
    pub fn deleted(entity: &str, id: Uuid) -> HttpResponse {
        Self::build()
            .set_item(Message::new(format!("{} deleted", entity)).with_id(id))
            .ok()
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }
}

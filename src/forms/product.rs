use crate::forms::char_length;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateProduct {
    #[validate(custom(name_length))]
    pub name: String,
    pub description: String,
    #[validate(minimum = 0.0)]
    pub price: f64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PatchProduct {
    #[validate(custom(optional_name_length))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(minimum = 0.0)]
    pub price: Option<f64>,
    pub tags: Option<Vec<String>>,
}

const NAME_MAX_CHARS: usize = 60;

#[allow(clippy::ptr_arg)]
fn name_length(name: &String) -> Result<(), serde_valid::validation::Error> {
    char_length(name, 1, NAME_MAX_CHARS)
}

fn optional_name_length(name: &Option<String>) -> Result<(), serde_valid::validation::Error> {
    match name {
        Some(name) => char_length(name, 1, NAME_MAX_CHARS),
        None => Ok(()),
    }
}

impl PatchProduct {
    pub fn update(self, product: &mut models::Product) {
        if let Some(name) = self.name {
            product.name = name;
        }

        if let Some(description) = self.description {
            product.description = description;
        }

        if let Some(price) = self.price {
            product.price = price;
        }

        if let Some(tags) = self.tags {
            product.tags = tags;
        }
    }
}

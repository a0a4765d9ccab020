use crate::forms::char_length;
use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateArticle {
    #[validate(custom(title_length))]
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PatchArticle {
    #[validate(custom(optional_title_length))]
    pub title: Option<String>,
    pub content: Option<String>,
}

const TITLE_MAX_CHARS: usize = 100;

#[allow(clippy::ptr_arg)]
fn title_length(title: &String) -> Result<(), serde_valid::validation::Error> {
    char_length(title, 1, TITLE_MAX_CHARS)
}

fn optional_title_length(title: &Option<String>) -> Result<(), serde_valid::validation::Error> {
    match title {
        Some(title) => char_length(title, 1, TITLE_MAX_CHARS),
        None => Ok(()),
    }
}

impl PatchArticle {
    pub fn update(self, article: &mut models::Article) {
        if let Some(title) = self.title {
            article.title = title;
        }

        if let Some(content) = self.content {
            article.content = content;
        }
    }
}

use crate::models;
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct CreateComment {
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct PatchComment {
    pub content: Option<String>,
}

impl PatchComment {
    pub fn update(self, comment: &mut models::Comment) {
        if let Some(content) = self.content {
            comment.content = content;
        }
    }
}

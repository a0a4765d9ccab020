pub mod article;
pub mod comment;
pub mod product;

pub use article::{CreateArticle, PatchArticle};
pub use comment::{CreateComment, PatchComment};
pub use product::{CreateProduct, PatchProduct};

use serde_valid::validation::Error;

/// Length limits count characters, the way `VARCHAR(n)` columns do.
pub(crate) fn char_length(value: &str, min: usize, max: usize) -> Result<(), Error> {
    let count = value.chars().count();
    if count < min {
        return Err(Error::Custom(format!(
            "The length of the value must be `>= {}` characters.",
            min
        )));
    }
    if count > max {
        return Err(Error::Custom(format!(
            "The length of the value must be `<= {}` characters.",
            max
        )));
    }
    Ok(())
}

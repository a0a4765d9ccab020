mod article;
mod comment;
mod product;

pub use article::*;
pub use comment::*;
pub use product::*;

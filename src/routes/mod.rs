pub mod article;
pub mod comment;
pub mod health_checks;
pub mod product;

pub use health_checks::*;

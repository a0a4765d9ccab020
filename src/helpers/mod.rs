pub mod form;
pub mod json;

pub use form::*;
pub use json::*;

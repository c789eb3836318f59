pub mod article;
pub mod author;
pub mod errors;

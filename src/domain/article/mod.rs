pub mod entity;
pub mod repository;
pub mod state;
pub mod value_objects;

pub use entity::Article;
pub use repository::{ArticleFilter, ArticleReadRepository, ArticleWriteRepository};
pub use state::{ArticleState, ArticleStatus, ArticleTransition};
pub use value_objects::{ArticleId, ArticleTitle, CoverImage, MarkdownContent};

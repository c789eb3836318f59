// src/infrastructure/repositories/mod.rs
mod memory_article;

pub use memory_article::InMemoryArticleRepository;

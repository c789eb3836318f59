pub mod repositories;
pub mod seed;
pub mod time;

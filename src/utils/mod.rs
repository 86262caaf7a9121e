pub mod cache;
pub mod database;
pub mod pagination;
pub mod validation;

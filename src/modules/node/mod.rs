pub mod query;
pub mod repository;
pub mod routes;

#[cfg(test)]
pub mod fixtures;

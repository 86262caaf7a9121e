pub mod auth;
pub mod node;

mod router;
pub use router::get_router;

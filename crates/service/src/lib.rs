//! Service layer for the dealership backend.
//! - `resources`: validated request and response shapes.
//! - `repository`: one storage trait per entity, with SeaORM and in-memory backends.
//! - `services`: use cases over the repositories, returning [`errors::ServiceError`].

pub mod errors;
pub mod resources;
pub mod repository;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use services::Services;

//! Validated request bodies, query filters and response shapes.
pub mod validation;
pub mod catalog;
pub mod people;
pub mod car;

pub use catalog::*;
pub use people::*;
pub use car::*;

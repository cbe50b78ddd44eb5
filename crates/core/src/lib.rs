//! Domain primitives shared by the store and the HTTP layer.

pub mod error;
pub mod types;
pub mod validation;

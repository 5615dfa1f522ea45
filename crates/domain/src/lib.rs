//! Domain layer for Clima
//!
//! Contains the weather dashboard's value objects, snapshot entities and
//! domain errors. This layer performs no I/O and defines the ubiquitous
//! language shared by the application and infrastructure layers.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;

//! Domain Layer
//!
//! Entities, value objects, repository traits, and the token service.

pub mod entity;
pub mod notifier;
pub mod repository;
pub mod token;
pub mod value_object;

//! Infrastructure Layer
//!
//! Concrete implementations of the domain traits.

pub mod postgres;
pub mod smtp;

//! Wander Types - Pure type definitions for the WanderMart core
//!
//! This crate contains only plain data types with no async runtime
//! dependencies. Entity identifiers are opaque strings throughout.

pub mod attraction;
pub mod envelope;
pub mod order;
pub mod post;
pub mod product;
pub mod user;

pub use attraction::*;
pub use envelope::*;
pub use order::*;
pub use post::*;
pub use product::*;
pub use user::*;

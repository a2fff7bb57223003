//! book-library — in-memory book CRUD service.
//!
//! Layers: domain (BookStore aggregate) / application (use cases) /
//! infra (shared in-memory repository) / interface (HTTP).

pub mod application;
pub mod domain;
pub mod infra;
pub mod interface;

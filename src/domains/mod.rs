//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; each tool lives in its own definition file
//! under `tools/definitions/`.

pub mod tools;

//! Domains module containing business logic organized by bounded contexts.
//!
//! The server only exposes tools; each API area lives under
//! `tools::definitions`.

pub mod tools;

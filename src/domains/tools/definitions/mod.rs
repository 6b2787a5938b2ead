//! Tool definitions module.
//!
//! One module per ServiceTitan API area. Each exposes `entries()`, the list
//! of tools it contributes to the registry.

pub mod common;
pub mod forms;
pub mod marketing_ads;
pub mod reporting;
pub mod settings;

pub use common::{ActiveFilter, WireEnum};

//! Foundation types for nestbox.
//!
//! Shared by the layout, render, and app crates: the alignment policy that
//! drives child placement, the error type, and the tree description format
//! loaded from TOML or JSON.

pub mod alignment;
pub mod config;
pub mod error;

pub use alignment::Alignment;
pub use config::TreeSpec;
pub use error::{NestBoxError, Result};

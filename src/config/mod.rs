// src/config/mod.rs

//! Job file loading and validation.
//!
//! - `model.rs` defines the TOML-backed raw model and the validated types.
//! - `loader.rs` reads a job file from disk.
//! - `validate.rs` turns raw sections into validated configuration.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{JobFile, RawJobFile, RawSyncerSection, SmtpSection, SyncerConfig};
pub use validate::parse_duration;

// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::{JobFile, RawJobFile};
use crate::errors::Result;

/// Read and deserialize a job file without semantic validation.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawJobFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let job: RawJobFile = toml::from_str(&contents)?;

    Ok(job)
}

/// Load a job file and validate it: durations parse, the binary is set, and
/// both hosts carry a host, user and password.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<JobFile> {
    let raw = load_from_path(&path)?;
    let job = JobFile::try_from(raw)?;
    Ok(job)
}

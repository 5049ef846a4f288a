//! Persistence for the clinic roster.
//!
//! This crate provides the **wire model** and **format/translation helpers** for the on-disk
//! roster file:
//! - a strict YAML schema (unknown keys are rejected)
//! - translation between domain types from `clinic-core` and the wire structs
//! - loading and saving a roster file
//!
//! Every value read back from disk goes through the same validation as operator input, so a
//! hand-edited file cannot smuggle an invalid NRIC or a duplicate patient into the roster.

pub mod roster_file;

pub use roster_file::RosterFile;

/// Errors returned by the storage crate.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("invalid record for {context}: {source}")]
    InvalidRecord {
        context: String,
        #[source]
        source: clinic_core::ClinicError,
    },
}

/// Type alias for Results that can fail with a [`StorageError`].
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage layer for persisting store state
///
/// Persistence is a single key-value boundary: each store serializes its
/// whole state to a JSON string and writes it under a fixed key. This
/// module defines that contract and two implementations (file-backed and
/// in-memory).

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),
}

/// The key-value persistence boundary the stores read from and write to
///
/// Implementations map a fixed string key to an opaque string value. The
/// stores treat any failure here as non-fatal: reads degrade to "absent"
/// semantics at the store level and writes are logged and swallowed, so
/// an implementation is free to fail without taking the application down.
pub trait KeyValueStorage {
    /// Read the value stored under `key`, or `None` if nothing is stored
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

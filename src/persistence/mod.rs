//! Durable key-value storage
//!
//! The game persists a handful of scalars. Backends:
//! - `MemoryStore`: tests and headless runs
//! - `JsonFileStore`: native, one JSON object on disk
//! - `LocalStorageStore`: browser LocalStorage (wasm32 only)

mod file;
mod memory;
#[cfg(target_arch = "wasm32")]
mod web;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageStore;

use crate::error::StoreError;

/// Float-valued key-value store
pub trait KeyValueStore {
    /// Stored value, or `None` when the key was never written
    fn get_f32(&self, key: &str) -> Option<f32>;

    /// Write and flush a value. Synchronous, no retry.
    fn set_f32(&mut self, key: &str, value: f32) -> Result<(), StoreError>;
}

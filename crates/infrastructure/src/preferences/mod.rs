//! Durable preference storage

mod json_file_store;

pub use json_file_store::JsonFilePreferenceStore;

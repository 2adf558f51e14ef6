//! In-memory adapters for deterministic tests.

pub mod task_store;

pub use task_store::{FailureInjection, InMemoryTaskStore, StoreCall};

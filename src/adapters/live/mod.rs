//! Live adapters for real external interactions.

pub mod task_store;

pub use task_store::HttpTaskStore;

//! Storage domain - persistent key-value abstraction

mod repository;

pub use repository::KeyValueStore;

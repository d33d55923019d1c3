pub mod repository;

pub use repository::{Entity, InMemoryRepository, Repository};

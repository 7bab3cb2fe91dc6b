// src/services/mod.rs
pub mod auth;
pub mod memory;
pub mod repository;

pub use auth::UserStore;
pub use memory::MemoryRepository;
pub use repository::{PgRepository, Repository};

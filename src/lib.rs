// src/lib.rs
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;

pub use error::{ErrorKind, StoreError};
pub use services::UserStore;

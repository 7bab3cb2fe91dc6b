// src/models/mod.rs
pub mod recipe;
pub mod user;

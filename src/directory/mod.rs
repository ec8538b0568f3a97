// src/directory/mod.rs
pub mod client;
pub mod models;

pub use client::{ClientConfig, DirectoryClient};

// src/extractors/mod.rs
pub mod category;
pub mod company;
pub mod fields;
pub mod text;

// Re-export key extraction functions for convenience
pub use category::{parse_categories, parse_category_links, parse_category_names};
pub use company::parse_companies;

// src/lib.rs
//! Scraper for the Oil & Gas News Worldwide company directory.
//!
//! [`directory::DirectoryClient`] fetches the listing and category pages,
//! [`extractors`] turns their HTML into [`directory::models::CompanyRecord`]s.
pub mod directory;
pub mod extractors;
pub mod utils;

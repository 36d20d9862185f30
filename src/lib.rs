//! journali - Terminal journaling application
//!
//! A single-device journal: entries live in memory for the lifetime of
//! the session and are created, edited, bookmarked, searched, filtered,
//! and deleted through a ratatui front end.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

pub use error::JournaliError;

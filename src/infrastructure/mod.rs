//! Infrastructure layer - Config file and terminal session

pub mod config;
pub mod terminal;

pub use config::{Config, ThemeMode};
pub use terminal::TerminalSession;

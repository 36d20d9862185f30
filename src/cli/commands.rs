//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "journali")]
#[command(about = "Terminal journaling application", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// View or modify configuration
    Config {
        /// Config key to get or set (theme, splash)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

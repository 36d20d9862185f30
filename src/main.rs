use clap::Parser;
use journali::application::ConfigService;
use journali::cli::{Cli, Commands};
use journali::error::JournaliError;
use journali::infrastructure::Config;
use journali::ui;

fn main() {
    // Raw mode swallows stderr formatting, so logging is initialized (and
    // mostly useful) before the terminal session starts.
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::discover()?;

            if list {
                // List all config
                let config = service.list()?;
                println!("theme = {}", format!("{:?}", config.theme).to_lowercase());
                println!("splash = {}", config.splash);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    // Set config value
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    // Get config value
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                // No key provided, show usage
                println!("Usage: journali config [--list | <key> [<value>]]");
                println!("Valid keys: theme, splash");
                Ok(())
            }
        }
        None => {
            let config = Config::load()?;
            log::info!("starting session with {:?} theme", config.theme);
            ui::run(&config, cli.no_splash)
        }
    }
}

fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<JournaliError>()
        .map(JournaliError::exit_code)
        .unwrap_or(1)
}

use clap::Parser;
use tracing_subscriber::EnvFilter;

use medisight_cli::cli::Cli;
use medisight_cli::config::{self, LogFormat};
use medisight_cli::{commands, state::AppState};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    cli.apply_overrides(&mut config);

    init_tracing(config.log_format);

    let state = AppState::from_config(&config);
    let output = commands::run(&state, &config, cli.config.as_deref(), cli.command).await?;
    println!("{output}");

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

use clap::Parser;
use citas_admin_api::cli::{utils::output_error, Cli, CliError, OutputFormat};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output_format = OutputFormat::from_cli(&cli);

    if let Err(e) = citas_admin_api::cli::run(cli).await {
        let code = e.downcast_ref::<CliError>().map(CliError::code);
        match std::env::var("CLI_VERBOSE").as_deref() {
            Ok("true") | Ok("1") => output_error(&output_format, &format!("{e:?}"), code)?,
            _ => output_error(&output_format, &e.to_string(), code)?,
        }
        std::process::exit(1);
    }

    Ok(())
}

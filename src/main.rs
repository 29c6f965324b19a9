use anyhow::Context;
use clap::Parser;
use mcu_dashboard::{cli, commands, config, logging, session};
use cli::{Cli, Commands};
use commands::{ConfigArgs, ListArgs};
use config::Config;
use logging::LogConfig;
use std::io::IsTerminal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load().context("failed to load settings")?;

    let log_format = cli.log_format.unwrap_or(config.log_format);
    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(log_format)
        .with_ansi(std::io::stderr().is_terminal());
    logging::init_logging(&log_config);
    tracing::debug!(?config, "settings loaded");

    match cli.command {
        Commands::List { tab, result, search, sort, desc, page } => {
            let args = ListArgs { tab, result, search, sort, desc, page };
            commands::run_list(&config, &args)?;
        }

        Commands::Upload { file, kind, yes } => {
            commands::run_upload(&config, &file, kind, yes).await?;
            println!("\n✅ Selesai");
        }

        Commands::Submissions { tab, page } => {
            commands::run_submissions(tab, page)?;
        }

        Commands::Form { id, tab, kind, json } => {
            commands::run_form(&id, tab, kind, json)
                .with_context(|| format!("cannot open form for {}", id))?;
        }

        Commands::Session => {
            session::run_session(&config).await?;
        }

        Commands::Config { show, set_default_tab, set_default_result, set_log_format } => {
            let args = ConfigArgs { show, set_default_tab, set_default_result, set_log_format };
            commands::run_config(config, &args)?;
        }
    }

    Ok(())
}

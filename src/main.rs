// src/main.rs
use clap::Parser;
use goalscope::cli::{Args, is_config_operation};
use goalscope::commands::{
    handle_config_update_command, handle_list_config_command, handle_match_command,
    handle_season_command, handle_xml_file_command, validate_args,
};
use goalscope::config::Config;
use goalscope::error::AppError;
use goalscope::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle configuration operations before anything touches the database
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    validate_args(&args)?;

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    // The guard must stay alive until main returns so logs are flushed
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = if let Some(match_id) = args.match_id {
        handle_match_command(&args, &config, match_id).await
    } else if let Some(path) = &args.xml_file {
        handle_xml_file_command(&args, path).await
    } else if let Some(season) = &args.season {
        handle_season_command(&args, &config, season).await
    } else {
        Ok(())
    };

    if let Err(e) = &result {
        tracing::error!("{e}");
    }

    result
}

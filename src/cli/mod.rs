// CLI module for running a registration outside the browser

pub mod check_config;
pub mod submit;

use clap::{Args, Parser, Subcommand};

use crate::app_data::AppData;
use crate::presentation::Locale;

/// Registration bridge between the messaging platform login and the automation webhook
#[derive(Parser)]
#[command(name = "contact-registration")]
#[command(about = "Submit contact registrations to the automation webhook", long_about = None)]
pub struct Cli {
    /// Language used for rendered results
    #[arg(long, value_enum, default_value_t = Locale::Japanese, global = true)]
    pub locale: Locale,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Acquire the given identity and submit one registration
    Submit(SubmitArgs),

    /// Show the resolved configuration with secrets redacted
    CheckConfig,
}

#[derive(Args, Debug, Clone)]
pub struct SubmitArgs {
    /// Provider-assigned user id
    #[arg(long)]
    pub user_id: String,

    #[arg(long)]
    pub display_name: String,

    #[arg(long)]
    pub avatar_url: Option<String>,

    /// Phone number in any format; non-digits are ignored
    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub storage_code: String,

    /// Grant consent to register
    #[arg(long)]
    pub consent: bool,
}

/// Execute CLI command
///
/// # Returns
/// * `Ok(true)` - Command completed and, for `submit`, the registration succeeded
/// * `Ok(false)` - Registration was rejected or failed
/// * `Err(...)` - Output could not be written
pub async fn execute_command(cli: Cli, app_data: &AppData) -> Result<bool, Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Submit(args) => submit::run_submit(app_data, args, cli.locale).await,
        Commands::CheckConfig => check_config::run_check_config(app_data),
    }
}

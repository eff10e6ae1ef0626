use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use contact_registration::AppData;
use contact_registration::cli::{Cli, execute_command};
use contact_registration::config::{EnvironmentProvider, SystemEnvironment, init_logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let env_provider: Arc<dyn EnvironmentProvider + Send + Sync> = Arc::new(SystemEnvironment);

    if let Err(e) = init_logging(env_provider.clone()) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let app_data = match AppData::init(env_provider) {
        Ok(app_data) => app_data,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    match execute_command(cli, &app_data).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

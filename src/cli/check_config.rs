// Check-config command: prints resolved settings and where they came from

use crate::app_data::AppData;
use crate::config::ConfigValueSource;

fn describe(source: &ConfigValueSource) -> String {
    match source {
        ConfigValueSource::EnvironmentVariable { name } => format!("environment ({})", name),
        ConfigValueSource::Default => "default".to_string(),
        ConfigValueSource::Unset => "not set".to_string(),
    }
}

/// Print the configuration; succeeds only when every required setting is present
pub fn run_check_config(app_data: &AppData) -> Result<bool, Box<dyn std::error::Error>> {
    let settings = &app_data.settings;

    println!("{}", settings);
    println!();
    for (name, source) in settings.sources() {
        println!("  {:<28} {}", name, describe(source));
    }

    let complete = settings.provider_app_id().is_some() && settings.registration_endpoint().is_some();
    if complete {
        println!("✅ Configuration complete");
    } else {
        println!("❌ Identity provider id and registration endpoint are both required");
    }

    Ok(complete)
}

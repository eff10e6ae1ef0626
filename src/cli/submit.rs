// Submit command: one acquisition plus one registration attempt

use std::sync::Arc;

use crate::app_data::AppData;
use crate::cli::SubmitArgs;
use crate::coordinators::{IdentityAcquisition, RegistrationCoordinator};
use crate::presentation::{Locale, render_acquisition, render_submission};
use crate::providers::{PresetIdentityProvider, Profile};
use crate::types::internal::{AcquisitionOutcome, SubmissionResult};

/// Run acquisition with the identity given on the command line, then submit
///
/// Acquisition failures are printed and reported as an unsuccessful run
/// without attempting the submission.
pub async fn run_submit(
    app_data: &AppData,
    args: SubmitArgs,
    locale: Locale,
) -> Result<bool, Box<dyn std::error::Error>> {
    let profile = Profile {
        user_id: args.user_id,
        display_name: args.display_name,
        picture_url: args.avatar_url,
    };
    let provider = Arc::new(PresetIdentityProvider::new(Some(profile)));

    let acquisition = IdentityAcquisition::new(app_data, provider);
    let outcome = acquisition.acquire().await;
    if !matches!(outcome, AcquisitionOutcome::Acquired(_)) {
        println!("❌ {}", render_acquisition(&acquisition.state(), locale));
        return Ok(false);
    }
    tracing::debug!("{}", render_acquisition(&acquisition.state(), locale));

    let form = RegistrationCoordinator::new(app_data, acquisition.subscribe());
    form.set_phone(args.phone);
    form.set_storage_code(args.storage_code);
    form.set_consent(args.consent);

    let result = form.submit().await;
    print_result(&result, locale);

    Ok(result.is_success())
}

fn print_result(result: &SubmissionResult, locale: Locale) {
    let marker = if result.is_success() { "✅" } else { "❌" };
    println!("{} {}", marker, render_submission(result, locale));
}

// Standard library
use std::process::ExitCode;

// 3rd party crates
use tracing::{error, info, warn};

// Project modules
mod functions;
mod logging;
mod providers;
mod settings;
mod utility;

// Project imports
use crate::functions::{run, RunOutcome};
use crate::logging::types::LogSettings;
use crate::settings::types::{Credentials, Settings};

/// Entry point of one synchronization run.
///
/// The program is invoked once per scheduling tick by an external
/// scheduler. It loads the configuration, resolves credentials from the
/// environment, and runs a single compare-and-update cycle; fatal
/// conditions exit non-zero so the scheduler can surface them.
#[tokio::main]
async fn main() -> ExitCode {
    // loads the .env file from the current directory or parents.
    dotenvy::dotenv_override().ok();

    // A configuration failure is reported through the pre-configuration
    // logging defaults, since the real logging settings never materialized.
    let settings: Settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            logging::functions::init(&LogSettings::default());
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    logging::functions::init(&LogSettings::from_settings(&settings));
    info!("Settings have been loaded");

    let credentials: Credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if !settings.dnsapi.apikey.is_empty() || !settings.dnsapi.secretkey.is_empty() {
        warn!("Ignoring file-configured API credentials; the environment values are used");
    }

    match run(&settings, credentials).await {
        Ok(RunOutcome::Unchanged) => ExitCode::SUCCESS,
        Ok(RunOutcome::Updated { persisted }) => {
            if persisted {
                info!("Update complete");
            } else {
                warn!("Update complete, but the IP marker was not persisted");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

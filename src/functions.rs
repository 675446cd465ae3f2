// Standard library
use std::error::Error;
use std::net::IpAddr;

// 3rd party crates
use tracing::{error, info, warn};

// Project imports
use crate::providers::porkbun::functions::get_porkbun;
use crate::providers::porkbun::types::Porkbun;
use crate::providers::DnsProvider;
use crate::settings::types::{Credentials, Settings};
use crate::utility::ip_resolver::types::IpResolver;
use crate::utility::state::{read_last_ip, write_last_ip};

/// Outcome of one synchronization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The public IP matches the marker; nothing was sent to the provider.
    Unchanged,
    /// The provider record was updated. `persisted` is false when the new
    /// marker could not be written afterwards; the DNS update is not
    /// rolled back in that case.
    Updated { persisted: bool },
}

/// Executes one update cycle: read the previous marker (best-effort),
/// resolve the current public IP, and push + persist only on change.
///
/// Any error returned here is fatal for the run; the caller maps it to a
/// non-zero exit status. There are no retries inside a run; resilience
/// comes from the next scheduled invocation repeating the comparison.
pub async fn run(
    settings: &Settings,
    credentials: Credentials,
) -> Result<RunOutcome, Box<dyn Error>> {
    let porkbun: Porkbun = get_porkbun(settings, credentials)?;
    let resolver: IpResolver = IpResolver::new(settings.ipapi.clone());

    // A missing or unreadable marker is not fatal: with no previous value
    // to compare against, any real address forces the update branch.
    let previous_ip: Option<IpAddr> = match read_last_ip(&settings.ipfile) {
        Ok(ip) => {
            info!("Previous IP: {}", ip);
            Some(ip)
        }
        Err(e) => {
            warn!("{}", e);
            None
        }
    };

    let current_ip: IpAddr = resolver.resolve().await?;
    info!("Current public IP: {}", current_ip);

    if previous_ip == Some(current_ip) {
        info!("IP unchanged, no update needed");
        return Ok(RunOutcome::Unchanged);
    }

    // Fatal on failure, and the marker keeps its previous value so the
    // next run retries the same comparison.
    porkbun.update_record(&current_ip).await?;

    match write_last_ip(&settings.ipfile, &current_ip) {
        Ok(()) => {
            info!("IP saved to {}", settings.ipfile.display());
            Ok(RunOutcome::Updated { persisted: true })
        }
        Err(e) => {
            // The provider record is already updated; the stale marker is
            // accepted rather than rolled back.
            error!("{}", e);
            Ok(RunOutcome::Updated { persisted: false })
        }
    }
}

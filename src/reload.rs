//! Optional name-server reload after a successful run.

use std::process::Command;
use tracing::{info, warn};

/// Ask the running name server to pick up the newly written configuration.
///
/// Fire and forget: a failed reload is reported but the files already
/// written stay in place, so the return value only matters for logging the
/// overall outcome.
pub fn reload_server() -> bool {
    match Command::new("rndc").arg("reload").status() {
        Ok(status) if status.success() => {
            info!("Name server reloaded");
            true
        }
        Ok(status) => {
            warn!("rndc reload exited with {}", status);
            false
        }
        Err(err) => {
            warn!("Failed to run rndc reload: {}", err);
            false
        }
    }
}

//! The report-and-detach pass over one topology snapshot.

use std::io::Write;

use tracing::debug;

use crate::api::DisplayConfigApi;
use crate::error::ConfigError;
use crate::report::Reporter;
use crate::topology::DisplayPath;

/// First-match rule: the first live path with an active source wins, then
/// the latch closes for the rest of the run. The primary flag is not
/// consulted.
fn wants_detach(path: &DisplayPath, already_detached: bool) -> bool {
    !already_detached && path.has_active_source()
}

/// One full run: probe sizes, fetch the snapshot, walk the paths in
/// enumeration order (report each live path and its monitor name, mark at
/// most one for detachment), then apply the result once.
///
/// Any failed service call ends the run immediately; the paths already
/// reported stay on `out`.
pub fn run<A, W>(api: &mut A, out: W) -> Result<(), ConfigError>
where
    A: DisplayConfigApi,
    W: Write,
{
    let mut snapshot = api.query_sized()?;
    debug!(
        paths = snapshot.paths.len(),
        modes = snapshot.modes.len(),
        "fetched display topology"
    );

    let mut reporter = Reporter::new(out);
    let detached = (0..snapshot.paths.len()).try_fold(false, |already, idx| -> Result<bool, ConfigError> {
        let path = snapshot.paths[idx];
        if path.is_dormant() {
            return Ok(already);
        }
        reporter.path(&path);
        let name = api.target_name(path.target.adapter, path.target.id)?;
        reporter.monitor(&name);
        if wants_detach(&path, already) {
            reporter.detach();
            snapshot.paths[idx].flags = 0;
            return Ok(true);
        }
        Ok(already)
    })?;

    debug!(detached, "applying display configuration");
    api.apply(&snapshot)
}

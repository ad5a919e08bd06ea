//! Windows display topology reporting and a single-path detach pass.
//!
//! This crate provides a minimal surface for:
//! - Enumerating the current display configuration (paths and their mode
//!   records) through the Windows display-configuration service
//! - Resolving the friendly monitor name behind each target
//! - Marking the first actively driven path for detachment and applying the
//!   resulting configuration in one call
//! - A legacy GDI listing of adapters and monitors as an alternate read-only
//!   backend
//!
//! Limitations:
//! - One-shot: each run queries, reports, mutates at most one path, applies
//!   and exits. This is not a display-management daemon and nothing is
//!   persisted beyond what the platform itself writes on apply.
//! - The sizing probe and the fetch are two separate calls; a topology
//!   change between them can fail the fetch. No retry loop is attempted.
//! - Every service call blocks until the platform responds; there is no
//!   timeout and no cancellation.
//!
//! Non-Windows hosts can build the crate (the platform-neutral model and its
//! tests compile everywhere) but the entry points return an error.

#![cfg_attr(not(target_os = "windows"), allow(unused))]

use std::io::Write;

use anyhow::Result;
use tracing::instrument;

pub mod api;
pub mod detach;
pub mod device;
pub mod error;
pub mod report;
pub mod topology;
mod wide;

#[cfg(target_os = "windows")]
mod ccd;
#[cfg(target_os = "windows")]
mod gdi;

pub use api::DisplayConfigApi;
pub use device::{Adapter, DisplayMode, Monitor};
pub use error::{ConfigError, Operation};
pub use topology::{
    AdapterId, BufferSizes, DisplayPath, ModeEntry, ModeKind, PathEndpoint, TopologySnapshot,
};

#[cfg(target_os = "windows")]
pub use ccd::WindowsDisplayConfig;

/// Run the full report-and-detach sequence against the live display
/// configuration, streaming the report to `out`.
#[instrument(skip(out))]
pub fn detach_first_active<W: Write>(out: W) -> Result<()> {
    #[cfg(target_os = "windows")]
    {
        let mut service = ccd::WindowsDisplayConfig::new();
        detach::run(&mut service, out).map_err(Into::into)
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(anyhow::anyhow!("display detach only supports Windows"))
    }
}

/// Enumerate display adapters and the monitors behind them via the legacy
/// GDI device API.
#[instrument]
pub fn enumerate_adapters() -> Result<Vec<Adapter>> {
    #[cfg(target_os = "windows")]
    {
        Ok(gdi::enumerate_adapters())
    }

    #[cfg(not(target_os = "windows"))]
    {
        Err(anyhow::anyhow!("display enumeration only supports Windows"))
    }
}

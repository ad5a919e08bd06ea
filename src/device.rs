//! Adapter and monitor records produced by the legacy enumeration backend.

use std::fmt;

/// A graphics adapter and the monitors enumerated behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    /// Platform device name, e.g. `\\.\DISPLAY1`.
    pub name: String,
    /// Human-readable adapter description.
    pub description: String,
    pub monitors: Vec<Monitor>,
}

/// One output device behind an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Monitor {
    pub name: String,
    pub description: String,
    /// Currently attached to the desktop.
    pub attached: bool,
    /// The primary display.
    pub primary: bool,
    /// Current mode, when the settings read for the owning adapter succeeds.
    /// A failed read leaves this `None` and the monitor is still listed.
    pub mode: Option<DisplayMode>,
}

/// Resolution, colour depth and refresh rate of an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u32,
    pub refresh_hz: u32,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{}x{}@{}",
            self.width, self.height, self.bits_per_pixel, self.refresh_hz
        )
    }
}

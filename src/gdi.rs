#![cfg(target_os = "windows")]

//! Legacy enumeration backend over the GDI display-device API.
//!
//! Read-only: lists adapters and the monitors behind them with their
//! attachment state, primary flag and current mode. A failed mode read is
//! reported and the monitor is still listed; this is the one recoverable
//! condition in the crate.

use tracing::warn;
use windows::core::PCWSTR;
use windows::Win32::Graphics::Gdi::{
    EnumDisplayDevicesW, EnumDisplaySettingsW, DEVMODEW, DISPLAY_DEVICEW,
    DISPLAY_DEVICE_ATTACHED_TO_DESKTOP, DISPLAY_DEVICE_PRIMARY_DEVICE, ENUM_CURRENT_SETTINGS,
};

use crate::device::{Adapter, DisplayMode, Monitor};
use crate::wide;

/// One step of the enumeration: device `index` under `parent` (an adapter's
/// device name), or the adapters themselves when `parent` is `None`. The API
/// signals end-of-list and failure identically, so the walk just stops.
fn device_at(parent: Option<&[u16]>, index: u32) -> Option<DISPLAY_DEVICEW> {
    unsafe {
        let mut device: DISPLAY_DEVICEW = std::mem::zeroed();
        device.cb = std::mem::size_of::<DISPLAY_DEVICEW>() as u32;
        let name = parent.map_or(PCWSTR::null(), |p| PCWSTR(p.as_ptr()));
        EnumDisplayDevicesW(name, index, &mut device, 0)
            .as_bool()
            .then_some(device)
    }
}

/// Current mode of the output driven through `device_name`. `None` when the
/// settings read fails, which callers treat as missing data, not an error.
fn current_mode(device_name: &[u16]) -> Option<DisplayMode> {
    unsafe {
        let mut devmode: DEVMODEW = std::mem::zeroed();
        devmode.dmSize = std::mem::size_of::<DEVMODEW>() as u16;
        let ok = EnumDisplaySettingsW(
            PCWSTR(device_name.as_ptr()),
            ENUM_CURRENT_SETTINGS,
            &mut devmode,
        );
        if !ok.as_bool() {
            warn!(
                device = %wide::from_wide(device_name),
                "current display settings unavailable"
            );
            return None;
        }
        Some(DisplayMode {
            width: devmode.dmPelsWidth,
            height: devmode.dmPelsHeight,
            bits_per_pixel: devmode.dmBitsPerPel,
            refresh_hz: devmode.dmDisplayFrequency,
        })
    }
}

/// Walk every adapter and the monitors behind it.
pub fn enumerate_adapters() -> Vec<Adapter> {
    let mut adapters = Vec::new();
    let mut adapter_idx = 0u32;
    while let Some(device) = device_at(None, adapter_idx) {
        let mut monitors = Vec::new();
        let mut monitor_idx = 0u32;
        while let Some(monitor) = device_at(Some(&device.DeviceName), monitor_idx) {
            // Mode data lives on the adapter's device, not the monitor's.
            let mode = current_mode(&device.DeviceName);
            monitors.push(Monitor {
                name: wide::from_wide(&monitor.DeviceName),
                description: wide::from_wide(&monitor.DeviceString),
                attached: monitor.StateFlags & DISPLAY_DEVICE_ATTACHED_TO_DESKTOP != 0,
                primary: monitor.StateFlags & DISPLAY_DEVICE_PRIMARY_DEVICE != 0,
                mode,
            });
            monitor_idx += 1;
        }
        adapters.push(Adapter {
            name: wide::from_wide(&device.DeviceName),
            description: wide::from_wide(&device.DeviceString),
            monitors,
        });
        adapter_idx += 1;
    }
    adapters
}

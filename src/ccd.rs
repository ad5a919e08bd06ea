#![cfg(target_os = "windows")]

//! Live backend over the Windows display-configuration service.
//!
//! The raw path and mode records captured at query time are kept here so the
//! exact bytes round-trip into the apply call, with only the per-path flags
//! words patched from the snapshot.

use tracing::debug;
use windows::Win32::Devices::Display::{
    DisplayConfigGetDeviceInfo, GetDisplayConfigBufferSizes, QueryDisplayConfig,
    SetDisplayConfig, DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME, DISPLAYCONFIG_MODE_INFO,
    DISPLAYCONFIG_MODE_INFO_TYPE_SOURCE, DISPLAYCONFIG_MODE_INFO_TYPE_TARGET,
    DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_TARGET_DEVICE_NAME, QDC_ALL_PATHS,
    SDC_ALLOW_CHANGES, SDC_APPLY, SDC_USE_SUPPLIED_DISPLAY_CONFIG,
};
use windows::Win32::Foundation::{
    ERROR_ACCESS_DENIED, ERROR_BAD_CONFIGURATION, ERROR_GEN_FAILURE, ERROR_INSUFFICIENT_BUFFER,
    ERROR_INVALID_PARAMETER, ERROR_NOT_SUPPORTED, ERROR_SUCCESS, LUID, WIN32_ERROR,
};

use crate::api::DisplayConfigApi;
use crate::error::{ConfigError, Operation};
use crate::topology::{
    AdapterId, BufferSizes, DisplayPath, ModeEntry, ModeKind, PathEndpoint, TopologySnapshot,
};
use crate::wide;

/// Mode-index sentinel meaning "this end of the path is unused"
/// (`DISPLAYCONFIG_PATH_MODE_IDX_INVALID`).
const MODE_IDX_INVALID: u32 = 0xffff_ffff;

/// Talks to the live service. Stateful across one run: `query` captures the
/// raw buffers that `apply` later submits.
#[derive(Default)]
pub struct WindowsDisplayConfig {
    raw_paths: Vec<DISPLAYCONFIG_PATH_INFO>,
    raw_modes: Vec<DISPLAYCONFIG_MODE_INFO>,
}

impl WindowsDisplayConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

fn check(op: Operation, code: u32) -> Result<(), ConfigError> {
    match WIN32_ERROR(code) {
        ERROR_SUCCESS => Ok(()),
        ERROR_INVALID_PARAMETER => Err(ConfigError::InvalidParameter(op)),
        ERROR_NOT_SUPPORTED => Err(ConfigError::NotSupported(op)),
        ERROR_ACCESS_DENIED => Err(ConfigError::AccessDenied(op)),
        ERROR_INSUFFICIENT_BUFFER => Err(ConfigError::BufferTooSmall(op)),
        ERROR_BAD_CONFIGURATION => Err(ConfigError::BadConfiguration(op)),
        ERROR_GEN_FAILURE => Err(ConfigError::GenericFailure(op)),
        other => Err(ConfigError::Unknown { op, code: other.0 }),
    }
}

fn adapter_id(luid: LUID) -> AdapterId {
    AdapterId {
        low: luid.LowPart,
        high: luid.HighPart,
    }
}

fn luid(adapter: AdapterId) -> LUID {
    LUID {
        LowPart: adapter.low,
        HighPart: adapter.high,
    }
}

fn endpoint(adapter: LUID, id: u32, mode_idx: u32) -> PathEndpoint {
    PathEndpoint {
        adapter: adapter_id(adapter),
        id,
        mode_index: (mode_idx != MODE_IDX_INVALID).then_some(mode_idx),
    }
}

impl DisplayConfigApi for WindowsDisplayConfig {
    fn buffer_sizes(&mut self) -> Result<BufferSizes, ConfigError> {
        let mut paths = 0u32;
        let mut modes = 0u32;
        let status =
            unsafe { GetDisplayConfigBufferSizes(QDC_ALL_PATHS, &mut paths, &mut modes) };
        check(Operation::BufferSizes, status.0)?;
        Ok(BufferSizes { paths, modes })
    }

    fn query(&mut self, sizes: BufferSizes) -> Result<TopologySnapshot, ConfigError> {
        let mut path_count = sizes.paths;
        let mut mode_count = sizes.modes;
        self.raw_paths = vec![unsafe { std::mem::zeroed() }; path_count as usize];
        self.raw_modes = vec![unsafe { std::mem::zeroed() }; mode_count as usize];

        let status = unsafe {
            QueryDisplayConfig(
                QDC_ALL_PATHS,
                &mut path_count,
                self.raw_paths.as_mut_ptr(),
                &mut mode_count,
                self.raw_modes.as_mut_ptr(),
                None,
            )
        };
        check(Operation::QueryConfig, status.0)?;

        // The counts are in/out; the post-call values are the snapshot size.
        self.raw_paths.truncate(path_count as usize);
        self.raw_modes.truncate(mode_count as usize);
        debug!(path_count, mode_count, "queried display configuration");

        let paths = self
            .raw_paths
            .iter()
            .map(|p| DisplayPath {
                source: endpoint(p.sourceInfo.adapterId, p.sourceInfo.id, unsafe {
                    p.sourceInfo.Anonymous.modeInfoIdx
                }),
                target: endpoint(p.targetInfo.adapterId, p.targetInfo.id, unsafe {
                    p.targetInfo.Anonymous.modeInfoIdx
                }),
                flags: p.flags,
            })
            .collect();
        let modes = self
            .raw_modes
            .iter()
            .map(|m| ModeEntry {
                kind: match m.infoType {
                    DISPLAYCONFIG_MODE_INFO_TYPE_SOURCE => ModeKind::Source,
                    DISPLAYCONFIG_MODE_INFO_TYPE_TARGET => ModeKind::Target,
                    other => ModeKind::Other(other.0),
                },
                adapter: adapter_id(m.adapterId),
                id: m.id,
            })
            .collect();

        Ok(TopologySnapshot { paths, modes })
    }

    fn target_name(
        &mut self,
        adapter: AdapterId,
        target_id: u32,
    ) -> Result<String, ConfigError> {
        let mut request: DISPLAYCONFIG_TARGET_DEVICE_NAME = unsafe { std::mem::zeroed() };
        request.header.r#type = DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME;
        request.header.size = std::mem::size_of::<DISPLAYCONFIG_TARGET_DEVICE_NAME>() as u32;
        request.header.adapterId = luid(adapter);
        request.header.id = target_id;

        let status = unsafe { DisplayConfigGetDeviceInfo(&mut request.header) };
        check(Operation::DeviceInfo, status as u32)?;
        Ok(wide::from_wide(&request.monitorFriendlyDeviceName))
    }

    fn apply(&mut self, snapshot: &TopologySnapshot) -> Result<(), ConfigError> {
        // Only the flags words may differ from what was fetched; every other
        // byte of the captured records is submitted exactly as read.
        for (raw, path) in self.raw_paths.iter_mut().zip(&snapshot.paths) {
            raw.flags = path.flags;
        }

        let status = unsafe {
            SetDisplayConfig(
                self.raw_paths.len() as u32,
                Some(self.raw_paths.as_ptr()),
                self.raw_modes.len() as u32,
                Some(self.raw_modes.as_ptr()),
                SDC_APPLY | SDC_USE_SUPPLIED_DISPLAY_CONFIG | SDC_ALLOW_CHANGES,
            )
        };
        check(Operation::ApplyConfig, status as u32)
    }
}

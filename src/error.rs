//! Status taxonomy shared by every display-configuration call.

use thiserror::Error;

/// The four fallible operations of the display-configuration protocol.
///
/// Rendered as the platform entry point each operation maps to, so a
/// diagnostic names exactly which call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The buffer sizing probe.
    BufferSizes,
    /// The sized fetch of paths and modes.
    QueryConfig,
    /// Per-target monitor name resolution.
    DeviceInfo,
    /// The single atomic apply of a snapshot.
    ApplyConfig,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::BufferSizes => "GetDisplayConfigBufferSizes()",
            Operation::QueryConfig => "QueryDisplayConfig()",
            Operation::DeviceInfo => "DisplayConfigGetDeviceInfo()",
            Operation::ApplyConfig => "SetDisplayConfig()",
        };
        f.write_str(name)
    }
}

/// One variant per documented platform status, plus a catch-all carrying the
/// raw code. Every variant is terminal for the run; nothing is retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid parameters to {0}")]
    InvalidParameter(Operation),
    #[error("graphics driver not supported by {0}")]
    NotSupported(Operation),
    #[error("caller does not have access to the current desktop in {0}")]
    AccessDenied(Operation),
    #[error("supplied buffers are too small for {0}")]
    BufferTooSmall(Operation),
    #[error("display configuration rejected as invalid by {0}")]
    BadConfiguration(Operation),
    #[error("general failure in {0}")]
    GenericFailure(Operation),
    #[error("unknown status {code} from {op}")]
    Unknown { op: Operation, code: u32 },
}

impl ConfigError {
    /// The operation this status was reported by.
    pub fn operation(&self) -> Operation {
        match *self {
            ConfigError::InvalidParameter(op)
            | ConfigError::NotSupported(op)
            | ConfigError::AccessDenied(op)
            | ConfigError::BufferTooSmall(op)
            | ConfigError::BadConfiguration(op)
            | ConfigError::GenericFailure(op)
            | ConfigError::Unknown { op, .. } => op,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_name_the_failing_operation() {
        assert_eq!(
            ConfigError::InvalidParameter(Operation::QueryConfig).to_string(),
            "invalid parameters to QueryDisplayConfig()"
        );
        assert_eq!(
            ConfigError::NotSupported(Operation::BufferSizes).to_string(),
            "graphics driver not supported by GetDisplayConfigBufferSizes()"
        );
        assert_eq!(
            ConfigError::AccessDenied(Operation::ApplyConfig).to_string(),
            "caller does not have access to the current desktop in SetDisplayConfig()"
        );
        assert_eq!(
            ConfigError::BufferTooSmall(Operation::DeviceInfo).to_string(),
            "supplied buffers are too small for DisplayConfigGetDeviceInfo()"
        );
        assert_eq!(
            ConfigError::BadConfiguration(Operation::ApplyConfig).to_string(),
            "display configuration rejected as invalid by SetDisplayConfig()"
        );
        assert_eq!(
            ConfigError::Unknown {
                op: Operation::QueryConfig,
                code: 31
            }
            .to_string(),
            "unknown status 31 from QueryDisplayConfig()"
        );
    }

    #[test]
    fn every_variant_reports_its_operation() {
        assert_eq!(
            ConfigError::GenericFailure(Operation::DeviceInfo).operation(),
            Operation::DeviceInfo
        );
        assert_eq!(
            ConfigError::Unknown {
                op: Operation::ApplyConfig,
                code: 0xdead
            }
            .operation(),
            Operation::ApplyConfig
        );
    }
}

//! In-memory model of one display-configuration snapshot.
//!
//! Paths and modes are fetched together and applied together; the lengths of
//! the two sequences are the post-fetch counts reported by the platform and
//! are authoritative for the rest of the run.

/// Adapter identifier as reported by the platform (a LUID split into its two
/// halves).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AdapterId {
    pub low: u32,
    pub high: i32,
}

/// One end of a display path.
///
/// `mode_index` is `None` when the platform marks this end unused; the
/// adapter/id pair stays meaningful either way and keys name resolution for
/// targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PathEndpoint {
    pub adapter: AdapterId,
    pub id: u32,
    pub mode_index: Option<u32>,
}

/// A source-to-target connection in the snapshot.
///
/// `flags` is the opaque platform flags word for the path; clearing it to
/// zero requests detachment of the target on apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayPath {
    pub source: PathEndpoint,
    pub target: PathEndpoint,
    pub flags: u32,
}

impl DisplayPath {
    /// Both ends unused. Dormant paths are skipped entirely: never rendered,
    /// never considered for detachment.
    pub fn is_dormant(&self) -> bool {
        self.source.mode_index.is_none() && self.target.mode_index.is_none()
    }

    /// An active source drives this path and makes it eligible for the
    /// detach pass.
    pub fn has_active_source(&self) -> bool {
        self.source.mode_index.is_some()
    }
}

/// What a positional mode record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Source,
    Target,
    Other(i32),
}

/// Positional mirror of one platform mode record. The raw payload never
/// leaves the platform backend and is passed through unmodified on apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeEntry {
    pub kind: ModeKind,
    pub adapter: AdapterId,
    pub id: u32,
}

/// Buffer sizes reported by the sizing probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BufferSizes {
    pub paths: u32,
    pub modes: u32,
}

/// The ordered paths and modes of one fetch, owned exclusively for the
/// duration of a run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TopologySnapshot {
    pub paths: Vec<DisplayPath>,
    pub modes: Vec<ModeEntry>,
}

impl TopologySnapshot {
    /// Positional mode lookup. Returns `None` for the unused sentinel and
    /// for indices beyond the post-fetch count, so an invalid reference is
    /// never dereferenced.
    pub fn mode(&self, index: Option<u32>) -> Option<&ModeEntry> {
        self.modes.get(index? as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(mode_index: Option<u32>) -> PathEndpoint {
        PathEndpoint {
            adapter: AdapterId::default(),
            id: 0,
            mode_index,
        }
    }

    fn mode_entry(kind: ModeKind) -> ModeEntry {
        ModeEntry {
            kind,
            adapter: AdapterId::default(),
            id: 0,
        }
    }

    #[test]
    fn dormant_means_both_ends_unused() {
        let live = DisplayPath {
            source: endpoint(Some(0)),
            target: endpoint(None),
            flags: 0,
        };
        let dormant = DisplayPath {
            source: endpoint(None),
            target: endpoint(None),
            flags: 0,
        };
        assert!(!live.is_dormant());
        assert!(dormant.is_dormant());
    }

    #[test]
    fn active_source_requires_a_source_mode() {
        let target_only = DisplayPath {
            source: endpoint(None),
            target: endpoint(Some(1)),
            flags: 0,
        };
        let driven = DisplayPath {
            source: endpoint(Some(1)),
            target: endpoint(Some(0)),
            flags: 0,
        };
        assert!(!target_only.has_active_source());
        assert!(driven.has_active_source());
    }

    #[test]
    fn mode_lookup_never_exceeds_post_fetch_counts() {
        let snapshot = TopologySnapshot {
            paths: Vec::new(),
            modes: vec![mode_entry(ModeKind::Source), mode_entry(ModeKind::Target)],
        };
        assert_eq!(snapshot.mode(Some(0)).map(|m| m.kind), Some(ModeKind::Source));
        assert_eq!(snapshot.mode(Some(1)).map(|m| m.kind), Some(ModeKind::Target));
        assert!(snapshot.mode(Some(2)).is_none());
        assert!(snapshot.mode(None).is_none());
    }
}

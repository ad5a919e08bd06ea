//! The seam to the platform display-configuration service.

use crate::error::ConfigError;
use crate::topology::{AdapterId, BufferSizes, TopologySnapshot};

/// Fixed request/response protocol of the display-configuration service.
///
/// One implementation talks to the live Windows service; tests substitute a
/// scripted stand-in. Every call blocks until the platform responds; there is
/// no timeout and no cancellation.
pub trait DisplayConfigApi {
    /// Two-phase protocol, step one: ask how large the path and mode buffers
    /// must be.
    fn buffer_sizes(&mut self) -> Result<BufferSizes, ConfigError>;

    /// Step two: fetch into buffers allocated from the most recent
    /// [`buffer_sizes`](Self::buffer_sizes) result. The service may shrink
    /// the counts on return; the snapshot's lengths are the post-call counts
    /// and are authoritative from here on.
    fn query(&mut self, sizes: BufferSizes) -> Result<TopologySnapshot, ConfigError>;

    /// Resolve the friendly monitor name behind a target endpoint.
    fn target_name(&mut self, adapter: AdapterId, target_id: u32)
        -> Result<String, ConfigError>;

    /// Submit the (possibly mutated) snapshot back as one atomic apply,
    /// using exactly the supplied configuration.
    fn apply(&mut self, snapshot: &TopologySnapshot) -> Result<(), ConfigError>;

    /// The paired size-then-fetch sequence: probe, allocate exactly that
    /// much, fetch. The two calls are not atomic; a topology change between
    /// them can still fail the fetch and no retry is attempted.
    fn query_sized(&mut self) -> Result<TopologySnapshot, ConfigError> {
        let sizes = self.buffer_sizes()?;
        self.query(sizes)
    }
}

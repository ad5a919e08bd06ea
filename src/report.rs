//! Human-readable run report, streamed line by line as enumeration proceeds.

use std::io::Write;

use crate::topology::DisplayPath;

/// Streams the report for one run. Rendering is purely observational:
/// write failures are dropped and never alter control flow.
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// One line per live path: source-only, target-only, or source-to-target.
    /// Dormant paths produce nothing.
    pub fn path(&mut self, path: &DisplayPath) {
        let _ = match (path.source.mode_index, path.target.mode_index) {
            (Some(source), Some(target)) => {
                writeln!(self.out, "Source: {source} --> target: {target}")
            }
            (Some(source), None) => writeln!(self.out, "Source: {source}"),
            (None, Some(target)) => writeln!(self.out, "Target: {target}"),
            (None, None) => Ok(()),
        };
    }

    /// The resolved monitor name for the path just rendered.
    pub fn monitor(&mut self, name: &str) {
        let _ = writeln!(self.out, "Monitor: {name}");
    }

    /// Marker emitted exactly when the detach rule fires on a path.
    pub fn detach(&mut self) {
        let _ = writeln!(self.out, "-- detach!");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::{AdapterId, PathEndpoint};

    fn path(source: Option<u32>, target: Option<u32>) -> DisplayPath {
        DisplayPath {
            source: PathEndpoint {
                adapter: AdapterId::default(),
                id: 0,
                mode_index: source,
            },
            target: PathEndpoint {
                adapter: AdapterId::default(),
                id: 0,
                mode_index: target,
            },
            flags: 0,
        }
    }

    fn rendered(p: &DisplayPath) -> String {
        let mut out = Vec::new();
        Reporter::new(&mut out).path(p);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn both_ends_render_as_a_connection() {
        assert_eq!(rendered(&path(Some(3), Some(7))), "Source: 3 --> target: 7\n");
    }

    #[test]
    fn single_ended_paths_render_that_end_only() {
        assert_eq!(rendered(&path(Some(2), None)), "Source: 2\n");
        assert_eq!(rendered(&path(None, Some(5))), "Target: 5\n");
    }

    #[test]
    fn dormant_paths_render_nothing() {
        assert_eq!(rendered(&path(None, None)), "");
    }

    #[test]
    fn monitor_and_detach_lines() {
        let mut out = Vec::new();
        let mut reporter = Reporter::new(&mut out);
        reporter.monitor("Monitor-A");
        reporter.detach();
        assert_eq!(String::from_utf8(out).unwrap(), "Monitor: Monitor-A\n-- detach!\n");
    }
}
